//! Source location validation: checks a source is ready to stage, failing on the first problem.

use log::info;
use std::collections::HashSet;
use std::path::Path;

use crate::engine::tools::is_directory;
use crate::error::ValidationError;
use crate::manifest::{Manifest, find_work_order, parse_work_order};
use crate::package::scan_log_file_is_clean;
use crate::transfer_info::TransferInfo;
use crate::utils::config::PackageNames;

/// What a successful validation found.
#[derive(Debug)]
pub struct ValidatedSource {
    pub manifest: Manifest,
    pub transfer_info: TransferInfo,
}

fn require_dir(path: &Path) -> Result<(), ValidationError> {
    is_directory(path).map_err(|_| ValidationError::NotADirectory {
        path: path.to_path_buf(),
    })
}

/// Check `source`: directories, work order, transfer descriptor, unique component IDs, one
/// directory per component and nothing else, and clean scan logs.
pub fn validate_source(source: &Path) -> Result<ValidatedSource, ValidationError> {
    info!("checking that {} is a directory", source.display());
    require_dir(source)?;

    let md_dir = source.join(PackageNames::METADATA_DIR);
    info!("checking metadata directory");
    require_dir(&md_dir)?;

    info!("checking work order");
    let work_order = find_work_order(&md_dir)?;
    let manifest = parse_work_order(&work_order)?;

    info!("checking transfer-info.txt");
    let transfer_info = TransferInfo::load(&md_dir.join(PackageNames::TRANSFER_INFO))?;
    transfer_info.validate()?;

    info!("checking component IDs are unique");
    let mut components = HashSet::new();
    for row in &manifest.rows {
        if !components.insert(row.component_id.as_str()) {
            return Err(ValidationError::DuplicateComponent(
                row.component_id.clone(),
            ));
        }
    }

    info!("checking component directories exist");
    let mut sorted: Vec<&str> = components.iter().copied().collect();
    sorted.sort_unstable();
    for id in sorted {
        let path = source.join(id);
        if !path.exists() {
            return Err(ValidationError::MissingComponent { path });
        }
    }

    info!("checking for entries not on the work order");
    for name in dir_entry_names(source)? {
        if name != PackageNames::METADATA_DIR && !components.contains(name.as_str()) {
            return Err(ValidationError::Unlisted { name });
        }
    }

    info!("checking scan logs");
    for name in dir_entry_names(&md_dir)? {
        if !name.ends_with(PackageNames::SCAN_LOG_SUFFIX) {
            continue;
        }
        let path = md_dir.join(&name);
        let clean =
            scan_log_file_is_clean(&path).map_err(|source| ValidationError::Io { path, source })?;
        if !clean {
            return Err(ValidationError::Infected { name });
        }
    }

    Ok(ValidatedSource {
        manifest,
        transfer_info,
    })
}

/// Entry names of `dir`, sorted.
fn dir_entry_names(dir: &Path) -> Result<Vec<String>, ValidationError> {
    let io_err = |source| ValidationError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        names.push(entry.map_err(io_err)?.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}
