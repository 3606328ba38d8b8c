//! Find the work order in a source `metadata/` directory and read partner/resource codes from its name.

use std::path::{Path, PathBuf};

use crate::error::ManifestError;
use crate::utils::config::PackageNames;

/// First entry of `metadata_dir` whose name contains the work order suffix, in sorted order.
pub fn find_work_order(metadata_dir: &Path) -> Result<PathBuf, ManifestError> {
    let io_err = |source| ManifestError::Io {
        path: metadata_dir.to_path_buf(),
        source,
    };
    let mut names = Vec::new();
    for entry in std::fs::read_dir(metadata_dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        if let Some(name) = entry.file_name().to_str()
            && name.contains(PackageNames::WORK_ORDER_SUFFIX)
        {
            names.push(name.to_string());
        }
    }
    names.sort();
    names
        .into_iter()
        .next()
        .map(|name| metadata_dir.join(name))
        .ok_or_else(|| ManifestError::NotFound {
            dir: metadata_dir.to_path_buf(),
        })
}

/// Split `<partner>_<resource>_aspace_wo.tsv` into `(partner, resource)`.
/// The resource code may itself contain underscores.
pub fn partner_and_resource(file_name: &str) -> Result<(String, String), ManifestError> {
    let bad = || ManifestError::BadFileName {
        name: file_name.to_string(),
    };
    let stem = file_name
        .strip_suffix(PackageNames::WORK_ORDER_SUFFIX)
        .ok_or_else(bad)?;
    match stem.split_once('_') {
        Some((partner, resource)) if !partner.is_empty() && !resource.is_empty() => {
            Ok((partner.to_string(), resource.to_string()))
        }
        _ => Err(bad()),
    }
}
