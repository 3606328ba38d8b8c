//! Build one package. Steps run in order and stop at the first failure; nothing is rolled back.

use log::{debug, info};
use std::fs;
use std::io::{self, Write};

use super::dc::DublinCore;
use super::layout::PackageLayout;
use super::scan_log::scan_log_file_is_clean;
use crate::PackageParams;
use crate::engine::tools::{copy_file, copy_tree, is_directory, is_regular_file};
use crate::error::BuildError;
use crate::manifest::{ManifestRow, header_line};

/// Create `<staging>/<partner>_<resource>_<component>` for `row`:
///
/// 1. package directory (never overwritten: [`BuildError::DirectoryExists`])
/// 2. `metadata/`
/// 3. copy of `<source>/metadata/transfer-info.txt` ([`BuildError::MissingTransferInfo`])
/// 4. single-row work order `<package>_aspace_wo.tsv`
/// 5. `dc.json`
/// 6. optional export `<component>.tsv`, copied as `<component>-ftk.tsv`
/// 7. optional scan log `<component>_clamscan.log`; an infected log stops the build
///    ([`BuildError::InfectedPayload`]) before any payload is copied
/// 8. payload: `<source>/<component>` copied into `<package>/<component>/`; the source is left untouched
pub fn build_package(
    row: &ManifestRow,
    params: &PackageParams,
    worker_id: usize,
) -> Result<PackageLayout, BuildError> {
    let component = row.component_id.as_str();
    let layout = PackageLayout::new(params, component);
    info!("WORKER {} processing {}", worker_id, component);

    debug!("WORKER {} creating {}", worker_id, layout.root.display());
    fs::create_dir(&layout.root).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => BuildError::DirectoryExists {
            path: layout.root.clone(),
        },
        _ => BuildError::io("create package dir", &layout.root, e),
    })?;

    debug!("WORKER {} creating metadata directory for {}", worker_id, component);
    fs::create_dir(&layout.metadata_dir)
        .map_err(|e| BuildError::io("create metadata dir", &layout.metadata_dir, e))?;

    debug!("WORKER {} copying transfer-info.txt for {}", worker_id, component);
    let transfer_info_src = layout.source_transfer_info();
    if !is_regular_file(&transfer_info_src) {
        return Err(BuildError::MissingTransferInfo {
            path: transfer_info_src,
        });
    }
    copy_file(&transfer_info_src, &layout.transfer_info())?;

    debug!("WORKER {} writing work order for {}", worker_id, component);
    write_row_work_order(row, &layout)?;

    debug!("WORKER {} writing dc.json for {}", worker_id, component);
    write_dc_json(params, row, &layout)?;

    let export_src = layout.source_export();
    if export_src.exists() {
        debug!("WORKER {} copying export for {}", worker_id, component);
        copy_file(&export_src, &layout.export())?;
    } else {
        debug!("WORKER {} no export for {}", worker_id, component);
    }

    let scan_log_src = layout.source_scan_log();
    if scan_log_src.exists() {
        let clean = scan_log_file_is_clean(&scan_log_src)
            .map_err(|e| BuildError::io("read scan log", &scan_log_src, e))?;
        if !clean {
            return Err(BuildError::InfectedPayload { path: scan_log_src });
        }
        debug!("WORKER {} copying scan log for {}", worker_id, component);
        copy_file(&scan_log_src, &layout.scan_log())?;
    } else {
        debug!("WORKER {} no scan log for {}", worker_id, component);
    }

    if is_directory(&layout.source_payload).is_err() {
        return Err(BuildError::MissingPayload {
            path: layout.source_payload.clone(),
        });
    }
    debug!("WORKER {} copying payload for {}", worker_id, component);
    fs::create_dir(&layout.payload_dir)
        .map_err(|e| BuildError::io("create payload dir", &layout.payload_dir, e))?;
    let files = copy_tree(&layout.source_payload, &layout.payload_dir)?;

    info!("WORKER {} {} complete ({} files)", worker_id, component, files);
    Ok(layout)
}

/// Header line plus exactly this row.
fn write_row_work_order(row: &ManifestRow, layout: &PackageLayout) -> Result<(), BuildError> {
    let path = layout.work_order();
    let mut file =
        fs::File::create(&path).map_err(|e| BuildError::io("create work order", &path, e))?;
    writeln!(file, "{}", header_line())
        .and_then(|_| writeln!(file, "{}", row.to_tsv_line()))
        .and_then(|_| file.flush())
        .map_err(|e| BuildError::io("write work order", &path, e))
}

fn write_dc_json(
    params: &PackageParams,
    row: &ManifestRow,
    layout: &PackageLayout,
) -> Result<(), BuildError> {
    let path = layout.dc_json();
    let dc = DublinCore::new(&params.transfer_info, row);
    let bytes = serde_json::to_vec(&dc).map_err(|source| BuildError::Json {
        operation: "serialize dc.json",
        path: path.clone(),
        source,
    })?;
    fs::write(&path, bytes).map_err(|e| BuildError::io("write dc.json", &path, e))
}
