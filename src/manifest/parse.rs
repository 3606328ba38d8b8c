//! Tab-separated work order parsing. The header is checked strictly; data lines split on tabs only.

use log::debug;
use std::path::Path;

use super::row::{HEADER_ROW, Manifest, ManifestRow};
use crate::error::ManifestError;

/// Read and parse the work order at `path`.
pub fn parse_work_order(path: &Path) -> Result<Manifest, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest = parse_work_order_str(&content)?;
    debug!(
        "Parsed {} work order rows from {}",
        manifest.len(),
        path.display()
    );
    Ok(manifest)
}

/// Parse work order text. Line 1 must be [`HEADER_ROW`]; blank lines are skipped.
/// Line numbers in [`ManifestError::MalformedRow`] are 1-based file lines.
pub fn parse_work_order_str(content: &str) -> Result<Manifest, ManifestError> {
    let mut lines = content.lines().enumerate();
    let header = match lines.next() {
        Some((_, line)) if !line.trim().is_empty() => line,
        _ => return Err(ManifestError::MissingHeader),
    };
    if !header.split('\t').eq(HEADER_ROW) {
        return Err(ManifestError::HeaderMismatch {
            found: header.to_string(),
        });
    }

    let mut rows = Vec::new();
    for (idx, line) in lines {
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        let count = fields.len();
        let fields: [&str; 8] = fields
            .try_into()
            .map_err(|_| ManifestError::MalformedRow {
                line: idx + 1,
                fields: count,
            })?;
        rows.push(ManifestRow::from_fields(fields));
    }
    Ok(Manifest { rows })
}
