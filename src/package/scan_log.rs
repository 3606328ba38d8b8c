//! Virus-scan log inspection.

use std::io;
use std::path::Path;

use crate::utils::config::PackageNames;

/// True when the scan summary reports zero infected files.
pub fn scan_log_is_clean(content: &str) -> bool {
    content
        .lines()
        .any(|line| line.trim() == PackageNames::SCAN_CLEAN_MARKER)
}

/// Read `path` and check it with [`scan_log_is_clean`]. Invalid UTF-8 is replaced, not rejected.
pub fn scan_log_file_is_clean(path: &Path) -> io::Result<bool> {
    let bytes = std::fs::read(path)?;
    Ok(scan_log_is_clean(&String::from_utf8_lossy(&bytes)))
}
