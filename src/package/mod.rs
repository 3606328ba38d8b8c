//! Package builder: one on-disk transfer package per work order row.

pub mod builder;
pub mod dc;
pub mod layout;
pub mod scan_log;

pub use builder::build_package;
pub use dc::DublinCore;
pub use layout::PackageLayout;
pub use scan_log::{scan_log_file_is_clean, scan_log_is_clean};
