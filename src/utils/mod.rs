pub mod adoc_toml;
pub mod config;
pub mod fd_limit;
pub mod logger;

pub use config::*;
pub use fd_limit::{cap_workers, max_open_fds, max_workers_by_fd_limit};
pub use logger::setup_logging;
