//! adoc: stage archival electronic records from a work order into per-component transfer packages.
//!
//! The core is a fan-out/fan-in pipeline: parse the work order ([`manifest`]), split its rows into
//! contiguous chunks ([`pipeline::partition_rows`]), build one package per row on a fixed set of
//! worker threads ([`package::build_package`]) and collect one [`RowOutcome`] per row.

pub mod engine;
pub mod error;
pub mod manifest;
pub mod package;
pub mod pipeline;
pub mod report;
pub mod transfer_info;
pub mod types;
pub mod utils;
pub mod validate;

/// Re-export types for API
pub use types::*;

pub use error::{BuildError, BuildErrorKind, ManifestError, PartitionError, PipelineError};
pub use manifest::{Manifest, ManifestRow};
pub use pipeline::PipelineOptions;
pub use transfer_info::TransferInfo;

use log::debug;
use std::path::Path;

/// Single entry point: parse the work order at `work_order`, then build every row with up to
/// `worker_count` workers.
///
/// A bad work order or worker count fails the whole run before any package is created; a row
/// that fails to build is reported in its [`RowOutcome`] and does not stop the others.
pub fn stage_work_order(
    work_order: &Path,
    params: &PackageParams,
    worker_count: usize,
    opts: &PipelineOptions,
) -> anyhow::Result<Vec<RowOutcome>> {
    let manifest = manifest::parse_work_order(work_order)?;
    debug!(
        "{} staging {} rows into {}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        manifest.len(),
        params.staging.display()
    );
    Ok(pipeline::run_work_order(
        &manifest,
        params,
        worker_count,
        opts,
    )?)
}
