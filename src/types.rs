//! Public and internal types for the adoc API and pipeline.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{BuildError, BuildErrorKind};
use crate::transfer_info::TransferInfo;

/// Run-wide inputs shared read-only by every worker.
///
/// Built once by the caller before partitioning; workers receive it behind an `Arc`
/// and never mutate it, so no locking is involved.
#[derive(Clone, Debug)]
pub struct PackageParams {
    /// Partner code, e.g. `fales`.
    pub partner_code: String,
    /// Resource (collection) code, e.g. `mss_123`.
    pub resource_code: String,
    /// Source location: holds `metadata/` and one directory per component.
    pub source: PathBuf,
    /// Staging location: packages are created directly under it.
    pub staging: PathBuf,
    /// Parsed `metadata/transfer-info.txt`.
    pub transfer_info: TransferInfo,
}

/// Result of building one work order row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowOutcome {
    /// 1-based id of the worker that built the row.
    pub worker_id: usize,
    pub component_id: String,
    pub status: OutcomeStatus,
}

/// Success, or the kind and single-line message of the build failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutcomeStatus {
    Success,
    Error {
        kind: BuildErrorKind,
        message: String,
    },
}

impl RowOutcome {
    pub fn success(worker_id: usize, component_id: &str) -> Self {
        Self {
            worker_id,
            component_id: component_id.to_string(),
            status: OutcomeStatus::Success,
        }
    }

    /// Record a failed build; newlines in the message are dropped so the report stays one row per outcome.
    pub fn failure(worker_id: usize, component_id: &str, err: &BuildError) -> Self {
        Self {
            worker_id,
            component_id: component_id.to_string(),
            status: OutcomeStatus::Error {
                kind: err.kind(),
                message: single_line(&err.to_string()),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, OutcomeStatus::Success)
    }

    /// `SUCCESS` or `ERROR`, as written to the report.
    pub fn result_label(&self) -> &'static str {
        match self.status {
            OutcomeStatus::Success => "SUCCESS",
            OutcomeStatus::Error { .. } => "ERROR",
        }
    }

    /// Error message, empty on success.
    pub fn message(&self) -> &str {
        match &self.status {
            OutcomeStatus::Success => "",
            OutcomeStatus::Error { message, .. } => message,
        }
    }

    pub fn error_kind(&self) -> Option<BuildErrorKind> {
        match self.status {
            OutcomeStatus::Success => None,
            OutcomeStatus::Error { kind, .. } => Some(kind),
        }
    }
}

fn single_line(message: &str) -> String {
    message.replace(['\r', '\n'], "")
}

/// Full options for the stage command (CLI, config file).
#[derive(Clone, Debug, Default)]
pub struct Opts {
    /// Source location. Required for stage and validate.
    pub source: Option<PathBuf>,
    /// Staging location. Required for stage.
    pub staging: Option<PathBuf>,
    /// Requested worker count. When None, [`WorkerLimits::DEFAULT_WORKERS`](crate::utils::WorkerLimits::DEFAULT_WORKERS).
    pub workers: Option<usize>,
    /// Directory for the TSV report. When None, the current directory.
    pub report_dir: Option<PathBuf>,
    /// Log to this file instead of stderr.
    pub log_file: Option<PathBuf>,
    /// Debug logging and a progress bar.
    pub verbose: bool,
    /// Give up waiting for workers after this long. When None, wait indefinitely.
    pub collect_timeout: Option<Duration>,
}
