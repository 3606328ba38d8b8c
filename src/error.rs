//! Typed errors for the staging core.
//!
//! Run-level errors ([`ManifestError`], [`PartitionError`], [`PipelineError`]) abort a run
//! before or while packages are built. [`BuildError`] is scoped to a single work order row
//! and is turned into a [`RowOutcome`](crate::RowOutcome) by the worker that hit it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::RowOutcome;

/// Failures while reading or parsing a work order.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("cannot read work order {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("work order is empty; expected header line")]
    MissingHeader,
    #[error("work order header mismatch: found {found:?}")]
    HeaderMismatch { found: String },
    #[error("malformed work order row at line {line}: expected 8 fields, found {fields}")]
    MalformedRow { line: usize, fields: usize },
    #[error("{dir} does not contain a work order")]
    NotFound { dir: PathBuf },
    #[error("work order file name {name:?} does not follow <partner>_<resource>_aspace_wo.tsv")]
    BadFileName { name: String },
}

/// Partitioning rejects a non-positive worker count.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartitionError {
    #[error("invalid worker count {0}; must be at least 1")]
    InvalidWorkerCount(usize),
}

/// Kind of a row-level build failure, kept on [`RowOutcome`](crate::RowOutcome) so callers
/// can branch on it without matching message text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildErrorKind {
    DirectoryExists,
    MissingTransferInfo,
    InfectedPayload,
    MissingPayload,
    Io,
    Json,
}

impl BuildErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DirectoryExists => "directory_exists",
            Self::MissingTransferInfo => "missing_transfer_info",
            Self::InfectedPayload => "infected_payload",
            Self::MissingPayload => "missing_payload",
            Self::Io => "io",
            Self::Json => "json",
        }
    }
}

/// Failure building one package. Partial output is left on disk.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("package directory already exists: {path}")]
    DirectoryExists { path: PathBuf },
    #[error("transfer-info.txt missing or not a regular file: {path}")]
    MissingTransferInfo { path: PathBuf },
    #[error("scan log reports infected files: {path}")]
    InfectedPayload { path: PathBuf },
    #[error("payload directory missing: {path}")]
    MissingPayload { path: PathBuf },
    #[error("{operation} failed for {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        source: io::Error,
    },
    #[error("{operation} failed for {path}: {source}")]
    Json {
        operation: &'static str,
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl BuildError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn walkdir(operation: &'static str, source: walkdir::Error) -> Self {
        let path = source.path().map(PathBuf::from).unwrap_or_default();
        let source = source
            .into_io_error()
            .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
        Self::Io {
            operation,
            path,
            source,
        }
    }

    pub fn kind(&self) -> BuildErrorKind {
        match self {
            Self::DirectoryExists { .. } => BuildErrorKind::DirectoryExists,
            Self::MissingTransferInfo { .. } => BuildErrorKind::MissingTransferInfo,
            Self::InfectedPayload { .. } => BuildErrorKind::InfectedPayload,
            Self::MissingPayload { .. } => BuildErrorKind::MissingPayload,
            Self::Io { .. } => BuildErrorKind::Io,
            Self::Json { .. } => BuildErrorKind::Json,
        }
    }
}

/// Failures of the worker pool as a whole.
///
/// `CollectTimeout` and `WorkerLost` keep the outcomes of the workers that did report in
/// `partial`; their packages are on disk and belong in the report.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Partition(#[from] PartitionError),
    #[error("timed out after {waited_secs}s waiting for workers: {received} of {expected} reported")]
    CollectTimeout {
        waited_secs: u64,
        received: usize,
        expected: usize,
        partial: Vec<RowOutcome>,
    },
    #[error("worker exited without reporting: {received} of {expected} reported")]
    WorkerLost {
        received: usize,
        expected: usize,
        partial: Vec<RowOutcome>,
    },
    /// Workers spawned before the failure are stopped before they build anything.
    #[error("cannot spawn worker {worker_id}: {source}")]
    Spawn { worker_id: usize, source: io::Error },
}

impl PipelineError {
    /// Outcomes collected before the run failed. Empty for errors raised before any worker ran.
    pub fn partial_outcomes(&self) -> &[RowOutcome] {
        match self {
            Self::CollectTimeout { partial, .. } | Self::WorkerLost { partial, .. } => partial,
            Self::Partition(_) | Self::Spawn { .. } => &[],
        }
    }
}

/// Failures loading or checking the transfer descriptor.
#[derive(Debug, Error)]
pub enum TransferInfoError {
    #[error("cannot read {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("cannot parse {path}: {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("`{field}` {reason} in transfer-info.txt")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// First problem found by source validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{path} is not a directory")]
    NotADirectory { path: PathBuf },
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error(transparent)]
    TransferInfo(#[from] TransferInfoError),
    #[error("duplicate component ID {0} found in work order")]
    DuplicateComponent(String),
    #[error("component directory missing: {path}")]
    MissingComponent { path: PathBuf },
    #[error("{name} is not listed on the work order")]
    Unlisted { name: String },
    #[error("{name} reports infected files")]
    Infected { name: String },
    #[error("cannot read {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
}
