//! Pipeline context: what each worker is handed at spawn time, and what the orchestrator keeps.

use crossbeam_channel::{Receiver, Sender};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::thread::JoinHandle;
use std::time::Duration;

use crate::manifest::ManifestRow;
use crate::{PackageParams, RowOutcome};

/// Called once per finished row with the number of rows done (always 1). Shared by all workers.
pub type RowCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Knobs for [`run_work_order`](super::run_work_order) beyond the worker count.
#[derive(Clone, Default)]
pub struct PipelineOptions {
    /// Stop waiting for workers after this long. None waits until every worker reports.
    pub collect_timeout: Option<Duration>,
    /// Progress hook, e.g. a progress bar update.
    pub on_row: Option<RowCallback>,
}

/// Everything one worker owns. Rows are its chunk, in file order; params are shared read-only.
pub struct WorkerContext {
    pub worker_id: usize,
    pub rows: Vec<ManifestRow>,
    pub params: Arc<PackageParams>,
    pub result_tx: Sender<ChunkResult>,
    pub on_row: Option<RowCallback>,
    /// Closed once every worker is spawned (or spawning failed). Nothing is built before that.
    pub start_rx: Receiver<()>,
    /// Set when spawning failed; the worker then exits without building or reporting.
    pub abort: Arc<AtomicBool>,
}

/// A worker's full outcome list, sent once when its chunk is done.
#[derive(Debug)]
pub struct ChunkResult {
    pub worker_id: usize,
    pub outcomes: Vec<RowOutcome>,
}

/// Handles returned by [`spawn_workers`](super::spawn_workers): receive one [`ChunkResult`] per
/// worker, then join.
pub struct PipelineHandles {
    pub result_rx: Receiver<ChunkResult>,
    pub worker_handles: Vec<JoinHandle<()>>,
}
