use crossbeam_channel::{Sender, bounded};
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use super::context::{ChunkResult, RowCallback, WorkerContext};
use crate::manifest::ManifestRow;
use crate::package::build_package;
use crate::{PackageParams, RowOutcome};

/// Build every row of the chunk in order. A failed row is recorded and the loop moves on.
fn worker_loop(ctx: WorkerContext) {
    let WorkerContext {
        worker_id,
        rows,
        params,
        result_tx,
        on_row,
        start_rx,
        abort,
    } = ctx;
    // Returns once the start sender is dropped.
    let _ = start_rx.recv();
    if abort.load(Ordering::SeqCst) {
        log::debug!("WORKER {} aborted before start", worker_id);
        return;
    }
    let mut outcomes = Vec::with_capacity(rows.len());
    for row in &rows {
        let outcome = match build_package(row, &params, worker_id) {
            Ok(_) => RowOutcome::success(worker_id, &row.component_id),
            Err(err) => {
                log::error!("WORKER {} {}: {}", worker_id, row.component_id, err);
                RowOutcome::failure(worker_id, &row.component_id, &err)
            }
        };
        outcomes.push(outcome);
        if let Some(cb) = &on_row {
            cb(1);
        }
    }
    log::debug!("WORKER {} finished {} rows", worker_id, outcomes.len());
    // Receiver gone means the orchestrator stopped waiting; nothing left to report to.
    let _ = result_tx.send(ChunkResult {
        worker_id,
        outcomes,
    });
}

/// Named thread for worker `worker_id`.
pub fn worker_thread(worker_id: usize) -> thread::Builder {
    thread::Builder::new().name(format!("worker-{worker_id}"))
}

/// Spawn one worker per chunk, ids starting at 1. The caller drops its own sender afterwards so a
/// worker that dies without reporting shows up as a disconnected channel.
pub fn spawn_workers(
    chunks: &[&[ManifestRow]],
    params: &Arc<PackageParams>,
    result_tx: &Sender<ChunkResult>,
    on_row: Option<&RowCallback>,
) -> Result<Vec<JoinHandle<()>>, (usize, io::Error)> {
    spawn_workers_with(chunks, params, result_tx, on_row, worker_thread)
}

/// [`spawn_workers`] with a custom thread builder per worker id.
///
/// Workers wait until all of them are spawned. If any spawn fails, the ones already started are
/// told to abort and joined before the error is returned, so no package is built.
pub fn spawn_workers_with<B>(
    chunks: &[&[ManifestRow]],
    params: &Arc<PackageParams>,
    result_tx: &Sender<ChunkResult>,
    on_row: Option<&RowCallback>,
    builder: B,
) -> Result<Vec<JoinHandle<()>>, (usize, io::Error)>
where
    B: Fn(usize) -> thread::Builder,
{
    let (start_tx, start_rx) = bounded::<()>(0);
    let abort = Arc::new(AtomicBool::new(false));
    let mut handles = Vec::with_capacity(chunks.len());

    for (i, chunk) in chunks.iter().enumerate() {
        let worker_id = i + 1;
        let ctx = WorkerContext {
            worker_id,
            rows: chunk.to_vec(),
            params: Arc::clone(params),
            result_tx: result_tx.clone(),
            on_row: on_row.cloned(),
            start_rx: start_rx.clone(),
            abort: Arc::clone(&abort),
        };
        match builder(worker_id).spawn(move || worker_loop(ctx)) {
            Ok(handle) => handles.push(handle),
            Err(e) => {
                abort.store(true, Ordering::SeqCst);
                drop(start_tx);
                for handle in handles {
                    let _ = handle.join();
                }
                return Err((worker_id, e));
            }
        }
    }

    drop(start_tx);
    Ok(handles)
}
