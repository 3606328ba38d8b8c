use crossbeam_channel::{RecvTimeoutError, unbounded};
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Instant;

use super::context::{ChunkResult, PipelineHandles, PipelineOptions};
use super::partition::partition_rows;
use super::worker::spawn_workers;
use crate::error::PipelineError;
use crate::manifest::Manifest;
use crate::{PackageParams, RowOutcome};

/// Partition the work order and start one worker per chunk. Caller receives from `result_rx`
/// and joins `worker_handles` when done.
pub fn run_pipeline(
    manifest: &Manifest,
    params: &PackageParams,
    worker_count: usize,
    on_row: Option<&super::RowCallback>,
) -> Result<(PipelineHandles, usize), PipelineError> {
    let chunks = partition_rows(&manifest.rows, worker_count)?;
    info!("Created {} work order row chunks", chunks.len());

    let params = Arc::new(params.clone());
    let (result_tx, result_rx) = unbounded::<ChunkResult>();
    let worker_handles = spawn_workers(&chunks, &params, &result_tx, on_row)
        .map_err(|(worker_id, source)| PipelineError::Spawn { worker_id, source })?;

    // Dropping the last sender outside the workers lets a lost worker surface as a disconnect.
    drop(result_tx);

    Ok((
        PipelineHandles {
            result_rx,
            worker_handles,
        },
        chunks.len(),
    ))
}

/// Build a package for every row of `manifest` using up to `worker_count` workers and return one
/// [`RowOutcome`] per row.
///
/// Outcomes are grouped by worker in the order workers finish; within a worker they follow the
/// work order. Row failures are outcomes, not errors. Errors are run-level: bad worker count,
/// a worker that could not be spawned or exited without reporting, or the optional collect
/// deadline passing (remaining workers are left running detached). The last two carry the
/// outcomes received so far, see [`PipelineError::partial_outcomes`].
pub fn run_work_order(
    manifest: &Manifest,
    params: &PackageParams,
    worker_count: usize,
    opts: &PipelineOptions,
) -> Result<Vec<RowOutcome>, PipelineError> {
    let start = Instant::now();
    let (handles, expected) = run_pipeline(manifest, params, worker_count, opts.on_row.as_ref())?;
    let deadline = opts.collect_timeout.map(|t| start + t);

    let mut results = Vec::with_capacity(manifest.len());
    for received in 0..expected {
        let chunk = match deadline {
            Some(deadline) => handles.result_rx.recv_deadline(deadline),
            None => handles
                .result_rx
                .recv()
                .map_err(|_| RecvTimeoutError::Disconnected),
        };
        match chunk {
            Ok(chunk) => {
                debug!(
                    "WORKER {} reported {} outcomes",
                    chunk.worker_id,
                    chunk.outcomes.len()
                );
                results.extend(chunk.outcomes);
            }
            Err(RecvTimeoutError::Timeout) => {
                warn!("Stopped waiting with {} of {} workers reported", received, expected);
                return Err(PipelineError::CollectTimeout {
                    waited_secs: start.elapsed().as_secs(),
                    received,
                    expected,
                    partial: results,
                });
            }
            Err(RecvTimeoutError::Disconnected) => {
                return Err(PipelineError::WorkerLost {
                    received,
                    expected,
                    partial: results,
                });
            }
        }
    }

    shutdown_pipeline_handles(handles);
    debug!("Pipeline finished in {:?}", start.elapsed());
    Ok(results)
}

/// Join worker threads after every worker has reported.
pub fn shutdown_pipeline_handles(handles: PipelineHandles) {
    for h in handles.worker_handles {
        let _ = h.join();
    }
}
