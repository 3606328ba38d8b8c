//! Contiguous block split of work order rows across workers.

use log::debug;

use crate::error::PartitionError;

/// Split `rows` into contiguous chunks of `ceil(len / worker_count)` rows; the last chunk may be
/// shorter. Yields `ceil(len / chunk_size)` chunks, which can be fewer than `worker_count`
/// (3 rows over 5 workers gives 3 chunks of 1). No rows gives no chunks.
pub fn partition_rows<T>(rows: &[T], worker_count: usize) -> Result<Vec<&[T]>, PartitionError> {
    if worker_count == 0 {
        return Err(PartitionError::InvalidWorkerCount(worker_count));
    }
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    let chunk_size = rows.len().div_ceil(worker_count);
    let chunks: Vec<&[T]> = rows.chunks(chunk_size).collect();
    debug!(
        "Split {} rows into {} chunks of up to {}",
        rows.len(),
        chunks.len(),
        chunk_size
    );
    Ok(chunks)
}
