//! Pipeline components: partitioning, worker pool, fan-in and outcome summary.

pub mod context;
pub mod orchestrator;
pub mod partition;
pub mod summary;
pub mod worker;

pub use context::{ChunkResult, PipelineHandles, PipelineOptions, RowCallback, WorkerContext};
pub use orchestrator::{run_pipeline, run_work_order, shutdown_pipeline_handles};
pub use partition::partition_rows;
pub use summary::{OutcomeSummary, summarize_outcomes};
pub use worker::{spawn_workers, spawn_workers_with, worker_thread};
