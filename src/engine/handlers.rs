//! Command handlers for stage and validate operations

use anyhow::{Context, Result, bail};
use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::engine::progress::{finish_progress_bar, progress_callback, setup_progress};
use crate::engine::tools::{is_directory, is_regular_file};
use crate::manifest::{find_work_order, parse_work_order, partner_and_resource};
use crate::pipeline::{PipelineOptions, run_work_order, summarize_outcomes};
use crate::report::write_report_file;
use crate::transfer_info::TransferInfo;
use crate::utils::config::{PackageNames, PackagePaths, WorkerLimits};
use crate::utils::cap_workers;
use crate::validate::validate_source;
use crate::error::PipelineError;
use crate::{Opts, PackageParams};

fn required_dir<'a>(path: Option<&'a PathBuf>, flag: &str) -> Result<&'a Path> {
    let Some(path) = path else {
        bail!("--{flag} is required (flag or adoc.toml)");
    };
    is_directory(path).with_context(|| format!("check {flag} {}", path.display()))?;
    Ok(path.as_path())
}

/// Transfer descriptor for `dc.json`. A missing file (or anything that is not a regular file) is
/// not fatal here: every row then fails with a missing transfer-info error and shows up in the report.
fn load_transfer_info(md_dir: &Path) -> Result<TransferInfo> {
    let path = md_dir.join(PackageNames::TRANSFER_INFO);
    if !is_regular_file(&path) {
        warn!("{} is not a regular file; every package will fail", path.display());
        return Ok(TransferInfo::default());
    }
    Ok(TransferInfo::load(&path)?)
}

/// Handle stage command: work order → packages → report.
pub fn handle_stage(opts: &Opts) -> Result<()> {
    let source = required_dir(opts.source.as_ref(), "source-location")?;
    let staging = required_dir(opts.staging.as_ref(), "staging-location")?;
    let md_dir = source.join(PackageNames::METADATA_DIR);
    is_directory(&md_dir).context("check source metadata directory")?;

    let work_order = find_work_order(&md_dir)?;
    let file_name = work_order
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (partner_code, resource_code) = partner_and_resource(&file_name)?;
    info!("Parsing work order {}", work_order.display());
    let manifest = parse_work_order(&work_order)?;
    for id in manifest.duplicate_component_ids() {
        warn!("Component ID {} appears more than once in the work order", id);
    }

    let params = PackageParams {
        transfer_info: load_transfer_info(&md_dir)?,
        partner_code,
        resource_code,
        source: source.to_path_buf(),
        staging: staging.to_path_buf(),
    };

    let workers = cap_workers(opts.workers.unwrap_or(WorkerLimits::DEFAULT_WORKERS));
    info!(
        "Creating {} packages with {} workers",
        manifest.len(),
        workers
    );
    let bar = setup_progress(opts.verbose, manifest.len());
    let pipeline_opts = PipelineOptions {
        collect_timeout: opts.collect_timeout,
        on_row: progress_callback(&bar),
    };
    let run = run_work_order(&manifest, &params, workers, &pipeline_opts);
    if let Some(bar) = &bar {
        finish_progress_bar(bar);
    }

    let report_dir = opts.report_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let report_path = report_dir.join(
        PackagePaths::get().stage_report_filename(&params.partner_code, &params.resource_code),
    );
    let outcomes = match run {
        Ok(outcomes) => outcomes,
        Err(e) => {
            // Packages from workers that did report are on disk; keep them in the report.
            if matches!(
                e,
                PipelineError::CollectTimeout { .. } | PipelineError::WorkerLost { .. }
            ) {
                let partial = e.partial_outcomes();
                write_report_file(&report_path, partial)?;
                warn!(
                    "Partial stage report ({} rows) written to {}",
                    partial.len(),
                    report_path.display()
                );
            }
            return Err(e.into());
        }
    };
    write_report_file(&report_path, &outcomes)?;
    info!("Stage report written to {}", report_path.display());

    summarize_outcomes(&outcomes, opts.verbose);
    Ok(())
}

/// Handle validate command
pub fn handle_validate(opts: &Opts) -> Result<()> {
    let Some(source) = opts.source.as_ref() else {
        bail!("--source-location is required (flag or adoc.toml)");
    };
    let validated = validate_source(source)
        .with_context(|| format!("validate {}", source.display()))?;
    info!(
        "All checks passed for {} ({} components)",
        source.display(),
        validated.manifest.len()
    );
    Ok(())
}
