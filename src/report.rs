//! Tab-separated stage report: `worker_id, component_id, result, error`.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::RowOutcome;
use crate::utils::config::REPORT_HEADER;

/// Write the header and one line per outcome. The error column is empty on success.
pub fn write_report<W: Write>(mut out: W, outcomes: &[RowOutcome]) -> std::io::Result<()> {
    writeln!(out, "{}", REPORT_HEADER.join("\t"))?;
    for o in outcomes {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            o.worker_id,
            o.component_id,
            o.result_label(),
            o.message()
        )?;
    }
    out.flush()
}

/// Create (or truncate) `path` and write the report to it.
pub fn write_report_file(path: &Path, outcomes: &[RowOutcome]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create stage report {}", path.display()))?;
    write_report(std::io::BufWriter::new(file), outcomes)
        .with_context(|| format!("write stage report {}", path.display()))
}
