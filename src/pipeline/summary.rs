use log::{info, warn};

use crate::RowOutcome;

/// Success/error counts for a finished run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutcomeSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Count outcomes and log them. Failures are listed individually when `verbose`.
/// A non-zero failure count is reported, never turned into an error.
pub fn summarize_outcomes(outcomes: &[RowOutcome], verbose: bool) -> OutcomeSummary {
    let failed = outcomes.iter().filter(|o| !o.is_success()).count();
    let summary = OutcomeSummary {
        succeeded: outcomes.len() - failed,
        failed,
    };
    info!(
        "{} packages created, {} failed",
        summary.succeeded, summary.failed
    );
    if failed > 0 {
        warn!("{} rows failed; see the stage report for details", failed);
        if verbose {
            for o in outcomes.iter().filter(|o| !o.is_success()) {
                eprintln!("  failed: {} ({})", o.component_id, o.message());
            }
        }
    }
    summary
}
