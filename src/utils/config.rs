//! Application configuration constants.
//! File names, package layout and worker limits in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived file names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    config_filename: String,
    stage_report_suffix: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                config_filename: format!("{pkg}.toml"),
                stage_report_suffix: format!("-{pkg}-stage.tsv"),
            }
        })
    }

    /// Config file looked up in the working directory (e.g. `adoc.toml`).
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }

    /// Report file name for a run, e.g. `fales_mss123-adoc-stage.tsv`.
    pub fn stage_report_filename(&self, partner: &str, resource: &str) -> String {
        format!("{partner}_{resource}{}", self.stage_report_suffix)
    }
}

// ---- Source and package layout ----

/// Fixed names inside a source location and inside each package.
pub struct PackageNames;

impl PackageNames {
    /// Metadata directory, both in the source location and in each package.
    pub const METADATA_DIR: &'static str = "metadata";
    pub const TRANSFER_INFO: &'static str = "transfer-info.txt";
    /// Work order files end with this; the prefix is `<partner>_<resource>`.
    pub const WORK_ORDER_SUFFIX: &'static str = "_aspace_wo.tsv";
    pub const DC_JSON: &'static str = "dc.json";
    /// Suffix of the per-component export in the source metadata dir (`<component>.tsv`).
    pub const EXPORT_SUFFIX: &'static str = ".tsv";
    /// Suffix given to the export once copied into the package (`<component>-ftk.tsv`).
    pub const EXPORT_TARGET_SUFFIX: &'static str = "-ftk.tsv";
    /// Per-component scan log (`<component>_clamscan.log`).
    pub const SCAN_LOG_SUFFIX: &'static str = "_clamscan.log";
    /// Line a clean scan log must contain.
    pub const SCAN_CLEAN_MARKER: &'static str = "Infected files: 0";
}

// ---- Worker threads ----

/// Worker count defaults and caps.
pub struct WorkerLimits;

impl WorkerLimits {
    /// Workers used when none is requested.
    pub const DEFAULT_WORKERS: usize = 1;
    /// Estimated descriptors held by one worker while copying (source, target, dir handles).
    pub const FDS_PER_WORKER: usize = 8;
}

// ---- Report ----

/// Column names of the stage report.
pub const REPORT_HEADER: [&str; 4] = ["worker_id", "component_id", "result", "error"];
