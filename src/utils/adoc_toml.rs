//! Load `adoc.toml` (CLI only). The lib takes everything through [`Opts`] and [`PackageParams`](crate::PackageParams).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::Opts;
use crate::utils::config::PackagePaths;

#[derive(Debug, Default, Deserialize)]
pub struct AdocToml {
    #[serde(default)]
    settings: StageSection,
}

#[derive(Debug, Default, Deserialize)]
struct StageSection {
    source_location: Option<PathBuf>,
    staging_location: Option<PathBuf>,
    workers: Option<usize>,
    report_dir: Option<PathBuf>,
    log_file: Option<PathBuf>,
    verbose: Option<bool>,
    /// Seconds.
    collect_timeout: Option<u64>,
}

/// Load `path`, or `adoc.toml` in the working directory when `path` is None.
/// Returns None if the file is missing or unreadable; a parse error is logged and ignored.
pub fn load_adoc_toml(path: Option<&Path>) -> Option<AdocToml> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(PackagePaths::get().config_filename()));
    let s = std::fs::read_to_string(&path).ok()?;
    parse_adoc_toml(&s)
        .map_err(|e| log::warn!("{}: {}", path.display(), e))
        .ok()
}

pub fn parse_adoc_toml(s: &str) -> Result<AdocToml, toml::de::Error> {
    toml::from_str(s)
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($sec:expr, $opts:expr, $sec_field:ident => $opts_field:ident) => {
        if let Some(ref v) = $sec.$sec_field {
            $opts.$opts_field = Some(v.clone());
        }
    };
}

/// Apply file config to opts (only fields present in the file). Call before applying CLI flags.
pub fn apply_file_to_opts(file: &AdocToml, opts: &mut Opts) {
    let sec = &file.settings;
    apply_file_opt!(sec, opts, source_location => source);
    apply_file_opt!(sec, opts, staging_location => staging);
    apply_file_opt!(sec, opts, workers => workers);
    apply_file_opt!(sec, opts, report_dir => report_dir);
    apply_file_opt!(sec, opts, log_file => log_file);
    if let Some(v) = sec.verbose {
        opts.verbose = v;
    }
    if let Some(secs) = sec.collect_timeout {
        opts.collect_timeout = Some(Duration::from_secs(secs));
    }
}
