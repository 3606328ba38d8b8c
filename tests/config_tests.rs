use adoc::Opts;
use adoc::utils::PackagePaths;
use adoc::utils::adoc_toml::{apply_file_to_opts, load_adoc_toml, parse_adoc_toml};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_config_file_applies_settings() {
    let file = parse_adoc_toml(
        r#"
[settings]
source_location = "/data/source"
workers = 4
verbose = true
collect_timeout = 90
"#,
    )
    .unwrap();
    let mut opts = Opts::default();
    apply_file_to_opts(&file, &mut opts);
    assert_eq!(opts.source, Some(PathBuf::from("/data/source")));
    assert_eq!(opts.workers, Some(4));
    assert!(opts.verbose);
    assert_eq!(opts.collect_timeout, Some(Duration::from_secs(90)));
    assert_eq!(opts.staging, None);
}

#[test]
fn test_config_file_rejects_bad_types() {
    assert!(parse_adoc_toml("[settings]\nworkers = \"many\"\n").is_err());
    assert!(parse_adoc_toml("").is_ok());
}

#[test]
fn test_load_config_from_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("adoc.toml");
    fs::write(&path, "[settings]\nstaging_location = \"/data/staging\"\n").unwrap();
    let file = load_adoc_toml(Some(path.as_path())).unwrap();
    let mut opts = Opts {
        workers: Some(2),
        ..Opts::default()
    };
    apply_file_to_opts(&file, &mut opts);
    assert_eq!(opts.staging, Some(PathBuf::from("/data/staging")));
    assert_eq!(opts.workers, Some(2));
}

#[test]
fn test_load_config_missing_or_invalid_is_none() {
    let dir = TempDir::new().unwrap();
    assert!(load_adoc_toml(Some(dir.path().join("absent.toml").as_path())).is_none());
    let bad = dir.path().join("bad.toml");
    fs::write(&bad, "[settings\n").unwrap();
    assert!(load_adoc_toml(Some(bad.as_path())).is_none());
}

#[test]
fn test_package_file_names() {
    let paths = PackagePaths::get();
    assert_eq!(paths.config_filename(), "adoc.toml");
    assert_eq!(
        paths.stage_report_filename("fales", "mss_123"),
        "fales_mss_123-adoc-stage.tsv"
    );
}
