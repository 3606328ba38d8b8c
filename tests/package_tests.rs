mod common;

use adoc::manifest::header_line;
use adoc::package::{DublinCore, build_package, scan_log_is_clean};
use adoc::{BuildError, BuildErrorKind};
use common::{TRANSFER_INFO, fixture, row};
use std::fs;
use std::time::{Duration, SystemTime};

const CLEAN_LOG: &str = "\
/source/cuid001/file.txt: OK

----------- SCAN SUMMARY -----------
Known viruses: 8700000
Scanned files: 2
Infected files: 0
Data scanned: 0.01 MB
";

#[test]
fn test_build_creates_full_package() {
    let fx = fixture(&["cuid001"]);
    let layout = build_package(&row("cuid001"), &fx.params(), 1).unwrap();

    let pkg = fx.package_dir("cuid001");
    assert_eq!(layout.root, pkg);
    assert_eq!(layout.name, "fales_mss123_cuid001");
    let md = pkg.join("metadata");
    assert_eq!(
        fs::read_to_string(md.join("transfer-info.txt")).unwrap(),
        TRANSFER_INFO
    );
    assert_eq!(
        fs::read_to_string(md.join("fales_mss123_cuid001_aspace_wo.tsv")).unwrap(),
        format!("{}\n{}\n", header_line(), row("cuid001").to_tsv_line())
    );
    assert_eq!(
        fs::read_to_string(pkg.join("cuid001").join("file.txt")).unwrap(),
        "payload of cuid001"
    );
    assert_eq!(
        fs::read_to_string(pkg.join("cuid001").join("sub").join("inner.txt")).unwrap(),
        "nested"
    );
    // copy, not move
    assert!(fx.source.join("cuid001").join("file.txt").is_file());
    // optional inputs absent: skipped
    assert!(!md.join("cuid001-ftk.tsv").exists());
    assert!(!md.join("cuid001_clamscan.log").exists());
}

#[test]
fn test_dc_json_fields() {
    let fx = fixture(&["cuid001"]);
    build_package(&row("cuid001"), &fx.params(), 1).unwrap();
    let bytes = fs::read(fx.package_dir("cuid001").join("metadata").join("dc.json")).unwrap();
    let dc: DublinCore = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(dc.title, "Disk image cuid001");
    assert_eq!(dc.is_part_of, "AIC#mss123: Papers of Example");

    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(value.get("is_part_of").is_some());
    assert!(value.get("title").is_some());
}

#[test]
fn test_second_build_fails_directory_exists_and_keeps_first() {
    let fx = fixture(&["cuid001"]);
    let params = fx.params();
    build_package(&row("cuid001"), &params, 1).unwrap();
    let dc_path = fx.package_dir("cuid001").join("metadata").join("dc.json");
    let before = fs::read(&dc_path).unwrap();

    let err = build_package(&row("cuid001"), &params, 2).unwrap_err();
    assert!(matches!(err, BuildError::DirectoryExists { .. }));
    assert_eq!(err.kind(), BuildErrorKind::DirectoryExists);
    assert_eq!(fs::read(&dc_path).unwrap(), before);
    assert!(fx.package_dir("cuid001").join("cuid001").join("file.txt").is_file());
}

#[test]
fn test_missing_transfer_info() {
    let fx = fixture(&["cuid001"]);
    fs::remove_file(fx.metadata_dir().join("transfer-info.txt")).unwrap();
    let err = build_package(&row("cuid001"), &fx.params(), 1).unwrap_err();
    assert_eq!(err.kind(), BuildErrorKind::MissingTransferInfo);
    assert!(!fx.package_dir("cuid001").join("cuid001").exists());
}

#[test]
fn test_transfer_info_not_a_regular_file() {
    let fx = fixture(&["cuid001"]);
    let ti = fx.metadata_dir().join("transfer-info.txt");
    fs::remove_file(&ti).unwrap();
    fs::create_dir(&ti).unwrap();
    let err = build_package(&row("cuid001"), &fx.params(), 1).unwrap_err();
    assert_eq!(err.kind(), BuildErrorKind::MissingTransferInfo);
}

#[test]
fn test_export_copied_with_ftk_suffix() {
    let fx = fixture(&["cuid001"]);
    fx.write_metadata("cuid001.tsv", "path\tsize\nfile.txt\t18\n");
    build_package(&row("cuid001"), &fx.params(), 1).unwrap();
    let copied = fx.package_dir("cuid001").join("metadata").join("cuid001-ftk.tsv");
    assert_eq!(
        fs::read_to_string(copied).unwrap(),
        "path\tsize\nfile.txt\t18\n"
    );
}

#[test]
fn test_clean_scan_log_copied() {
    let fx = fixture(&["cuid001"]);
    fx.write_metadata("cuid001_clamscan.log", CLEAN_LOG);
    build_package(&row("cuid001"), &fx.params(), 1).unwrap();
    let copied = fx
        .package_dir("cuid001")
        .join("metadata")
        .join("cuid001_clamscan.log");
    assert_eq!(fs::read_to_string(copied).unwrap(), CLEAN_LOG);
}

#[test]
fn test_infected_scan_log_stops_before_payload() {
    let fx = fixture(&["cuid001"]);
    fx.write_metadata(
        "cuid001_clamscan.log",
        &CLEAN_LOG.replace("Infected files: 0", "Infected files: 2"),
    );
    let err = build_package(&row("cuid001"), &fx.params(), 1).unwrap_err();
    assert_eq!(err.kind(), BuildErrorKind::InfectedPayload);
    let pkg = fx.package_dir("cuid001");
    assert!(pkg.join("metadata").is_dir());
    assert!(!pkg.join("cuid001").exists());
    assert!(!pkg.join("metadata").join("cuid001_clamscan.log").exists());
}

#[test]
fn test_missing_payload() {
    let fx = fixture(&["cuid001"]);
    fs::remove_dir_all(fx.source.join("cuid001")).unwrap();
    let err = build_package(&row("cuid001"), &fx.params(), 1).unwrap_err();
    assert_eq!(err.kind(), BuildErrorKind::MissingPayload);
    assert!(!fx.package_dir("cuid001").join("cuid001").exists());
}

#[test]
fn test_missing_staging_root_is_io_error() {
    let fx = fixture(&["cuid001"]);
    let mut params = fx.params();
    params.staging = fx.staging.join("does-not-exist");
    let err = build_package(&row("cuid001"), &params, 1).unwrap_err();
    assert_eq!(err.kind(), BuildErrorKind::Io);
}

#[test]
fn test_payload_file_times_preserved() {
    let fx = fixture(&["cuid001"]);
    let src = fx.source.join("cuid001").join("file.txt");
    let past = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000_000);
    fs::File::options()
        .write(true)
        .open(&src)
        .unwrap()
        .set_modified(past)
        .unwrap();

    build_package(&row("cuid001"), &fx.params(), 1).unwrap();
    let dst = fx.package_dir("cuid001").join("cuid001").join("file.txt");
    assert_eq!(fs::metadata(dst).unwrap().modified().unwrap(), past);
}

// --- scan log marker ---

#[test]
fn test_scan_log_marker() {
    assert!(scan_log_is_clean(CLEAN_LOG));
    assert!(scan_log_is_clean("Infected files: 0\r\n"));
    assert!(!scan_log_is_clean("Infected files: 1\n"));
    assert!(!scan_log_is_clean("Infected files: 10\n"));
    assert!(!scan_log_is_clean(""));
}
