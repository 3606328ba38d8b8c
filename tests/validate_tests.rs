mod common;

use adoc::error::{TransferInfoError, ValidationError};
use adoc::validate::validate_source;
use adoc::{ManifestError, TransferInfo};
use common::{TRANSFER_INFO, fixture, work_order_text};
use std::fs;

fn transfer_info() -> TransferInfo {
    serde_yaml::from_str(TRANSFER_INFO).unwrap()
}

#[test]
fn test_valid_source_passes() {
    let fx = fixture(&["a", "b"]);
    let validated = validate_source(&fx.source).unwrap();
    assert_eq!(validated.manifest.len(), 2);
    assert_eq!(validated.transfer_info.resource_id, "mss123");
}

#[test]
fn test_source_not_a_directory() {
    let fx = fixture(&["a"]);
    let file = fx.source.join("a").join("file.txt");
    let err = validate_source(&file).unwrap_err();
    assert!(matches!(err, ValidationError::NotADirectory { .. }));
}

#[test]
fn test_missing_metadata_dir() {
    let fx = fixture(&["a"]);
    fs::remove_dir_all(fx.metadata_dir()).unwrap();
    let err = validate_source(&fx.source).unwrap_err();
    assert!(matches!(err, ValidationError::NotADirectory { path } if path.ends_with("metadata")));
}

#[test]
fn test_missing_work_order() {
    let fx = fixture(&["a"]);
    fs::remove_file(fx.work_order_path()).unwrap();
    let err = validate_source(&fx.source).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::Manifest(ManifestError::NotFound { .. })
    ));
}

#[test]
fn test_missing_transfer_info_rejected() {
    let fx = fixture(&["a"]);
    fs::remove_file(fx.metadata_dir().join("transfer-info.txt")).unwrap();
    let err = validate_source(&fx.source).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::TransferInfo(TransferInfoError::Io { .. })
    ));
}

#[test]
fn test_invalid_transfer_info_field_rejected() {
    let fx = fixture(&["a"]);
    let bad = TRANSFER_INFO.replace("open", "secret");
    fx.write_metadata("transfer-info.txt", &bad);
    let err = validate_source(&fx.source).unwrap_err();
    match err {
        ValidationError::TransferInfo(TransferInfoError::Invalid { field, .. }) => {
            assert_eq!(field, "nyu-dl-content-classification");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_duplicate_component_rejected() {
    let fx = fixture(&["a", "b"]);
    fs::write(fx.work_order_path(), work_order_text(&["a", "b", "a"])).unwrap();
    let err = validate_source(&fx.source).unwrap_err();
    assert!(matches!(err, ValidationError::DuplicateComponent(id) if id == "a"));
}

#[test]
fn test_missing_component_dir_rejected() {
    let fx = fixture(&["a", "b"]);
    fs::remove_dir_all(fx.source.join("b")).unwrap();
    let err = validate_source(&fx.source).unwrap_err();
    assert!(matches!(err, ValidationError::MissingComponent { path } if path.ends_with("b")));
}

#[test]
fn test_unlisted_entry_rejected() {
    let fx = fixture(&["a"]);
    fs::create_dir(fx.source.join("stray")).unwrap();
    let err = validate_source(&fx.source).unwrap_err();
    assert!(matches!(err, ValidationError::Unlisted { name } if name == "stray"));
}

#[test]
fn test_infected_scan_log_rejected() {
    let fx = fixture(&["a"]);
    fx.write_metadata("a_clamscan.log", "Scanned files: 3\nInfected files: 2\n");
    let err = validate_source(&fx.source).unwrap_err();
    assert!(matches!(err, ValidationError::Infected { name } if name == "a_clamscan.log"));
}

#[test]
fn test_clean_scan_log_accepted() {
    let fx = fixture(&["a"]);
    fx.write_metadata("a_clamscan.log", "Scanned files: 3\nInfected files: 0\n");
    assert!(validate_source(&fx.source).is_ok());
}

#[test]
fn test_transfer_info_validate_ok() {
    assert!(transfer_info().validate().is_ok());
    assert_eq!(transfer_info().is_part_of(), "AIC#mss123: Papers of Example");
}

#[test]
fn test_transfer_info_bad_resource_url() {
    let mut ti = transfer_info();
    for url in [
        "/repositories/4/resources/1",
        "/repositories/3/resources/",
        "/repositories/3/resources/12a",
        "repositories/3/resources/1",
    ] {
        ti.archivesspace_resource_url = url.to_string();
        assert!(
            matches!(
                ti.validate(),
                Err(TransferInfoError::Invalid {
                    field: "nyu-dl-archivesspace-resource-url",
                    ..
                })
            ),
            "{url}"
        );
    }
}

#[test]
fn test_transfer_info_bad_partner_path() {
    let mut ti = transfer_info();
    ti.internal_sender_identifier = "nypl/mss123".to_string();
    assert!(matches!(
        ti.validate(),
        Err(TransferInfoError::Invalid {
            field: "Internal-Sender-Identifier",
            ..
        })
    ));
    ti.internal_sender_identifier = "fales/mss/123".to_string();
    assert!(ti.validate().is_err());
}

#[test]
fn test_transfer_info_bad_uuid_and_blank() {
    let mut ti = transfer_info();
    ti.rstar_collection_id = "not-a-uuid".to_string();
    assert!(matches!(
        ti.validate(),
        Err(TransferInfoError::Invalid {
            field: "nyu-dl-rstar-collection-id",
            ..
        })
    ));
    let mut ti = transfer_info();
    ti.contact_name = "   ".to_string();
    assert!(matches!(
        ti.validate(),
        Err(TransferInfoError::Invalid {
            field: "Contact-Name",
            ..
        })
    ));
}
