//! Shared fixtures: a source location with metadata, a work order and one payload per component.
#![allow(dead_code)]

use adoc::manifest::header_line;
use adoc::{Manifest, ManifestRow, PackageParams, TransferInfo};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PARTNER: &str = "fales";
pub const RESOURCE: &str = "mss123";

pub const TRANSFER_INFO: &str = "\
Contact-Name: Jane Archivist
Contact-Phone: 212-555-0100
Contact-Email: jane@example.org
Internal-Sender-Identifier: fales/mss123
Organization-Address: 70 Washington Square South
Source-Organization: Fales Library
nyu-dl-archivesspace-resource-url: /repositories/3/resources/1234
nyu-dl-resource-id: mss123
nyu-dl-resource-title: Papers of Example
nyu-dl-content-type: electronic_records
nyu-dl-content-classification: open
nyu-dl-project-name: fales/mss123
nyu-dl-rstar-collection-id: 6d4a2c1e-8f3b-4a5d-9c7e-1b2a3c4d5e6f
nyu-dl-package-format: 1.0.1
nyu-dl-use-statement: electronic-records-reading-room
nyu-dl-transfer-type: AIP
";

pub struct Fixture {
    _dir: TempDir,
    pub source: PathBuf,
    pub staging: PathBuf,
}

impl Fixture {
    pub fn metadata_dir(&self) -> PathBuf {
        self.source.join("metadata")
    }

    pub fn work_order_path(&self) -> PathBuf {
        self.metadata_dir()
            .join(format!("{PARTNER}_{RESOURCE}_aspace_wo.tsv"))
    }

    pub fn package_dir(&self, component_id: &str) -> PathBuf {
        self.staging
            .join(format!("{PARTNER}_{RESOURCE}_{component_id}"))
    }

    pub fn params(&self) -> PackageParams {
        PackageParams {
            partner_code: PARTNER.to_string(),
            resource_code: RESOURCE.to_string(),
            source: self.source.clone(),
            staging: self.staging.clone(),
            transfer_info: serde_yaml::from_str::<TransferInfo>(TRANSFER_INFO).unwrap(),
        }
    }

    pub fn write_metadata(&self, name: &str, content: &str) {
        fs::write(self.metadata_dir().join(name), content).unwrap();
    }
}

pub fn row(component_id: &str) -> ManifestRow {
    ManifestRow {
        resource_id: "MSS.123".to_string(),
        ref_id: format!("ref_{component_id}"),
        uri: "/repositories/3/archival_objects/42".to_string(),
        container_indicator_1: "1".to_string(),
        container_indicator_2: "2".to_string(),
        container_indicator_3: String::new(),
        title: format!("Disk image {component_id}"),
        component_id: component_id.to_string(),
    }
}

pub fn manifest(ids: &[&str]) -> Manifest {
    Manifest {
        rows: ids.iter().map(|id| row(id)).collect(),
    }
}

pub fn work_order_text(ids: &[&str]) -> String {
    let mut s = header_line();
    s.push('\n');
    for id in ids {
        s.push_str(&row(id).to_tsv_line());
        s.push('\n');
    }
    s
}

/// Payload for `id`: `file.txt` and `sub/inner.txt`.
pub fn write_payload(source: &Path, id: &str) {
    let dir = source.join(id);
    fs::create_dir_all(dir.join("sub")).unwrap();
    fs::write(dir.join("file.txt"), format!("payload of {id}")).unwrap();
    fs::write(dir.join("sub").join("inner.txt"), "nested").unwrap();
}

/// Source with transfer-info, a work order listing `ids` and a payload for each; empty staging dir.
pub fn fixture(ids: &[&str]) -> Fixture {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("source");
    let staging = dir.path().join("staging");
    fs::create_dir_all(source.join("metadata")).unwrap();
    fs::create_dir_all(&staging).unwrap();
    let fx = Fixture {
        _dir: dir,
        source,
        staging,
    };
    fx.write_metadata("transfer-info.txt", TRANSFER_INFO);
    fs::write(fx.work_order_path(), work_order_text(ids)).unwrap();
    for id in ids {
        write_payload(&fx.source, id);
    }
    fx
}

pub fn ids(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("cuid{i:03}")).collect()
}
