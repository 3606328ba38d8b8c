//! Names and paths of one package and of its inputs in the source location.

use std::path::PathBuf;

use crate::PackageParams;
use crate::utils::config::PackageNames;

/// Every path a build touches for a single component.
#[derive(Clone, Debug)]
pub struct PackageLayout {
    /// `<partner>_<resource>_<component>`
    pub name: String,
    /// `<staging>/<name>`
    pub root: PathBuf,
    /// `<root>/metadata`
    pub metadata_dir: PathBuf,
    /// `<root>/<component>`: payload copy target.
    pub payload_dir: PathBuf,
    /// `<source>/metadata`
    pub source_metadata_dir: PathBuf,
    /// `<source>/<component>`
    pub source_payload: PathBuf,
    component_id: String,
    work_order_name: String,
}

impl PackageLayout {
    pub fn new(params: &PackageParams, component_id: &str) -> Self {
        let prefix = format!("{}_{}", params.partner_code, params.resource_code);
        let name = format!("{prefix}_{component_id}");
        let root = params.staging.join(&name);
        Self {
            metadata_dir: root.join(PackageNames::METADATA_DIR),
            payload_dir: root.join(component_id),
            source_metadata_dir: params.source.join(PackageNames::METADATA_DIR),
            source_payload: params.source.join(component_id),
            work_order_name: format!("{name}{}", PackageNames::WORK_ORDER_SUFFIX),
            component_id: component_id.to_string(),
            name,
            root,
        }
    }

    pub fn source_transfer_info(&self) -> PathBuf {
        self.source_metadata_dir.join(PackageNames::TRANSFER_INFO)
    }

    pub fn transfer_info(&self) -> PathBuf {
        self.metadata_dir.join(PackageNames::TRANSFER_INFO)
    }

    /// Single-row work order, `<name>_aspace_wo.tsv`.
    pub fn work_order(&self) -> PathBuf {
        self.metadata_dir.join(&self.work_order_name)
    }

    pub fn dc_json(&self) -> PathBuf {
        self.metadata_dir.join(PackageNames::DC_JSON)
    }

    pub fn source_export(&self) -> PathBuf {
        self.source_metadata_dir
            .join(format!("{}{}", self.component_id, PackageNames::EXPORT_SUFFIX))
    }

    pub fn export(&self) -> PathBuf {
        self.metadata_dir
            .join(format!("{}{}", self.component_id, PackageNames::EXPORT_TARGET_SUFFIX))
    }

    pub fn source_scan_log(&self) -> PathBuf {
        self.source_metadata_dir.join(self.scan_log_name())
    }

    pub fn scan_log(&self) -> PathBuf {
        self.metadata_dir.join(self.scan_log_name())
    }

    fn scan_log_name(&self) -> String {
        format!("{}{}", self.component_id, PackageNames::SCAN_LOG_SUFFIX)
    }
}
