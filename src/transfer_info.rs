//! Transfer descriptor (`metadata/transfer-info.txt`): YAML key/value record copied into every package.
//!
//! Staging only reads the resource id and title (for `dc.json`); [`TransferInfo::validate`] backs the
//! validate command.

use serde::Deserialize;
use std::path::Path;

use crate::error::TransferInfoError;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TransferInfo {
    #[serde(rename = "Contact-Name")]
    pub contact_name: String,
    #[serde(rename = "Contact-Phone")]
    pub contact_phone: String,
    #[serde(rename = "Contact-Email")]
    pub contact_email: String,
    #[serde(rename = "Internal-Sender-Identifier")]
    pub internal_sender_identifier: String,
    #[serde(rename = "Organization-Address")]
    pub organization_address: String,
    #[serde(rename = "Source-Organization")]
    pub source_organization: String,
    #[serde(rename = "nyu-dl-archivesspace-resource-url")]
    pub archivesspace_resource_url: String,
    #[serde(rename = "nyu-dl-resource-id")]
    pub resource_id: String,
    #[serde(rename = "nyu-dl-resource-title")]
    pub resource_title: String,
    #[serde(rename = "nyu-dl-content-type")]
    pub content_type: String,
    #[serde(rename = "nyu-dl-content-classification")]
    pub content_classification: String,
    #[serde(rename = "nyu-dl-project-name")]
    pub project_name: String,
    #[serde(rename = "nyu-dl-rstar-collection-id")]
    pub rstar_collection_id: String,
    #[serde(rename = "nyu-dl-package-format")]
    pub package_format: String,
    #[serde(rename = "nyu-dl-use-statement")]
    pub use_statement: String,
    #[serde(rename = "nyu-dl-transfer-type")]
    pub transfer_type: String,
}

const REPOSITORIES: [&str; 3] = ["2", "3", "6"];
const PARTNERS: [&str; 3] = ["fales", "tamwag", "nyuarchives"];
const CONTENT_TYPES: [&str; 2] = ["electronic_records", "electronic_records-do-not-create-DOs"];
const CLASSIFICATIONS: [&str; 3] = ["open", "closed", "restricted"];
const PACKAGE_FORMATS: [&str; 2] = ["1.0.0", "1.0.1"];
const USE_STATEMENTS: [&str; 1] = ["electronic-records-reading-room"];
const TRANSFER_TYPES: [&str; 3] = ["AIP", "SIP", "DIP"];

/// `/repositories/{2|3|6}/resources/{digits}`.
fn is_resource_url(url: &str) -> bool {
    let Some(rest) = url.trim().strip_prefix("/repositories/") else {
        return false;
    };
    let Some((repo, rest)) = rest.split_once('/') else {
        return false;
    };
    let Some(id) = rest.strip_prefix("resources/") else {
        return false;
    };
    REPOSITORIES.contains(&repo) && !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}

impl TransferInfo {
    /// Read and parse a transfer descriptor file.
    pub fn load(path: &Path) -> Result<Self, TransferInfoError> {
        let s = std::fs::read_to_string(path).map_err(|source| TransferInfoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&s).map_err(|source| TransferInfoError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `is_part_of` value for descriptive metadata: `AIC#<resource id>: <resource title>`.
    pub fn is_part_of(&self) -> String {
        format!("AIC#{}: {}", self.resource_id, self.resource_title)
    }

    /// Check required fields and controlled values. Returns the first problem found.
    pub fn validate(&self) -> Result<(), TransferInfoError> {
        use TransferInfoError::Invalid;

        require_non_blank("Contact-Name", &self.contact_name)?;
        require_non_blank("Contact-Email", &self.contact_email)?;
        require_non_blank("Contact-Phone", &self.contact_phone)?;
        require_partner_path("Internal-Sender-Identifier", &self.internal_sender_identifier)?;
        require_non_blank("Organization-Address", &self.organization_address)?;
        require_non_blank("Source-Organization", &self.source_organization)?;
        if !is_resource_url(&self.archivesspace_resource_url) {
            return Err(Invalid {
                field: "nyu-dl-archivesspace-resource-url",
                reason: "must be in the form /repositories/X/resources/Y",
            });
        }
        require_non_blank("nyu-dl-resource-id", &self.resource_id)?;
        require_non_blank("nyu-dl-resource-title", &self.resource_title)?;
        require_one_of("nyu-dl-content-type", &self.content_type, &CONTENT_TYPES)?;
        require_one_of(
            "nyu-dl-content-classification",
            &self.content_classification,
            &CLASSIFICATIONS,
        )?;
        require_partner_path("nyu-dl-project-name", &self.project_name)?;
        if uuid::Uuid::parse_str(self.rstar_collection_id.trim()).is_err() {
            return Err(Invalid {
                field: "nyu-dl-rstar-collection-id",
                reason: "is not a valid UUID",
            });
        }
        require_one_of("nyu-dl-package-format", &self.package_format, &PACKAGE_FORMATS)?;
        require_one_of("nyu-dl-use-statement", &self.use_statement, &USE_STATEMENTS)?;
        require_one_of("nyu-dl-transfer-type", &self.transfer_type, &TRANSFER_TYPES)?;
        Ok(())
    }
}

fn require_non_blank(field: &'static str, value: &str) -> Result<(), TransferInfoError> {
    if value.trim().is_empty() {
        return Err(TransferInfoError::Invalid {
            field,
            reason: "is blank",
        });
    }
    Ok(())
}

fn require_one_of(
    field: &'static str,
    value: &str,
    allowed: &[&str],
) -> Result<(), TransferInfoError> {
    if !allowed.contains(&value.trim()) {
        return Err(TransferInfoError::Invalid {
            field,
            reason: "has a value outside the controlled list",
        });
    }
    Ok(())
}

/// `<partner>/<something>` with a known partner code.
fn require_partner_path(field: &'static str, value: &str) -> Result<(), TransferInfoError> {
    let Some((partner, rest)) = value.trim().split_once('/') else {
        return Err(TransferInfoError::Invalid {
            field,
            reason: "must contain a single `/`",
        });
    };
    if rest.contains('/') {
        return Err(TransferInfoError::Invalid {
            field,
            reason: "must contain a single `/`",
        });
    }
    if !PARTNERS.contains(&partner) {
        return Err(TransferInfoError::Invalid {
            field,
            reason: "partner code must be one of fales, tamwag or nyuarchives",
        });
    }
    Ok(())
}
