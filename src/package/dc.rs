use serde::{Deserialize, Serialize};

use crate::manifest::ManifestRow;
use crate::transfer_info::TransferInfo;

/// Descriptive metadata written as `metadata/dc.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DublinCore {
    pub title: String,
    pub is_part_of: String,
}

impl DublinCore {
    pub fn new(transfer_info: &TransferInfo, row: &ManifestRow) -> Self {
        Self {
            title: row.title.clone(),
            is_part_of: transfer_info.is_part_of(),
        }
    }
}
