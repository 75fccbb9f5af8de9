// Filesystem models

use serde::{Deserialize, Serialize};

/// One mounted filesystem; sizes in bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FsVolume {
    pub fs: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub mount: String,
    pub size: u64,
    pub used: u64,
    pub available: u64,
    /// Used share of this volume in percent, 0 when size is 0.
    #[serde(rename = "use")]
    pub use_percent: f64,
}
