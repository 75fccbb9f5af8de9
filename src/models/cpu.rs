// CPU load and identity models

use serde::{Deserialize, Serialize};

/// Load of a single logical core, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreLoad {
    pub load: f64,
}

/// Current CPU load across the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentLoad {
    /// One-minute load average.
    pub avg_load: f64,
    pub current_load: f64,
    pub current_load_idle: f64,
    pub cpus: Vec<CoreLoad>,
}

/// Static CPU identity; does not change for the life of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuInfo {
    pub manufacturer: String,
    pub brand: String,
    pub vendor: String,
    pub cores: u32,
    pub physical_cores: u32,
    pub speed_mhz: u64,
}

impl CpuInfo {
    /// "manufacturer brand", e.g. "Intel Core i7-8700".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.manufacturer, self.brand)
    }
}
