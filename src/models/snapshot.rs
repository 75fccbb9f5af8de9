// Collected facts for one request, and the JSON shape served from GET /performance

use serde::{Deserialize, Serialize};

use super::{CpuInfo, CurrentLoad, FsVolume, InterfaceCounters, MemStats, NetworkSample};

/// Everything the collector gathered for one request. Both views of the response derive from this.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSnapshot {
    pub load: CurrentLoad,
    pub cpu: CpuInfo,
    pub mem: MemStats,
    pub interfaces: Vec<InterfaceCounters>,
    pub volumes: Vec<FsVolume>,
}

impl RawSnapshot {
    /// Counters of the first reported interface, if any.
    pub fn primary_sample(&self) -> Option<NetworkSample> {
        self.interfaces.first().map(NetworkSample::from)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSnapshot {
    pub server: ServerSection,
    pub cpu: CpuSection,
    pub memory: MemorySection,
    pub network: NetworkSection,
    pub storage: StorageSection,
    pub raw: RawSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSection {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuSection {
    pub name: String,
    /// e.g. "12.34%"
    pub usage: String,
    pub cores: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorySection {
    pub total: String,
    pub used: String,
    pub free: String,
}

/// `interface` is null when the host reports no network interfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSection {
    pub interface: Option<String>,
    pub input_mb: String,
    pub output_mb: String,
    pub input_per_second: String,
    pub output_per_second: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageSection {
    pub total: String,
    pub used: String,
    pub free: String,
    pub used_percentage: String,
    pub free_percentage: String,
}

/// Near-unprocessed numbers for clients that do their own formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSection {
    pub cpu: RawCpu,
    pub memory: MemStats,
    pub network: RawNetwork,
    pub storage: RawStorage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCpu {
    pub name: String,
    #[serde(flatten)]
    pub load: CurrentLoad,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNetwork {
    pub interfaces: Vec<InterfaceCounters>,
    /// Tracker sample after this request (null only while no interface was ever seen).
    pub last_network_stats: Option<NetworkSample>,
    pub last_network_time: Option<u64>,
    /// Bytes per second.
    pub network_in_per_second: f64,
    pub network_out_per_second: f64,
}

/// Sums over all volumes, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStorage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}
