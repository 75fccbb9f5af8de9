// Shapes one collected snapshot plus network rates into the public JSON response.

use crate::models::{
    CpuSection, FsVolume, MemorySection, NetworkSection, PerformanceSnapshot, RawCpu, RawNetwork,
    RawSection, RawSnapshot, RawStorage, ServerSection, StorageSection,
};
use crate::rate_tracker::RateReading;

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

/// Two decimals, fixed-point. Non-finite input renders as 0.00.
pub fn fixed2(value: f64) -> String {
    let v = if value.is_finite() { value } else { 0.0 };
    // Adding 0.0 turns -0.0 into 0.0
    format!("{:.2}", v + 0.0)
}

/// e.g. 1610612736 -> "1.50 GB"
pub fn bytes_to_gb(bytes: u64) -> String {
    format!("{} GB", fixed2(bytes as f64 / GIB))
}

/// e.g. 1572864 -> "1.50 MB"
pub fn bytes_to_mb(bytes: u64) -> String {
    format!("{} MB", fixed2(bytes as f64 / MIB))
}

/// Bytes per second -> "x.xx MB/s"
pub fn rate_to_mb_per_sec(bytes_per_sec: f64) -> String {
    format!("{} MB/s", fixed2(bytes_per_sec / MIB))
}

pub fn percent(value: f64) -> String {
    format!("{}%", fixed2(value))
}

/// Totals over every volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StorageAggregate {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    /// 0 when total is 0.
    pub used_percentage: f64,
    /// 0 when total is 0.
    pub free_percentage: f64,
}

impl StorageAggregate {
    pub fn from_volumes(volumes: &[FsVolume]) -> Self {
        let total = volumes.iter().fold(0u64, |acc, v| acc.saturating_add(v.size));
        let used = volumes.iter().fold(0u64, |acc, v| acc.saturating_add(v.used));
        let free = total.saturating_sub(used);
        let (used_percentage, free_percentage) = if total > 0 {
            (
                used as f64 / total as f64 * 100.0,
                free as f64 / total as f64 * 100.0,
            )
        } else {
            (0.0, 0.0)
        };
        Self {
            total,
            used,
            free,
            used_percentage,
            free_percentage,
        }
    }
}

pub fn format_snapshot(
    server_name: &str,
    raw: &RawSnapshot,
    rates: &RateReading,
) -> PerformanceSnapshot {
    let cpu_name = raw.cpu.display_name();
    let storage = StorageAggregate::from_volumes(&raw.volumes);
    let primary = raw.interfaces.first();
    // Tracker state after this request: the sample just stored, or the untouched one.
    let (last_network_stats, last_network_time) = match raw.primary_sample() {
        Some(current) => (Some(current), Some(rates.sample_time)),
        None => (rates.previous.clone(), rates.previous_time),
    };

    PerformanceSnapshot {
        server: ServerSection {
            name: server_name.to_string(),
        },
        cpu: CpuSection {
            name: cpu_name.clone(),
            usage: percent(raw.load.current_load),
            cores: raw.load.cpus.len(),
        },
        memory: MemorySection {
            total: bytes_to_gb(raw.mem.total),
            used: bytes_to_gb(raw.mem.used),
            free: bytes_to_gb(raw.mem.free),
        },
        network: NetworkSection {
            interface: primary.map(|i| i.iface.clone()),
            input_mb: bytes_to_mb(primary.map_or(0, |i| i.rx_bytes)),
            output_mb: bytes_to_mb(primary.map_or(0, |i| i.tx_bytes)),
            input_per_second: rate_to_mb_per_sec(rates.input_per_second),
            output_per_second: rate_to_mb_per_sec(rates.output_per_second),
        },
        storage: StorageSection {
            total: bytes_to_gb(storage.total),
            used: bytes_to_gb(storage.used),
            free: bytes_to_gb(storage.free),
            used_percentage: percent(storage.used_percentage),
            free_percentage: percent(storage.free_percentage),
        },
        raw: RawSection {
            cpu: RawCpu {
                name: cpu_name,
                load: raw.load.clone(),
            },
            memory: raw.mem.clone(),
            network: RawNetwork {
                interfaces: raw.interfaces.clone(),
                last_network_stats,
                last_network_time,
                network_in_per_second: rates.input_per_second,
                network_out_per_second: rates.output_per_second,
            },
            storage: RawStorage {
                total: storage.total,
                used: storage.used,
                free: storage.free,
            },
        },
    }
}
