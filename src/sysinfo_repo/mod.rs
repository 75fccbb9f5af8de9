// Host metrics via sysinfo

mod linux;

use crate::models::*;
use crate::provider::MetricsProvider;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use sysinfo::{Disks, Networks, System};
use tracing::instrument;

/// CPU handle plus the instant of its last usage refresh; usage is only meaningful
/// when two refreshes are at least `MINIMUM_CPU_UPDATE_INTERVAL` apart.
struct CpuSampler {
    sys: System,
    last_refresh: Instant,
}

pub struct SysinfoRepo {
    cpu: Arc<Mutex<CpuSampler>>,
    mem: Arc<Mutex<System>>,
    disks: Arc<Mutex<Disks>>,
    networks: Arc<Mutex<Networks>>,
    cpu_info: CpuInfo,
}

impl Default for SysinfoRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoRepo {
    pub fn new() -> Self {
        let mut cpu_sys = System::new();
        cpu_sys.refresh_cpu_all();
        let cpu_info = read_cpu_info(&cpu_sys);
        let mut mem_sys = System::new();
        mem_sys.refresh_memory();
        let disks = Disks::new_with_refreshed_list();
        let networks = Networks::new_with_refreshed_list();
        Self {
            cpu: Arc::new(Mutex::new(CpuSampler {
                sys: cpu_sys,
                last_refresh: Instant::now(),
            })),
            mem: Arc::new(Mutex::new(mem_sys)),
            disks: Arc::new(Mutex::new(disks)),
            networks: Arc::new(Mutex::new(networks)),
            cpu_info,
        }
    }
}

#[async_trait]
impl MetricsProvider for SysinfoRepo {
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "current_load"))]
    async fn current_load(&self) -> anyhow::Result<CurrentLoad> {
        let cpu = self.cpu.clone();
        tokio::task::spawn_blocking(move || {
            let mut sampler = cpu
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo cpu lock poisoned: {}", e))?;

            // Wait out only what is left of the minimum interval since the previous refresh
            let since = sampler.last_refresh.elapsed();
            if since < sysinfo::MINIMUM_CPU_UPDATE_INTERVAL {
                std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL - since);
            }
            sampler.sys.refresh_cpu_usage();
            sampler.last_refresh = Instant::now();

            let current_load = (sampler.sys.global_cpu_usage() as f64).clamp(0.0, 100.0);
            let cpus = sampler
                .sys
                .cpus()
                .iter()
                .map(|c| CoreLoad {
                    load: (c.cpu_usage() as f64).clamp(0.0, 100.0),
                })
                .collect();

            Ok(CurrentLoad {
                avg_load: System::load_average().one,
                current_load,
                current_load_idle: 100.0 - current_load,
                cpus,
            })
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }

    async fn cpu(&self) -> anyhow::Result<CpuInfo> {
        Ok(self.cpu_info.clone())
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "mem"))]
    async fn mem(&self) -> anyhow::Result<MemStats> {
        let mem = self.mem.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = mem
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo memory lock poisoned: {}", e))?;
            sys.refresh_memory();

            let total = sys.total_memory();
            let free = sys.free_memory();
            let available = sys.available_memory();
            Ok(MemStats {
                total,
                free,
                used: total.saturating_sub(free),
                active: total.saturating_sub(available),
                available,
                swap_total: sys.total_swap(),
                swap_used: sys.used_swap(),
                swap_free: sys.free_swap(),
            })
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "network_stats"))]
    async fn network_stats(&self) -> anyhow::Result<Vec<InterfaceCounters>> {
        let networks = self.networks.clone();
        tokio::task::spawn_blocking(move || {
            let mut networks_guard = networks
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo networks lock poisoned: {}", e))?;
            networks_guard.refresh(true);
            let mut interfaces: Vec<InterfaceCounters> = networks_guard
                .list()
                .iter()
                .map(|(name, data)| InterfaceCounters {
                    iface: name.clone(),
                    operstate: linux::read_operstate(name).unwrap_or_else(|| "unknown".into()),
                    rx_bytes: data.total_received(),
                    tx_bytes: data.total_transmitted(),
                    rx_packets: data.total_packets_received(),
                    tx_packets: data.total_packets_transmitted(),
                    rx_errors: data.total_errors_on_received(),
                    tx_errors: data.total_errors_on_transmitted(),
                })
                .collect();

            let default_iface = linux::read_default_route_interface();
            order_interfaces(&mut interfaces, default_iface.as_deref());
            Ok(interfaces)
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "fs_size"))]
    async fn fs_size(&self) -> anyhow::Result<Vec<FsVolume>> {
        let disks = self.disks.clone();
        tokio::task::spawn_blocking(move || {
            let mut disks_guard = disks
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo disks lock poisoned: {}", e))?;
            disks_guard.refresh(true);
            let volumes = disks_guard
                .list()
                .iter()
                .map(|d| {
                    let size = d.total_space();
                    let available = d.available_space();
                    let used = size.saturating_sub(available);
                    let use_percent = if size > 0 {
                        (used as f64 / size as f64) * 100.0
                    } else {
                        0.0
                    };
                    FsVolume {
                        fs: d.name().to_string_lossy().into_owned(),
                        type_: d.file_system().to_string_lossy().into_owned(),
                        mount: d.mount_point().to_string_lossy().into_owned(),
                        size,
                        used,
                        available,
                        use_percent,
                    }
                })
                .collect();
            Ok(volumes)
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }
}

fn read_cpu_info(sys: &System) -> CpuInfo {
    let first = sys.cpus().first();
    let vendor = first.map(|c| c.vendor_id().to_string()).unwrap_or_default();
    let raw_brand = first
        .map(|c| c.brand().trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(linux::read_cpu_model_linux)
        .unwrap_or_else(|| "Unknown".into());
    let manufacturer = manufacturer_from_vendor(&vendor, &raw_brand);
    let brand = clean_brand(&raw_brand, &manufacturer);
    CpuInfo {
        brand,
        manufacturer,
        vendor,
        cores: sys.cpus().len() as u32,
        physical_cores: System::physical_core_count().unwrap_or(0) as u32,
        speed_mhz: first.map(|c| c.frequency()).unwrap_or(0),
    }
}

/// Friendly manufacturer for a CPUID vendor string; falls back to the brand's first word.
fn manufacturer_from_vendor(vendor: &str, brand: &str) -> String {
    match vendor {
        "GenuineIntel" => "Intel".into(),
        "AuthenticAMD" => "AMD".into(),
        "CentaurHauls" => "VIA".into(),
        "HygonGenuine" => "Hygon".into(),
        v if !v.is_empty() => v.to_string(),
        _ => brand
            .split_whitespace()
            .next()
            .map(|w| w.replace("(R)", ""))
            .filter(|w| !w.is_empty())
            .unwrap_or_else(|| "Unknown".into()),
    }
}

/// "Intel(R) Core(TM) i7-8700 CPU @ 3.20GHz" -> "Core i7-8700"
fn clean_brand(brand: &str, manufacturer: &str) -> String {
    let without_marks = brand
        .replace("(R)", "")
        .replace("(r)", "")
        .replace("(TM)", "")
        .replace("(tm)", "");
    let without_speed = match without_marks.find(" @ ") {
        Some(i) => &without_marks[..i],
        None => without_marks.as_str(),
    };
    let mut words: Vec<&str> = without_speed.split_whitespace().collect();
    if words
        .first()
        .is_some_and(|w| w.eq_ignore_ascii_case(manufacturer))
        && words.len() > 1
    {
        words.remove(0);
    }
    if words.last().is_some_and(|w| *w == "CPU") && words.len() > 1 {
        words.pop();
    }
    words.join(" ")
}

/// Default-route interface first, then everything else by name with loopback last.
fn order_interfaces(interfaces: &mut [InterfaceCounters], default_iface: Option<&str>) {
    interfaces.sort_by(|a, b| {
        let rank = |i: &InterfaceCounters| {
            if Some(i.iface.as_str()) == default_iface {
                0
            } else if linux::is_loopback(&i.iface) {
                2
            } else {
                1
            }
        };
        rank(a).cmp(&rank(b)).then_with(|| a.iface.cmp(&b.iface))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iface(name: &str) -> InterfaceCounters {
        InterfaceCounters {
            iface: name.into(),
            operstate: "up".into(),
            rx_bytes: 0,
            tx_bytes: 0,
            rx_packets: 0,
            tx_packets: 0,
            rx_errors: 0,
            tx_errors: 0,
        }
    }

    #[test]
    fn manufacturer_maps_known_vendor_ids() {
        assert_eq!(manufacturer_from_vendor("GenuineIntel", ""), "Intel");
        assert_eq!(manufacturer_from_vendor("AuthenticAMD", ""), "AMD");
        assert_eq!(manufacturer_from_vendor("", "Apple M2 Pro"), "Apple");
        assert_eq!(manufacturer_from_vendor("", ""), "Unknown");
    }

    #[test]
    fn clean_brand_strips_marks_speed_and_manufacturer() {
        assert_eq!(
            clean_brand("Intel(R) Core(TM) i7-8700 CPU @ 3.20GHz", "Intel"),
            "Core i7-8700"
        );
        assert_eq!(
            clean_brand("AMD Ryzen 7 5800X 8-Core Processor", "AMD"),
            "Ryzen 7 5800X 8-Core Processor"
        );
        assert_eq!(clean_brand("Unknown", "Unknown"), "Unknown");
    }

    #[test]
    fn default_interface_sorts_first_and_loopback_last() {
        let mut list = vec![iface("lo"), iface("docker0"), iface("wlan0"), iface("eth0")];
        order_interfaces(&mut list, Some("wlan0"));
        let names: Vec<&str> = list.iter().map(|i| i.iface.as_str()).collect();
        assert_eq!(names, ["wlan0", "docker0", "eth0", "lo"]);

        order_interfaces(&mut list, None);
        let names: Vec<&str> = list.iter().map(|i| i.iface.as_str()).collect();
        assert_eq!(names, ["docker0", "eth0", "wlan0", "lo"]);
    }
}
