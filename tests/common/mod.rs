// Shared test helpers: scripted provider, manual clock, fixtures

#![allow(dead_code)]

use async_trait::async_trait;
use perfserver::models::*;
use perfserver::provider::MetricsProvider;
use perfserver::rate_tracker::Clock;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const GIB: u64 = 1024 * 1024 * 1024;

/// Clock the test moves by hand.
#[derive(Clone, Default)]
pub struct ManualClock(Arc<AtomicU64>);

impl ManualClock {
    pub fn set(&self, ms: u64) {
        self.0.store(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// Provider returning fixed CPU/memory facts plus whatever interfaces and volumes the test sets.
#[derive(Default)]
pub struct ScriptedProvider {
    pub interfaces: Mutex<Vec<InterfaceCounters>>,
    pub volumes: Mutex<Vec<FsVolume>>,
    pub fail_current_load: AtomicBool,
    /// Delay applied to `fs_size`, for timeout tests.
    pub fs_delay: Mutex<Option<Duration>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        let p = Self::default();
        p.set_counters("eth0", 0, 0);
        *p.volumes.lock().unwrap() = vec![volume("/dev/sda1", "/", 400 * GIB, 100 * GIB)];
        p
    }

    pub fn set_counters(&self, iface: &str, rx_bytes: u64, tx_bytes: u64) {
        *self.interfaces.lock().unwrap() = vec![interface(iface, rx_bytes, tx_bytes)];
    }
}

pub fn interface(name: &str, rx_bytes: u64, tx_bytes: u64) -> InterfaceCounters {
    InterfaceCounters {
        iface: name.into(),
        operstate: "up".into(),
        rx_bytes,
        tx_bytes,
        rx_packets: 0,
        tx_packets: 0,
        rx_errors: 0,
        tx_errors: 0,
    }
}

pub fn volume(fs: &str, mount: &str, size: u64, used: u64) -> FsVolume {
    FsVolume {
        fs: fs.into(),
        type_: "ext4".into(),
        mount: mount.into(),
        size,
        used,
        available: size - used,
        use_percent: if size > 0 {
            used as f64 / size as f64 * 100.0
        } else {
            0.0
        },
    }
}

pub fn current_load() -> CurrentLoad {
    CurrentLoad {
        avg_load: 0.75,
        current_load: 12.345,
        current_load_idle: 87.655,
        cpus: vec![
            CoreLoad { load: 10.0 },
            CoreLoad { load: 20.0 },
            CoreLoad { load: 5.0 },
            CoreLoad { load: 14.38 },
        ],
    }
}

pub fn cpu_info() -> CpuInfo {
    CpuInfo {
        manufacturer: "Intel".into(),
        brand: "Core i7-8700".into(),
        vendor: "GenuineIntel".into(),
        cores: 4,
        physical_cores: 2,
        speed_mhz: 3200,
    }
}

pub fn mem_stats() -> MemStats {
    MemStats {
        total: 16 * GIB,
        free: 4 * GIB,
        used: 12 * GIB,
        active: 8 * GIB,
        available: 8 * GIB,
        swap_total: 2 * GIB,
        swap_used: 0,
        swap_free: 2 * GIB,
    }
}

#[async_trait]
impl MetricsProvider for ScriptedProvider {
    async fn current_load(&self) -> anyhow::Result<CurrentLoad> {
        if self.fail_current_load.load(Ordering::SeqCst) {
            anyhow::bail!("simulated current_load failure");
        }
        Ok(current_load())
    }

    async fn cpu(&self) -> anyhow::Result<CpuInfo> {
        Ok(cpu_info())
    }

    async fn mem(&self) -> anyhow::Result<MemStats> {
        Ok(mem_stats())
    }

    async fn network_stats(&self) -> anyhow::Result<Vec<InterfaceCounters>> {
        Ok(self.interfaces.lock().unwrap().clone())
    }

    async fn fs_size(&self) -> anyhow::Result<Vec<FsVolume>> {
        let delay = *self.fs_delay.lock().unwrap();
        if let Some(d) = delay {
            tokio::time::sleep(d).await;
        }
        Ok(self.volumes.lock().unwrap().clone())
    }
}
