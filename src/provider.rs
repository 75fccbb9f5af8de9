// Source of raw host metrics. Production uses SysinfoRepo; tests plug in scripted providers.

use async_trait::async_trait;
use std::sync::Arc;

use crate::models::{CpuInfo, CurrentLoad, FsVolume, InterfaceCounters, MemStats};

/// Every call may fail independently; callers treat any failure as a failed collection.
#[async_trait]
pub trait MetricsProvider: Send + Sync {
    /// Current total and per-core CPU load.
    async fn current_load(&self) -> anyhow::Result<CurrentLoad>;

    /// Static CPU identity.
    async fn cpu(&self) -> anyhow::Result<CpuInfo>;

    async fn mem(&self) -> anyhow::Result<MemStats>;

    /// Cumulative interface counters. The primary (default route) interface comes first.
    async fn network_stats(&self) -> anyhow::Result<Vec<InterfaceCounters>>;

    /// One entry per mounted filesystem.
    async fn fs_size(&self) -> anyhow::Result<Vec<FsVolume>>;
}

pub type SharedProvider = Arc<dyn MetricsProvider>;
