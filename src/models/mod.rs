// Domain models: raw provider facts and the public performance snapshot

mod cpu;
mod memory;
mod network;
mod snapshot;
mod storage;

pub use cpu::{CoreLoad, CpuInfo, CurrentLoad};
pub use memory::MemStats;
pub use network::{InterfaceCounters, NetworkSample};
pub use snapshot::{
    CpuSection, MemorySection, NetworkSection, PerformanceSnapshot, RawCpu, RawNetwork,
    RawSection, RawSnapshot, RawStorage, ServerSection, StorageSection,
};
pub use storage::FsVolume;
