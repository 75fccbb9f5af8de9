// Network interface models

use serde::{Deserialize, Serialize};

/// Cumulative counters for one interface, as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceCounters {
    pub iface: String,
    pub operstate: String,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
    pub rx_packets: u64,
    pub tx_packets: u64,
    pub rx_errors: u64,
    pub tx_errors: u64,
}

/// The part of an interface's counters the rate tracker keeps between requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSample {
    pub interface_name: String,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
}

impl From<&InterfaceCounters> for NetworkSample {
    fn from(c: &InterfaceCounters) -> Self {
        Self {
            interface_name: c.iface.clone(),
            rx_bytes: c.rx_bytes,
            tx_bytes: c.tx_bytes,
        }
    }
}
