// Live dashboard metrics: load, cpu, unit counts, cores, memory, host

use serde::{Deserialize, Serialize};

use super::{HostInfo, MemoryInfo};

/// 1/5/15-minute load averages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Load {
    pub load1: f64,
    pub load5: f64,
    pub load15: f64,
}

/// Service unit counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitStatus {
    pub failed_count: u32,
    pub active_count: u32,
}

/// Aggregate root of the dashboard view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardState {
    pub hostname: String,
    pub fqdn: String,
    /// Absent until the first fetch lands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<Load>,
    /// Current utilization, percent.
    pub cpu: f64,
    pub cpu_count: u32,
    pub physical_cores: u32,
    pub logical_cores: u32,
    pub unit_status: UnitStatus,
    pub host_info: HostInfo,
    pub memory_info: MemoryInfo,
}
