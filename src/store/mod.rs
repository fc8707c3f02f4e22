// Telemetry state store: process-wide observable slots written by collectors, read by views

mod slot;

pub use slot::{Slot, WriteOutcome};

use crate::models::{DashboardState, DockerInfo, GlobalData, HostInfo};

/// The three slots the dashboard observes, each starting at its zero value.
///
/// Shared as `Arc<TelemetryStore>`; lives for the whole process.
#[derive(Default)]
pub struct TelemetryStore {
    pub global: Slot<GlobalData>,
    pub dashboard: Slot<DashboardState>,
    pub docker: Slot<DockerInfo>,
}

/// Counters for periodic logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub subscribers: usize,
    pub global_writes: u64,
    pub dashboard_writes: u64,
    pub docker_writes: u64,
}

impl TelemetryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes one host into both `global.host` and `dashboard.host_info`.
    pub fn set_host_info(&self, host: HostInfo) {
        self.global.assign(|g| &mut g.host, host.clone());
        self.dashboard.assign(|d| &mut d.host_info, host);
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            subscribers: self.global.subscriber_count()
                + self.dashboard.subscriber_count()
                + self.docker.subscriber_count(),
            global_writes: self.global.write_count(),
            dashboard_writes: self.dashboard.write_count(),
            docker_writes: self.docker.write_count(),
        }
    }
}
