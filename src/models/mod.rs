// Telemetry data model mirrored from the backend

mod dashboard;
mod docker;
mod host;
mod memory;

pub use bollard::models::{ContainerSummary, ImageSummary};
pub use dashboard::{DashboardState, Load, UnitStatus};
pub use docker::DockerInfo;
pub use host::{GlobalData, HostInfo, OsInfo};
pub use memory::{MemoryInfo, RAW_MEMORY_KEYS, RawMemory};
