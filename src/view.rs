// Dashboard presentation: raw store values passed through the formatters

use serde::Serialize;

use crate::format::{
    format_binary_bytes, format_container_name, format_decimal_bytes, format_load,
    format_percent, format_time_ago_at,
};
use crate::models::{ContainerSummary, DashboardState, DockerInfo};

/// One container row as displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerLine {
    pub name: String,
    pub image: String,
    pub state: String,
    pub status: String,
    pub created: String,
}

impl ContainerLine {
    pub fn from_summary(c: &ContainerSummary, now: i64) -> Self {
        let name = c
            .names
            .as_ref()
            .and_then(|n| n.first())
            .map(|n| format_container_name(n).to_string())
            .or_else(|| c.id.as_ref().map(|id| id.chars().take(12).collect()))
            .unwrap_or_default();
        Self {
            name,
            image: c.image.clone().unwrap_or_default(),
            state: c.state.as_ref().map(|s| s.to_string()).unwrap_or_default(),
            status: c.status.clone().unwrap_or_default(),
            created: format_time_ago_at(c.created.unwrap_or(0), now),
        }
    }
}

/// Everything the dashboard shows, already formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub host: String,
    pub os: String,
    pub kernel: String,
    pub booted: String,
    pub cpu: String,
    pub cores: String,
    pub load: String,
    pub memory: String,
    pub swap: String,
    pub units: String,
    pub containers: Vec<ContainerLine>,
    pub images: String,
}

impl DashboardSummary {
    /// Build from the current store values as seen at `now` (Unix seconds).
    pub fn from_state(state: &DashboardState, docker: &DockerInfo, now: i64) -> Self {
        let host_info = &state.host_info;
        let host = if state.fqdn.is_empty() || state.fqdn == state.hostname {
            state.hostname.clone()
        } else {
            format!("{} ({})", state.hostname, state.fqdn)
        };
        let os = &host_info.os;
        let os = if os.name.is_empty() {
            String::new()
        } else {
            match &os.codename {
                Some(codename) => format!("{} {} ({})", os.name, os.version, codename),
                None => format!("{} {}", os.name, os.version),
            }
        };
        let booted = match host_info.boot_timestamp() {
            Some(ts) => format_time_ago_at(ts, now),
            None => format_time_ago_at(0, now),
        };
        let load = state
            .load
            .as_ref()
            .map(format_load)
            .unwrap_or_else(|| "-".to_string());
        let mem = &state.memory_info;
        let image_bytes: i64 = docker.images.iter().map(|i| i.size.max(0)).sum();

        Self {
            host: host.trim().to_string(),
            os: os.trim().to_string(),
            kernel: host_info.kernel_version.clone(),
            booted,
            cpu: format_percent(state.cpu),
            cores: format!(
                "{} physical / {} logical",
                state.physical_cores, state.logical_cores
            ),
            load,
            memory: format!(
                "{} / {} ({})",
                format_binary_bytes(mem.used_bytes as f64),
                format_binary_bytes(mem.total_bytes as f64),
                format_percent(mem.usage_percent())
            ),
            swap: format!(
                "{} / {}",
                format_binary_bytes(mem.virtual_used_bytes as f64),
                format_binary_bytes(mem.virtual_total_bytes as f64)
            ),
            units: format!(
                "{} active, {} failed",
                state.unit_status.active_count, state.unit_status.failed_count
            ),
            containers: docker
                .containers
                .iter()
                .map(|c| ContainerLine::from_summary(c, now))
                .collect(),
            images: format!(
                "{} images, {}",
                docker.images.len(),
                format_decimal_bytes(image_bytes as f64)
            ),
        }
    }
}
