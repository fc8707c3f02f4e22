// Host telemetry via sysinfo: identity, cpu, load, memory, cores, service units

mod linux;
mod units;

use crate::models::*;
use linux::parse_version;
use std::sync::Arc;
use std::time::Instant;
use sysinfo::{Networks, System};
use tracing::instrument;

/// Core counts as reported by the OS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoreCounts {
    pub cpu_count: u32,
    pub physical_cores: u32,
    pub logical_cores: u32,
}

pub struct SysinfoRepo {
    sys: Arc<std::sync::Mutex<System>>,
    networks: Arc<std::sync::Mutex<Networks>>,
    last_cpu_refresh: Arc<std::sync::Mutex<Option<(Instant, f64)>>>,
}

impl Default for SysinfoRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoRepo {
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        let networks = Networks::new_with_refreshed_list();
        Self {
            sys: Arc::new(std::sync::Mutex::new(sys)),
            networks: Arc::new(std::sync::Mutex::new(networks)),
            last_cpu_refresh: Arc::new(std::sync::Mutex::new(None)),
        }
    }

    /// Static host identity; fetched once at startup.
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "get_host_info"))]
    pub async fn get_host_info(&self) -> anyhow::Result<HostInfo> {
        let networks = self.networks.clone();
        tokio::task::spawn_blocking(move || {
            let mut networks_guard = networks
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo networks lock poisoned: {}", e))?;
            networks_guard.refresh(true);

            let mut ips = Vec::new();
            let mut macs = Vec::new();
            for (_, data) in networks_guard.list() {
                ips.extend(data.ip_networks().iter().map(|n| n.addr.to_string()));
                let mac = data.mac_address().to_string();
                if mac != "00:00:00:00:00:00" {
                    macs.push(mac);
                }
            }

            let mut os = linux::read_os_info_linux().unwrap_or_else(|| {
                let version = System::os_version().unwrap_or_default();
                let (major, minor, patch) = parse_version(&version);
                OsInfo {
                    platform: System::distribution_id(),
                    name: System::name().unwrap_or_default(),
                    version,
                    major,
                    minor,
                    patch,
                    ..OsInfo::default()
                }
            });
            os.type_ = std::env::consts::OS.to_string();

            let boot_time = chrono::DateTime::from_timestamp(System::boot_time() as i64, 0)
                .map(|t| t.to_rfc3339())
                .unwrap_or_default();
            let now = chrono::Local::now();
            let timezone = linux::read_timezone_linux()
                .unwrap_or_else(|| now.format("%Z").to_string());

            Ok(HostInfo {
                architecture: std::env::consts::ARCH.to_string(),
                native_architecture: linux::read_native_arch_linux()
                    .unwrap_or_else(|| std::env::consts::ARCH.to_string()),
                boot_time,
                containerized: Some(is_containerized()),
                hostname: System::host_name().unwrap_or_default(),
                ips: Some(ips),
                kernel_version: System::kernel_version().unwrap_or_default(),
                macs: Some(macs),
                os,
                timezone,
                timezone_offset_sec: i64::from(now.offset().local_minus_utc()),
                unique_id: linux::read_machine_id_linux(),
            })
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }

    /// Global CPU utilization in whole percent (truncated, 0..=100).
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "get_cpu_usage"))]
    pub async fn get_cpu_usage(&self) -> anyhow::Result<f64> {
        let sys = self.sys.clone();
        let last_cpu_refresh = self.last_cpu_refresh.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = sys
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo lock poisoned: {}", e))?;

            let now = Instant::now();
            let mut guard = last_cpu_refresh
                .lock()
                .map_err(|e| anyhow::anyhow!("cpu refresh lock poisoned: {}", e))?;
            let previous = *guard;
            let usage = match previous {
                Some((prev_ts, prev_usage))
                    if now.duration_since(prev_ts) < sysinfo::MINIMUM_CPU_UPDATE_INTERVAL =>
                {
                    // Too soon for a meaningful delta; reuse the last reading
                    prev_usage
                }
                Some(_) => {
                    sys.refresh_cpu_usage();
                    let usage = f64::from(sys.global_cpu_usage());
                    *guard = Some((now, usage));
                    usage
                }
                None => {
                    // First call only establishes the baseline
                    sys.refresh_cpu_usage();
                    *guard = Some((now, 0.0));
                    0.0
                }
            };
            Ok(usage.clamp(0.0, 100.0).trunc())
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }

    pub fn get_load(&self) -> Load {
        let avg = System::load_average();
        Load {
            load1: avg.one,
            load5: avg.five,
            load15: avg.fifteen,
        }
    }

    /// Memory totals in bytes; used = total - free. Raw counters pass through
    /// from /proc/meminfo when available.
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "get_memory_info"))]
    pub async fn get_memory_info(&self) -> anyhow::Result<MemoryInfo> {
        let sys = self.sys.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = sys
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo lock poisoned: {}", e))?;
            sys.refresh_memory();

            let total = sys.total_memory();
            let free = sys.free_memory();
            let swap_total = sys.total_swap();
            let swap_free = sys.free_swap();

            Ok(MemoryInfo {
                total_bytes: total,
                used_bytes: total.saturating_sub(free),
                available_bytes: sys.available_memory(),
                free_bytes: free,
                virtual_total_bytes: swap_total,
                virtual_used_bytes: swap_total.saturating_sub(swap_free),
                virtual_free_bytes: swap_free,
                raw: linux::read_meminfo_linux().unwrap_or_else(RawMemory::empty),
            })
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }

    pub fn get_core_counts(&self) -> anyhow::Result<CoreCounts> {
        let sys = self
            .sys
            .lock()
            .map_err(|e| anyhow::anyhow!("sysinfo lock poisoned: {}", e))?;
        let logical = sys.cpus().len() as u32;
        Ok(CoreCounts {
            cpu_count: logical,
            physical_cores: System::physical_core_count().unwrap_or(0) as u32,
            logical_cores: logical,
        })
    }

    pub fn get_fqdn(&self, hostname: &str) -> String {
        linux::read_fqdn_linux(hostname).unwrap_or_else(|| hostname.to_string())
    }

    /// Failed/active service units; zero counts when systemd is unreachable.
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "unit_overview"))]
    pub async fn unit_overview(&self) -> UnitStatus {
        match units::list_units().await {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!(error = %e, operation = "unit_overview", "failed to list units");
                UnitStatus::default()
            }
        }
    }

    /// Complete dashboard snapshot from a fresh read of every source.
    pub async fn get_dashboard_state(&self) -> anyhow::Result<DashboardState> {
        let host_info = self.get_host_info().await?;
        let cpu = self.get_cpu_usage().await?;
        let memory_info = self.get_memory_info().await?;
        let cores = self.get_core_counts()?;
        let unit_status = self.unit_overview().await;
        Ok(DashboardState {
            hostname: host_info.hostname.clone(),
            fqdn: self.get_fqdn(&host_info.hostname),
            load: Some(self.get_load()),
            cpu,
            cpu_count: cores.cpu_count,
            physical_cores: cores.physical_cores,
            logical_cores: cores.logical_cores,
            unit_status,
            host_info,
            memory_info,
        })
    }
}

fn is_containerized() -> bool {
    std::path::Path::new("/.dockerenv").exists()
        || std::path::Path::new("/run/.containerenv").exists()
        || std::env::var("CONTAINER").as_deref() == Ok("1")
}
