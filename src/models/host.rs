// Host identity models (OS + host info), as reported by the backend

use serde::{Deserialize, Serialize};

/// Basic OS information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OsInfo {
    /// OS type (one of linux, macos, unix, windows).
    #[serde(rename = "type")]
    pub type_: String,
    /// OS family (e.g. redhat, debian, freebsd, windows).
    pub family: String,
    /// OS platform (e.g. centos, ubuntu, windows).
    pub platform: String,
    pub name: String,
    pub version: String,
    pub major: i64,
    pub minor: i64,
    pub patch: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codename: Option<String>,
}

/// Basic host information. Owned by the state that contains it.
///
/// Serializes with the dashboard's camelCase names; also accepts the backend's
/// snake_case names (`native_architecture`, `name`, `ip`, `mac`, `id`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostInfo {
    pub architecture: String,
    #[serde(alias = "native_architecture")]
    pub native_architecture: String,
    /// Host boot time, RFC 3339.
    #[serde(alias = "boot_time")]
    pub boot_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub containerized: Option<bool>,
    #[serde(alias = "name")]
    pub hostname: String,
    #[serde(alias = "ip", skip_serializing_if = "Option::is_none")]
    pub ips: Option<Vec<String>>,
    #[serde(alias = "kernel_version")]
    pub kernel_version: String,
    #[serde(alias = "mac", skip_serializing_if = "Option::is_none")]
    pub macs: Option<Vec<String>>,
    pub os: OsInfo,
    pub timezone: String,
    /// Seconds east of UTC.
    #[serde(alias = "timezone_offset_sec")]
    pub timezone_offset_sec: i64,
    #[serde(rename = "uniqueID", alias = "id", skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
}

impl HostInfo {
    /// Boot time as a Unix timestamp; `None` when unset or not RFC 3339.
    pub fn boot_timestamp(&self) -> Option<i64> {
        chrono::DateTime::parse_from_rfc3339(&self.boot_time)
            .ok()
            .map(|t| t.timestamp())
    }
}

/// Simplified companion to `DashboardState` used by views that only need the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalData {
    pub host: HostInfo,
}
