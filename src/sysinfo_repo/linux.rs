// Linux-specific helpers: /proc, /etc/os-release, machine id, timezone.

use crate::models::{OsInfo, RawMemory};

/// Parse `/etc/os-release` content into OS info (type is filled by the caller).
pub(crate) fn parse_os_release(content: &str) -> OsInfo {
    let mut info = OsInfo::default();
    let mut pretty_name = None;
    for line in content.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().trim_matches('"').trim_matches('\'');
        if value.is_empty() {
            continue;
        }
        match key.trim() {
            "ID" => info.platform = value.to_string(),
            "ID_LIKE" => {
                info.family = value.split_whitespace().next().unwrap_or(value).to_string()
            }
            "NAME" => info.name = value.to_string(),
            "PRETTY_NAME" => pretty_name = Some(value.to_string()),
            "VERSION_ID" => info.version = value.to_string(),
            "VERSION_CODENAME" => info.codename = Some(value.to_string()),
            _ => {}
        }
    }
    if info.name.is_empty()
        && let Some(p) = pretty_name
    {
        info.name = p;
    }
    // A distro without ID_LIKE is its own family (debian, fedora, arch).
    if info.family.is_empty() {
        info.family = info.platform.clone();
    }
    let (major, minor, patch) = parse_version(&info.version);
    info.major = major;
    info.minor = minor;
    info.patch = patch;
    info
}

/// Leading numeric components of a dotted version; missing parts are 0.
pub(crate) fn parse_version(version: &str) -> (i64, i64, i64) {
    let mut parts = version.split('.').map(|p| {
        p.chars()
            .take_while(|c| c.is_ascii_digit())
            .collect::<String>()
            .parse::<i64>()
            .unwrap_or(0)
    });
    (
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
    )
}

/// Parse `/proc/meminfo` into the raw counter map. Values are kept as the
/// kernel reports them (kB for sized counters, plain counts for HugePages_*).
pub(crate) fn parse_meminfo(content: &str) -> RawMemory {
    content
        .lines()
        .filter_map(|line| {
            let (key, rest) = line.split_once(':')?;
            let value = rest.split_whitespace().next()?.parse::<u64>().ok()?;
            Some((key.trim().to_string(), value))
        })
        .collect()
}

pub(super) fn read_os_info_linux() -> Option<OsInfo> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/etc/os-release")
            .or_else(|_| std::fs::read_to_string("/usr/lib/os-release"))
            .ok()?;
        return Some(parse_os_release(&content));
    }
    #[cfg(not(target_os = "linux"))]
    None
}

pub(super) fn read_meminfo_linux() -> Option<RawMemory> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/proc/meminfo").ok()?;
        return Some(parse_meminfo(&content));
    }
    #[cfg(not(target_os = "linux"))]
    None
}

pub(super) fn read_machine_id_linux() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        let id = std::fs::read_to_string("/etc/machine-id")
            .or_else(|_| std::fs::read_to_string("/var/lib/dbus/machine-id"))
            .ok()?;
        let id = id.trim();
        if !id.is_empty() {
            return Some(id.to_string());
        }
    }
    None
}

/// IANA zone name from /etc/timezone or the /etc/localtime symlink target.
pub(super) fn read_timezone_linux() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        if let Ok(tz) = std::fs::read_to_string("/etc/timezone") {
            let tz = tz.trim();
            if !tz.is_empty() {
                return Some(tz.to_string());
            }
        }
        let target = std::fs::read_link("/etc/localtime").ok()?;
        let target = target.to_string_lossy();
        let (_, zone) = target.split_once("zoneinfo/")?;
        return Some(zone.to_string());
    }
    #[cfg(not(target_os = "linux"))]
    None
}

/// Machine hardware name as the kernel reports it (uname -m).
pub(super) fn read_native_arch_linux() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        let arch = std::fs::read_to_string("/proc/sys/kernel/arch").ok()?;
        let arch = arch.trim();
        if !arch.is_empty() {
            return Some(arch.to_string());
        }
    }
    None
}

/// hostname + NIS domain when one is set.
pub(super) fn read_fqdn_linux(hostname: &str) -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        let domain = std::fs::read_to_string("/proc/sys/kernel/domainname").ok()?;
        let domain = domain.trim();
        if !domain.is_empty() && domain != "(none)" && !hostname.contains('.') {
            return Some(format!("{}.{}", hostname, domain));
        }
    }
    let _ = hostname;
    None
}
