// Presentation formatting for raw metrics: byte sizes, relative times, container names

use crate::models::Load;

/// Decimal places used by the byte formatters when none are given.
pub const DEFAULT_DECIMALS: i32 = 2;

/// Upper bound on requested decimals, as `Number.prototype.toFixed` allows.
const MAX_DECIMALS: i32 = 100;

const LEGACY_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];
const BINARY_UNITS: [&str; 6] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB"];
const DECIMAL_UNITS: [&str; 6] = ["B", "kB", "MB", "GB", "TB", "PB"];

/// Time buckets scanned largest first.
const INTERVALS: [(&str, i64); 7] = [
    ("year", 31_536_000),
    ("month", 2_592_000),
    ("week", 604_800),
    ("day", 86_400),
    ("hour", 3_600),
    ("minute", 60),
    ("second", 1),
];

/// Base-1024 magnitude with `KB`/`MB`/... labels, 2 decimals.
pub fn format_bytes(bytes: f64) -> String {
    format_bytes_with(bytes, DEFAULT_DECIMALS)
}

/// Base-1024 magnitude with `KB`/`MB`/... labels; `decimals` is clamped to 0..=100.
pub fn format_bytes_with(bytes: f64, decimals: i32) -> String {
    scale_bytes(bytes, decimals, 1024.0, &LEGACY_UNITS)
}

/// Base-1024 magnitude with `KiB`/`MiB`/... labels, 2 decimals.
pub fn format_binary_bytes(bytes: f64) -> String {
    format_binary_bytes_with(bytes, DEFAULT_DECIMALS)
}

/// Base-1024 magnitude with `KiB`/`MiB`/... labels; `decimals` is clamped to 0..=100.
pub fn format_binary_bytes_with(bytes: f64, decimals: i32) -> String {
    scale_bytes(bytes, decimals, 1024.0, &BINARY_UNITS)
}

/// Base-1000 magnitude with `kB`/`MB`/... labels, 2 decimals.
pub fn format_decimal_bytes(bytes: f64) -> String {
    format_decimal_bytes_with(bytes, DEFAULT_DECIMALS)
}

/// Base-1000 magnitude with `kB`/`MB`/... labels; `decimals` is clamped to 0..=100.
pub fn format_decimal_bytes_with(bytes: f64, decimals: i32) -> String {
    scale_bytes(bytes, decimals, 1000.0, &DECIMAL_UNITS)
}

/// Defined for non-negative finite input. Values past the last unit stay in
/// that unit and values below 1 stay in bytes.
fn scale_bytes(bytes: f64, decimals: i32, base: f64, units: &[&str; 6]) -> String {
    if bytes == 0.0 {
        return "0 B".to_string();
    }
    let digits = decimals.clamp(0, MAX_DECIMALS) as usize;
    // f64 -> usize saturates: negatives and NaN land on 0.
    let index = ((bytes.ln() / base.ln()).floor() as usize).min(units.len() - 1);
    let value = round_to(bytes / base.powi(index as i32), digits);
    format!("{} {}", value, units[index])
}

/// Round to `digits` fractional digits, exact ties away from zero.
///
/// Ties are decided on the exact binary value: `v * 10^d` ends in exactly
/// `.5` only when `v * 2^(d+1)` is an odd integer. Everything else goes
/// through the correctly rounded `{:.d}` formatter. The result prints in
/// shortest form through `Display` (`1.50` -> `1.5`).
fn round_to(value: f64, digits: usize) -> f64 {
    if is_exact_tie(value, digits) {
        let scaled = value * 10f64.powi(digits as i32);
        return (scaled.trunc() + scaled.signum()) / 10f64.powi(digits as i32);
    }
    format!("{value:.digits$}").parse().unwrap_or(value)
}

fn is_exact_tie(value: f64, digits: usize) -> bool {
    let doubled = value * 2f64.powi(digits as i32 + 1);
    doubled.is_finite() && doubled.fract() == 0.0 && doubled % 2.0 != 0.0
}

/// "3 days ago" style string for a Unix timestamp (seconds), against the wall clock.
pub fn format_time_ago(timestamp: i64) -> String {
    format_time_ago_at(timestamp, chrono::Utc::now().timestamp())
}

/// "3 days ago" style string for `timestamp` as seen at `now` (both Unix seconds).
///
/// `0` means unknown. Past buckets: year (365 days), month (30 days), week,
/// day, hour, minute, second.
pub fn format_time_ago_at(timestamp: i64, now: i64) -> String {
    if timestamp == 0 {
        return "Unknown".to_string();
    }
    let diff = now - timestamp;
    if diff < 0 {
        return "in the future".to_string();
    }
    for (label, seconds) in INTERVALS {
        let count = diff / seconds;
        if count >= 1 {
            let plural = if count != 1 { "s" } else { "" };
            return format!("{count} {label}{plural} ago");
        }
    }
    "just now".to_string()
}

/// Container name without the leading `/` some runtimes prepend.
pub fn format_container_name(name: &str) -> &str {
    name.strip_prefix('/').unwrap_or(name)
}

/// Percentage with one decimal, shortest form ("12.5%", "3%").
pub fn format_percent(value: f64) -> String {
    format!("{}%", round_to(value, 1))
}

/// Load averages as "1m 5m 15m", two decimals each.
pub fn format_load(load: &Load) -> String {
    format!("{:.2} {:.2} {:.2}", load.load1, load.load5, load.load15)
}
