// Memory models: totals in bytes plus the raw kernel counters

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kernel memory counters the dashboard knows about (`/proc/meminfo` names).
pub const RAW_MEMORY_KEYS: [&str; 52] = [
    "Active",
    "Active(anon)",
    "Active(file)",
    "AnonHugePages",
    "AnonPages",
    "Bounce",
    "Buffers",
    "Cached",
    "CmaFree",
    "CmaTotal",
    "CommitLimit",
    "Committed_AS",
    "DirectMap1G",
    "DirectMap2M",
    "DirectMap4k",
    "Dirty",
    "FileHugePages",
    "FilePmdMapped",
    "HardwareCorrupted",
    "HugePages_Free",
    "HugePages_Rsvd",
    "HugePages_Surp",
    "HugePages_Total",
    "Hugepagesize",
    "Hugetlb",
    "Inactive",
    "Inactive(anon)",
    "Inactive(file)",
    "KReclaimable",
    "KernelStack",
    "Mapped",
    "Mlocked",
    "NFS_Unstable",
    "PageTables",
    "Percpu",
    "SReclaimable",
    "SUnreclaim",
    "SecPageTables",
    "Shmem",
    "ShmemHugePages",
    "ShmemPmdMapped",
    "Slab",
    "SwapCached",
    "Unaccepted",
    "Unevictable",
    "VmallocChunk",
    "VmallocTotal",
    "VmallocUsed",
    "Writeback",
    "WritebackTmp",
    "Zswap",
    "Zswapped",
];

/// Raw kernel counters keyed by counter name, passed through unmodified.
///
/// Keys such as `Active(anon)` are not valid identifiers, hence a map. The
/// default holds every key in [`RAW_MEMORY_KEYS`] at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawMemory(BTreeMap<String, u64>);

impl Default for RawMemory {
    fn default() -> Self {
        Self(
            RAW_MEMORY_KEYS
                .iter()
                .map(|k| ((*k).to_string(), 0))
                .collect(),
        )
    }
}

impl RawMemory {
    /// Empty map, without the zeroed known keys.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Counter value, 0 when the kernel did not report it.
    pub fn get(&self, key: &str) -> u64 {
        self.0.get(key).copied().unwrap_or(0)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: u64) {
        self.0.insert(key.into(), value);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, u64)> for RawMemory {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryInfo {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub available_bytes: u64,
    pub free_bytes: u64,
    pub virtual_total_bytes: u64,
    pub virtual_used_bytes: u64,
    pub virtual_free_bytes: u64,
    pub raw: RawMemory,
}

impl MemoryInfo {
    /// Used / total as a percentage, 0 when total is unknown.
    pub fn usage_percent(&self) -> f64 {
        if self.total_bytes > 0 {
            (self.used_bytes as f64 / self.total_bytes as f64) * 100.0
        } else {
            0.0
        }
    }
}
