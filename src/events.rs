// Named host events from the backend, decoded and applied onto the store

use serde::{Deserialize, Serialize};

use crate::models::{DashboardState, Load, MemoryInfo};
use crate::store::{TelemetryStore, WriteOutcome};

/// One decoded backend event. Each targets a single field of `DashboardState`,
/// except `Current` which carries the full state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum HostEvent {
    /// Whole-percent CPU utilization.
    Cpu(f64),
    #[serde(rename = "mem")]
    Memory(MemoryInfo),
    Load(Load),
    Current(Box<DashboardState>),
}

#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("unknown host event kind: {0:?}")]
    UnknownKind(String),
    #[error("malformed {kind} event payload: {source}")]
    Payload {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl HostEvent {
    /// Decode an event from its name and JSON payload.
    ///
    /// Entry point for collaborators that fetch from a remote backend's event
    /// stream; the in-process worker builds events directly.
    pub fn decode(kind: &str, data: &str) -> Result<Self, EventError> {
        match kind {
            "cpu" => parse("cpu", data).map(HostEvent::Cpu),
            "mem" => parse("mem", data).map(HostEvent::Memory),
            "load" => parse("load", data).map(HostEvent::Load),
            "current" => parse("current", data).map(|s| HostEvent::Current(Box::new(s))),
            other => Err(EventError::UnknownKind(other.to_string())),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            HostEvent::Cpu(_) => "cpu",
            HostEvent::Memory(_) => "mem",
            HostEvent::Load(_) => "load",
            HostEvent::Current(_) => "current",
        }
    }

    /// Wholesale write of the targeted field (or the whole dashboard state).
    pub fn apply(self, store: &TelemetryStore) -> WriteOutcome {
        let dashboard = &store.dashboard;
        match self {
            HostEvent::Cpu(cpu) => dashboard.assign(|d| &mut d.cpu, cpu),
            HostEvent::Memory(mem) => dashboard.assign(|d| &mut d.memory_info, mem),
            HostEvent::Load(load) => dashboard.assign(|d| &mut d.load, Some(load)),
            HostEvent::Current(state) => {
                store
                    .global
                    .assign(|g| &mut g.host, state.host_info.clone());
                dashboard.replace(*state)
            }
        }
    }
}

fn parse<T: serde::de::DeserializeOwned>(
    kind: &'static str,
    data: &str,
) -> Result<T, EventError> {
    serde_json::from_str(data).map_err(|source| EventError::Payload { kind, source })
}
