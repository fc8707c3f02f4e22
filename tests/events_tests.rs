// Backend event decoding and application onto the store

mod common;

use cayman::events::{EventError, HostEvent};
use cayman::models::Load;
use cayman::store::{TelemetryStore, WriteOutcome};
use common::*;

#[test]
fn test_decode_named_events() {
    assert_eq!(HostEvent::decode("cpu", "37").unwrap(), HostEvent::Cpu(37.0));
    assert_eq!(
        HostEvent::decode("load", r#"{"load1":1.5,"load5":1.0,"load15":0.5}"#).unwrap(),
        HostEvent::Load(Load {
            load1: 1.5,
            load5: 1.0,
            load15: 0.5
        })
    );
    let mem = serde_json::to_string(&sample_memory_info()).unwrap();
    assert_eq!(
        HostEvent::decode("mem", &mem).unwrap(),
        HostEvent::Memory(sample_memory_info())
    );
}

#[test]
fn test_decode_rejects_unknown_kind() {
    let err = HostEvent::decode("disk", "{}").unwrap_err();
    assert!(matches!(err, EventError::UnknownKind(ref k) if k == "disk"));
    assert!(err.to_string().contains("disk"));
}

#[test]
fn test_decode_rejects_malformed_payload() {
    let err = HostEvent::decode("load", "{not json").unwrap_err();
    assert!(matches!(err, EventError::Payload { kind: "load", .. }));
    let err = HostEvent::decode("cpu", "\"high\"").unwrap_err();
    assert!(err.to_string().starts_with("malformed cpu event payload"));
}

#[test]
fn test_apply_writes_only_the_targeted_field() {
    let store = TelemetryStore::new();
    store.dashboard.replace(sample_dashboard_state());

    let outcome = HostEvent::Cpu(88.0).apply(&store);
    assert_eq!(outcome, WriteOutcome::Changed);

    let state = store.dashboard.get();
    assert_eq!(state.cpu, 88.0);
    assert_eq!(state.load, sample_dashboard_state().load);
    assert_eq!(state.host_info, sample_host_info());
}

#[test]
fn test_apply_memory_replaces_whole_sub_object() {
    let store = TelemetryStore::new();
    store.dashboard.replace(sample_dashboard_state());
    let fresh = cayman::models::MemoryInfo {
        total_bytes: 1024,
        ..Default::default()
    };
    HostEvent::Memory(fresh.clone()).apply(&store);
    let mem = store.dashboard.get().memory_info;
    assert_eq!(mem, fresh);
    assert_eq!(mem.raw.get("Cached"), 0);
}

#[test]
fn test_apply_current_replaces_dashboard_and_host() {
    let store = TelemetryStore::new();
    store.dashboard.assign(|d| &mut d.cpu, 99.0);
    let data = serde_json::to_string(&sample_dashboard_state()).unwrap();
    let event = HostEvent::decode("current", &data).unwrap();
    assert_eq!(event.kind(), "current");
    event.apply(&store);
    assert_eq!(store.dashboard.get(), sample_dashboard_state());
    assert_eq!(store.global.get().host, sample_host_info());
}

#[test]
fn test_applying_same_event_twice_is_unchanged() {
    let store = TelemetryStore::new();
    let load = Load {
        load1: 0.1,
        load5: 0.2,
        load15: 0.3,
    };
    assert!(HostEvent::Load(load).apply(&store).is_changed());
    assert_eq!(HostEvent::Load(load).apply(&store), WriteOutcome::Unchanged);
}

#[test]
fn test_event_json_is_tagged() {
    let json = serde_json::to_value(HostEvent::Cpu(5.0)).unwrap();
    assert_eq!(json["type"], "cpu");
    assert_eq!(json["data"], 5.0);
    let json = serde_json::to_value(HostEvent::Memory(Default::default())).unwrap();
    assert_eq!(json["type"], "mem");
}
