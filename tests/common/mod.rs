// Shared test helpers

#![allow(dead_code)]

use cayman::models::*;

pub const NOW: i64 = 1_700_000_000;

pub fn sample_host_info() -> HostInfo {
    HostInfo {
        architecture: "x86_64".into(),
        native_architecture: "x86_64".into(),
        boot_time: "2023-11-11T22:13:20+00:00".into(),
        containerized: Some(false),
        hostname: "atlas".into(),
        ips: Some(vec!["192.168.1.10/24".into(), "fe80::1/64".into()]),
        kernel_version: "6.8.0-45-generic".into(),
        macs: Some(vec!["00:11:22:33:44:55".into()]),
        os: OsInfo {
            type_: "linux".into(),
            family: "debian".into(),
            platform: "ubuntu".into(),
            name: "Ubuntu".into(),
            version: "22.04".into(),
            major: 22,
            minor: 4,
            patch: 0,
            build: None,
            codename: Some("jammy".into()),
        },
        timezone: "Europe/Berlin".into(),
        timezone_offset_sec: 3600,
        unique_id: Some("0123456789abcdef".into()),
    }
}

pub fn sample_memory_info() -> MemoryInfo {
    let mut raw = RawMemory::default();
    raw.insert("Active(anon)", 123_456);
    raw.insert("Cached", 4_096_000);
    MemoryInfo {
        total_bytes: 16 * 1024 * 1024 * 1024,
        used_bytes: 4 * 1024 * 1024 * 1024,
        available_bytes: 12 * 1024 * 1024 * 1024,
        free_bytes: 12 * 1024 * 1024 * 1024,
        virtual_total_bytes: 2 * 1024 * 1024 * 1024,
        virtual_used_bytes: 512 * 1024 * 1024,
        virtual_free_bytes: 1536 * 1024 * 1024,
        raw,
    }
}

pub fn sample_dashboard_state() -> DashboardState {
    DashboardState {
        hostname: "atlas".into(),
        fqdn: "atlas.home.lan".into(),
        load: Some(Load {
            load1: 0.52,
            load5: 0.58,
            load15: 0.59,
        }),
        cpu: 12.0,
        cpu_count: 8,
        physical_cores: 4,
        logical_cores: 8,
        unit_status: UnitStatus {
            failed_count: 1,
            active_count: 214,
        },
        host_info: sample_host_info(),
        memory_info: sample_memory_info(),
    }
}

/// Built from Docker Engine JSON so the test does not depend on model internals.
pub fn sample_docker_info() -> DockerInfo {
    let container: ContainerSummary = serde_json::from_value(serde_json::json!({
        "Id": "4f66ad9a0b2e1c3d5e7f",
        "Names": ["/web"],
        "Image": "nginx:latest",
        "Created": NOW - 7200,
        "State": "running",
        "Status": "Up 2 hours"
    }))
    .expect("container summary json");
    let image: ImageSummary = serde_json::from_value(serde_json::json!({
        "Id": "sha256:1234",
        "ParentId": "",
        "RepoTags": ["nginx:latest"],
        "RepoDigests": [],
        "Created": NOW - 86_400,
        "Size": 187_000_000,
        "SharedSize": -1,
        "Labels": {},
        "Containers": 1
    }))
    .expect("image summary json");
    DockerInfo {
        containers: vec![container],
        images: vec![image],
    }
}
