// Worker tests against the local host: priming, sampling, spawn + shutdown

use cayman::store::TelemetryStore;
use cayman::sysinfo_repo::SysinfoRepo;
use cayman::worker::{WorkerConfig, WorkerDeps, prime, refresh_inventory, sample_host, spawn};
use std::sync::Arc;

#[tokio::test]
async fn prime_fills_host_and_dashboard() {
    let repo = SysinfoRepo::new();
    let store = TelemetryStore::new();
    prime(&repo, &store).await.expect("prime");

    let dashboard = store.dashboard.get();
    assert!(dashboard.logical_cores > 0);
    assert!(dashboard.memory_info.total_bytes > 0);
    assert!(dashboard.load.is_some());
    assert!(!dashboard.host_info.architecture.is_empty());
    assert_eq!(store.global.get().host, dashboard.host_info);
}

#[tokio::test]
async fn sample_host_keeps_identity_fields() {
    let repo = SysinfoRepo::new();
    let store = TelemetryStore::new();
    prime(&repo, &store).await.expect("prime");
    let before = store.dashboard.get();

    sample_host(&repo, &store).await.expect("sample");

    let after = store.dashboard.get();
    assert_eq!(after.host_info, before.host_info);
    assert_eq!(after.hostname, before.hostname);
    assert!((0.0..=100.0).contains(&after.cpu));
    assert_eq!(after.cpu, after.cpu.trunc());
}

#[tokio::test]
async fn refresh_inventory_without_docker_leaves_docker_empty() {
    let repo = SysinfoRepo::new();
    let store = TelemetryStore::new();
    refresh_inventory(&repo, None, &store).await;
    assert!(store.docker.get().containers.is_empty());
}

#[tokio::test]
async fn worker_spawn_samples_and_shuts_down() {
    let store = Arc::new(TelemetryStore::new());
    let mut rx = store.dashboard.subscribe();
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    let handle = spawn(
        WorkerDeps {
            sysinfo_repo: Arc::new(SysinfoRepo::new()),
            docker_repo: None,
            store: store.clone(),
            shutdown_rx,
        },
        WorkerConfig {
            sample_interval_ms: 25,
            inventory_interval_ms: 3_600_000,
            stats_log_interval_secs: 3600,
        },
    );

    tokio::time::timeout(tokio::time::Duration::from_secs(5), rx.changed())
        .await
        .expect("worker wrote within 5s")
        .expect("store alive");
    let _ = shutdown_tx.send(());
    handle.await.unwrap();

    assert!(store.dashboard.get().memory_info.total_bytes > 0);
    assert!(store.stats().dashboard_writes >= 1);
}
