// Background poll loop: reads host and Docker telemetry and writes it into the store.
// Host metrics are sampled inline; inventory fetches run on their own tasks and
// are sequence-stamped so a slow fetch cannot overwrite a newer one.

use crate::docker_repo::DockerRepo;
use crate::events::HostEvent;
use crate::store::{TelemetryStore, WriteOutcome};
use crate::sysinfo_repo::SysinfoRepo;
use crate::view::DashboardSummary;
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio::time::{Duration, interval};
use tracing::Instrument;

/// Repos, store and shutdown for the worker.
pub struct WorkerDeps {
    pub sysinfo_repo: Arc<SysinfoRepo>,
    /// `None` when Docker is disabled or unreachable.
    pub docker_repo: Option<Arc<DockerRepo>>,
    pub store: Arc<TelemetryStore>,
    pub shutdown_rx: tokio::sync::oneshot::Receiver<()>,
}

/// Worker timing config.
pub struct WorkerConfig {
    pub sample_interval_ms: u64,
    pub inventory_interval_ms: u64,
    /// How often to log store stats (real seconds).
    pub stats_log_interval_secs: u64,
}

/// Initial population: host identity once, then a complete dashboard snapshot.
pub async fn prime(sysinfo_repo: &SysinfoRepo, store: &TelemetryStore) -> anyhow::Result<()> {
    let state = sysinfo_repo.get_dashboard_state().await?;
    store.set_host_info(state.host_info.clone());
    store.dashboard.replace(state);
    tracing::info!(operation = "prime", "initial dashboard state loaded");
    Ok(())
}

/// One host sample: cpu, load and memory, each written as its own field.
pub async fn sample_host(sysinfo_repo: &SysinfoRepo, store: &TelemetryStore) -> anyhow::Result<()> {
    let cpu = sysinfo_repo.get_cpu_usage().await?;
    let memory = sysinfo_repo.get_memory_info().await?;
    let events = [
        HostEvent::Cpu(cpu),
        HostEvent::Load(sysinfo_repo.get_load()),
        HostEvent::Memory(memory),
    ];
    for event in events {
        let kind = event.kind();
        if event.apply(store).is_changed() {
            tracing::trace!(event = kind, "dashboard field updated");
        }
    }
    Ok(())
}

/// Fetch unit counts and Docker inventory, writing only if no newer fetch landed first.
pub async fn refresh_inventory(
    sysinfo_repo: &SysinfoRepo,
    docker_repo: Option<&DockerRepo>,
    store: &TelemetryStore,
) {
    let units_seq = store.dashboard.next_sequence();
    let docker_seq = store.docker.next_sequence();

    let units = sysinfo_repo.unit_overview().await;
    if store
        .dashboard
        .assign_if_newer(units_seq, |d| &mut d.unit_status, units)
        == WriteOutcome::Stale
    {
        tracing::debug!(operation = "unit_overview", seq = units_seq, "stale unit counts dropped");
    }

    let Some(docker_repo) = docker_repo else {
        return;
    };
    match docker_repo.get_docker_info().await {
        Ok(info) => {
            if store.docker.replace_if_newer(docker_seq, info) == WriteOutcome::Stale {
                tracing::debug!(
                    operation = "get_docker_info",
                    seq = docker_seq,
                    "stale docker inventory dropped"
                );
            }
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                operation = "get_docker_info",
                "docker inventory failed"
            );
        }
    }
}

pub fn spawn(deps: WorkerDeps, config: WorkerConfig) -> tokio::task::JoinHandle<()> {
    let WorkerDeps {
        sysinfo_repo,
        docker_repo,
        store,
        mut shutdown_rx,
    } = deps;
    let WorkerConfig {
        sample_interval_ms,
        inventory_interval_ms,
        stats_log_interval_secs,
    } = config;

    let worker_span = tracing::span!(tracing::Level::DEBUG, "worker", sample_interval_ms);
    tokio::spawn(async move {
        let mut sample_tick = interval(Duration::from_millis(sample_interval_ms));
        sample_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut inventory_tick = interval(Duration::from_millis(inventory_interval_ms));
        inventory_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut stats_log_tick = interval(Duration::from_secs(stats_log_interval_secs));
        stats_log_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        let mut inflight: JoinSet<()> = JoinSet::new();

        loop {
            tokio::select! {
                _ = sample_tick.tick() => {
                    if let Err(e) = sample_host(&sysinfo_repo, &store).await {
                        tracing::warn!(
                            error = %e,
                            operation = "sample_host",
                            "host sample failed"
                        );
                        continue;
                    }
                    if tracing::enabled!(tracing::Level::DEBUG) {
                        let now = chrono::Utc::now().timestamp();
                        let summary = store.dashboard.read(|d| {
                            store.docker.read(|docker| DashboardSummary::from_state(d, docker, now))
                        });
                        tracing::debug!(
                            cpu = %summary.cpu,
                            load = %summary.load,
                            memory = %summary.memory,
                            "dashboard sample"
                        );
                    }
                }
                _ = inventory_tick.tick() => {
                    while inflight.try_join_next().is_some() {}
                    let sysinfo_repo = sysinfo_repo.clone();
                    let docker_repo = docker_repo.clone();
                    let store = store.clone();
                    inflight.spawn(async move {
                        refresh_inventory(&sysinfo_repo, docker_repo.as_deref(), &store).await;
                    });
                }
                _ = stats_log_tick.tick() => {
                    let stats = store.stats();
                    tracing::info!(
                        subscribers = stats.subscribers,
                        dashboard_writes = stats.dashboard_writes,
                        docker_writes = stats.docker_writes,
                        inventory_inflight = inflight.len(),
                        "store stats"
                    );
                }
                _ = &mut shutdown_rx => {
                    tracing::debug!("Worker shutting down");
                    break;
                }
            }
        }
        inflight.abort_all();
        while inflight.join_next().await.is_some() {}
    }
    .instrument(worker_span))
}
