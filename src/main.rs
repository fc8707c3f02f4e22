use anyhow::Result;
use cayman::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

async fn connect_docker(enabled: bool) -> Option<Arc<docker_repo::DockerRepo>> {
    if !enabled {
        tracing::info!("Docker inventory disabled");
        return None;
    }
    let repo = match docker_repo::DockerRepo::connect() {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "Docker unavailable; container inventory stays empty");
            return None;
        }
    };
    if let Err(e) = repo.ping().await {
        tracing::warn!(error = %e, "Docker daemon not responding; container inventory stays empty");
        return None;
    }
    Some(Arc::new(repo))
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let app_config = config::AppConfig::load()?;
    tracing::info!(name = NAME, version = VERSION, "starting");

    let store = Arc::new(store::TelemetryStore::new());
    let sysinfo_repo = Arc::new(sysinfo_repo::SysinfoRepo::new());
    worker::prime(&sysinfo_repo, &store)
        .await
        .map_err(|e| anyhow::anyhow!("initial host state: {}", e))?;
    let docker_repo = connect_docker(app_config.docker.enabled).await;

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let worker_handle = worker::spawn(
        worker::WorkerDeps {
            sysinfo_repo,
            docker_repo,
            store: store.clone(),
            shutdown_rx,
        },
        worker::WorkerConfig {
            sample_interval_ms: app_config.monitoring.sample_interval_ms,
            inventory_interval_ms: app_config.monitoring.inventory_interval_ms,
            stats_log_interval_secs: app_config.monitoring.stats_log_interval_secs,
        },
    );

    let app = routes::app(store);
    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = shutdown_signal() => {
            tracing::info!("Received shutdown signal");
            let _ = shutdown_tx.send(());
            let _ = worker_handle.await;
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(s) => s,
                Err(_) => {
                    let _ = tokio::signal::ctrl_c().await;
                    return;
                }
            };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
