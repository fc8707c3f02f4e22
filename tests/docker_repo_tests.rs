// Optional DockerRepo tests when Docker daemon is available

use cayman::docker_repo::DockerRepo;
use cayman::store::TelemetryStore;
use cayman::sysinfo_repo::SysinfoRepo;

async fn connect() -> Option<DockerRepo> {
    let repo = DockerRepo::connect().ok()?;
    repo.ping().await.ok()?;
    Some(repo)
}

#[tokio::test]
async fn docker_repo_lists_inventory() {
    let Some(repo) = connect().await else {
        return; // Skip when Docker is not available (e.g. CI without Docker)
    };
    let info = repo.get_docker_info().await.expect("inventory");
    assert!(info.running_count() <= info.containers.len());
}

#[tokio::test]
async fn refresh_inventory_writes_docker_slot() {
    let Some(repo) = connect().await else {
        return;
    };
    let store = TelemetryStore::new();
    cayman::worker::refresh_inventory(&SysinfoRepo::new(), Some(&repo), &store).await;
    let direct = repo.get_docker_info().await.expect("inventory");
    assert_eq!(store.docker.get().images.len(), direct.images.len());
}
