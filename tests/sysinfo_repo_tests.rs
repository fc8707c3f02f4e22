// SysinfoRepo against the local host

use cayman::sysinfo_repo::SysinfoRepo;

#[tokio::test]
async fn host_info_has_identity() {
    let repo = SysinfoRepo::new();
    let host = repo.get_host_info().await.expect("host info");
    assert_eq!(host.architecture, std::env::consts::ARCH);
    assert_eq!(host.os.type_, std::env::consts::OS);
    assert!(host.containerized.is_some());
    assert!(host.boot_timestamp().is_some());
}

#[tokio::test]
async fn memory_info_is_consistent() {
    let repo = SysinfoRepo::new();
    let mem = repo.get_memory_info().await.expect("memory");
    assert!(mem.total_bytes > 0);
    assert!(mem.used_bytes <= mem.total_bytes);
    assert_eq!(mem.used_bytes + mem.free_bytes, mem.total_bytes);
    assert_eq!(
        mem.virtual_used_bytes + mem.virtual_free_bytes,
        mem.virtual_total_bytes
    );
    #[cfg(target_os = "linux")]
    assert!(mem.raw.contains("MemTotal"));
}

#[tokio::test]
async fn cpu_usage_is_whole_percent() {
    let repo = SysinfoRepo::new();
    let first = repo.get_cpu_usage().await.expect("cpu");
    assert_eq!(first, 0.0);
    tokio::time::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL).await;
    let second = repo.get_cpu_usage().await.expect("cpu");
    assert!((0.0..=100.0).contains(&second));
    assert_eq!(second, second.trunc());
}

#[test]
fn core_counts_are_positive() {
    let counts = SysinfoRepo::new().get_core_counts().expect("cores");
    assert!(counts.logical_cores > 0);
    assert_eq!(counts.cpu_count, counts.logical_cores);
}
