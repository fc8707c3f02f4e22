// Config loading and validation tests

use cayman::config::AppConfig;

const VALID_CONFIG: &str = r#"
[server]
port = 8080
host = "0.0.0.0"

[monitoring]
sample_interval_ms = 3000
inventory_interval_ms = 15000
stats_log_interval_secs = 60

[docker]
enabled = false
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.monitoring.sample_interval_ms, 3000);
    assert_eq!(config.monitoring.inventory_interval_ms, 15000);
    assert_eq!(config.monitoring.stats_log_interval_secs, 60);
    assert!(!config.docker.enabled);
}

#[test]
fn test_config_defaults_when_omitted() {
    let minimal = r#"
[server]
port = 8080
host = "127.0.0.1"

[monitoring]
sample_interval_ms = 1000
stats_log_interval_secs = 60
"#;
    let config = AppConfig::load_from_str(minimal).expect("valid");
    assert!(config.docker.enabled);
    assert_eq!(config.monitoring.inventory_interval_ms, 15_000);
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 8080", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_empty_host() {
    let bad = VALID_CONFIG.replace("host = \"0.0.0.0\"", "host = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.host"));
}

#[test]
fn test_config_validation_rejects_sample_interval_zero() {
    let bad = VALID_CONFIG.replace("sample_interval_ms = 3000", "sample_interval_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("sample_interval_ms"));
}

#[test]
fn test_config_validation_rejects_inventory_interval_zero() {
    let bad = VALID_CONFIG.replace("inventory_interval_ms = 15000", "inventory_interval_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("inventory_interval_ms"));
}

#[test]
fn test_config_validation_rejects_stats_log_interval_zero() {
    let bad = VALID_CONFIG.replace(
        "stats_log_interval_secs = 60",
        "stats_log_interval_secs = 0",
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("stats_log_interval_secs"));
}

#[test]
fn test_config_rejects_missing_section() {
    let err = AppConfig::load_from_str("[server]\nport = 1\nhost = \"x\"\n").unwrap_err();
    assert!(err.to_string().contains("monitoring"));
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };
    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.server.port, 8080);
    assert!(!config.docker.enabled);
}
