// Cayman dashboard: telemetry state store, display formatting, collectors and read surface

pub mod config;
pub mod docker_repo;
pub mod events;
pub mod format;
pub mod models;
pub mod routes;
pub mod store;
pub mod sysinfo_repo;
pub mod view;
pub mod worker;

/// Package name (from Cargo.toml).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Package version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
