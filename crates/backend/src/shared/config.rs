use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::a002_chat_thread::service::MessageKeyScope;
use crate::system::auth::identity::AuthPolicy;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub store: StoreConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Public key shipped with the client; treated exactly like "no credential"
    pub anon_key: String,
    pub policy: AuthPolicy,
    /// HS256 secret. Generated and kept in sys_settings when absent.
    pub jwt_secret: Option<String>,
    pub verify_timeout_ms: u64,
}

impl AuthConfig {
    pub fn verify_timeout(&self) -> Duration {
        Duration::from_millis(self.verify_timeout_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub timeout_ms: u64,
    pub message_key_scope: MessageKeyScope,
}

impl StoreConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DebugConfig {
    /// Mounts POST /api/debug/seed. Development only.
    #[serde(default)]
    pub seed_enabled: bool,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 3000

[database]
path = "target/db/app.db"

[auth]
anon_key = "public-anon-key"
policy = "fail_open"
verify_timeout_ms = 3000

[store]
timeout_ms = 5000
message_key_scope = "tenant"

[debug]
seed_enabled = false
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    default_config()
}

pub fn default_config() -> anyhow::Result<Config> {
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.auth.anon_key.trim().is_empty() {
        anyhow::bail!("auth.anon_key must not be empty");
    }
    Ok(config)
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> PathBuf {
    let db_path = Path::new(&config.database.path);

    if db_path.is_absolute() {
        return db_path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(db_path);
        }
    }

    PathBuf::from(&config.database.path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = default_config().unwrap();
        assert_eq!(config.database.path, "target/db/app.db");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.auth.policy, AuthPolicy::FailOpen);
        assert_eq!(config.store.message_key_scope, MessageKeyScope::Tenant);
        assert!(!config.debug.seed_enabled);
        assert!(config.auth.jwt_secret.is_none());
    }

    #[test]
    fn test_fail_closed_and_shared_scope_parse() {
        let contents = DEFAULT_CONFIG
            .replace(r#"policy = "fail_open""#, r#"policy = "fail_closed""#)
            .replace(r#"message_key_scope = "tenant""#, r#"message_key_scope = "shared""#);
        let config = parse_config(&contents).unwrap();
        assert_eq!(config.auth.policy, AuthPolicy::FailClosed);
        assert_eq!(config.store.message_key_scope, MessageKeyScope::Shared);
    }

    #[test]
    fn test_shipped_config_keeps_seed_disabled() {
        // build.rs copies this file next to every binary, release included
        let shipped = include_str!("../../../../config.toml");
        let config = parse_config(shipped).unwrap();
        assert!(!config.debug.seed_enabled);
        assert_eq!(config.auth.policy, AuthPolicy::FailOpen);
    }

    #[test]
    fn test_debug_section_is_optional() {
        let contents = DEFAULT_CONFIG.replace("[debug]\nseed_enabled = false\n", "");
        let config = parse_config(&contents).unwrap();
        assert!(!config.debug.seed_enabled);
    }

    #[test]
    fn test_empty_anon_key_rejected() {
        let contents = DEFAULT_CONFIG.replace(r#""public-anon-key""#, r#""""#);
        assert!(parse_config(&contents).is_err());
    }

    #[test]
    fn test_absolute_database_path_kept() {
        let mut config = default_config().unwrap();
        let absolute = std::env::temp_dir().join("threads.db");
        config.database.path = absolute.to_string_lossy().to_string();
        assert_eq!(get_database_path(&config), absolute);
    }
}
