//! Server configuration.
//!
//! Settings are resolved in three layers, later ones winning:
//! 1. built-in defaults
//! 2. an optional TOML file (`LAUNCH_DASH_CONFIG`, or `dashboard.toml` in a
//!    standard location)
//! 3. environment variables (`HOST`, `PORT`, `LAUNCH_DATA_PATH`,
//!    `LAUNCH_DASH_DEBUG`)

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_PATH_ENV: &str = "LAUNCH_DASH_CONFIG";
pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const DATA_PATH_ENV: &str = "LAUNCH_DATA_PATH";
pub const DEBUG_ENV: &str = "LAUNCH_DASH_DEBUG";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8051;
const DEFAULT_DATA_PATH: &str = "spacex_launch_dash.csv";

/// Errors raised while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidEnv {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid bind address '{0}'")]
    InvalidAddress(String),
}

/// Configuration file layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
}

/// `[server]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    /// Verbose logging; does not change dashboard behavior
    #[serde(default)]
    pub debug: Option<bool>,
}

/// `[data]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl ConfigFile {
    /// Load a configuration file from `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Look for `dashboard.toml` in the current directory, then `backend/`.
    pub fn from_default_location() -> Option<Result<Self, ConfigError>> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
        ];

        search_paths
            .into_iter()
            .find(|path| path.exists())
            .map(Self::from_file)
    }
}

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_path: PathBuf,
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            debug: true,
        }
    }
}

impl ServerConfig {
    /// Resolve configuration from defaults, the config file and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let file = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Some(ConfigFile::from_file(path)?),
            Err(_) => ConfigFile::from_default_location().transpose()?,
        };

        let mut config = Self::default();
        if let Some(file) = file {
            config.apply_file(file);
        }
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Overlay the settings present in a config file.
    pub fn apply_file(&mut self, file: ConfigFile) {
        if let Some(host) = file.server.host {
            self.host = host;
        }
        if let Some(port) = file.server.port {
            self.port = port;
        }
        if let Some(debug) = file.server.debug {
            self.debug = debug;
        }
        if let Some(path) = file.data.path {
            self.data_path = path;
        }
    }

    /// Overlay environment overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(HOST_ENV) {
            self.host = host;
        }
        if let Some(port) = lookup(PORT_ENV) {
            self.port = port.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidEnv {
                    key: PORT_ENV,
                    value: port.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        if let Some(path) = lookup(DATA_PATH_ENV) {
            self.data_path = PathBuf::from(path);
        }
        if let Some(debug) = lookup(DEBUG_ENV) {
            self.debug = parse_bool(&debug).ok_or_else(|| ConfigError::InvalidEnv {
                key: DEBUG_ENV,
                value: debug.clone(),
                reason: "expected true/false, 1/0, yes/no or on/off".to_string(),
            })?;
        }
        Ok(())
    }

    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8051);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.data_path, PathBuf::from("spacex_launch_dash.csv"));
        assert!(config.debug);
    }

    #[test]
    fn test_parse_config_file() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 9000
debug = false

[data]
path = "/srv/launches.csv"
"#;
        let file: ConfigFile = toml::from_str(toml).unwrap();
        let mut config = ServerConfig::default();
        config.apply_file(file);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert!(!config.debug);
        assert_eq!(config.data_path, PathBuf::from("/srv/launches.csv"));
    }

    #[test]
    fn test_partial_config_file_keeps_defaults() {
        let file: ConfigFile = toml::from_str("[server]\nport = 8080\n").unwrap();
        let mut config = ServerConfig::default();
        config.apply_file(file);

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.debug);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ServerConfig::default();
        config
            .apply_env(lookup(&[
                ("PORT", "7000"),
                ("LAUNCH_DATA_PATH", "data.csv"),
                ("LAUNCH_DASH_DEBUG", "off"),
            ]))
            .unwrap();

        assert_eq!(config.port, 7000);
        assert_eq!(config.data_path, PathBuf::from("data.csv"));
        assert!(!config.debug);
    }

    #[test]
    fn test_invalid_env_values() {
        let mut config = ServerConfig::default();
        let err = config.apply_env(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { key: "PORT", .. }));

        let err = config
            .apply_env(lookup(&[("LAUNCH_DASH_DEBUG", "maybe")]))
            .unwrap_err();
        assert!(err.to_string().contains("LAUNCH_DASH_DEBUG"));
    }

    #[test]
    fn test_bind_address() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8051,
            ..Default::default()
        };
        assert_eq!(config.bind_address().unwrap().port(), 8051);

        let bad = ServerConfig {
            host: "not a host".to_string(),
            ..Default::default()
        };
        assert!(matches!(bad.bind_address(), Err(ConfigError::InvalidAddress(_))));
    }

    #[test]
    fn test_missing_config_file() {
        let err = ConfigFile::from_file("/nonexistent/dashboard.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
