//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `roverhome.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use serde::Deserialize;

use roverhome_adapter_http_axum::config::PageConfig;
use roverhome_domain::interface::InterfaceName;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Display hostname settings.
    pub hostname: HostnameConfig,
    /// Which OS interfaces to probe.
    pub network: NetworkConfig,
    /// Page rendering settings.
    pub page: PageConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Display-hostname configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HostnameConfig {
    /// File whose contents are shown verbatim as the robot's name.
    pub file: PathBuf,
}

/// Interface names handed to the probe.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Wired interface name.
    pub ethernet: String,
    /// Wireless interface name.
    pub wifi: String,
}

impl Config {
    /// Load configuration from `roverhome.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// the resulting configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("roverhome.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("ROVERHOME_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("ROVERHOME_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("ROVERHOME_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("ROVERHOME_HOSTNAME_FILE") {
            self.hostname.file = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("ROVERHOME_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        self.ethernet_interface()?;
        self.wifi_interface()?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Validated wired interface name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when the configured name is
    /// not a valid interface name.
    pub fn ethernet_interface(&self) -> Result<InterfaceName, ConfigError> {
        InterfaceName::new(self.network.ethernet.as_str())
            .map_err(|err| ConfigError::Validation(format!("network.ethernet: {err}")))
    }

    /// Validated wireless interface name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when the configured name is
    /// not a valid interface name.
    pub fn wifi_interface(&self) -> Result<InterfaceName, ConfigError> {
        InterfaceName::new(self.network.wifi.as_str())
            .map_err(|err| ConfigError::Validation(format!("network.wifi: {err}")))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "roverhomed=info,roverhome=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for HostnameConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("/etc/hostname"),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            ethernet: "eth0".to_string(),
            wifi: "wlan0".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
