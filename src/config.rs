use crate::constants::{
    DEFAULT_CONFIG_PATH, DEFAULT_HOST, DEFAULT_LOG_DIR, DEFAULT_LOG_FILE_PREFIX, DEFAULT_PORT,
    ENV_CATALOGUE, ENV_HOST, ENV_LOG_DIR, ENV_PORT,
};
use crate::error::{Result, ServiceError};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    /// Alternative dataset; the built-in matrix is served when unset
    pub catalogue: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub dir: PathBuf,
    pub file_prefix: String,
    /// Write JSON logs to a daily rolling file next to the console output
    pub file_output: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_LOG_DIR),
            file_prefix: DEFAULT_LOG_FILE_PREFIX.to_string(),
            file_output: true,
        }
    }
}

impl Config {
    /// Read configuration from `path`, or from `config.toml` when no path is
    /// given. The default file is optional; an explicitly named one is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (config_path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };

        if !required && !config_path.exists() {
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(&config_path).map_err(|e| {
            ServiceError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        Self::from_toml_str(&config_content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Apply `RISK_CATALOG_*` environment overrides.
    pub fn apply_env(self) -> Result<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup; `apply_env` passes the process
    /// environment.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port.trim().parse().map_err(|_| {
                ServiceError::Config(format!("{ENV_PORT} must be a port number, got '{port}'"))
            })?;
        }
        if let Some(dir) = lookup(ENV_LOG_DIR) {
            self.logging.dir = PathBuf::from(dir);
        }
        if let Some(path) = lookup(ENV_CATALOGUE) {
            self.catalogue = Some(PathBuf::from(path));
        }
        Ok(self)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| {
                ServiceError::Config(format!(
                    "Invalid listen address '{}:{}': {}",
                    self.server.host, self.server.port, e
                ))
            })
    }
}
