use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Prefix of the environment variables overriding the configuration,
/// e.g. `ORGFIN_BIND_ADDRESS`.
pub const ENV_PREFIX: &str = "ORGFIN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("static directory {0} does not exist")]
    MissingStaticDir(PathBuf),

    #[error("index file {0} does not exist")]
    MissingIndex(PathBuf),

    #[error("request timeout must be at least one second")]
    ZeroTimeout,
}

/// Static host configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Format: IP:PORT (e.g., 0.0.0.0:3000)
    pub bind_address: String,
    /// Directory holding the built frontend bundle
    pub static_dir: PathBuf,
    /// Page served for every path without a matching file
    pub index_file: String,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Loads defaults, then the config file, then `ORGFIN_*` environment
    /// variables. Without an explicit file an `orgfin.toml` in the working
    /// directory is used when present.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("bind_address", "0.0.0.0:3000")?
            .set_default("static_dir", "workspace/frontend/dist")?
            .set_default("index_file", "index.html")?
            .set_default("request_timeout_secs", 30_i64)?;

        builder = match file {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                builder.add_source(File::from(path).required(true))
            }
            None => builder.add_source(File::with_name("orgfin").required(false)),
        };

        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Command line flags win over every other source.
    pub fn with_overrides(mut self, bind_address: Option<String>, static_dir: Option<PathBuf>) -> Self {
        if let Some(bind_address) = bind_address {
            self.bind_address = bind_address;
        }
        if let Some(static_dir) = static_dir {
            self.static_dir = static_dir;
        }
        self
    }

    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join(&self.index_file)
    }

    /// Checks that the bundle to serve is actually there.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if !self.static_dir.is_dir() {
            return Err(ConfigError::MissingStaticDir(self.static_dir.clone()));
        }
        let index = self.index_path();
        if !index.is_file() {
            return Err(ConfigError::MissingIndex(index));
        }
        Ok(())
    }
}
