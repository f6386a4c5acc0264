mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind, path::Path};
use tracing::debug;

pub const CONFIG_PATH_ENV_VAR: &str = "CONFIG_PATH";
pub const PORT_ENV_VAR: &str = "PORT";
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Builds the process configuration: `.env`, then the YAML file, then
/// environment overrides for the API key and port.
pub async fn load() -> Result<Config> {
    // A missing .env file is normal outside development.
    let _ = dotenvy::dotenv();

    let config = match env::var(CONFIG_PATH_ENV_VAR) {
        Ok(path) => read_config(&path, true).await?,
        Err(_) => read_config(DEFAULT_CONFIG_PATH, false).await?,
    };

    apply_env_overrides(config, |key| env::var(key).ok())
}

/// Reads a YAML config file. A missing file falls back to defaults unless
/// `required` is set, in which case it is a configuration error.
pub async fn read_config(path: impl AsRef<Path>, required: bool) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    match tokio::fs::read_to_string(path).await {
        Ok(config_str) => Ok(serde_yaml::from_str(&config_str)?),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            if required {
                Err(Error::config(format!(
                    "Config file not found: {}",
                    path.display()
                )))
            } else {
                debug!("No {} found, using defaults", path.display());
                Ok(Config::default())
            }
        }
        Err(e) => Err(e.into()),
    }
}

/// Applies `GEMINI_API_KEY` and `PORT` on top of `config`.
pub fn apply_env_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Config> {
    if let Some(api_key) = lookup(crate::llm::gemini::API_KEY_ENV_VAR) {
        config.llm.api_key = api_key;
    }

    if let Some(port) = lookup(PORT_ENV_VAR) {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|_| Error::config(format!("Invalid {}: '{}'", PORT_ENV_VAR, port)))?;
    }

    Ok(config)
}
