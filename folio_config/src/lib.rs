use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{File, FileFormat};
use email_address::EmailAddress;
use serde::Deserialize;
use url::Url;

mod duration;

pub use duration::Duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Loads configuration from the paths in the `FOLIO_CONFIG` environment
/// variable (colon separated, later files override earlier ones), falling
/// back to the repository default.
pub fn load() -> anyhow::Result<Config> {
    match std::env::var("FOLIO_CONFIG") {
        Ok(paths) => load_paths(&paths.split(':').collect::<Vec<_>>()),
        Err(std::env::VarError::NotPresent) => load_paths(&[DEFAULT_CONFIG_PATH]),
        Err(err) => Err(err).context("Failed to read FOLIO_CONFIG"),
    }
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            anyhow::Ok(builder.add_source(File::from_str(&content, FileFormat::Toml)))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub contact: ContactConfig,
    pub relay: RelayConfig,
    pub content: ContentConfig,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// Owner address named as the fallback channel in the failure alert.
    pub email: EmailAddress,
    /// How long the success confirmation is shown before the form resets.
    pub success_reset: Duration,
}

#[derive(Debug, Deserialize)]
pub struct RelayConfig {
    pub access_key: String,
    pub submit_endpoint_override: Option<Url>,
}

#[derive(Debug, Deserialize)]
pub struct ContentConfig {
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let config = load_paths(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();

        assert_eq!(config.contact.success_reset.0.as_secs(), 5);
        assert!(!config.relay.access_key.is_empty());
    }
}
