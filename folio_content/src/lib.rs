use std::path::Path;

use anyhow::Context;
use config::{File, FileFormat};
use folio_models::content::PortfolioContent;

pub const DEFAULT_CONTENT_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../content.toml");

/// Loads the portfolio content records from a TOML data file.
pub fn load(path: impl AsRef<Path>) -> anyhow::Result<PortfolioContent> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file at {}", path.display()))?;
    config::Config::builder()
        .add_source(File::from_str(&content, FileFormat::Toml))
        .build()?
        .try_deserialize()
        .with_context(|| format!("Failed to load content from {}", path.display()))
}
