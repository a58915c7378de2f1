use std::path::Path;

use miette::{Context, IntoDiagnostic, Result};
use tokio::fs;

use crate::data::SiteConfig;

/// Asynchronously reads and parses the site configuration
/// found in the given site directory
#[tracing::instrument(level = "trace")]
pub async fn read_config(dir: &Path) -> Result<SiteConfig> {
    let cfg_string = fs::read_to_string(dir.join("site.toml"))
        .await
        .into_diagnostic()
        .context("reading site.toml")?;
    toml::from_str(&cfg_string).into_diagnostic()
}
