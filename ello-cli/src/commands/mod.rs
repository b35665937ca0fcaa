//! CLI command implementations

mod browse;
mod list;
mod options;

pub use browse::browse;
pub use list::list;
pub use options::options;

use anyhow::{Context, Result};
use ello_core::catalog::{source_for, CatalogSource};
use ello_core::{HomePage, Settings};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Where settings and the catalog come from
#[derive(Debug, Clone, Default)]
pub struct SourceArgs {
    pub config: Option<PathBuf>,
    pub endpoint: Option<String>,
    pub catalog: Option<PathBuf>,
}

/// Resolve settings and the catalog source. Flags override the settings file.
pub async fn open_source(args: &SourceArgs) -> Result<(Settings, Arc<dyn CatalogSource>)> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .await
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(endpoint) = &args.endpoint {
        settings.endpoint = Some(endpoint.clone());
        settings.normalize();
    }

    let source = source_for(&settings, args.catalog.as_deref())?;
    tracing::debug!("Using catalog source {}", source.describe());

    Ok((settings, source))
}

/// Load the catalog behind a spinner
async fn load_page(settings: Settings, source: Arc<dyn CatalogSource>) -> Result<HomePage> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Loading books...");

    let mut page = HomePage::new(settings);
    page.load(source).await;

    pb.finish_and_clear();
    Ok(page)
}
