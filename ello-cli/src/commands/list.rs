//! List command implementation

use super::load_page;
use crate::render::Renderer;
use anyhow::{bail, Result};
use ello_core::catalog::CatalogSource;
use ello_core::Settings;
use std::sync::Arc;

/// Print one page of the catalog, optionally filtered by title
pub async fn list(
    settings: Settings,
    source: Arc<dyn CatalogSource>,
    renderer: &Renderer,
    search: Option<String>,
    page_number: usize,
    json: bool,
) -> Result<()> {
    let mut page = load_page(settings, source).await?;

    if let Some(term) = search {
        page.type_text(term);
        page.commit_input();
    }
    page.set_page(page_number);

    let view = page.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", renderer.page(&view));
    }

    if let Some(reason) = page.load_state().error() {
        bail!("Failed to load catalog: {}", reason);
    }
    Ok(())
}
