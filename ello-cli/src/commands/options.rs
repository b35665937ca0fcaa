//! Options command implementation

use super::load_page;
use crate::render::Renderer;
use anyhow::{bail, Result};
use ello_core::catalog::CatalogSource;
use ello_core::Settings;
use std::sync::Arc;

/// Print the autocomplete suggestions for a draft search
pub async fn options(
    settings: Settings,
    source: Arc<dyn CatalogSource>,
    renderer: &Renderer,
    draft: &str,
    json: bool,
) -> Result<()> {
    let mut page = load_page(settings, source).await?;

    if let Some(reason) = page.load_state().error() {
        println!("{}", renderer.notice());
        bail!("Failed to load catalog: {}", reason);
    }

    page.type_text(draft);
    let suggestions = page.suggestions();

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
    } else {
        println!(
            "{}",
            renderer.suggestions(&suggestions, &page.settings().asset_root)
        );
    }

    Ok(())
}
