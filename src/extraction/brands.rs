//! Brand listing extraction
//!
//! This module parses the landing page markup into an ordered list of
//! brands. Parsing is pure: it takes the page HTML and base URL, so it is
//! testable without a browser.

use crate::browser::PageHandle;
use crate::catalog::Brand;
use crate::error::{ExtractionError, Result};
use crate::site;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Brand listing extraction functionality
pub struct BrandExtractor;

impl BrandExtractor {
    /// Extract the brand listing from the current page
    #[instrument(skip(page))]
    pub async fn extract(page: &PageHandle) -> Result<Vec<Brand>> {
        info!("Extracting brand listing");

        let html = page.content().await?;
        let base_url = page.url().await;
        let brands = parse_brand_listing(&html, &base_url)?;

        debug!("Extracted {} brands", brands.len());
        Ok(brands)
    }
}

/// Parse the landing page HTML into brand tuples, in document order
///
/// A missing brand container is a soft failure: it logs a warning and
/// yields an empty list. Entries missing a name or link are skipped.
/// Relative detail links are joined against `base_url`.
pub fn parse_brand_listing(html: &str, base_url: &str) -> Result<Vec<Brand>> {
    let container_sel = selector(site::BRAND_CONTAINER)?;
    let item_sel = selector(site::BRAND_ITEM)?;
    let name_sel = selector(site::BRAND_NAME)?;
    let link_sel = selector(site::BRAND_LINK)?;

    let document = Html::parse_document(html);

    let Some(container) = document.select(&container_sel).next() else {
        warn!("Brand container not found on landing page");
        return Ok(Vec::new());
    };

    let mut brands = Vec::new();
    for item in container.select(&item_sel) {
        let name = item
            .select(&name_sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string());

        let href = item
            .select(&link_sel)
            .next()
            .and_then(|a| a.value().attr("href"));

        let (Some(name), Some(href)) = (name, href) else {
            debug!("Skipping brand entry without name or link");
            continue;
        };
        if name.is_empty() {
            debug!("Skipping brand entry with empty name");
            continue;
        }

        brands.push(Brand {
            url: resolve_url(href, base_url),
            name,
        });
    }

    Ok(brands)
}

/// Join a possibly-relative href against the page URL
fn resolve_url(href: &str, base_url: &str) -> String {
    match Url::parse(base_url).and_then(|base| base.join(href)) {
        Ok(url) => url.to_string(),
        Err(_) => href.to_string(),
    }
}

fn selector(raw: &str) -> Result<Selector> {
    Selector::parse(raw)
        .map_err(|e| ExtractionError::InvalidSelector(format!("{}: {}", raw, e)).into())
}
