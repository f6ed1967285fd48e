//! Model listing extraction
//!
//! This module parses a brand detail page into model tuples with their
//! production year ranges. The year grammar and brand-prefix handling live
//! here as pure functions.

use crate::browser::PageHandle;
use crate::catalog::Model;
use crate::error::{ExtractionError, Result};
use crate::site;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument};

/// Model listing extraction functionality
pub struct ModelExtractor;

impl ModelExtractor {
    /// Extract the model listing for a brand from the current page
    #[instrument(skip(page, brand_name))]
    pub async fn extract(
        page: &PageHandle,
        brand_name: &str,
        current_year: i32,
    ) -> Result<Vec<Model>> {
        info!("Extracting models for brand: {}", brand_name);

        let html = page.content().await?;
        let models = parse_model_listing(&html, brand_name, current_year)?;

        debug!("Extracted {} models for {}", models.len(), brand_name);
        Ok(models)
    }
}

/// Parse a brand detail page into model tuples, in document order
///
/// A model block needs a heading to produce a tuple; the year span is
/// optional. Year tokens are kept as free-form strings, no numeric
/// validation. `present` end years resolve to `current_year`.
pub fn parse_model_listing(html: &str, brand_name: &str, current_year: i32) -> Result<Vec<Model>> {
    let container_sel = selector(site::MODEL_CONTAINER)?;
    let item_sel = selector(site::MODEL_ITEM)?;
    let heading_sel = selector(site::MODEL_HEADING)?;
    let years_sel = selector(site::MODEL_YEARS)?;
    let span_sel = selector("span")?;

    let document = Html::parse_document(html);

    let mut models = Vec::new();
    for container in document.select(&container_sel) {
        for block in container.select(&item_sel) {
            let Some(heading) = block.select(&heading_sel).next() else {
                debug!("Skipping model block without heading");
                continue;
            };
            let heading = heading.text().collect::<String>().trim().to_string();

            let years_text = block
                .select(&years_sel)
                .next()
                .and_then(|div| div.select(&span_sel).next())
                .map(|span| span.text().collect::<String>())
                .unwrap_or_default();

            let (start_year, end_year) = parse_year_range(&years_text, current_year);

            models.push(Model {
                name: strip_brand_prefix(&heading, brand_name),
                start_year,
                end_year,
            });
        }
    }

    Ok(models)
}

/// Parse a production year range like `2010 - 2015` or `2010 - Present`
///
/// Splits on `-` and trims the tokens. The first token is the start year,
/// verbatim. A second token equal to `present` (any case) resolves to
/// `current_year`; any other second token is kept verbatim; no second
/// token means no end year. Empty input yields neither year.
pub fn parse_year_range(text: &str, current_year: i32) -> (Option<String>, Option<String>) {
    let text = text.trim();
    if text.is_empty() {
        return (None, None);
    }

    let mut tokens = text.split('-').map(str::trim);
    let start_year = tokens.next().map(str::to_string);
    let end_year = tokens.next().map(|token| {
        if token.eq_ignore_ascii_case("present") {
            current_year.to_string()
        } else {
            token.to_string()
        }
    });

    (start_year, end_year)
}

/// Strip the owning brand's name prefix from a model heading
///
/// The site repeats the brand name in model headings. When the heading
/// starts with the brand name (case-insensitive) the prefix is removed;
/// otherwise the heading is returned unchanged. Idempotent.
pub fn strip_brand_prefix(heading: &str, brand_name: &str) -> String {
    if brand_name.is_empty() {
        return heading.trim().to_string();
    }

    match heading.get(..brand_name.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(brand_name) => {
            heading[brand_name.len()..].trim().to_string()
        }
        _ => heading.trim().to_string(),
    }
}

fn selector(raw: &str) -> Result<Selector> {
    Selector::parse(raw)
        .map_err(|e| ExtractionError::InvalidSelector(format!("{}: {}", raw, e)).into())
}
