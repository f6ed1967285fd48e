//! Scrape pipeline
//!
//! The straight-line traversal of the site: landing page, consent
//! dismissal, brand listing, then one detail page per brand. One browser
//! page is reused serially for every navigation; rows reach the output
//! file as each brand completes.

use crate::browser::{
    BrowserController, ConsentHandler, NavigationOptions, PageNavigator,
};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::export::CatalogWriter;
use crate::extraction::{BrandExtractor, ModelExtractor};
use crate::site;
use chrono::{Datelike, Utc};
use std::path::PathBuf;
use tracing::{info, instrument, warn};

/// Options for a scrape run
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// Landing page listing the brands
    pub start_url: String,
    /// Output CSV path (truncated on each run)
    pub output: PathBuf,
    /// How long to wait for the consent button, in milliseconds
    pub consent_timeout_ms: u64,
    /// How long to wait for a brand page's model listing, in milliseconds
    pub model_ready_timeout_ms: u64,
    /// Navigation behavior for every page load
    pub navigation: NavigationOptions,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            start_url: site::START_URL.to_string(),
            output: PathBuf::from(site::DEFAULT_OUTPUT),
            consent_timeout_ms: site::CONSENT_TIMEOUT_MS,
            model_ready_timeout_ms: site::MODEL_READY_TIMEOUT_MS,
            navigation: NavigationOptions::default(),
        }
    }
}

/// The full catalog scrape, from landing page to CSV
pub struct Scraper {
    controller: BrowserController,
    options: ScrapeOptions,
}

impl Scraper {
    /// Create a scraper over a launched browser
    pub fn new(controller: BrowserController, options: ScrapeOptions) -> Self {
        Self {
            controller,
            options,
        }
    }

    /// Run the pipeline to completion and close the browser
    ///
    /// The browser is closed on the error path too, before the error
    /// propagates. Returns the in-memory catalog; the CSV file already
    /// holds every completed brand by the time this returns.
    #[instrument(skip(self))]
    pub async fn run(self) -> Result<Catalog> {
        let Self {
            controller,
            options,
        } = self;

        let result = Self::pipeline(&controller, &options).await;

        match controller.close().await {
            Ok(()) => {}
            Err(close_err) if result.is_ok() => return Err(close_err),
            Err(close_err) => warn!("Browser close failed after error: {}", close_err),
        }

        result
    }

    async fn pipeline(controller: &BrowserController, options: &ScrapeOptions) -> Result<Catalog> {
        let page = controller.new_page().await?;
        PageNavigator::goto(&page, &options.start_url, Some(options.navigation.clone())).await?;

        ConsentHandler::dismiss(&page, site::CONSENT_BUTTON, options.consent_timeout_ms).await?;

        let brands = BrandExtractor::extract(&page).await?;
        if brands.is_empty() {
            warn!("No brands found on {}", options.start_url);
        } else {
            info!("Found {} brands", brands.len());
        }

        // "Present" end years resolve against the year the scrape runs.
        let current_year = Utc::now().year();

        let mut writer = CatalogWriter::create(&options.output)?;
        let mut catalog = Catalog::new();

        let total = brands.len();
        for (index, brand) in brands.into_iter().enumerate() {
            info!(
                "Scraping models for brand {}/{}: {}",
                index + 1,
                total,
                brand.name
            );

            PageNavigator::goto(&page, &brand.url, Some(options.navigation.clone())).await?;

            // Readiness over fixed sleep; a page with no model container
            // still gets parsed (and yields nothing).
            if let Err(e) = PageNavigator::wait_for_selector(
                &page,
                site::MODEL_CONTAINER,
                options.model_ready_timeout_ms,
            )
            .await
            {
                warn!("Model listing not ready for {}: {}", brand.name, e);
            }

            let models = ModelExtractor::extract(&page, &brand.name, current_year).await?;

            writer.append_brand(&brand.name, &models)?;
            catalog.insert(brand, models);
        }

        info!(
            "Catalog complete: {} brands, {} models -> {}",
            catalog.brand_count(),
            catalog.model_count(),
            options.output.display()
        );

        Ok(catalog)
    }
}
