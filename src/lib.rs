//! autocatalog - Browser-Driven Car Catalog Scraper
//!
//! This crate extracts a structured catalog of automobile brands and models
//! (with production year ranges) from a public automotive reference site and
//! serializes it to CSV.
//!
//! # Features
//!
//! - **Browser Automation**: Browser control via ChromiumOxide (CDP)
//! - **Consent Handling**: Bounded best-effort dismissal of the site's
//!   privacy overlay
//! - **Content Extraction**: Pure HTML parsing of brand and model listings
//! - **Streaming Export**: Per-brand CSV flushing, so partial runs keep
//!   their completed brands
//!
//! # Architecture
//!
//! ```text
//! CLI ──▶ Scraper ──▶ Browser Controller (CDP)
//!             │               │
//!             ▼               ▼
//!       ┌──────────┐   ┌──────────────┐
//!       │ Export   │   │ Extraction   │
//!       └────┬─────┘   └──────┬───────┘
//!            │                │
//!            ▼                ▼
//!        cars.csv       Brands + Models
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use autocatalog::browser::BrowserController;
//! use autocatalog::scrape::{ScrapeOptions, Scraper};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let controller = BrowserController::new().await?;
//!
//!     let catalog = Scraper::new(controller, ScrapeOptions::default())
//!         .run()
//!         .await?;
//!
//!     println!("Scraped {} brands", catalog.brand_count());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod browser;
pub mod catalog;
pub mod error;
pub mod export;
pub mod extraction;
pub mod scrape;
pub mod site;

// Re-exports for convenience
pub use browser::BrowserController;
pub use catalog::{Brand, Catalog, Model};
pub use error::{Error, Result};
pub use extraction::{BrandExtractor, ModelExtractor};
pub use scrape::{ScrapeOptions, Scraper};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
