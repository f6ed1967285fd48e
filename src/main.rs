//! autocatalog CLI
//!
//! Scrapes the car brand/model catalog into a CSV file.

use anyhow::Context;
use autocatalog::browser::{BrowserConfig, BrowserController, NavigationOptions};
use autocatalog::scrape::{ScrapeOptions, Scraper};
use autocatalog::site;
use clap::Parser;
use std::path::PathBuf;

/// Car catalog scraper
#[derive(Parser, Debug)]
#[command(name = "autocatalog")]
#[command(author = "ReasonKit Team <team@reasonkit.sh>")]
#[command(version)]
#[command(about = "Scrape car brands and models into a CSV catalog")]
struct Args {
    /// Output CSV file
    #[arg(short, long, default_value = site::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Brand listing page to start from
    #[arg(long, default_value = site::START_URL)]
    start_url: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to Chrome/Chromium executable
    #[arg(long)]
    chrome_path: Option<String>,

    /// Run in headless mode
    #[arg(long)]
    headless: bool,

    /// Consent popup wait in milliseconds
    #[arg(long, default_value_t = site::CONSENT_TIMEOUT_MS)]
    consent_timeout_ms: u64,

    /// Per-page navigation timeout in milliseconds
    #[arg(long, default_value_t = 30_000)]
    navigation_timeout_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("autocatalog starting: {} -> {}", args.start_url, args.output.display());

    let mut browser_config = BrowserConfig::builder()
        .headless(args.headless)
        .timeout_ms(args.navigation_timeout_ms);
    if let Some(path) = args.chrome_path {
        browser_config = browser_config.chrome_path(path);
    }

    let controller = BrowserController::with_config(browser_config.build())
        .await
        .context("failed to launch browser")?;

    let options = ScrapeOptions {
        start_url: args.start_url,
        output: args.output.clone(),
        consent_timeout_ms: args.consent_timeout_ms,
        navigation: NavigationOptions {
            timeout_ms: args.navigation_timeout_ms,
            ..NavigationOptions::default()
        },
        ..ScrapeOptions::default()
    };

    let catalog = Scraper::new(controller, options)
        .run()
        .await
        .context("scrape failed")?;

    tracing::info!(
        "Done: {} brands, {} models written to {}",
        catalog.brand_count(),
        catalog.model_count(),
        args.output.display()
    );

    Ok(())
}
