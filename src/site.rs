//! Markup contract with the source site
//!
//! Every selector the scraper depends on lives here. The target site has no
//! stable API; these constants are the full extent of the contract and are
//! the first place to look when a site redesign breaks a run.

/// Landing page listing every brand.
pub const START_URL: &str = "https://www.autoevolution.com/cars/";

/// Default output file.
pub const DEFAULT_OUTPUT: &str = "cars.csv";

/// Consent overlay accept button.
pub const CONSENT_BUTTON: &str = "#accept-btn";

/// How long to wait for the consent button before giving up, in milliseconds.
pub const CONSENT_TIMEOUT_MS: u64 = 20_000;

/// Container wrapping the brand listing on the landing page.
pub const BRAND_CONTAINER: &str = "div.container.carlist.clearfix";

/// One brand entry inside the container.
pub const BRAND_ITEM: &str = "div.col2width.fl.bcol-white.carman";

/// Brand name span inside an entry.
pub const BRAND_NAME: &str = "span[itemprop=\"name\"]";

/// Anchor carrying the brand detail URL.
pub const BRAND_LINK: &str = "h5 a";

/// Container wrapping the model listing on a brand detail page.
pub const MODEL_CONTAINER: &str = "div.carmodels.col23width.clearfix";

/// One model block inside the container.
pub const MODEL_ITEM: &str = "div.carmod.clearfix";

/// Model heading inside a block.
pub const MODEL_HEADING: &str = "h4";

/// Block holding the production year range span.
pub const MODEL_YEARS: &str = "div.col3width.fl";

/// How long to wait for the model container after navigating to a brand
/// page, in milliseconds.
pub const MODEL_READY_TIMEOUT_MS: u64 = 10_000;
