//! Content extraction module
//!
//! This module parses the source site's markup into catalog data: the brand
//! listing on the landing page and the per-brand model listings.

pub mod brands;
pub mod models;

pub use brands::{parse_brand_listing, BrandExtractor};
pub use models::{parse_model_listing, parse_year_range, strip_brand_prefix, ModelExtractor};
