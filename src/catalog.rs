//! Catalog data model
//!
//! Plain data types for the scraped brand/model catalog. The catalog is an
//! insertion-ordered brand -> models mapping, built incrementally during a
//! run and held entirely in memory.

use serde::{Deserialize, Serialize};

/// A manufacturer grouping found on the landing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Brand name as it appears in the listing
    pub name: String,
    /// Absolute URL of the brand's model listing page
    pub url: String,
}

/// A vehicle line under a brand, with its production year range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Model name with the owning brand's prefix stripped
    pub name: String,
    /// First production year, verbatim from the page
    pub start_year: Option<String>,
    /// Last production year; "present" is resolved to the scrape-time year
    pub end_year: Option<String>,
}

impl Model {
    /// Create a model with no year range
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            start_year: None,
            end_year: None,
        }
    }

    /// Create a model with an explicit year range
    pub fn with_years<S: Into<String>>(
        name: S,
        start_year: Option<String>,
        end_year: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start_year,
            end_year,
        }
    }
}

/// One brand together with its scraped models
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// The brand
    pub brand: Brand,
    /// Its models, in document order
    pub models: Vec<Model>,
}

/// Insertion-ordered brand -> models mapping
///
/// A duplicate brand name replaces the models stored under the earlier
/// entry while keeping the earlier entry's position, matching mapping
/// overwrite semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a brand's models, replacing any earlier entry with the same name
    pub fn insert(&mut self, brand: Brand, models: Vec<Model>) {
        match self.entries.iter_mut().find(|e| e.brand.name == brand.name) {
            Some(entry) => {
                entry.brand = brand;
                entry.models = models;
            }
            None => self.entries.push(CatalogEntry { brand, models }),
        }
    }

    /// Look up a brand's models by name
    pub fn get(&self, brand_name: &str) -> Option<&[Model]> {
        self.entries
            .iter()
            .find(|e| e.brand.name == brand_name)
            .map(|e| e.models.as_slice())
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Number of brands
    pub fn brand_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of models across all brands
    pub fn model_count(&self) -> usize {
        self.entries.iter().map(|e| e.models.len()).sum()
    }

    /// Whether the catalog holds no brands
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
