//! Catalog CSV export
//!
//! Serializes the catalog to a comma-delimited UTF-8 file with a fixed
//! four-column header. Rows are flushed brand-by-brand as they are scraped,
//! so a mid-run failure keeps every completed brand on disk.

use crate::catalog::{Catalog, Model};
use crate::error::{ExportError, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, instrument};

/// Output column header, in order
pub const HEADER: [&str; 4] = ["Brand", "Model", "Start Year", "End Year"];

/// Capitalize a name the way the output format expects
///
/// First character uppercased, the remainder lowered ("FORD" -> "Ford").
/// Stored catalog data is never modified; this applies on write only.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Streaming CSV writer for catalog rows
pub struct CatalogWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl CatalogWriter<File> {
    /// Create the output file, truncating any previous run's output
    #[instrument]
    pub fn create<P: AsRef<Path> + std::fmt::Debug>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref()).map_err(|e| ExportError::CreateFailed {
            path: path.as_ref().display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_writer(file)
    }
}

impl<W: Write> CatalogWriter<W> {
    /// Wrap a writer and emit the header row
    pub fn from_writer(inner: W) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(inner);
        writer.write_record(HEADER)?;
        Ok(Self { writer })
    }

    /// Append one brand's rows and flush them to the underlying writer
    pub fn append_brand(&mut self, brand_name: &str, models: &[Model]) -> Result<()> {
        for model in models {
            self.writer
                .write_record([
                    capitalize_first(brand_name).as_str(),
                    capitalize_first(&model.name).as_str(),
                    model.start_year.as_deref().unwrap_or(""),
                    model.end_year.as_deref().unwrap_or(""),
                ])
                .map_err(|_| ExportError::RowFailed(brand_name.to_string()))?;
        }

        self.writer
            .flush()
            .map_err(|e| ExportError::FlushFailed(e.to_string()))?;

        debug!("Wrote {} rows for {}", models.len(), brand_name);
        Ok(())
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| ExportError::FlushFailed(e.to_string()).into())
    }
}

/// Write a complete catalog in one pass
pub fn write_catalog<W: Write>(catalog: &Catalog, inner: W) -> Result<W> {
    let mut writer = CatalogWriter::from_writer(inner)?;
    for entry in catalog.iter() {
        writer.append_brand(&entry.brand.name, &entry.models)?;
    }
    writer.into_inner()
}
