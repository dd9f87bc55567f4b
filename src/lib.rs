//! # extractCatalogPdf
//!
//! A Rust library for turning semi-structured supplier PDF catalogs into
//! row-oriented xlsx spreadsheets.
//!
//! ## What this crate does
//!
//! 1. **Scan the PDF** — opens the document once and caches, per page, the
//!    plain extracted text and every embedded raster image payload.
//! 2. **Save images** — writes each payload to
//!    `image_page_<n>_img_<m>.png` in the output directory and keeps the
//!    path of the last one as the spreadsheet's representative picture.
//! 3. **Extract fields** — three line-oriented heuristics produce the
//!    supplier reference/designation, colour, and quantity sequences.
//! 4. **Write the workbook** — a fixed 16-column catalog header, one
//!    embedded picture, and one row per positionally paired record.
//!
//! The heuristics are deliberately simple and match the behaviour of the
//! legacy extraction script this crate replaces; see the docs of
//! [`lines_above_colon_tokens`], [`text_after_dash`] and
//! [`quantities_after_colon`] for the exact rules, quirks included.
//!
//! ## Quick example
//!
//! ```no_run
//! use extractcatalogpdf::extract_catalog;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let output = extract_catalog("catalog.pdf")?;
//! println!("wrote {}", output.display());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

mod fields;
mod images;
mod rows;
mod scanner;
mod workbook;

pub use fields::{lines_above_colon_tokens, quantities_after_colon, text_after_dash};
pub use rows::{AssembledRows, CatalogRow, BRAND_LICENSE, MEASURE_UNITS, PRODUCT_RANGE};
pub use scanner::{PageContent, PdfScanner};
pub use workbook::CATALOG_HEADER;

// ── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration for an extraction run.
#[derive(Debug, Clone, Default)]
pub struct ExtractorConfig {
    /// Directory receiving the workbook and the extracted image files.
    /// When `None`, the directory containing the input PDF is used.
    pub output_directory: Option<String>,

    /// When `true`, the warning about positionally dropped field values is
    /// suppressed (see [`AssembledRows::dropped`] for the truncation policy).
    pub quiet: bool,
}

// ── Error type ───────────────────────────────────────────────────────────────

/// Every error that this crate can produce.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The input file is missing, not a valid PDF, or encrypted without a
    /// usable password.
    #[error("Unreadable document: {0}")]
    DocumentUnreadable(String),

    /// The document was parsed successfully but contains no embedded raster
    /// images on any page, so there is nothing to use as the catalog picture.
    #[error("No embedded images found in this PDF")]
    NoImagesFound,

    /// The output directory could not be created.
    #[error("Failed to create output directory '{path}': {source}")]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An extracted image file could not be written.
    #[error("Failed to write '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output workbook could not be built or saved.
    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// A filesystem I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// No PDF path was supplied. Produced by front ends before the pipeline
    /// runs; the library itself never returns this.
    #[error("No PDF file was selected")]
    NoPathSelected,
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, ExtractError>;

// ── Orchestrator ─────────────────────────────────────────────────────────────

/// Run the full extraction pipeline with the default configuration.
///
/// Returns the path of the written workbook,
/// `<input_dir>/<input_stem>_output.xlsx`. Any existing file at that path is
/// overwritten without prompting, as are previously extracted image files.
pub fn extract_catalog<P: AsRef<Path>>(pdf_path: P) -> Result<PathBuf> {
    extract_catalog_with_config(pdf_path, &ExtractorConfig::default())
}

/// Run the full extraction pipeline with a custom [`ExtractorConfig`].
///
/// Pipeline order is fixed: images are saved first (their pass also creates
/// the output directory), then the field extractors run, then rows are
/// assembled and the workbook is written. A failure partway through may
/// leave image files on disk without a workbook; no cleanup is attempted.
///
/// # Example
///
/// ```no_run
/// use extractcatalogpdf::{extract_catalog_with_config, ExtractorConfig};
///
/// let config = ExtractorConfig {
///     output_directory: Some("./out".into()),
///     ..Default::default()
/// };
/// let output = extract_catalog_with_config("catalog.pdf", &config).unwrap();
/// ```
pub fn extract_catalog_with_config<P: AsRef<Path>>(
    pdf_path: P,
    config: &ExtractorConfig,
) -> Result<PathBuf> {
    let pdf_path = pdf_path.as_ref();
    let output_dir = output_directory_for(pdf_path, config);
    let output_path = output_dir.join(format!("{}_output.xlsx", input_stem(pdf_path)));

    let scanner = PdfScanner::from_path(pdf_path)?;
    let pages = scanner.pages();

    // Image pass first: it creates the output directory and yields the
    // single picture path that survives into the workbook.
    let picture_path = images::save_page_images(&pages, &output_dir)?;

    // The reference and designation columns both come from the same
    // heuristic, so they are always identical. Preserved behaviour of the
    // legacy script; no second heuristic exists.
    let references = fields::lines_above_colon_tokens(&pages);
    let designations = references.clone();
    let colours = fields::text_after_dash(&pages);
    let quantities = fields::quantities_after_colon(&pages);

    let assembled = rows::zip_to_shortest(&references, &designations, &colours, &quantities);
    if assembled.dropped > 0 && !config.quiet {
        eprintln!(
            "extractcatalogpdf: warning: {} extracted value(s) had no positional match and were dropped",
            assembled.dropped
        );
    }

    workbook::write_catalog(&output_path, &picture_path, &assembled.rows)?;

    Ok(output_path)
}

/// Output directory: the configured override, else the input's directory.
/// A bare filename like `catalog.pdf` has an empty parent; normalise that to
/// the current directory so it stays usable as a path.
fn output_directory_for(pdf_path: &Path, config: &ExtractorConfig) -> PathBuf {
    if let Some(ref dir) = config.output_directory {
        return PathBuf::from(dir);
    }
    match pdf_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn input_stem(pdf_path: &Path) -> String {
    pdf_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "catalog".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_directory_prefers_config_override() {
        let config = ExtractorConfig {
            output_directory: Some("/tmp/override".into()),
            ..Default::default()
        };
        let dir = output_directory_for(Path::new("/data/catalog.pdf"), &config);
        assert_eq!(dir, PathBuf::from("/tmp/override"));
    }

    #[test]
    fn output_directory_defaults_to_input_parent() {
        let config = ExtractorConfig::default();
        let dir = output_directory_for(Path::new("/data/catalog.pdf"), &config);
        assert_eq!(dir, PathBuf::from("/data"));
    }

    #[test]
    fn bare_filename_resolves_to_current_directory() {
        let config = ExtractorConfig::default();
        let dir = output_directory_for(Path::new("catalog.pdf"), &config);
        assert_eq!(dir, PathBuf::from("."));
    }

    #[test]
    fn stem_is_taken_from_the_input_filename() {
        assert_eq!(input_stem(Path::new("/data/summer2024.pdf")), "summer2024");
    }
}
