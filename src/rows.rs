//! Positional assembly of extracted field sequences into catalog rows.

// ── Fixed column values ──────────────────────────────────────────────────────
//
// Columns with no extractor carry these constants on every row.

/// Value of the "PRODUCT RANGE" column.
pub const PRODUCT_RANGE: &str = "Accessory";

/// Value of the "Measure units" column.
pub const MEASURE_UNITS: &str = "One size fits most";

/// Value of the "Brand/License" column.
pub const BRAND_LICENSE: &str = "C.C";

// ── CatalogRow ───────────────────────────────────────────────────────────────

/// One spreadsheet record: the four extracted fields of a product. The
/// constant columns and the blanks are added at write time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    pub reference: String,
    pub designation: String,
    pub colour: String,
    pub quantity: String,
}

/// The outcome of [`zip_to_shortest`]: the assembled rows plus how many
/// surplus values were discarded in the process.
#[derive(Debug, Clone)]
pub struct AssembledRows {
    pub rows: Vec<CatalogRow>,
    /// Total number of elements, across all four input sequences, that had
    /// no positional partner and were dropped.
    pub dropped: usize,
}

/// Pair the four field sequences positionally into rows.
///
/// Policy: **zip-to-shortest**. The row count equals the length of the
/// shortest input sequence; surplus elements of the longer sequences are
/// dropped without error. The extractors carry no alignment information, so
/// a single extra match in one of them silently shifts every later pairing —
/// the dropped count in the result is the only signal that data was lost,
/// and callers are expected to surface it.
pub fn zip_to_shortest(
    references: &[String],
    designations: &[String],
    colours: &[String],
    quantities: &[String],
) -> AssembledRows {
    let count = references
        .len()
        .min(designations.len())
        .min(colours.len())
        .min(quantities.len());

    let rows = (0..count)
        .map(|i| CatalogRow {
            reference: references[i].clone(),
            designation: designations[i].clone(),
            colour: colours[i].clone(),
            quantity: quantities[i].clone(),
        })
        .collect();

    let dropped = (references.len() - count)
        + (designations.len() - count)
        + (colours.len() - count)
        + (quantities.len() - count);

    AssembledRows { rows, dropped }
}
