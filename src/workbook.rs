//! Building and saving the output workbook.

use crate::rows::{CatalogRow, BRAND_LICENSE, MEASURE_UNITS, PRODUCT_RANGE};
use crate::Result;
use rust_xlsxwriter::{Image, Workbook};
use std::path::Path;

/// The fixed header row of the output spreadsheet. Column order is part of
/// the external contract and must not change.
pub const CATALOG_HEADER: [&str; 16] = [
    "Picture",
    "Supplier's reference",
    "Supplier's designation",
    "PRODUCT RANGE",
    "Colour(s)",
    "Measure units",
    "Brand/License",
    "BIUB or BBD*(dd/mm/yyyy)",
    "Untaxed (Wine)",
    "Qty available",
    "Wholesale Price",
    "ClearancePrice",
    "Retail price",
    "Packing details",
    "Nb packets / pallet",
    "Number of pallets",
];

/// Zero-based index of the "Qty available" column.
const QTY_COLUMN: u16 = 9;

/// Write the catalog workbook: header row, the representative picture
/// anchored at A2, and one row per assembled [`CatalogRow`]. Any existing
/// file at `output_path` is overwritten without prompting.
///
/// Columns without an extractor carry their fixed constant on every row;
/// the remaining columns stay blank for the operator to fill in.
pub(crate) fn write_catalog(
    output_path: &Path,
    picture_path: &Path,
    rows: &[CatalogRow],
) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, title) in CATALOG_HEADER.iter().enumerate() {
        worksheet.write_string(0, col as u16, *title)?;
    }

    // Anchor cell A2, directly below the "Picture" header.
    let picture = Image::new(picture_path)?;
    worksheet.insert_image(1, 0, &picture)?;

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write_string(r, 1, row.reference.as_str())?;
        worksheet.write_string(r, 2, row.designation.as_str())?;
        worksheet.write_string(r, 3, PRODUCT_RANGE)?;
        worksheet.write_string(r, 4, row.colour.as_str())?;
        worksheet.write_string(r, 5, MEASURE_UNITS)?;
        worksheet.write_string(r, 6, BRAND_LICENSE)?;
        worksheet.write_string(r, QTY_COLUMN, row.quantity.as_str())?;
    }

    workbook.save(output_path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_has_sixteen_columns_with_qty_at_index_nine() {
        assert_eq!(CATALOG_HEADER.len(), 16);
        assert_eq!(CATALOG_HEADER[QTY_COLUMN as usize], "Qty available");
        assert_eq!(CATALOG_HEADER[0], "Picture");
        assert_eq!(CATALOG_HEADER[15], "Number of pallets");
    }
}
