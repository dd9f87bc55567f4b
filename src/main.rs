//! CLI front end for extracting catalog spreadsheets from supplier PDFs.
//!
//! This binary is thin glue around the extractcatalogpdf crate: it takes a
//! PDF path, runs the pipeline, and reports the output path or the error.

use extractcatalogpdf::{extract_catalog_with_config, ExtractError, ExtractorConfig};
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.contains(&"--help".to_string()) || args.contains(&"-h".to_string()) {
        print_usage(&args[0]);
        process::exit(0);
    }

    let Some(pdf_path) = args.get(1) else {
        eprintln!("⚠️  {}", ExtractError::NoPathSelected);
        print_usage(&args[0]);
        process::exit(1);
    };

    let config = ExtractorConfig {
        output_directory: args.get(2).cloned(),
        quiet: false,
    };

    println!("🔍 Extracting catalog from: {pdf_path}");

    match extract_catalog_with_config(pdf_path, &config) {
        Ok(output_path) => {
            println!("✅ Extraction complete.");
            println!("💾 Output file saved as: {}", output_path.display());
        }
        Err(e) => {
            eprintln!("❌ Error: {e}");
            process::exit(1);
        }
    }
}

fn print_usage(program_name: &str) {
    println!("📄 extractCatalogPdf - Supplier PDF catalog to xlsx converter");
    println!();
    println!("USAGE:");
    println!("    {} <pdf_file> [output_dir]", program_name);
    println!();
    println!("ARGUMENTS:");
    println!("    <pdf_file>     Path to the supplier catalog PDF");
    println!("    [output_dir]   Directory for the workbook and extracted images");
    println!("                   (default: the PDF's own directory)");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help     Show this help message");
    println!();
    println!("This tool will:");
    println!("  • Save every embedded image as image_page_<n>_img_<m>.png");
    println!("  • Extract supplier references, colours and quantities");
    println!("  • Write <pdf_stem>_output.xlsx with the standard catalog header");
}
