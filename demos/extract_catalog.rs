//! Minimal CLI that converts one supplier catalog PDF into a spreadsheet.
//!
//! Usage:
//!   cargo run --example extract_catalog -- catalog.pdf
//!   cargo run --example extract_catalog -- catalog.pdf ./output

use extractcatalogpdf::{extract_catalog_with_config, ExtractorConfig};
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <pdf_file> [output_dir]", args[0]);
        process::exit(1);
    }

    let config = ExtractorConfig {
        output_directory: args.get(2).cloned(),
        ..Default::default()
    };

    println!("Extracting: {}", args[1]);

    match extract_catalog_with_config(&args[1], &config) {
        Ok(output_path) => println!("✓ Saved {}", output_path.display()),
        Err(e) => {
            eprintln!("✗ {e}");
            process::exit(1);
        }
    }
}
