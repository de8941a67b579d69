//! Generate EQUATIONS.md from the equation registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-equations [OUTPUT]
//! ```
//!
//! Writes to `fpcalc_core/EQUATIONS.md` (relative to the workspace root)
//! unless an output path is given.

use std::fs;
use std::path::PathBuf;

use fpcalc_core::equations::generate_equations_markdown;

fn main() {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("fpcalc_core/EQUATIONS.md"));

    println!("Generating {}...", output_path.display());
    let markdown = generate_equations_markdown();

    match fs::write(&output_path, &markdown) {
        Ok(()) => {
            println!("Successfully wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing file: {}", e);
            std::process::exit(1);
        }
    }
}
