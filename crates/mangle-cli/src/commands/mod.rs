//! CLI command implementations.

pub mod generate;
pub mod list;
pub mod show;

use std::path::PathBuf;

use colored::Colorize;
use mangle::{Catalog, LoadStatus};

/// Load the catalog, either from an explicit definitions file or from the
/// bundled resource. An explicit file that fails to load is an error; the
/// bundled resource always loads.
pub fn load_catalog(
    file: Option<PathBuf>,
    verbose: bool,
) -> Result<Catalog, Box<dyn std::error::Error>> {
    let (catalog, report) = match &file {
        Some(path) => Catalog::load_from_path(path),
        None => Catalog::load(),
    };

    if report.status != LoadStatus::Ok {
        if let Some(path) = &file {
            return Err(format!(
                "Failed to load definitions from {}: {:?}",
                path.display(),
                report.status
            )
            .into());
        }
    }

    if verbose {
        eprintln!(
            "{} {} records loaded, {} skipped",
            "Catalog:".cyan().bold(),
            report.records_loaded,
            report.skipped.len()
        );
        for skip in &report.skipped {
            eprintln!("  line {}: {:?}", skip.line, skip.reason);
        }
        if let Some(resource) = &report.resource {
            eprintln!("  source: {} ({})", resource.file, resource.hash);
        }
    }

    Ok(catalog)
}
