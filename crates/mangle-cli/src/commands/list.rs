//! List command - enumerate catalog prototypes and categories.

use std::path::PathBuf;

use colored::Colorize;

use super::load_catalog;

pub fn run(
    file: Option<PathBuf>,
    category: Option<String>,
    categories_only: bool,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(file, verbose)?;

    if categories_only {
        let categories = catalog.categories();
        if json_output {
            println!("{}", serde_json::to_string_pretty(&categories)?);
        } else {
            for cat in categories {
                println!("{cat}");
            }
        }
        return Ok(());
    }

    let ids: Vec<&str> = match &category {
        Some(cat) => catalog
            .ids()
            .into_iter()
            .filter(|id| catalog.get(id).map(|p| p.is_member_of(cat)).unwrap_or(false))
            .collect(),
        None => catalog.ids(),
    };

    if json_output {
        let entries: Vec<serde_json::Value> = ids
            .iter()
            .filter_map(|id| catalog.get(id))
            .map(|proto| {
                serde_json::json!({
                    "id": proto.id(),
                    "name": proto.name(),
                    "kind": proto.kind().to_string(),
                    "payloads": proto.payload_count(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if ids.is_empty() {
        println!("{}", "No prototypes found.".yellow());
        return Ok(());
    }

    println!(
        "{} ({} prototypes)",
        "Catalog".cyan().bold(),
        ids.len().to_string().white().bold()
    );
    for id in ids {
        if let Some(proto) = catalog.get(id) {
            println!(
                "  {}  {:<14} {:>4} payloads  {}",
                id.green(),
                proto.kind().to_string(),
                proto.payload_count(),
                proto.name().white()
            );
        }
    }

    Ok(())
}
