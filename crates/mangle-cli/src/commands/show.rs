//! Show command - display one prototype in full.

use std::path::PathBuf;

use colored::Colorize;

use super::load_catalog;

pub fn run(
    file: Option<PathBuf>,
    id: String,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(file, verbose)?;

    let proto = catalog
        .get(&id)
        .ok_or_else(|| format!("No prototype with id '{}'", id))?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(proto)?);
        return Ok(());
    }

    println!("{} {}", "Prototype".cyan().bold(), proto.id().green().bold());
    println!("  Name:       {}", proto.name().white());
    println!("  Kind:       {}", proto.kind());
    println!(
        "  Categories: {}",
        proto.categories().collect::<Vec<_>>().join(", ")
    );
    println!("  Payloads:   {}", proto.payload_count());
    println!();

    for (ordinal, payload) in proto.payloads().iter().enumerate() {
        if payload.is_empty() {
            println!("  {:>3}  {}", ordinal, "(empty)".dimmed());
        } else {
            println!("  {:>3}  {}", ordinal, payload);
        }
    }

    Ok(())
}
