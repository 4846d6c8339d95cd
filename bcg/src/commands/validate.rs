// bcg/src/commands/validate.rs
//
// USE CASE: Check a run configuration without touching any workbook.

use std::path::PathBuf;

use super::load_config;

pub fn execute(config_path: PathBuf) -> miette::Result<()> {
    let config = load_config(&config_path)?;

    println!("✅ Configuration is valid: {}", config_path.display());
    println!(
        "   Inventory: {} [{}] ({} columns)",
        config.inventory.location.display(),
        config.inventory.worksheet,
        config.inventory.columns.len()
    );
    println!(
        "   Target:    {} [{}]",
        config.target.workbook.display(),
        config.target.worksheet
    );
    println!("   Columns:   {}", config.target.columns.join(", "));

    Ok(())
}
