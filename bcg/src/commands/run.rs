// bcg/src/commands/run.rs
//
// USE CASE: Generate the BCG workbook from the inventory.

use std::path::PathBuf;
use std::time::Instant;

use bcg_core::application::RepositoryTransformer;
use bcg_core::infrastructure::adapters::{CalamineInventorySource, XlsxPublishSink};
use bcg_core::infrastructure::diagnostics::ConsoleDiagnostics;

use miette::Report;

use super::load_config;

pub fn execute(config_path: PathBuf) -> miette::Result<()> {
    let start = Instant::now();

    // A. Load the Config (Infra)
    println!("⚙️  Loading configuration...");
    let config = load_config(&config_path)?;
    println!(
        "   Inventory: {} [{}]",
        config.inventory.location.display(),
        config.inventory.worksheet
    );
    println!(
        "   Target:    {} [{}]",
        config.target.workbook.display(),
        config.target.worksheet
    );

    // B. Wire the adapters and run (Application Layer)
    let source = CalamineInventorySource;
    let sink = XlsxPublishSink;
    let diagnostics = ConsoleDiagnostics;
    let transformer = RepositoryTransformer::new(
        config.inventory,
        config.target,
        &source,
        &sink,
        &diagnostics,
    );

    let report = transformer
        .run()
        .map_err(|e| Report::new(e).wrap_err("💥 CRITICAL PIPELINE ERROR"))?;

    println!("📊 Run Summary:");
    println!("   Rows read:        {}", report.rows_read);
    println!("   Assets indexed:   {}", report.assets_indexed);
    println!("   Duplicate keys:   {}", report.duplicate_keys);
    println!("   Not ready:        {}", report.not_ready);
    println!("   Incomplete:       {}", report.incomplete);
    println!("   Published:        {}", report.published);
    println!(
        "\n✨ SUCCESS! {} written in {:.2?}",
        report.output.display(),
        start.elapsed()
    );

    Ok(())
}
