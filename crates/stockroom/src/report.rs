use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use stockroom_inventory::codes::format_ohms;
use stockroom_inventory::{DeviceType, LoadReport, PriceOrder};

#[derive(Args, Debug, Clone)]
#[command(about = "Answer the stock queries for a stock file")]
pub struct ReportArgs {
    /// Stock file to load
    #[arg(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,

    /// Price threshold in pence for the final query
    #[arg(long, value_name = "PENCE", default_value_t = 100)]
    pub above: u32,
}

pub fn execute(args: ReportArgs) -> Result<()> {
    let report = load_stock_file(&args.file)?;
    let mut inventory = report.inventory;

    inventory.sort_by_price(PriceOrder::Descending);

    println!(
        "Inventory by unit price, most expensive first ({} items):",
        inventory.len()
    );
    println!();
    for item in &inventory {
        println!("{item}");
    }

    if let Some(largest) = inventory.max_stock() {
        println!("Largest stock amount:");
        println!("{largest}");
    }

    println!(
        "NPN transistors in stock: {}",
        inventory.units_in_stock(DeviceType::Npn)
    );
    println!(
        "Total resistance of all resistors: {}",
        format_ohms(inventory.total_resistance())
    );
    println!(
        "Items costing more than {}p: {}",
        args.above,
        inventory.count_priced_above(args.above)
    );

    Ok(())
}

/// Load a stock file, turning reader-level failures into CLI errors.
/// Per-record failures were already logged by the loader and stay in the
/// returned report.
pub(crate) fn load_stock_file(path: &Path) -> Result<LoadReport> {
    stockroom_inventory::load_inventory_file(path)
        .with_context(|| format!("failed to load stock file {}", path.display()))
}
