use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::report::load_stock_file;

#[derive(Args, Debug, Clone)]
#[command(about = "Find items of one component type")]
pub struct SearchArgs {
    /// Stock file to load
    #[arg(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,

    /// Component type display name, e.g. "Resistor" or "Integrated Circuit"
    #[arg(value_name = "TYPE")]
    pub component_type: String,
}

pub fn execute(args: SearchArgs) -> Result<()> {
    let report = load_stock_file(&args.file)?;
    let matches = report.inventory.search(&args.component_type);

    println!(
        "{} record(s) of type {}, {} unit(s) in stock",
        matches.len(),
        args.component_type,
        report.inventory.stock_of_type(&args.component_type)
    );
    println!();
    for item in matches {
        println!("{item}");
    }

    Ok(())
}
