use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::Table;
use stockroom_inventory::{codes, ComponentKind, Inventory, PriceOrder};

use crate::report::load_stock_file;

#[derive(ValueEnum, Debug, Clone, Default)]
pub enum ListFormat {
    #[default]
    Table,
    Json,
    Blocks,
}

impl std::fmt::Display for ListFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListFormat::Table => write!(f, "table"),
            ListFormat::Json => write!(f, "json"),
            ListFormat::Blocks => write!(f, "blocks"),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl From<SortDirection> for PriceOrder {
    fn from(direction: SortDirection) -> PriceOrder {
        match direction {
            SortDirection::Asc => PriceOrder::Ascending,
            SortDirection::Desc => PriceOrder::Descending,
        }
    }
}

#[derive(Args, Debug, Clone)]
#[command(about = "List the contents of a stock file")]
pub struct ListArgs {
    /// Stock file to load
    #[arg(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,

    /// Sort by unit price before listing
    #[arg(short, long, value_name = "DIRECTION")]
    pub sort: Option<SortDirection>,

    /// Output format
    #[arg(short, long, default_value_t = ListFormat::Table)]
    pub format: ListFormat,
}

pub fn execute(args: ListArgs) -> Result<()> {
    let report = load_stock_file(&args.file)?;
    let mut inventory = report.inventory;

    if let Some(direction) = args.sort {
        inventory.sort_by_price(direction.into());
    }

    let mut writer = io::stdout().lock();
    match args.format {
        ListFormat::Json => writeln!(writer, "{}", serde_json::to_string_pretty(&inventory)?)?,
        ListFormat::Table => write_stock_table(&inventory, writer)?,
        ListFormat::Blocks => {
            for item in &inventory {
                writeln!(writer, "{item}")?;
            }
        }
    }

    Ok(())
}

fn write_stock_table<W: Write>(inventory: &Inventory, mut writer: W) -> io::Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        "Stock Code",
        "Component Type",
        "Stock Amount",
        "Unit Price",
        "Detail",
    ]);

    for item in inventory {
        let detail = match item.kind() {
            ComponentKind::Resistor { resistance } => codes::format_ohms(*resistance),
            ComponentKind::Capacitor { capacitance } => codes::format_picofarads(*capacitance),
            ComponentKind::Diode => String::new(),
            ComponentKind::Transistor { device_type } => device_type.to_string(),
            ComponentKind::IntegratedCircuit { description } => description.clone(),
        };
        table.add_row(vec![
            item.stock_code().to_string(),
            item.component_type().to_string(),
            item.stock_amount().to_string(),
            format!("{}p", item.unit_price()),
            detail,
        ]);
    }

    writeln!(writer, "{table}")?;
    Ok(())
}
