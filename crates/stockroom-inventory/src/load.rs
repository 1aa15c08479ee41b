//! Loading stock records from the comma-delimited stock file format.
//!
//! One record per line: type tag, stock code, stock amount, unit price, then
//! the variant-specific field (a resistance or capacitance code, a device
//! type, or a description). Diodes carry no fifth field. Fields may be
//! padded with whitespace; the reader trims it.
//!
//! A record that cannot be understood is skipped, logged and reported back
//! to the caller; one bad line never rejects the file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::warn;
use thiserror::Error;

use crate::codes::{self, CodeError};
use crate::inventory::Inventory;
use crate::item::{ComponentKind, DeviceType, StockItem, ValidationError};

/// Why a single record was dropped during a load.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("unknown component type tag '{0}'")]
    UnknownType(String),

    #[error("record is missing its {0} field")]
    MissingField(&'static str),

    #[error("{field} '{value}' is not an integer")]
    InvalidNumber { field: &'static str, value: String },

    #[error("record could not be split into fields: {0}")]
    Malformed(csv::Error),

    #[error(transparent)]
    Code(#[from] CodeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Reader-level failures that abort the whole load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read stock records: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A record dropped during loading, with the line it came from.
#[derive(Debug)]
pub struct SkippedRecord {
    pub line: u64,
    pub reason: RecordError,
}

/// The outcome of a load: the inventory plus every record that was skipped.
#[derive(Debug)]
pub struct LoadReport {
    pub inventory: Inventory,
    pub skipped: Vec<SkippedRecord>,
}

/// Parse one delimited record (already split and trimmed) into a stock item.
///
/// Dispatches on the case-sensitive type tag: "resistor", "capacitor",
/// "transistor", "diode" or "IC".
pub fn parse_record(fields: &[&str]) -> Result<StockItem, RecordError> {
    let tag = field(fields, 0, "component type tag")?;
    let stock_code = field(fields, 1, "stock code")?;
    let stock_amount = int_field(fields, 2, "stock amount")?;
    let unit_price = int_field(fields, 3, "unit price")?;

    let kind = match tag {
        "resistor" => ComponentKind::Resistor {
            resistance: codes::parse_resistance(field(fields, 4, "resistance code")?)?,
        },
        "capacitor" => ComponentKind::Capacitor {
            capacitance: codes::parse_capacitance(field(fields, 4, "capacitance code")?)?,
        },
        "transistor" => ComponentKind::Transistor {
            device_type: field(fields, 4, "device type")?.parse::<DeviceType>()?,
        },
        "diode" => ComponentKind::Diode,
        "IC" => ComponentKind::IntegratedCircuit {
            description: field(fields, 4, "description")?.to_string(),
        },
        other => return Err(RecordError::UnknownType(other.to_string())),
    };

    Ok(StockItem::new(stock_code, stock_amount, unit_price, kind)?)
}

fn field<'a>(fields: &[&'a str], index: usize, name: &'static str) -> Result<&'a str, RecordError> {
    fields
        .get(index)
        .copied()
        .filter(|f| !f.is_empty())
        .ok_or(RecordError::MissingField(name))
}

fn int_field(fields: &[&str], index: usize, name: &'static str) -> Result<i64, RecordError> {
    let raw = field(fields, index, name)?;
    raw.parse().map_err(|_| RecordError::InvalidNumber {
        field: name,
        value: raw.to_string(),
    })
}

/// Read every record from `reader`, skipping and reporting the ones that
/// fail. Only reader-level I/O problems abort the load.
pub fn load_inventory<R: Read>(reader: R) -> Result<LoadReport, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut inventory = Inventory::new();
    let mut skipped = Vec::new();
    let mut skip = |line: u64, reason: RecordError| {
        warn!("skipping stock record at line {line}: {reason}");
        skipped.push(SkippedRecord { line, reason });
    };

    for result in csv_reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                let line = err.position().map_or(0, |p| p.line());
                skip(line, RecordError::Malformed(err));
                continue;
            }
        };

        // Lines of only whitespace come through as one empty field.
        if record.iter().all(str::is_empty) {
            continue;
        }

        let line = record.position().map_or(0, |p| p.line());
        let fields: Vec<&str> = record.iter().collect();
        match parse_record(&fields) {
            Ok(item) => inventory.add(item),
            Err(reason) => skip(line, reason),
        }
    }

    Ok(LoadReport {
        inventory,
        skipped,
    })
}

/// Load an inventory from a stock file on disk.
pub fn load_inventory_file(path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
    load_inventory(File::open(path)?)
}
