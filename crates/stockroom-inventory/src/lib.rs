//! Typed stock records and inventory queries for an electronics parts
//! stockroom.
//!
//! The central structure is [`Inventory`], an ordered collection that
//! exclusively owns its [`StockItem`] records. Records enter the system
//! through the [`load`] module, which reads the comma-delimited stock file
//! format one record per line and skips (but reports) anything it cannot
//! understand. The model is serialisable using `serde` so that listings can
//! be stored or transferred as JSON.
//!
//! Component values arrive encoded as compact industry codes ("4R7",
//! "100n"); the [`codes`] module converts them to ohms and picofarads.

pub mod codes;
pub mod inventory;
pub mod item;
pub mod load;

pub use codes::CodeError;
pub use inventory::{Inventory, PriceOrder};
pub use item::{ComponentKind, DeviceType, StockItem, ValidationError};
pub use load::{
    load_inventory, load_inventory_file, LoadError, LoadReport, RecordError, SkippedRecord,
};
