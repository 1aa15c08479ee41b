//! The stock item record and its component variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codes;

/// Errors raised when a stock item field violates a domain invariant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("stock amount must be a non-negative integer (got {0})")]
    InvalidStockAmount(i64),

    #[error("unit price must be a positive number of pence (got {0})")]
    InvalidUnitPrice(i64),

    #[error("unknown transistor device type '{0}' (expected NPN, PNP or FET)")]
    UnknownDeviceType(String),
}

/// Transistor family classification.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeviceType {
    Npn,
    Pnp,
    Fet,
}

impl FromStr for DeviceType {
    type Err = ValidationError;

    // Tags are case-sensitive: "npn" is not a device type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NPN" => Ok(DeviceType::Npn),
            "PNP" => Ok(DeviceType::Pnp),
            "FET" => Ok(DeviceType::Fet),
            _ => Err(ValidationError::UnknownDeviceType(s.to_string())),
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeviceType::Npn => "NPN",
            DeviceType::Pnp => "PNP",
            DeviceType::Fet => "FET",
        };
        write!(f, "{name}")
    }
}

/// The component-specific payload of a stock item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "component_type")]
pub enum ComponentKind {
    /// Resistance in ohms, converted from a code such as "4R7".
    Resistor { resistance: f64 },
    /// Capacitance in picofarads, converted from a code such as "100n".
    Capacitor { capacitance: f64 },
    Diode,
    Transistor { device_type: DeviceType },
    IntegratedCircuit { description: String },
}

impl ComponentKind {
    /// The fixed display name of this component category. Search and report
    /// output match on these exact strings.
    pub fn name(&self) -> &'static str {
        match self {
            ComponentKind::Resistor { .. } => "Resistor",
            ComponentKind::Capacitor { .. } => "Capacitor",
            ComponentKind::Diode => "Diode",
            ComponentKind::Transistor { .. } => "Transistor",
            ComponentKind::IntegratedCircuit { .. } => "Integrated Circuit",
        }
    }
}

/// One inventory record for an electronic component.
///
/// Stock codes are identifier-like but not required to be unique. The stock
/// amount is never negative and the unit price (in pence) is always positive;
/// construction and mutation enforce both rather than clamping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    stock_code: String,
    stock_amount: u32,
    unit_price: u32,
    #[serde(flatten)]
    kind: ComponentKind,
}

impl StockItem {
    /// Build a validated stock item. Fails without constructing anything if
    /// the stock amount is negative or the unit price is not positive.
    pub fn new(
        stock_code: impl Into<String>,
        stock_amount: i64,
        unit_price: i64,
        kind: ComponentKind,
    ) -> Result<Self, ValidationError> {
        Ok(StockItem {
            stock_code: stock_code.into(),
            stock_amount: validate_stock_amount(stock_amount)?,
            unit_price: validate_unit_price(unit_price)?,
            kind,
        })
    }

    pub fn stock_code(&self) -> &str {
        &self.stock_code
    }

    pub fn stock_amount(&self) -> u32 {
        self.stock_amount
    }

    /// Unit price in pence.
    pub fn unit_price(&self) -> u32 {
        self.unit_price
    }

    pub fn kind(&self) -> &ComponentKind {
        &self.kind
    }

    /// The display name of this item's component category.
    pub fn component_type(&self) -> &'static str {
        self.kind.name()
    }

    pub fn set_stock_code(&mut self, stock_code: impl Into<String>) {
        self.stock_code = stock_code.into();
    }

    /// Replace the stock amount; the item is untouched on failure.
    pub fn set_stock_amount(&mut self, stock_amount: i64) -> Result<(), ValidationError> {
        self.stock_amount = validate_stock_amount(stock_amount)?;
        Ok(())
    }

    /// Replace the unit price; the item is untouched on failure.
    pub fn set_unit_price(&mut self, unit_price: i64) -> Result<(), ValidationError> {
        self.unit_price = validate_unit_price(unit_price)?;
        Ok(())
    }
}

fn validate_stock_amount(amount: i64) -> Result<u32, ValidationError> {
    u32::try_from(amount).map_err(|_| ValidationError::InvalidStockAmount(amount))
}

fn validate_unit_price(price: i64) -> Result<u32, ValidationError> {
    match u32::try_from(price) {
        Ok(p) if p > 0 => Ok(p),
        _ => Err(ValidationError::InvalidUnitPrice(price)),
    }
}

impl fmt::Display for StockItem {
    /// The fixed-field report block: common fields on four lines, then one
    /// variant-specific line (none for diodes).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Component Type: {}", self.component_type())?;
        writeln!(f, "Stock Code: {}", self.stock_code)?;
        writeln!(f, "Stock Amount: {}", self.stock_amount)?;
        writeln!(f, "Unit Price: {}p", self.unit_price)?;
        match &self.kind {
            ComponentKind::Resistor { resistance } => {
                writeln!(f, "Total Resistance: {}", codes::format_ohms(*resistance))
            }
            ComponentKind::Capacitor { capacitance } => {
                writeln!(
                    f,
                    "Total Capacitance: {}",
                    codes::format_picofarads(*capacitance)
                )
            }
            ComponentKind::Diode => Ok(()),
            ComponentKind::Transistor { device_type } => {
                writeln!(f, "Device Type: {device_type}")
            }
            ComponentKind::IntegratedCircuit { description } => {
                writeln!(f, "Description: {description}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_validates_fields() {
        assert_eq!(
            StockItem::new("D1", -1, 4, ComponentKind::Diode),
            Err(ValidationError::InvalidStockAmount(-1))
        );
        assert_eq!(
            StockItem::new("D1", 5, 0, ComponentKind::Diode),
            Err(ValidationError::InvalidUnitPrice(0))
        );
        assert_eq!(
            StockItem::new("D1", 5, -4, ComponentKind::Diode),
            Err(ValidationError::InvalidUnitPrice(-4))
        );

        let item = StockItem::new("D1", 0, 1, ComponentKind::Diode).unwrap();
        assert_eq!(item.stock_amount(), 0);
        assert_eq!(item.unit_price(), 1);
    }

    #[test]
    fn setters_validate_and_leave_item_untouched_on_failure() {
        let mut item = StockItem::new("D1", 5, 4, ComponentKind::Diode).unwrap();

        assert_eq!(
            item.set_stock_amount(-3),
            Err(ValidationError::InvalidStockAmount(-3))
        );
        assert_eq!(item.stock_amount(), 5);

        assert_eq!(
            item.set_unit_price(0),
            Err(ValidationError::InvalidUnitPrice(0))
        );
        assert_eq!(item.unit_price(), 4);

        item.set_stock_amount(7).unwrap();
        item.set_unit_price(9).unwrap();
        assert_eq!((item.stock_amount(), item.unit_price()), (7, 9));
    }

    #[test]
    fn device_type_tags_are_case_sensitive() {
        assert_eq!("NPN".parse::<DeviceType>(), Ok(DeviceType::Npn));
        assert_eq!("PNP".parse::<DeviceType>(), Ok(DeviceType::Pnp));
        assert_eq!("FET".parse::<DeviceType>(), Ok(DeviceType::Fet));
        assert_eq!(
            "npn".parse::<DeviceType>(),
            Err(ValidationError::UnknownDeviceType("npn".to_string()))
        );
        assert!("type".parse::<DeviceType>().is_err());
    }

    #[test]
    fn report_blocks() {
        let resistor = StockItem::new(
            "R1",
            5,
            4,
            ComponentKind::Resistor {
                resistance: 5_100_000.0,
            },
        )
        .unwrap();
        assert_eq!(
            resistor.to_string(),
            "Component Type: Resistor\n\
             Stock Code: R1\n\
             Stock Amount: 5\n\
             Unit Price: 4p\n\
             Total Resistance: 5100000.00ohms\n"
        );

        let capacitor = StockItem::new(
            "C1",
            5,
            4,
            ComponentKind::Capacitor { capacitance: 2400.0 },
        )
        .unwrap();
        assert!(capacitor.to_string().ends_with("Total Capacitance: 2400pf\n"));

        let diode = StockItem::new("D1", 2, 3, ComponentKind::Diode).unwrap();
        assert!(diode.to_string().ends_with("Unit Price: 3p\n"));

        let transistor = StockItem::new(
            "T1",
            2,
            3,
            ComponentKind::Transistor {
                device_type: DeviceType::Npn,
            },
        )
        .unwrap();
        assert!(transistor.to_string().ends_with("Device Type: NPN\n"));

        let ic = StockItem::new(
            "I1",
            2,
            3,
            ComponentKind::IntegratedCircuit {
                description: "quad 2-input NAND".to_string(),
            },
        )
        .unwrap();
        assert!(ic
            .to_string()
            .ends_with("Description: quad 2-input NAND\n"));
    }

    #[test]
    fn tagged_serde_roundtrip() {
        // The component variant is encoded with a component_type tag so the
        // flattened JSON stays self-describing.
        let item = StockItem::new(
            "R1",
            5,
            4,
            ComponentKind::Resistor { resistance: 4.7 },
        )
        .unwrap();

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["component_type"], "Resistor");
        assert_eq!(json["stock_code"], "R1");
        assert_eq!(json["resistance"], 4.7);

        let back: StockItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);

        let transistor_json = r#"{
            "stock_code": "T9",
            "stock_amount": 2,
            "unit_price": 30,
            "component_type": "Transistor",
            "device_type": "NPN"
        }"#;
        let transistor: StockItem = serde_json::from_str(transistor_json).unwrap();
        assert_eq!(
            transistor.kind(),
            &ComponentKind::Transistor {
                device_type: DeviceType::Npn
            }
        );
    }
}
