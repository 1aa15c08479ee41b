//! The owning inventory container and its query operations.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::item::{ComponentKind, DeviceType, StockItem};

/// Ordering for [`Inventory::sort_by_price`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PriceOrder {
    #[default]
    Ascending,
    Descending,
}

/// An ordered collection of stock items.
///
/// Items keep their insertion order until sorted. The inventory owns its
/// records outright; cloning an inventory deep-copies every item, so two
/// inventories never share a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<StockItem>,
}

impl Inventory {
    pub fn new() -> Self {
        Inventory::default()
    }

    /// Append an item, taking ownership of it.
    pub fn add(&mut self, item: StockItem) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `index`, or `None` past the end. Use indexing syntax when
    /// an out-of-bounds position is a caller bug and should panic.
    pub fn get(&self, index: usize) -> Option<&StockItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StockItem> {
        self.items.iter()
    }

    /// Reorder the whole inventory by unit price. The sort is stable: items
    /// with equal prices keep their relative order under either direction.
    pub fn sort_by_price(&mut self, order: PriceOrder) {
        match order {
            PriceOrder::Ascending => self.items.sort_by(|a, b| a.unit_price().cmp(&b.unit_price())),
            PriceOrder::Descending => {
                self.items.sort_by(|a, b| b.unit_price().cmp(&a.unit_price()))
            }
        }
    }

    /// All items whose component type display name equals `component_type`
    /// exactly, in their current inventory order. No match is an empty
    /// result, not an error.
    pub fn search(&self, component_type: &str) -> Vec<&StockItem> {
        self.items
            .iter()
            .filter(|item| item.component_type() == component_type)
            .collect()
    }

    /// The item with the largest stock amount; the earliest of equals wins.
    pub fn max_stock(&self) -> Option<&StockItem> {
        self.items.iter().reduce(|best, item| {
            if item.stock_amount() > best.stock_amount() {
                item
            } else {
                best
            }
        })
    }

    /// Total units of the given transistor family across the inventory.
    pub fn units_in_stock(&self, device_type: DeviceType) -> u64 {
        self.items
            .iter()
            .filter_map(|item| match item.kind() {
                ComponentKind::Transistor { device_type: dt } if *dt == device_type => {
                    Some(u64::from(item.stock_amount()))
                }
                _ => None,
            })
            .sum()
    }

    /// Sum of the resistance of every resistor record, in ohms.
    pub fn total_resistance(&self) -> f64 {
        self.items
            .iter()
            .filter_map(|item| match item.kind() {
                ComponentKind::Resistor { resistance } => Some(*resistance),
                _ => None,
            })
            .sum()
    }

    /// Total units held across every record of the given component type.
    pub fn stock_of_type(&self, component_type: &str) -> u64 {
        self.items
            .iter()
            .filter(|item| item.component_type() == component_type)
            .map(|item| u64::from(item.stock_amount()))
            .sum()
    }

    /// Number of records priced strictly above `pence`.
    pub fn count_priced_above(&self, pence: u32) -> usize {
        self.items
            .iter()
            .filter(|item| item.unit_price() > pence)
            .count()
    }
}

impl Index<usize> for Inventory {
    type Output = StockItem;

    /// Panics when `index` is out of bounds, like slice indexing; see
    /// [`Inventory::get`] for the checked variant.
    fn index(&self, index: usize) -> &StockItem {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a StockItem;
    type IntoIter = std::slice::Iter<'a, StockItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<StockItem> for Inventory {
    fn from_iter<T: IntoIterator<Item = StockItem>>(iter: T) -> Self {
        Inventory {
            items: iter.into_iter().collect(),
        }
    }
}
