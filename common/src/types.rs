//! Shopping list data model
//!
//! Shared by the browser app and the CLI:
//! - Item: one entry of the current month's list
//! - MonthList: the working list for one calendar month
//! - HistoryEntry: frozen total of an archived month

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Milliseconds since the Unix epoch
pub type Timestamp = i64;

/// Opaque item identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Fresh random id
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, for compact display
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Calendar month. `month` is zero-indexed (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub const MIN_YEAR: i32 = 1;
    pub const MAX_YEAR: i32 = 9999;

    /// Returns None when `month` is outside 0..=11 or `year` outside 1..=9999
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let year_ok = (Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year);
        (year_ok && month < 12).then_some(Self { year, month })
    }

    /// The following month, rolling the year after December
    pub fn next(self) -> Self {
        if self.month >= 11 {
            Self { year: self.year.saturating_add(1), month: 0 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn previous(self) -> Self {
        if self.month == 0 {
            Self { year: self.year.saturating_sub(1), month: 11 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }
}

/// `YYYY-MM` with a 1-based month
impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month + 1)
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid period: {}. Use YYYY-MM", s);
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if month == 0 {
            return Err(invalid());
        }
        Period::new(year, month - 1).ok_or_else(invalid)
    }
}

/// Shopping list item
///
/// Unbought items always carry zero quantity and price and no `bought_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub bought: bool,
    pub bought_quantity: f64,
    pub price_per_unit: f64,
    pub created_at: Timestamp,
    pub bought_at: Option<Timestamp>,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            id,
            name: name.into(),
            bought: false,
            bought_quantity: 0.0,
            price_per_unit: 0.0,
            created_at,
            bought_at: None,
        }
    }

    /// quantity × price for bought items, 0 otherwise
    pub fn line_total(&self) -> f64 {
        if self.bought {
            self.bought_quantity * self.price_per_unit
        } else {
            0.0
        }
    }

    /// Drops the purchase record
    pub(crate) fn clear_purchase(&mut self) {
        self.bought = false;
        self.bought_quantity = 0.0;
        self.price_per_unit = 0.0;
        self.bought_at = None;
    }
}

/// Working list of one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthList {
    pub year: i32,
    pub month: u32,
    pub items: Vec<Item>,
}

impl MonthList {
    pub fn empty(period: Period) -> Self {
        Self {
            year: period.year,
            month: period.month,
            items: Vec::new(),
        }
    }

    pub fn period(&self) -> Period {
        Period {
            year: self.year,
            month: self.month,
        }
    }

    pub fn find(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub(crate) fn find_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| &item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Archived month total. Never recomputed after archival.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub year: i32,
    pub month: u32,
    pub total: f64,
}

impl HistoryEntry {
    pub fn new(period: Period, total: f64) -> Self {
        Self {
            year: period.year,
            month: period.month,
            total,
        }
    }

    pub fn period(&self) -> Period {
        Period {
            year: self.year,
            month: self.month,
        }
    }
}

/// Numeric field editable on a bought item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoughtField {
    Quantity,
    PricePerUnit,
}

impl FromStr for BoughtField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quantity" | "boughtQuantity" | "q" => Ok(BoughtField::Quantity),
            "price" | "pricePerUnit" | "p" => Ok(BoughtField::PricePerUnit),
            _ => Err(format!("Unknown field: {}. Use quantity or price", s)),
        }
    }
}
