//! Persisted format and schema upgrade
//!
//! Version 0 is what the first browser release wrote: a bare month object
//! whose items may lack any field, and history as a bare array. Version 1
//! adds a `schemaVersion` marker and wraps history in an object. Decoding
//! upgrades either version into the canonical in-memory records before the
//! store sees them.

use crate::error::{Error, Result};
use crate::storage::{CURRENT_MONTH_KEY, HISTORY_KEY};
use crate::types::{HistoryEntry, Item, ItemId, MonthList, Period, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const SCHEMA_VERSION: u32 = 1;

/// Decoded value plus the repairs made while upgrading it
#[derive(Debug, Clone, PartialEq)]
pub struct Upgraded<T> {
    pub value: T,
    pub from_version: u32,
    pub repairs: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MonthListRecord<'a> {
    schema_version: u32,
    #[serde(flatten)]
    list: &'a MonthList,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HistoryRecord<'a> {
    schema_version: u32,
    entries: &'a [HistoryEntry],
}

pub fn encode_month_list(list: &MonthList) -> Result<String> {
    Ok(serde_json::to_string(&MonthListRecord {
        schema_version: SCHEMA_VERSION,
        list,
    })?)
}

pub fn encode_history(history: &[HistoryEntry]) -> Result<String> {
    Ok(serde_json::to_string(&HistoryRecord {
        schema_version: SCHEMA_VERSION,
        entries: history,
    })?)
}

// Every field optional: version 0 writers added fields over time.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredMonthList {
    #[serde(default)]
    schema_version: u32,
    year: Option<i64>,
    month: Option<i64>,
    #[serde(default)]
    items: Option<Vec<StoredItem>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredItem {
    id: Option<serde_json::Value>,
    name: Option<String>,
    bought: Option<bool>,
    bought_quantity: Option<f64>,
    price_per_unit: Option<f64>,
    created_at: Option<f64>,
    bought_at: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredHistory {
    Versioned {
        #[serde(rename = "schemaVersion")]
        schema_version: u32,
        #[serde(default)]
        entries: Vec<StoredHistoryEntry>,
    },
    Legacy(Vec<StoredHistoryEntry>),
}

#[derive(Deserialize)]
struct StoredHistoryEntry {
    year: Option<i64>,
    month: Option<i64>,
    total: Option<f64>,
}

fn check_version(key: &str, version: u32) -> Result<()> {
    if version > SCHEMA_VERSION {
        return Err(Error::corrupt(
            key,
            format!("unsupported schema version {}", version),
        ));
    }
    Ok(())
}

fn period_of(year: Option<i64>, month: Option<i64>) -> Option<Period> {
    let year = i32::try_from(year?).ok()?;
    let month = u32::try_from(month?).ok()?;
    Period::new(year, month)
}

fn non_negative(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

fn timestamp(value: Option<f64>) -> Option<Timestamp> {
    value.filter(|v| v.is_finite()).map(|v| v as Timestamp)
}

/// Parses and upgrades the current month blob
///
/// # Arguments
/// * `text` - stored blob
/// * `now` - creation time given to items that never recorded one
/// * `fallback` - period used when the blob has none
pub fn decode_month_list(text: &str, now: Timestamp, fallback: Period) -> Result<Upgraded<MonthList>> {
    let stored: StoredMonthList = serde_json::from_str(text)
        .map_err(|e| Error::corrupt(CURRENT_MONTH_KEY, e.to_string()))?;
    check_version(CURRENT_MONTH_KEY, stored.schema_version)?;

    let mut repairs = Vec::new();
    let period = period_of(stored.year, stored.month).unwrap_or_else(|| {
        repairs.push(format!("missing or invalid period, using {}", fallback));
        fallback
    });

    let mut seen = HashSet::new();
    let mut items = Vec::new();
    for (index, stored_item) in stored.items.unwrap_or_default().into_iter().enumerate() {
        let name = stored_item.name.as_deref().map(str::trim).unwrap_or("");
        if name.is_empty() {
            repairs.push(format!("dropped item #{} without a name", index));
            continue;
        }

        let id = match stored_item.id {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => ItemId::from(s),
            Some(serde_json::Value::Number(n)) => ItemId::from(n.to_string()),
            _ => {
                repairs.push(format!("generated id for item '{}'", name));
                ItemId::generate()
            }
        };
        if !seen.insert(id.clone()) {
            repairs.push(format!("dropped duplicate id {}", id));
            continue;
        }

        let created_at = timestamp(stored_item.created_at).unwrap_or(now);
        let mut item = Item::new(id, name, created_at);
        if stored_item.bought.unwrap_or(false) {
            item.bought = true;
            item.bought_quantity = non_negative(stored_item.bought_quantity);
            item.price_per_unit = non_negative(stored_item.price_per_unit);
            item.bought_at = timestamp(stored_item.bought_at);
        }
        items.push(item);
    }

    Ok(Upgraded {
        value: MonthList {
            year: period.year,
            month: period.month,
            items,
        },
        from_version: stored.schema_version,
        repairs,
    })
}

/// Parses and upgrades the history blob
pub fn decode_history(text: &str) -> Result<Upgraded<Vec<HistoryEntry>>> {
    let stored: StoredHistory =
        serde_json::from_str(text).map_err(|e| Error::corrupt(HISTORY_KEY, e.to_string()))?;
    let (from_version, stored_entries) = match stored {
        StoredHistory::Versioned {
            schema_version,
            entries,
        } => (schema_version, entries),
        StoredHistory::Legacy(entries) => (0, entries),
    };
    check_version(HISTORY_KEY, from_version)?;

    let mut repairs = Vec::new();
    let mut history: Vec<HistoryEntry> = Vec::new();
    for (index, stored_entry) in stored_entries.into_iter().enumerate() {
        let Some(period) = period_of(stored_entry.year, stored_entry.month) else {
            repairs.push(format!("dropped history entry #{} with invalid period", index));
            continue;
        };
        let Some(total) = stored_entry.total.filter(|t| t.is_finite()) else {
            repairs.push(format!("dropped history entry {} without a total", period));
            continue;
        };

        let entry = HistoryEntry::new(period, total);
        match history.iter_mut().find(|e| e.period() == period) {
            Some(existing) => {
                repairs.push(format!("duplicate history entry {}, keeping the last", period));
                *existing = entry;
            }
            None => history.push(entry),
        }
    }

    Ok(Upgraded {
        value: history,
        from_version,
        repairs,
    })
}

/// History written on first run so the page is not empty
pub fn example_history() -> Vec<HistoryEntry> {
    vec![
        HistoryEntry::new(Period { year: 2025, month: 3 }, 450.75),
        HistoryEntry::new(Period { year: 2025, month: 4 }, 620.3),
        HistoryEntry::new(Period { year: 2025, month: 5 }, 387.9),
    ]
}
