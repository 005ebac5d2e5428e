//! View projection
//!
//! Derives what the renderer shows from stored state plus the transient
//! search term and sort mode. Pure functions; the source list is never
//! reordered.

use crate::format::month_year_label;
use crate::types::{HistoryEntry, Item, ItemId, MonthList, Period};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Item ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortMode {
    /// Creation order
    #[default]
    Default,
    /// By name, ignoring case and accents
    Alphabetical,
    /// Unbought first in creation order, then bought in purchase order
    BoughtLast,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::Alphabetical => "alphabetical",
            SortMode::BoughtLast => "boughtLast",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Default => "Ordem de criação",
            SortMode::Alphabetical => "Ordem alfabética",
            SortMode::BoughtLast => "Pegos por último",
        }
    }

    pub fn all() -> [SortMode; 3] {
        [SortMode::Default, SortMode::Alphabetical, SortMode::BoughtLast]
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SortMode::Default),
            "alphabetical" | "alpha" => Ok(SortMode::Alphabetical),
            "boughtLast" | "bought-last" => Ok(SortMode::BoughtLast),
            _ => Err(format!(
                "Unknown sort mode: {}. Use default, alphabetical, or boughtLast",
                s
            )),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient UI state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewQuery {
    pub search: String,
    pub sort: SortMode,
}

impl ViewQuery {
    pub fn new(search: impl Into<String>, sort: SortMode) -> Self {
        Self {
            search: search.into(),
            sort,
        }
    }
}

/// One displayed item
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub id: ItemId,
    pub name: String,
    pub bought: bool,
    pub quantity: f64,
    pub price_per_unit: f64,
    pub line_total: f64,
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            bought: item.bought,
            quantity: item.bought_quantity,
            price_per_unit: item.price_per_unit,
            line_total: item.line_total(),
        }
    }
}

/// Why there are no rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    NoItems,
    NoMatches,
}

impl EmptyState {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::NoItems => "Nenhum item adicionado ainda.",
            EmptyState::NoMatches => "Nenhum item corresponde à pesquisa.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub rows: Vec<ItemRow>,
    pub current_total: f64,
    pub historical_average: f64,
    pub empty_state: Option<EmptyState>,
}

/// Archived month as displayed
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub period: Period,
    pub label: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryView {
    /// Most recent first
    pub rows: Vec<HistoryRow>,
    pub average: f64,
}

/// Sum of quantity × price over bought items
pub fn current_total(items: &[Item]) -> f64 {
    items.iter().map(Item::line_total).sum()
}

/// Mean archived total, 0 for an empty history
pub fn historical_average(history: &[HistoryEntry]) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    history.iter().map(|entry| entry.total).sum::<f64>() / history.len() as f64
}

/// Filtered and sorted rows plus both aggregates
pub fn project(list: &MonthList, history: &[HistoryEntry], query: &ViewQuery) -> Projection {
    let term = query.search.trim().to_lowercase();

    let mut visible: Vec<&Item> = list
        .items
        .iter()
        .filter(|item| term.is_empty() || item.name.to_lowercase().contains(&term))
        .collect();

    // sort_by is stable; equal keys keep list order
    match query.sort {
        SortMode::Default => visible.sort_by_key(|item| item.created_at),
        SortMode::Alphabetical => visible.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortMode::BoughtLast => visible.sort_by(|a, b| compare_bought_last(a, b)),
    }

    let empty_state = if !visible.is_empty() {
        None
    } else if list.items.is_empty() {
        Some(EmptyState::NoItems)
    } else {
        Some(EmptyState::NoMatches)
    };

    Projection {
        rows: visible.into_iter().map(ItemRow::from).collect(),
        current_total: current_total(&list.items),
        historical_average: historical_average(history),
        empty_state,
    }
}

/// History rows, most recent first, with the average
pub fn history_view(history: &[HistoryEntry]) -> HistoryView {
    let mut entries: Vec<&HistoryEntry> = history.iter().collect();
    entries.sort_by(|a, b| b.period().cmp(&a.period()));

    HistoryView {
        rows: entries
            .into_iter()
            .map(|entry| HistoryRow {
                period: entry.period(),
                label: month_year_label(entry.period()),
                total: entry.total,
            })
            .collect(),
        average: historical_average(history),
    }
}

fn compare_bought_last(a: &Item, b: &Item) -> Ordering {
    match (a.bought, b.bought) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => a.bought_at.unwrap_or(0).cmp(&b.bought_at.unwrap_or(0)),
        (false, false) => a.created_at.cmp(&b.created_at),
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Lowercased name with Portuguese diacritics folded
fn collation_key(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, created_at: i64) -> Item {
        Item::new(ItemId::from(id), name, created_at)
    }

    fn bought(mut item: Item, quantity: f64, price: f64, at: i64) -> Item {
        item.bought = true;
        item.bought_quantity = quantity;
        item.price_per_unit = price;
        item.bought_at = Some(at);
        item
    }

    fn list(items: Vec<Item>) -> MonthList {
        MonthList {
            year: 2025,
            month: 5,
            items,
        }
    }

    fn ids(projection: &Projection) -> Vec<&str> {
        projection.rows.iter().map(|row| row.id.as_str()).collect()
    }

    #[test]
    fn test_current_total_counts_bought_only() {
        let items = vec![
            bought(item("a", "Arroz", 1), 3.0, 2.5, 10),
            bought(item("b", "Feijão", 2), 1.0, 10.0, 11),
            item("c", "Café", 3),
        ];
        assert!((current_total(&items) - 17.5).abs() < 1e-9);
    }

    #[test]
    fn test_historical_average() {
        let history = vec![
            HistoryEntry::new(Period { year: 2025, month: 3 }, 450.75),
            HistoryEntry::new(Period { year: 2025, month: 4 }, 620.30),
            HistoryEntry::new(Period { year: 2025, month: 5 }, 387.90),
        ];
        assert!((historical_average(&history) - 486.316_666).abs() < 1e-4);
        assert!((historical_average(&history[1..]) - 504.1).abs() < 1e-9);
    }

    #[test]
    fn test_historical_average_empty_is_zero() {
        assert_eq!(historical_average(&[]), 0.0);
    }

    #[test]
    fn test_bought_last_order() {
        let items = vec![
            item("A", "A", 1),
            bought(item("B", "B", 3), 1.0, 1.0, 5),
            item("C", "C", 2),
            bought(item("D", "D", 4), 1.0, 1.0, 3),
        ];
        let projection = project(
            &list(items),
            &[],
            &ViewQuery::new("", SortMode::BoughtLast),
        );
        assert_eq!(ids(&projection), vec!["A", "C", "D", "B"]);
    }

    #[test]
    fn test_default_order_is_creation_and_stable() {
        let items = vec![item("x", "X", 5), item("y", "Y", 1), item("z", "Z", 5)];
        let projection = project(&list(items), &[], &ViewQuery::default());
        assert_eq!(ids(&projection), vec!["y", "x", "z"]);
    }

    #[test]
    fn test_alphabetical_ignores_case_and_accents() {
        let items = vec![
            item("1", "pão", 1),
            item("2", "Açúcar", 2),
            item("3", "banana", 3),
            item("4", "Ovos", 4),
        ];
        let projection = project(
            &list(items),
            &[],
            &ViewQuery::new("", SortMode::Alphabetical),
        );
        let names: Vec<&str> = projection.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Açúcar", "banana", "Ovos", "pão"]);
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let items = vec![
            item("1", "Leite integral", 1),
            item("2", "Pão", 2),
            item("3", "leite condensado", 3),
        ];
        let projection = project(&list(items), &[], &ViewQuery::new("  LEITE ", SortMode::Default));
        assert_eq!(ids(&projection), vec!["1", "3"]);
        assert_eq!(projection.empty_state, None);
    }

    #[test]
    fn test_search_does_not_affect_total() {
        let items = vec![
            bought(item("1", "Leite", 1), 2.0, 4.0, 2),
            bought(item("2", "Pão", 2), 1.0, 7.0, 3),
        ];
        let projection = project(&list(items), &[], &ViewQuery::new("leite", SortMode::Default));
        assert_eq!(projection.rows.len(), 1);
        assert!((projection.current_total - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_states() {
        let empty = project(&list(vec![]), &[], &ViewQuery::default());
        assert_eq!(empty.empty_state, Some(EmptyState::NoItems));

        let no_match = project(
            &list(vec![item("1", "Arroz", 1)]),
            &[],
            &ViewQuery::new("queijo", SortMode::Default),
        );
        assert_eq!(no_match.empty_state, Some(EmptyState::NoMatches));
        assert_eq!(no_match.empty_state.unwrap().message(), "Nenhum item corresponde à pesquisa.");
    }

    #[test]
    fn test_project_does_not_reorder_source() {
        let source = list(vec![item("b", "B", 2), item("a", "A", 1)]);
        let _ = project(&source, &[], &ViewQuery::new("", SortMode::Alphabetical));
        assert_eq!(source.items[0].id.as_str(), "b");
    }

    #[test]
    fn test_history_view_most_recent_first() {
        let history = vec![
            HistoryEntry::new(Period { year: 2024, month: 11 }, 100.0),
            HistoryEntry::new(Period { year: 2025, month: 1 }, 300.0),
            HistoryEntry::new(Period { year: 2025, month: 0 }, 200.0),
        ];
        let view = history_view(&history);
        let labels: Vec<&str> = view.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Fevereiro de 2025", "Janeiro de 2025", "Dezembro de 2024"]);
        assert!((view.average - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_sort_mode_parse() {
        assert_eq!("boughtLast".parse::<SortMode>(), Ok(SortMode::BoughtLast));
        assert_eq!("alphabetical".parse::<SortMode>(), Ok(SortMode::Alphabetical));
        assert!("random".parse::<SortMode>().is_err());
        for mode in SortMode::all() {
            assert_eq!(mode.as_str().parse::<SortMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_sort_mode_serde_names() {
        let json = serde_json::to_string(&SortMode::BoughtLast).unwrap();
        assert_eq!(json, "\"boughtLast\"");
    }
}
