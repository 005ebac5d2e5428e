//! Month archival
//!
//! Closes the current month into history and opens the next calendar month.

use crate::error::ValidationError;
use crate::types::{HistoryEntry, MonthList};
use crate::view::current_total;

/// What to do when the month being archived has no items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyMonthRule {
    /// Archive with a zero total
    #[default]
    Allow,
    /// Refuse with `ValidationError::EmptyMonth`
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArchivalPolicy {
    pub empty_month: EmptyMonthRule,
}

/// Result of archiving; replaces the store's month and history together
#[derive(Debug, Clone, PartialEq)]
pub struct Archived {
    pub entry: HistoryEntry,
    /// Entry for the same period that `entry` replaced
    pub replaced: Option<HistoryEntry>,
    pub history: Vec<HistoryEntry>,
    pub next: MonthList,
}

impl ArchivalPolicy {
    pub fn rejecting_empty() -> Self {
        Self {
            empty_month: EmptyMonthRule::Reject,
        }
    }

    /// Freezes the total of `list` into history and returns the next empty month
    ///
    /// An existing entry for the same (year, month) is replaced in place so
    /// history stays unique by period.
    pub fn archive(
        &self,
        list: &MonthList,
        history: &[HistoryEntry],
    ) -> Result<Archived, ValidationError> {
        if self.empty_month == EmptyMonthRule::Reject && list.is_empty() {
            return Err(ValidationError::EmptyMonth);
        }

        let period = list.period();
        let entry = HistoryEntry::new(period, current_total(&list.items));

        let mut new_history = history.to_vec();
        let replaced = match new_history.iter_mut().find(|e| e.period() == period) {
            Some(existing) => Some(std::mem::replace(existing, entry)),
            None => {
                new_history.push(entry);
                None
            }
        };

        Ok(Archived {
            entry,
            replaced,
            history: new_history,
            next: MonthList::empty(period.next()),
        })
    }
}
