//! Shopping List Common Library
//!
//! Core shared by the browser app and the CLI: the list store, the view
//! projection and month archival. Host environments plug in through the
//! `Storage` and `Clock` traits.

pub mod types;
pub mod error;
pub mod clock;
pub mod storage;
pub mod schema;
pub mod input;
pub mod format;
pub mod view;
pub mod archive;
pub mod export;
pub mod store;

pub use types::{BoughtField, HistoryEntry, Item, ItemId, MonthList, Period, Timestamp};
pub use error::{Error, Result, ValidationError};
pub use clock::{Clock, ManualClock};
#[cfg(feature = "clock")]
pub use clock::SystemClock;
pub use storage::{MemoryStorage, Storage, CURRENT_MONTH_KEY, HISTORY_KEY};
pub use input::PurchaseInput;
pub use format::{format_currency, month_year_label};
pub use view::{EmptyState, HistoryRow, HistoryView, ItemRow, Projection, SortMode, ViewQuery};
pub use archive::{ArchivalPolicy, Archived, EmptyMonthRule};
pub use export::{export_file_name, export_history_csv};
pub use store::{ListStore, LoadOptions, StoreState};
