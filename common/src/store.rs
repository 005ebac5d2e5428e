//! List store
//!
//! Owns the current month and the history, applies every user mutation and
//! writes both blobs back through the host storage. A mutation runs on a
//! copy of the state; the copy replaces the live state only after it has
//! been persisted, so a rejected input or a failed write changes nothing.

use crate::archive::ArchivalPolicy;
use crate::clock::Clock;
use crate::error::{Error, Result, ValidationError};
use crate::export::export_history_csv;
use crate::input::{coerce_live_text, coerce_live_value, PurchaseInput};
use crate::schema::{self, Upgraded};
use crate::storage::{Storage, CURRENT_MONTH_KEY, HISTORY_KEY};
use crate::types::{BoughtField, HistoryEntry, Item, ItemId, MonthList, Period, Timestamp};
use crate::view::{self, HistoryView, Projection, ViewQuery};

/// Options applied when reading persisted state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Start with example history when none was ever stored
    pub seed_example_history: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            seed_example_history: true,
        }
    }
}

/// Current month plus history
#[derive(Debug, Clone, PartialEq)]
pub struct StoreState {
    pub current: MonthList,
    pub history: Vec<HistoryEntry>,
}

pub struct ListStore<S: Storage, C: Clock> {
    storage: S,
    clock: C,
    policy: ArchivalPolicy,
    state: StoreState,
    last_created_at: Timestamp,
    load_errors: Vec<Error>,
}

impl<S: Storage, C: Clock> ListStore<S, C> {
    /// Restores state from `storage`
    ///
    /// Never fails: unreadable blobs are replaced by a fresh month for the
    /// clock's current period and an empty history, and the decoding error is
    /// kept in `load_errors()`.
    pub fn load(storage: S, clock: C, options: LoadOptions) -> Self {
        let mut load_errors = Vec::new();
        let now = clock.now();
        let period = clock.current_period();

        let current = match storage.load(CURRENT_MONTH_KEY) {
            Some(text) => match schema::decode_month_list(&text, now, period) {
                Ok(upgraded) => accept(CURRENT_MONTH_KEY, upgraded),
                Err(e) => {
                    log::warn!("Could not restore the current month, starting empty: {}", e);
                    load_errors.push(e);
                    MonthList::empty(period)
                }
            },
            None => MonthList::empty(period),
        };

        let history = match storage.load(HISTORY_KEY) {
            Some(text) => match schema::decode_history(&text) {
                Ok(upgraded) => accept(HISTORY_KEY, upgraded),
                Err(e) => {
                    log::warn!("Could not restore history, starting empty: {}", e);
                    load_errors.push(e);
                    Vec::new()
                }
            },
            None if options.seed_example_history => schema::example_history(),
            None => Vec::new(),
        };

        let last_created_at = current
            .items
            .iter()
            .map(|item| item.created_at)
            .max()
            .unwrap_or(Timestamp::MIN);

        Self {
            storage,
            clock,
            policy: ArchivalPolicy::default(),
            state: StoreState { current, history },
            last_created_at,
            load_errors,
        }
    }

    pub fn with_policy(mut self, policy: ArchivalPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn current(&self) -> &MonthList {
        &self.state.current
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.state.history
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn policy(&self) -> ArchivalPolicy {
        self.policy
    }

    /// Errors recovered from while loading
    pub fn load_errors(&self) -> &[Error] {
        &self.load_errors
    }

    pub fn find_item(&self, id: &ItemId) -> Option<&Item> {
        self.state.current.find(id)
    }

    /// Id of the single item whose id starts with `prefix`
    pub fn resolve_item_id(&self, prefix: &str) -> Option<ItemId> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return None;
        }
        if let Some(item) = self.state.current.items.iter().find(|i| i.id.as_str() == prefix) {
            return Some(item.id.clone());
        }
        let mut matches = self
            .state
            .current
            .items
            .iter()
            .filter(|item| item.id.as_str().starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(item), None) => Some(item.id.clone()),
            _ => None,
        }
    }

    /// Appends a new unbought item
    pub fn add_item(&mut self, name: &str) -> Result<ItemId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        let id = ItemId::generate();
        let created_at = self.clock.now().max(self.last_created_at);
        let item = Item::new(id.clone(), name, created_at);

        self.commit(|state| {
            state.current.items.push(item);
            Ok(())
        })?;
        self.last_created_at = created_at;
        log::debug!("Added item {} ({})", id, name);
        Ok(id)
    }

    /// Removes an item. Unknown ids are not an error.
    pub fn delete_item(&mut self, id: &ItemId) -> Result<bool> {
        self.commit(|state| {
            let before = state.current.items.len();
            state.current.items.retain(|item| &item.id != id);
            Ok(state.current.items.len() != before)
        })
    }

    pub fn edit_name(&mut self, id: &ItemId, new_name: &str) -> Result<bool> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        self.commit(|state| match state.current.find_mut(id) {
            Some(item) => {
                item.name = new_name.to_string();
                Ok(true)
            }
            None => Ok(false),
        })
    }

    /// Records a purchase with the strict input policy
    pub fn mark_bought(&mut self, id: &ItemId, quantity: f64, price_per_unit: f64) -> Result<bool> {
        let input = PurchaseInput::validate(quantity, price_per_unit)?;
        self.apply_purchase(id, input)
    }

    /// `mark_bought` from form text
    pub fn mark_bought_text(&mut self, id: &ItemId, quantity: &str, price_per_unit: &str) -> Result<bool> {
        let input = PurchaseInput::parse(quantity, price_per_unit)?;
        self.apply_purchase(id, input)
    }

    fn apply_purchase(&mut self, id: &ItemId, input: PurchaseInput) -> Result<bool> {
        let now = self.clock.now();
        self.commit(|state| match state.current.find_mut(id) {
            Some(item) => {
                item.bought = true;
                item.bought_quantity = input.quantity;
                item.price_per_unit = input.price_per_unit;
                item.bought_at = Some(now);
                Ok(true)
            }
            None => Ok(false),
        })
    }

    /// Clears the purchase record
    pub fn unmark_bought(&mut self, id: &ItemId) -> Result<bool> {
        self.commit(|state| match state.current.find_mut(id) {
            Some(item) => {
                item.clear_purchase();
                Ok(true)
            }
            None => Ok(false),
        })
    }

    /// Live edit of a bought item's quantity or price with the lenient policy
    ///
    /// Does nothing for unbought items.
    pub fn set_bought_field(&mut self, id: &ItemId, field: BoughtField, value: f64) -> Result<bool> {
        let value = coerce_live_value(value);
        self.commit(|state| match state.current.find_mut(id) {
            Some(item) if item.bought => {
                match field {
                    BoughtField::Quantity => item.bought_quantity = value,
                    BoughtField::PricePerUnit => item.price_per_unit = value,
                }
                Ok(true)
            }
            _ => Ok(false),
        })
    }

    /// `set_bought_field` from raw input text
    pub fn set_bought_field_text(&mut self, id: &ItemId, field: BoughtField, raw: &str) -> Result<bool> {
        self.set_bought_field(id, field, coerce_live_text(raw))
    }

    pub fn delete_history_entry(&mut self, period: Period) -> Result<bool> {
        self.commit(|state| {
            let before = state.history.len();
            state.history.retain(|entry| entry.period() != period);
            Ok(state.history.len() != before)
        })
    }

    /// Closes the current month into history and starts the next one
    pub fn archive_month(&mut self) -> Result<HistoryEntry> {
        let policy = self.policy;
        let entry = self.commit(|state| {
            let archived = policy.archive(&state.current, &state.history)?;
            if let Some(replaced) = archived.replaced {
                log::info!(
                    "Replaced archived total {} for {}",
                    replaced.total,
                    replaced.period()
                );
            }
            state.history = archived.history;
            state.current = archived.next;
            Ok(archived.entry)
        })?;
        log::info!("Archived {} with total {:.2}", entry.period(), entry.total);
        Ok(entry)
    }

    pub fn project(&self, query: &ViewQuery) -> Projection {
        view::project(&self.state.current, &self.state.history, query)
    }

    pub fn history_view(&self) -> HistoryView {
        view::history_view(&self.state.history)
    }

    pub fn current_total(&self) -> f64 {
        view::current_total(&self.state.current.items)
    }

    pub fn historical_average(&self) -> f64 {
        view::historical_average(&self.state.history)
    }

    pub fn export_csv(&self) -> Result<String> {
        export_history_csv(&self.state.history)
    }

    /// Runs `mutate` on a copy, persists the copy, then makes it live
    fn commit<T>(&mut self, mutate: impl FnOnce(&mut StoreState) -> Result<T>) -> Result<T> {
        let mut next = self.state.clone();
        let output = mutate(&mut next)?;
        self.persist(&next)?;
        self.state = next;
        Ok(output)
    }

    fn persist(&mut self, next: &StoreState) -> Result<()> {
        let month_text = schema::encode_month_list(&next.current)?;
        let history_text = schema::encode_history(&next.history)?;
        let previous_month = self.storage.load(CURRENT_MONTH_KEY);

        self.storage.save(CURRENT_MONTH_KEY, &month_text)?;
        if let Err(e) = self.storage.save(HISTORY_KEY, &history_text) {
            // Put the month blob back so the pair on disk still matches
            let restored = match previous_month {
                Some(text) => self.storage.save(CURRENT_MONTH_KEY, &text),
                None => schema::encode_month_list(&self.state.current)
                    .and_then(|text| self.storage.save(CURRENT_MONTH_KEY, &text)),
            };
            if let Err(restore_error) = restored {
                log::error!("Could not restore the current month after a failed write: {}", restore_error);
            }
            return Err(e);
        }
        Ok(())
    }
}

fn accept<T>(key: &str, upgraded: Upgraded<T>) -> T {
    if upgraded.from_version < schema::SCHEMA_VERSION {
        log::info!(
            "Upgraded {} from schema version {} to {}",
            key,
            upgraded.from_version,
            schema::SCHEMA_VERSION
        );
    }
    for repair in &upgraded.repairs {
        log::warn!("{}: {}", key, repair);
    }
    upgraded.value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::storage::MemoryStorage;
    use crate::view::SortMode;
    use std::collections::HashSet;

    const JUNE: Period = Period { year: 2025, month: 5 };

    type TestStore = ListStore<MemoryStorage, ManualClock>;

    fn new_store() -> TestStore {
        ListStore::load(
            MemoryStorage::new(),
            ManualClock::new(1_000, JUNE),
            LoadOptions {
                seed_example_history: false,
            },
        )
    }

    fn reload(store: &TestStore) -> TestStore {
        ListStore::load(
            store.storage().clone(),
            ManualClock::new(50_000, Period { year: 2030, month: 0 }),
            LoadOptions::default(),
        )
    }

    /// Storage whose history writes fail after being armed
    #[derive(Default)]
    struct FlakyStorage {
        inner: MemoryStorage,
        fail_history: bool,
    }

    impl Storage for FlakyStorage {
        fn load(&self, key: &str) -> Option<String> {
            self.inner.load(key)
        }

        fn save(&mut self, key: &str, value: &str) -> Result<()> {
            if self.fail_history && key == HISTORY_KEY {
                return Err(Error::Storage("quota exceeded".into()));
            }
            self.inner.save(key, value)
        }
    }

    #[test]
    fn test_fresh_store_is_empty_for_current_period() {
        let store = new_store();
        assert_eq!(store.current().period(), JUNE);
        assert!(store.current().items.is_empty());
        assert!(store.history().is_empty());
        assert!(store.load_errors().is_empty());
    }

    #[test]
    fn test_first_run_seeds_example_history() {
        let store = ListStore::load(
            MemoryStorage::new(),
            ManualClock::new(0, JUNE),
            LoadOptions::default(),
        );
        assert_eq!(store.history(), schema::example_history().as_slice());
    }

    #[test]
    fn test_add_item_trims_and_persists() {
        let mut store = new_store();
        let id = store.add_item("  Arroz  ").unwrap();

        let item = store.find_item(&id).unwrap();
        assert_eq!(item.name, "Arroz");
        assert!(!item.bought);
        assert_eq!(item.created_at, 1_000);
        assert!(store.storage().load(CURRENT_MONTH_KEY).unwrap().contains("Arroz"));
        assert!(store.storage().load(HISTORY_KEY).is_some());
    }

    #[test]
    fn test_add_item_rejects_blank_name() {
        let mut store = new_store();
        let error = store.add_item("   ").unwrap_err();
        assert!(matches!(error, Error::Validation(ValidationError::EmptyName)));
        assert!(store.current().items.is_empty());
        assert!(store.storage().is_empty());
    }

    #[test]
    fn test_ids_stay_unique() {
        let mut store = new_store();
        let mut ids = Vec::new();
        for name in ["Arroz", "Feijão", "Arroz", "Café", "Leite"] {
            ids.push(store.add_item(name).unwrap());
        }
        store.delete_item(&ids[1]).unwrap();
        store.edit_name(&ids[2], "Arroz integral").unwrap();
        ids.push(store.add_item("Pão").unwrap());

        let unique: HashSet<&ItemId> = store.current().items.iter().map(|i| &i.id).collect();
        assert_eq!(unique.len(), store.current().items.len());
        assert_eq!(store.current().items.len(), 5);
    }

    #[test]
    fn test_created_at_never_decreases() {
        let mut store = new_store();
        let first = store.add_item("Arroz").unwrap();
        store.clock().set(500);
        let second = store.add_item("Feijão").unwrap();

        let a = store.find_item(&first).unwrap().created_at;
        let b = store.find_item(&second).unwrap().created_at;
        assert!(b >= a);
    }

    #[test]
    fn test_name_edits_do_not_change_total() {
        let mut store = new_store();
        let a = store.add_item("Arroz").unwrap();
        store.mark_bought(&a, 2.0, 5.0).unwrap();
        let total = store.current_total();

        let b = store.add_item("Feijão").unwrap();
        store.edit_name(&a, "Arroz agulhinha").unwrap();
        store.delete_item(&b).unwrap();
        assert_eq!(store.current_total(), total);
    }

    #[test]
    fn test_delete_missing_item_is_noop() {
        let mut store = new_store();
        store.add_item("Arroz").unwrap();
        assert_eq!(store.delete_item(&ItemId::from("missing")).unwrap(), false);
        assert_eq!(store.current().items.len(), 1);
    }

    #[test]
    fn test_edit_name() {
        let mut store = new_store();
        let id = store.add_item("Arroz").unwrap();

        assert!(store.edit_name(&id, " Arroz integral ").unwrap());
        assert_eq!(store.find_item(&id).unwrap().name, "Arroz integral");

        let error = store.edit_name(&id, "").unwrap_err();
        assert!(error.is_validation());
        assert_eq!(store.find_item(&id).unwrap().name, "Arroz integral");

        assert_eq!(store.edit_name(&ItemId::from("missing"), "X").unwrap(), false);
    }

    #[test]
    fn test_total_of_bought_items() {
        let mut store = new_store();
        let a = store.add_item("A").unwrap();
        let b = store.add_item("B").unwrap();
        store.add_item("C").unwrap();

        store.mark_bought(&a, 3.0, 2.50).unwrap();
        store.mark_bought(&b, 1.0, 10.00).unwrap();
        assert!((store.current_total() - 17.50).abs() < 1e-9);
    }

    #[test]
    fn test_mark_then_unmark_restores_item() {
        let mut store = new_store();
        let id = store.add_item("Leite").unwrap();
        let before = store.find_item(&id).unwrap().clone();

        store.clock().advance(60_000);
        store.mark_bought(&id, 2.0, 4.99).unwrap();
        let marked = store.find_item(&id).unwrap();
        assert!(marked.bought);
        assert_eq!(marked.bought_at, Some(61_000));

        store.unmark_bought(&id).unwrap();
        assert_eq!(store.find_item(&id).unwrap(), &before);
    }

    #[test]
    fn test_mark_bought_rejects_invalid_input() {
        let mut store = new_store();
        let id = store.add_item("Leite").unwrap();

        for (quantity, price) in [(0.0, 1.0), (-1.0, 1.0), (f64::NAN, 1.0), (1.0, -1.0)] {
            let error = store.mark_bought(&id, quantity, price).unwrap_err();
            assert!(error.is_validation());
        }
        assert!(!store.find_item(&id).unwrap().bought);
    }

    #[test]
    fn test_mark_bought_text() {
        let mut store = new_store();
        let id = store.add_item("Queijo").unwrap();

        let error = store.mark_bought_text(&id, "dois", "10").unwrap_err();
        assert!(matches!(error, Error::Validation(ValidationError::InvalidQuantity)));

        store.mark_bought_text(&id, "0,5", "42,90").unwrap();
        assert!((store.current_total() - 21.45).abs() < 1e-9);
    }

    #[test]
    fn test_set_bought_field_coerces() {
        let mut store = new_store();
        let id = store.add_item("Tomate").unwrap();
        store.mark_bought(&id, 1.0, 6.0).unwrap();
        let bought_at = store.find_item(&id).unwrap().bought_at;

        store.clock().advance(5_000);
        store.set_bought_field_text(&id, BoughtField::Quantity, "2,5").unwrap();
        assert!((store.current_total() - 15.0).abs() < 1e-9);

        store.set_bought_field_text(&id, BoughtField::PricePerUnit, "abc").unwrap();
        let item = store.find_item(&id).unwrap();
        assert_eq!(item.price_per_unit, 0.0);
        assert!(item.bought);
        assert_eq!(item.bought_at, bought_at);
    }

    #[test]
    fn test_set_bought_field_ignores_unbought() {
        let mut store = new_store();
        let id = store.add_item("Tomate").unwrap();
        assert_eq!(store.set_bought_field(&id, BoughtField::Quantity, 3.0).unwrap(), false);
        assert_eq!(store.find_item(&id).unwrap().bought_quantity, 0.0);
    }

    #[test]
    fn test_archive_month() {
        let mut store = ListStore::load(
            MemoryStorage::new(),
            ManualClock::new(0, Period { year: 2024, month: 11 }),
            LoadOptions {
                seed_example_history: false,
            },
        );
        let id = store.add_item("Compra grande").unwrap();
        store.mark_bought(&id, 1.0, 100.0).unwrap();

        let entry = store.archive_month().unwrap();
        assert_eq!(entry, HistoryEntry::new(Period { year: 2024, month: 11 }, 100.0));
        assert_eq!(store.history(), &[entry]);
        assert_eq!(store.current().period(), Period { year: 2025, month: 0 });
        assert!(store.current().items.is_empty());

        let restored = reload(&store);
        assert_eq!(restored.state(), store.state());
    }

    #[test]
    fn test_archive_empty_month_with_reject_policy() {
        let mut store = new_store().with_policy(ArchivalPolicy::rejecting_empty());
        let error = store.archive_month().unwrap_err();
        assert!(matches!(error, Error::Validation(ValidationError::EmptyMonth)));
        assert_eq!(store.current().period(), JUNE);
        assert!(store.history().is_empty());
    }

    #[test]
    fn test_rearchive_same_period_replaces() {
        let mut store = new_store();
        let id = store.add_item("A").unwrap();
        store.mark_bought(&id, 1.0, 10.0).unwrap();
        store.archive_month().unwrap();

        // back to June by hand, as if the user re-opened the month
        let mut storage = store.storage().clone();
        storage
            .save(
                CURRENT_MONTH_KEY,
                r#"{"schemaVersion":1,"year":2025,"month":5,"items":[
                    {"id":"x","name":"B","bought":true,"boughtQuantity":1,"pricePerUnit":30,"createdAt":1,"boughtAt":2}
                ]}"#,
            )
            .unwrap();
        let mut store = ListStore::load(storage, ManualClock::new(0, JUNE), LoadOptions::default());
        store.archive_month().unwrap();

        assert_eq!(store.history(), &[HistoryEntry::new(JUNE, 30.0)]);
    }

    #[test]
    fn test_delete_history_entry_recomputes_average() {
        let mut store = ListStore::load(
            MemoryStorage::new(),
            ManualClock::new(0, JUNE),
            LoadOptions::default(),
        );
        assert!((store.historical_average() - 486.316_666).abs() < 1e-4);

        assert!(store.delete_history_entry(Period { year: 2025, month: 3 }).unwrap());
        assert!((store.historical_average() - 504.1).abs() < 1e-9);

        assert!(!store.delete_history_entry(Period { year: 1999, month: 0 }).unwrap());
        assert_eq!(store.history().len(), 2);
        assert_eq!(reload(&store).history().len(), 2);
    }

    #[test]
    fn test_roundtrip_through_storage() {
        let mut store = new_store();
        let a = store.add_item("Arroz").unwrap();
        store.clock().advance(10);
        let b = store.add_item("Feijão").unwrap();
        store.add_item("Café").unwrap();
        store.mark_bought(&b, 2.0, 7.25).unwrap();
        store.edit_name(&a, "Arroz 5kg").unwrap();

        let restored = reload(&store);
        assert_eq!(restored.state(), store.state());
        assert_eq!(
            restored.project(&ViewQuery::new("", SortMode::BoughtLast)),
            store.project(&ViewQuery::new("", SortMode::BoughtLast))
        );
    }

    #[test]
    fn test_corrupt_storage_falls_back() {
        let storage = MemoryStorage::with_entries([
            (CURRENT_MONTH_KEY, "{broken"),
            (HISTORY_KEY, "not json either"),
        ]);
        let store = ListStore::load(storage, ManualClock::new(0, JUNE), LoadOptions::default());

        assert_eq!(store.current().period(), JUNE);
        assert!(store.current().items.is_empty());
        assert!(store.history().is_empty());
        assert_eq!(store.load_errors().len(), 2);
        assert!(store
            .load_errors()
            .iter()
            .all(|e| matches!(e, Error::StorageCorrupt { .. })));
    }

    #[test]
    fn test_out_of_range_year_is_repaired_before_archive() {
        let storage = MemoryStorage::with_entries([(
            CURRENT_MONTH_KEY,
            r#"{"year":2147483647,"month":11,"items":[{"id":"x1","name":"Arroz"}]}"#,
        )]);
        let mut store = ListStore::load(storage, ManualClock::new(0, JUNE), LoadOptions::default());
        assert_eq!(store.current().period(), JUNE);
        assert_eq!(store.current().items.len(), 1);

        let entry = store.archive_month().unwrap();
        assert_eq!(entry.period(), JUNE);
        assert_eq!(store.current().period(), JUNE.next());
    }

    #[test]
    fn test_failed_write_leaves_state_and_storage_intact() {
        let mut store = ListStore::load(
            FlakyStorage::default(),
            ManualClock::new(0, JUNE),
            LoadOptions {
                seed_example_history: false,
            },
        );
        let id = store.add_item("Arroz").unwrap();
        let saved_month = store.storage().load(CURRENT_MONTH_KEY);

        store.storage.fail_history = true;
        let error = store.mark_bought(&id, 1.0, 3.0).unwrap_err();
        assert!(matches!(error, Error::Storage(_)));
        assert!(!store.find_item(&id).unwrap().bought);
        assert_eq!(store.storage().load(CURRENT_MONTH_KEY), saved_month);
    }

    #[test]
    fn test_resolve_item_id_by_prefix() {
        let mut store = new_store();
        let id = store.add_item("Arroz").unwrap();
        assert_eq!(store.resolve_item_id(id.as_str()), Some(id.clone()));
        assert_eq!(store.resolve_item_id(&id.as_str()[..8]), Some(id.clone()));
        assert_eq!(store.resolve_item_id(""), None);
        assert_eq!(store.resolve_item_id("zzzz-not-an-id"), None);
    }

    #[test]
    fn test_legacy_blobs_are_upgraded_on_next_write() {
        let storage = MemoryStorage::with_entries([
            (CURRENT_MONTH_KEY, r#"{"year":2025,"month":5,"items":[{"id":"old1","name":"Arroz"}]}"#),
            (HISTORY_KEY, r#"[{"year":2025,"month":4,"total":620.3}]"#),
        ]);
        let mut store = ListStore::load(storage, ManualClock::new(77, JUNE), LoadOptions::default());
        assert_eq!(store.find_item(&ItemId::from("old1")).unwrap().created_at, 77);

        store.add_item("Feijão").unwrap();
        let history_text = store.storage().load(HISTORY_KEY).unwrap();
        assert!(history_text.starts_with("{\"schemaVersion\":1"));
    }
}
