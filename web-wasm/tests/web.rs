//! Browser adapter tests
//!
//! Run with `wasm-pack test --headless --chrome web-wasm`

use shopping_list_common::{Clock, ListStore, LoadOptions, Storage, CURRENT_MONTH_KEY, HISTORY_KEY};
use shopping_list_web::storage::{BrowserClock, BrowserStorage};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(CURRENT_MONTH_KEY);
        let _ = storage.remove_item(HISTORY_KEY);
    }
}

/// Values written to localStorage read back
#[wasm_bindgen_test]
fn test_local_storage_round_trip() {
    clear();
    let mut storage = BrowserStorage;
    assert_eq!(storage.load(HISTORY_KEY), None);

    storage.save(HISTORY_KEY, "[]").unwrap();
    assert_eq!(storage.load(HISTORY_KEY).as_deref(), Some("[]"));
}

/// The clock follows the browser calendar
#[wasm_bindgen_test]
fn test_browser_clock() {
    let clock = BrowserClock;
    assert!(clock.now() > 1_600_000_000_000);
    assert!(clock.current_period().month < 12);
}

/// The store persists through localStorage
#[wasm_bindgen_test]
fn test_store_on_local_storage() {
    clear();
    {
        let mut store = ListStore::load(BrowserStorage, BrowserClock, LoadOptions::default());
        let id = store.add_item("Pão").unwrap();
        store.mark_bought(&id, 2.0, 1.5).unwrap();
    }

    let store = ListStore::load(BrowserStorage, BrowserClock, LoadOptions::default());
    assert_eq!(store.current().items.len(), 1);
    assert_eq!(store.current_total(), 3.0);
    assert_eq!(store.history().len(), 3);
    clear();
}
