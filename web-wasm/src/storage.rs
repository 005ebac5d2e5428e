//! localStorage and wall-clock adapters

use shopping_list_common::{Clock, Error, Period, Storage, Timestamp};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl Storage for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn save(&mut self, key: &str, value: &str) -> shopping_list_common::Result<()> {
        let storage =
            local_storage().ok_or_else(|| Error::Storage("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{}: {:?}", key, e)))
    }
}

/// `Date.now()` and the local calendar month
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> Timestamp {
        js_sys::Date::now() as Timestamp
    }

    fn current_period(&self) -> Period {
        let date = js_sys::Date::new_0();
        Period {
            year: date.get_full_year() as i32,
            month: date.get_month(),
        }
    }
}

/// Reads a plain localStorage value outside the store (theme preference)
pub fn read_value(key: &str) -> Option<String> {
    BrowserStorage.load(key)
}

pub fn write_value(key: &str, value: &str) {
    if let Err(e) = BrowserStorage.save(key, value) {
        log::warn!("{}", e);
    }
}
