//! Error case tests
//!
//! Lookup failures and error messages seen by the terminal user

use shopping_list::commands::resolve_id;
use shopping_list::error::ShoppingError;
use shopping_list_common::{
    Error, ItemId, Item, ListStore, LoadOptions, ManualClock, MemoryStorage, MonthList, Period,
    ValidationError,
};

const JUNE: Period = Period { year: 2025, month: 5 };

fn store_with_ids(ids: &[&str]) -> ListStore<MemoryStorage, ManualClock> {
    let mut list = MonthList::empty(JUNE);
    for (i, id) in ids.iter().enumerate() {
        list.items.push(Item::new(ItemId::from(*id), format!("Item {}", i), i as i64));
    }
    let blob = serde_json::to_string(&list).expect("encode list");
    let storage = MemoryStorage::with_entries([("shoppingCurrentMonth", blob)]);
    ListStore::load(storage, ManualClock::new(1_000, JUNE), LoadOptions::default())
}

/// Unknown id
#[test]
fn test_resolve_unknown_id() {
    let store = store_with_ids(&["abc123", "def456"]);
    let err = resolve_id(&store, "zzz").unwrap_err();
    assert!(matches!(err, ShoppingError::ItemNotFound(ref p) if p == "zzz"));
}

/// Prefix shared by several items
#[test]
fn test_resolve_ambiguous_prefix() {
    let store = store_with_ids(&["abc123", "abd456", "xyz789"]);
    let err = resolve_id(&store, "ab").unwrap_err();
    assert!(matches!(err, ShoppingError::AmbiguousId { count: 2, .. }));
}

/// Unique prefix and exact id
#[test]
fn test_resolve_prefix_and_exact() {
    let store = store_with_ids(&["abc123", "abd456"]);
    assert_eq!(resolve_id(&store, "abc").unwrap(), ItemId::from("abc123"));
    assert_eq!(resolve_id(&store, "abd456").unwrap(), ItemId::from("abd456"));
}

/// Blank prefix never matches
#[test]
fn test_resolve_blank_prefix() {
    let store = store_with_ids(&["abc123"]);
    assert!(matches!(
        resolve_id(&store, "  "),
        Err(ShoppingError::ItemNotFound(_))
    ));
}

/// Core errors keep their message when wrapped
#[test]
fn test_common_error_is_transparent() {
    let inner: Error = ValidationError::EmptyName.into();
    let message = inner.to_string();
    let err: ShoppingError = inner.into();
    assert_eq!(err.to_string(), message);
}

/// ShoppingError Display
#[test]
fn test_error_display() {
    let errors = vec![
        ShoppingError::Config("teste".to_string()),
        ShoppingError::ItemNotFound("abc".to_string()),
        ShoppingError::AmbiguousId {
            prefix: "a".to_string(),
            count: 3,
        },
        ShoppingError::InvalidPeriod("2025-13".to_string()),
        ShoppingError::Common(Error::EmptyHistory),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "Empty error message: {:?}", err);
    }
}

/// IO error conversion
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: ShoppingError = io_err.into();
    assert!(matches!(err, ShoppingError::Io(_)));
}
