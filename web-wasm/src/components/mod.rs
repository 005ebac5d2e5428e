//! UI components

pub mod add_item;
pub mod bought_dialog;
pub mod edit_dialog;
pub mod header;
pub mod history_panel;
pub mod item_list;
pub mod month_summary;
pub mod notice;
pub mod toolbar;
