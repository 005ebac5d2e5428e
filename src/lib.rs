//! Terminal front end for the monthly shopping list
//!
//! Stores the list as JSON files in a data directory and drives the shared
//! `ListStore` from subcommands.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod prompt;
pub mod report;
pub mod storage;
