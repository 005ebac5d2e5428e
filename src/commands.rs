//! Subcommand handlers

use crate::cli::Commands;
use crate::config::Config;
use crate::error::{Result, ShoppingError};
use crate::prompt;
use crate::report;
use crate::storage::FileStorage;
use shopping_list_common::{
    export_file_name, format_currency, month_year_label, BoughtField, Clock, ItemId, ListStore,
    Period, Storage, SystemClock, ViewQuery,
};
use std::path::PathBuf;

pub type FileStore = ListStore<FileStorage, SystemClock>;

/// Opens the store in the configured data directory
pub fn open_store(config: &Config) -> Result<FileStore> {
    let dir = config.data_dir()?;
    tracing::debug!("Data directory: {}", dir.display());

    let store = ListStore::load(FileStorage::new(dir), SystemClock, config.load_options())
        .with_policy(config.archival_policy());
    for error in store.load_errors() {
        println!("⚠ {}", error);
    }
    Ok(store)
}

/// Finds the item whose id is `prefix` or starts with it
pub fn resolve_id<S: Storage, C: Clock>(store: &ListStore<S, C>, prefix: &str) -> Result<ItemId> {
    if let Some(id) = store.resolve_item_id(prefix) {
        return Ok(id);
    }

    let prefix = prefix.trim();
    let count = store
        .current()
        .items
        .iter()
        .filter(|item| !prefix.is_empty() && item.id.as_str().starts_with(prefix))
        .count();
    if count > 1 {
        Err(ShoppingError::AmbiguousId {
            prefix: prefix.to_string(),
            count,
        })
    } else {
        Err(ShoppingError::ItemNotFound(prefix.to_string()))
    }
}

fn parse_period(raw: &str) -> Result<Period> {
    raw.parse().map_err(|_| ShoppingError::InvalidPeriod(raw.to_string()))
}

fn confirmed(yes: bool, message: &str) -> Result<bool> {
    if yes {
        Ok(true)
    } else {
        prompt::confirm(message)
    }
}

/// Runs one store command. `Config` is handled by the caller.
pub fn execute<S: Storage, C: Clock>(
    store: &mut ListStore<S, C>,
    command: Commands,
    config: &Config,
) -> Result<()> {
    match command {
        Commands::Add { name } => {
            let name = name.join(" ");
            let id = store.add_item(&name)?;
            println!("✔ Item adicionado: {} ({})", name.trim(), id.short());
        }

        Commands::Rm { id, yes } => {
            let id = resolve_id(store, &id)?;
            let name = store.find_item(&id).map(|i| i.name.clone()).unwrap_or_default();
            if !confirmed(yes, &format!("Tem certeza que deseja excluir '{}'?", name))? {
                println!("Cancelado.");
                return Ok(());
            }
            store.delete_item(&id)?;
            println!("✔ Item excluído: {}", name);
        }

        Commands::Rename { id, name } => {
            let id = resolve_id(store, &id)?;
            store.edit_name(&id, &name.join(" "))?;
            println!("✔ Item atualizado");
        }

        Commands::Buy { id, quantity, price } => {
            let id = resolve_id(store, &id)?;
            let (quantity, price) = match (quantity, price) {
                (Some(q), Some(p)) => (q, p),
                (quantity, price) => {
                    let item = store
                        .find_item(&id)
                        .ok_or_else(|| ShoppingError::ItemNotFound(id.to_string()))?;
                    prompt::purchase(item, quantity, price)?
                }
            };
            store.mark_bought_text(&id, &quantity, &price)?;
            if let Some(item) = store.find_item(&id) {
                println!(
                    "✔ Comprado: {} × {}",
                    item.bought_quantity,
                    format_currency(item.price_per_unit)
                );
            }
        }

        Commands::Unbuy { id } => {
            let id = resolve_id(store, &id)?;
            store.unmark_bought(&id)?;
            println!("✔ Item desmarcado");
        }

        Commands::Set { id, quantity, price } => {
            let id = resolve_id(store, &id)?;
            let mut changed = false;
            if let Some(raw) = quantity {
                changed |= store.set_bought_field_text(&id, BoughtField::Quantity, &raw)?;
            }
            if let Some(raw) = price {
                changed |= store.set_bought_field_text(&id, BoughtField::PricePerUnit, &raw)?;
            }
            if changed {
                println!("✔ Item atualizado");
            } else {
                println!("Nada alterado (o item precisa estar marcado como comprado).");
            }
        }

        Commands::List { search, sort } => {
            let query = ViewQuery::new(search, sort.unwrap_or(config.default_sort));
            let projection = store.project(&query);
            print!("{}", report::render_list(store.current().period(), &projection));
        }

        Commands::Archive { yes } => {
            let period = store.current().period();
            let message = format!(
                "Arquivar {} com total de {}?",
                month_year_label(period),
                format_currency(store.current_total())
            );
            if !confirmed(yes, &message)? {
                println!("Cancelado.");
                return Ok(());
            }
            let entry = store.archive_month()?;
            println!(
                "✔ {} arquivado: {}",
                month_year_label(entry.period()),
                format_currency(entry.total)
            );
            println!("Nova lista: {}", month_year_label(store.current().period()));
        }

        Commands::History => {
            print!("{}", report::render_history(&store.history_view()));
        }

        Commands::HistoryRm { period, yes } => {
            let period = parse_period(&period)?;
            let label = month_year_label(period);
            if !confirmed(yes, &format!("Excluir {} do histórico?", label))? {
                println!("Cancelado.");
                return Ok(());
            }
            if store.delete_history_entry(period)? {
                println!("✔ {} removido do histórico", label);
            } else {
                println!("{} não está no histórico.", label);
            }
        }

        Commands::Export { output } => {
            let csv = store.export_csv()?;
            let output = output.unwrap_or_else(|| {
                let today = chrono::Local::now().format("%Y-%m-%d").to_string();
                PathBuf::from(export_file_name(&today))
            });
            std::fs::write(&output, csv)?;
            println!("✔ Histórico exportado: {}", output.display());
        }

        Commands::Config { .. } => {
            tracing::warn!("Config command reached the store handler");
        }
    }

    Ok(())
}
