use clap::{Parser, Subcommand};
use shopping_list_common::SortMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "compras")]
#[command(about = "Lista de compras mensal com histórico de gastos", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an item to the current month
    Add {
        /// Item name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Remove an item
    Rm {
        /// Item id (a unique prefix is enough)
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Rename an item
    Rename {
        id: String,

        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Mark an item as bought
    Buy {
        id: String,

        /// Quantity bought (prompted when omitted)
        #[arg(short, long)]
        quantity: Option<String>,

        /// Price per unit (prompted when omitted)
        #[arg(short, long)]
        price: Option<String>,
    },

    /// Mark an item as not bought, clearing quantity and price
    Unbuy { id: String },

    /// Edit quantity or price of a bought item
    Set {
        id: String,

        #[arg(short, long)]
        quantity: Option<String>,

        #[arg(short, long)]
        price: Option<String>,
    },

    /// Show the current month
    List {
        /// Case-insensitive name filter
        #[arg(short, long, default_value = "")]
        search: String,

        /// default / alphabetical / boughtLast
        #[arg(long)]
        sort: Option<SortMode>,
    },

    /// Close the current month and start the next one
    Archive {
        #[arg(short, long)]
        yes: bool,
    },

    /// Show archived months
    History,

    /// Delete an archived month
    HistoryRm {
        /// Period as YYYY-MM
        period: String,

        #[arg(short, long)]
        yes: bool,
    },

    /// Export the history as CSV
    Export {
        /// Output file (default: historico-compras-<date>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or change the configuration
    Config {
        #[arg(long)]
        show: bool,

        #[arg(long)]
        set_data_dir: Option<PathBuf>,
    },
}
