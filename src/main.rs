use clap::Parser;
use shopping_list::{cli, commands, config, error};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("✖ {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Config { show, set_data_dir } => {
            let mut config = config;

            if let Some(dir) = set_data_dir {
                config.set_data_dir(dir)?;
                println!("✔ Diretório de dados configurado");
            }

            if show {
                println!("Configuração:");
                println!("  Diretório de dados: {}", config.data_dir()?.display());
                println!("  Histórico de exemplo: {}", if config.seed_example_history { "sim" } else { "não" });
                println!("  Arquivar mês vazio: {}", if config.reject_empty_archive { "não" } else { "sim" });
                println!("  Ordenação padrão: {}", config.default_sort.label());
            }
        }

        command => {
            let mut store = commands::open_store(&config)?;
            commands::execute(&mut store, command, &config)?;
        }
    }

    Ok(())
}
