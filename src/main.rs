use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;

use expense_manager::api::{ExpenseStore, HttpExpenseStore, MemoryExpenseStore};
use expense_manager::cli::{handle_add, handle_list, handle_summary, AddArgs};
use expense_manager::config::{ExpensePaths, Settings};
use expense_manager::logging::{self, LogTarget};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track credits and debits from the terminal",
    long_about = "Expense Manager records credit and debit entries in a remote expense \
                  store and shows the running totals, balance and a credit-vs-debit \
                  chart, either as one-shot commands or in an interactive TUI."
)]
struct Cli {
    /// Override the API base URL for this run
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Use an empty in-memory store instead of the remote API
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// List all transactions
    #[command(alias = "ls")]
    List,

    /// Show total credit, total debit and balance
    Summary {
        /// Also draw the credit-vs-debit chart
        #[arg(short, long)]
        chart: bool,
    },

    /// Add a credit or debit entry
    Add(AddArgs),

    /// Show current configuration and paths
    Config {
        /// Write the effective settings to the config file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    settings.apply_env_overrides();
    if let Some(url) = cli.api_url {
        settings.api_base_url = url;
    }

    let command = cli.command.unwrap_or(Commands::Tui);
    let target = match command {
        Commands::Tui => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    logging::init(&paths, target)?;

    if let Commands::Config { save } = command {
        return show_config(&paths, &settings, save);
    }

    let store: Arc<dyn ExpenseStore> = if cli.offline {
        log::info!("Using the in-memory store");
        Arc::new(MemoryExpenseStore::new())
    } else {
        Arc::new(HttpExpenseStore::from_settings(&settings)?)
    };

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    match command {
        Commands::Tui => {
            expense_manager::tui::run_tui(&settings, store, runtime.handle().clone())?;
        }
        Commands::List => runtime.block_on(handle_list(store.as_ref(), &settings))?,
        Commands::Summary { chart } => {
            runtime.block_on(handle_summary(store.as_ref(), &settings, chart))?
        }
        Commands::Add(args) => runtime.block_on(handle_add(store.as_ref(), &settings, args))?,
        Commands::Config { .. } => {}
    }

    Ok(())
}

fn show_config(paths: &ExpensePaths, settings: &Settings, save: bool) -> Result<()> {
    if save {
        settings.save(paths)?;
        println!("Saved settings to {}", paths.settings_file().display());
        println!();
    }

    println!("Expense Manager Configuration");
    println!("=============================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Log file:         {}", paths.log_file().display());
    println!();
    println!("Settings:");
    println!("  API base URL:     {}", settings.api_base_url);
    println!("  Request timeout:  {}s", settings.request_timeout_secs);
    println!("  Currency symbol:  {}", settings.currency_symbol);
    println!("  Date format:      {}", settings.date_format);
    println!("  Notifications:    {}s", settings.notification_secs);
    Ok(())
}
