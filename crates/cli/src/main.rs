//! GuitarLA CLI - Browse the catalog and manage the cart.
//!
//! # Usage
//!
//! ```bash
//! # List guitars for sale
//! gla catalog
//!
//! # Add a guitar to the cart and bump its quantity
//! gla cart add 3
//! gla cart inc 3
//!
//! # Show the cart with its total
//! gla cart show
//!
//! # Empty the cart
//! gla cart clear
//! ```
//!
//! # Commands
//!
//! - `catalog` - List catalog items
//! - `cart` - Show or change the persisted cart
//!
//! Configuration comes from `GUITARLA_*` environment variables (see
//! `guitarla_cart::config`); `--data-dir` and `--catalog` override them.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use guitarla_cart::{CartConfig, CartStore, Catalog, FileStorage};
use guitarla_core::GuitarId;

mod commands;

#[derive(Parser)]
#[command(name = "gla")]
#[command(author, version, about = "GuitarLA cart tools")]
struct Cli {
    /// Directory the cart is stored in (overrides `GUITARLA_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// YAML catalog to sell from (overrides `GUITARLA_CATALOG`)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List guitars for sale
    Catalog,
    /// Show or change the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines, item count and total
    Show,
    /// Add one unit of a guitar
    Add {
        /// Catalog id of the guitar
        id: GuitarId,
    },
    /// Remove a guitar's line
    Remove { id: GuitarId },
    /// Increase a line's quantity by one
    Inc { id: GuitarId },
    /// Decrease a line's quantity by one
    Dec { id: GuitarId },
    /// Remove every line
    Clear,
}

fn main() {
    let cli = Cli::parse();

    let config = match CartConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            guitarla_cart::telemetry::init(guitarla_cart::LogFormat::default());
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    guitarla_cart::telemetry::init(config.log_format);

    if let Err(e) = run(cli, config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, mut config: CartConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }

    let catalog = Arc::new(match &config.catalog_path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    });

    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::Catalog => commands::catalog::list(&catalog, &mut out)?,
        Commands::Cart { action } => {
            let storage = FileStorage::new(&config.data_dir);
            let mut store = CartStore::open(catalog, storage)?;
            match action {
                CartAction::Show => {}
                CartAction::Add { id } => commands::cart::add(&mut store, id)?,
                CartAction::Remove { id } => store.remove_from_cart(id)?,
                CartAction::Inc { id } => store.increase_quantity(id)?,
                CartAction::Dec { id } => store.decrease_quantity(id)?,
                CartAction::Clear => store.clear_cart()?,
            }
            commands::cart::show(&store, &mut out)?;
        }
    }
    Ok(())
}
