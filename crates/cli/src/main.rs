//! Paperbound CLI - Checkout quotes and simulation tools.
//!
//! # Usage
//!
//! ```bash
//! # List the shipping catalog
//! paperbound catalog
//!
//! # Price a cart fixture with express shipping
//! paperbound quote -c fixtures/cart.json -s express
//!
//! # Drive the full checkout wizard against the simulated gateway
//! paperbound simulate -c fixtures/cart.json -d fixtures/details.json
//! ```
//!
//! # Commands
//!
//! - `catalog` - Print the shipping catalog
//! - `quote` - Compute an order summary for a cart fixture
//! - `simulate` - Run a cart and checkout details through the whole wizard
//!
//! # Environment Variables
//!
//! - `PAPERBOUND_TAX_RATE` - Fractional tax rate (default: 0.08)
//! - `PAPERBOUND_STORE_CODE` - Order reference prefix (default: PB)
//! - `PAPERBOUND_SUBMIT_DELAY_MS` - Simulated gateway delay (default: 1500)
//! - `PAPERBOUND_SUBMIT_TIMEOUT_MS` - Submission timeout, 0 disables
//!   (default: 10000)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use paperbound_checkout::DEFAULT_SHIPPING_OPTION;

mod commands;
mod config;
mod fixtures;

#[derive(Parser)]
#[command(name = "paperbound")]
#[command(author, version, about = "Paperbound checkout tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the shipping catalog
    Catalog,
    /// Compute an order summary for a cart fixture
    Quote {
        /// Path to a cart fixture (JSON array of cart lines)
        #[arg(short, long)]
        cart: PathBuf,

        /// Shipping option id (`standard`, `express`, `same-day`)
        #[arg(short, long, default_value = DEFAULT_SHIPPING_OPTION)]
        shipping: String,
    },
    /// Drive the full checkout wizard against the simulated gateway
    Simulate {
        /// Path to a cart fixture (JSON array of cart lines)
        #[arg(short, long)]
        cart: PathBuf,

        /// Path to a checkout details fixture (shipping + payment forms)
        #[arg(short, long)]
        details: PathBuf,

        /// Shipping option id (`standard`, `express`, `same-day`)
        #[arg(short, long, default_value = DEFAULT_SHIPPING_OPTION)]
        shipping: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::from_env()?;

    match cli.command {
        Commands::Catalog => commands::catalog::run(),
        Commands::Quote { cart, shipping } => {
            commands::quote::run(&cart, &shipping, &config)?;
        }
        Commands::Simulate {
            cart,
            details,
            shipping,
        } => {
            commands::simulate::run(&cart, &details, &shipping, config).await?;
        }
    }
    Ok(())
}
