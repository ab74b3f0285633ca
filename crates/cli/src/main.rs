//! Fernwood CLI - catalog inspection and cart session tools.
//!
//! # Usage
//!
//! ```bash
//! # Print the product catalog
//! fw-cli catalog
//!
//! # Print the catalog as JSON
//! fw-cli catalog --json
//!
//! # Run the canonical seeded session (add the t-shirt, drop the backpacks)
//! fw-cli demo
//!
//! # Drive a fresh session with scripted mutations, applied left-to-right
//! fw-cli cart add:2 remove:1
//! ```
//!
//! # Commands
//!
//! - `catalog` - Print the product listing
//! - `demo` - Run the canonical seeded session
//! - `cart` - Apply scripted add/remove operations to a fresh session

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use fernwood_storefront::{AppState, StorefrontConfig};

mod commands;

use commands::session::CartOp;

#[derive(Parser)]
#[command(name = "fw-cli")]
#[command(author, version, about = "Fernwood Goods CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the product catalog
    Catalog {
        /// Emit the catalog as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Run the canonical seeded session
    Demo,
    /// Apply scripted cart operations to a fresh session
    Cart {
        /// Operations in `add:<id>` / `remove:<id>` form, applied left-to-right
        #[arg(required = true)]
        ops: Vec<CartOp>,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let state = AppState::from_config(&config)?;

    match cli.command {
        Commands::Catalog { json } => commands::catalog::list(&state, json)?,
        Commands::Demo => commands::session::demo(&state)?,
        Commands::Cart { ops } => commands::session::run(&state, &ops)?,
    }
    Ok(())
}
