//! Takeaway CLI - Inspect and edit the takeaway cart.
//!
//! # Usage
//!
//! ```bash
//! # Show the cart with line totals and subtotal
//! takeaway show
//!
//! # Add two portions of dish 12
//! takeaway add --dish 12 --name "Green Curry" --price 11.50 --quantity 2 --notes "mild"
//!
//! # Add a combo
//! takeaway add --combo 3 --name "Lunch Set" --price 15
//!
//! # Change the quantity of the first line
//! takeaway update 0 4
//!
//! # Remove the second line, then empty the cart
//! takeaway remove 1
//! takeaway clear
//!
//! # Replace the cart with a JSON array of line items
//! takeaway import cart.json
//! ```
//!
//! Positions are 0-based. See [`config`] for environment variables.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};
use rust_decimal::Decimal;
use takeaway_core::{ComboId, DishId, parse_price};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::CommandError;
use config::CartConfig;

#[derive(Parser)]
#[command(name = "takeaway")]
#[command(author, version, about = "Takeaway cart tools")]
struct Cli {
    /// Storage file (overrides `TAKEAWAY_STORAGE_PATH`)
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    /// Storage key holding the cart (overrides `TAKEAWAY_CART_KEY`)
    #[arg(long, global = true)]
    key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cart
    Show {
        /// Print the stored JSON array instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Add a dish or combo, merging with an existing line
    Add(AddArgs),
    /// Set the quantity of a line (values below 1 become 1)
    Update {
        /// Line position (0-based)
        position: usize,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a line
    Remove {
        /// Line position (0-based)
        position: usize,
    },
    /// Empty the cart
    Clear,
    /// Replace the cart with the line items in a JSON file
    Import {
        /// File containing a JSON array of line items
        file: PathBuf,
    },
}

#[derive(Args)]
#[command(group(ArgGroup::new("product").required(true).multiple(true).args(["dish", "combo"])))]
struct AddArgs {
    /// Dish ID
    #[arg(long)]
    dish: Option<DishId>,

    /// Combo ID
    #[arg(long)]
    combo: Option<ComboId>,

    /// Display name
    #[arg(short, long)]
    name: String,

    /// Unit price (e.g. 11.50)
    #[arg(short, long, value_parser = parse_price)]
    price: Decimal,

    /// Number of units
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    quantity: u32,

    /// Customization notes
    #[arg(long)]
    notes: Option<String>,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CommandError> {
    let mut config = CartConfig::from_env()?;
    if let Some(storage) = cli.storage {
        config.storage_path = storage;
    }
    if let Some(key) = cli.key {
        config.cart_key = key;
    }

    let cart = commands::open_cart(&config);
    tracing::debug!(
        storage = %config.storage_path.display(),
        key = %config.cart_key,
        policy = %config.identity_policy,
        "Opened cart"
    );

    let output = match cli.command {
        Commands::Show { json } => commands::cart::show(&cart, json)?,
        Commands::Add(args) => {
            let mut item = match (args.dish, args.combo) {
                (Some(dish), combo) => {
                    let mut item = takeaway_core::CartLineItem::dish(
                        dish,
                        args.name,
                        args.price,
                        args.quantity,
                    );
                    item.combo_id = combo;
                    item
                }
                (None, Some(combo)) => takeaway_core::CartLineItem::combo(
                    combo,
                    args.name,
                    args.price,
                    args.quantity,
                ),
                (None, None) => return Err(CommandError::MissingProduct),
            };
            item.notes = args.notes;
            commands::cart::add(&cart, item)
        }
        Commands::Update { position, quantity } => {
            commands::cart::update(&cart, position, quantity)
        }
        Commands::Remove { position } => commands::cart::remove(&cart, position),
        Commands::Clear => commands::cart::clear(&cart),
        Commands::Import { file } => commands::cart::import(&cart, &file)?,
    };

    print_output(&output);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_output(output: &str) {
    println!("{output}");
}
