//! # Seed Data Generator
//!
//! Populates the database with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Insert the two reference products only
//! cargo run -p stockroom-db --bin seed
//!
//! # Add 200 generated products on top
//! cargo run -p stockroom-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p stockroom-db --bin seed -- --db ./data/stockroom.db
//! ```
//!
//! ## Generated Products
//! Every run starts with the reference products:
//! - OstrichToy, Grey, 85.12, 133 in stock
//! - FiberPen, Blue, 12.00, 1500 in stock
//!
//! Generated products combine an item name with a color, a price between
//! 0.99 and 49.98 and a stock level between 0 and 499.

use std::env;
use std::process::ExitCode;

use stockroom_core::{Money, Product};
use stockroom_db::seed::{reference_products, seed_if_empty};
use stockroom_db::{Database, DbConfig, DbError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Item names for generated products
const ITEMS: &[&str] = &[
    "Notebook", "Stapler", "Desk Lamp", "Mug", "Backpack", "Umbrella", "Water Bottle",
    "Pencil Case", "Headphones", "Mouse Pad", "Plant Pot", "Scarf", "Yo-Yo", "Kite",
];

/// Colors for generated products
const COLORS: &[&str] = &["Red", "Green", "Black", "White", "Yellow", "Purple", "Orange"];

const DEFAULT_DB_PATH: &str = "./data/stockroom.db";

/// Parsed command line options.
struct SeedArgs {
    count: usize,
    db_path: String,
}

enum Command {
    Seed(SeedArgs),
    Help,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(Command::Seed(args)) => args,
        Ok(Command::Help) => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("{message}");
            print_help();
            return ExitCode::FAILURE;
        }
    };

    match seed(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Seeding failed");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command, String> {
    let mut parsed = SeedArgs {
        count: 0,
        db_path: String::from(DEFAULT_DB_PATH),
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--count" | "-c" => {
                let value = args.next().ok_or("--count needs a value")?;
                parsed.count = value
                    .parse()
                    .map_err(|_| format!("--count expects a number, got '{value}'"))?;
            }
            "--db" | "-d" => {
                parsed.db_path = args.next().ok_or("--db needs a value")?;
            }
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(format!("Unknown argument '{other}'")),
        }
    }

    Ok(Command::Seed(parsed))
}

fn print_help() {
    println!("Stockroom Seed Data Generator");
    println!();
    println!("Usage: seed [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --count <N>    Generated products on top of the reference ones (default: 0)");
    println!("  -d, --db <PATH>    Database file path (default: {DEFAULT_DB_PATH})");
    println!("  -h, --help         Show this help message");
}

async fn seed(args: SeedArgs) -> Result<(), DbError> {
    info!(database = %args.db_path, count = args.count, "Seeding database");

    let db = Database::new(DbConfig::new(&args.db_path)).await?;
    let start = std::time::Instant::now();

    let products = reference_products()
        .into_iter()
        .chain((0..args.count).map(generate_product));
    let inserted = seed_if_empty(&db.products(), products).await;

    db.close().await;
    info!(elapsed = ?start.elapsed(), "Seed finished");
    inserted.map(|_| ())
}

/// Generates a single product with plausible data.
fn generate_product(seed: usize) -> Product {
    let item = ITEMS[seed % ITEMS.len()];
    let color = COLORS[(seed / ITEMS.len()) % COLORS.len()];
    let batch = seed / (ITEMS.len() * COLORS.len());

    let name = if batch == 0 {
        format!("{color} {item}")
    } else {
        format!("{color} {item} #{}", batch + 1)
    };

    // 0.99 - 49.98
    let price_cents = 99 + ((seed as i64 * 37) % 4900);
    let stock = (seed as i64 * 13) % 500;

    Product::new(name, color, Money::from_cents(price_cents), stock)
}
