//! # Seed Data Generator
//!
//! Populates the database with sample items for development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 items (default)
//! cargo run -p stock-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p stock-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p stock-db --bin seed -- --db ./data/stock.db
//! ```
//!
//! Names are `{part} {size}`, quantities cycle through 0..=120 so sorting
//! by quantity has something to do.

use std::env;
use stock_db::{Database, DbConfig};

const DEFAULT_COUNT: usize = 50;

/// Part names for sample data
const PARTS: &[&str] = &[
    "Hex Bolt",
    "Lock Nut",
    "Flat Washer",
    "Wood Screw",
    "Wall Anchor",
    "Hinge",
    "Cable Tie",
    "Drawer Slide",
    "Shelf Bracket",
    "Pipe Clamp",
];

/// Size suffixes
const SIZES: &[&str] = &["M4", "M5", "M6", "M8", "M10"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count = DEFAULT_COUNT;
    let mut db_path = String::from("./stock_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(DEFAULT_COUNT);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stock Tracker Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of items to generate (default: {DEFAULT_COUNT})");
                println!("  -d, --db <PATH>    Database file path (default: ./stock_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Stock Tracker Seed Data Generator");
    println!("=================================");
    println!("Database: {}", db_path);
    println!("Items:    {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");

    let items = db.items();
    let existing = items.count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} items", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        db.close().await;
        return Ok(());
    }

    let start = std::time::Instant::now();
    for n in 0..count {
        let (name, quantity) = sample_item(n);
        if let Err(e) = items.insert(&name, quantity).await {
            eprintln!("Failed to insert {}: {}", name, e);
        }
    }

    println!("✓ Generated {} items in {:?}", items.count().await?, start.elapsed());
    println!("  Total stock: {}", items.total_quantity().await?);
    println!("  Search 'bolt': {} results", items.search("bolt").await?.len());

    db.close().await;
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Deterministic sample row for index `n`.
fn sample_item(n: usize) -> (String, i64) {
    let part = PARTS[n % PARTS.len()];
    let size = SIZES[(n / PARTS.len()) % SIZES.len()];
    let round = n / (PARTS.len() * SIZES.len());

    let name = if round == 0 {
        format!("{part} {size}")
    } else {
        format!("{part} {size} #{}", round + 1)
    };
    let quantity = ((n * 37) % 121) as i64;

    (name, quantity)
}
