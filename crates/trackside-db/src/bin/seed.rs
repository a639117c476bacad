//! # Catalog Seeder
//!
//! Creates and fills a racing or sports database file ahead of time, so a
//! server starting against it finds its rows already in place.
//!
//! ## Usage
//! ```bash
//! # Racing catalog at ./db/racing.db (default)
//! cargo run -p trackside-db --bin seed
//!
//! # Sports catalog
//! cargo run -p trackside-db --bin seed -- --catalog sports
//!
//! # Specify database path
//! cargo run -p trackside-db --bin seed -- --catalog racing --db ./data/racing.db
//! ```

use std::env;

use trackside_core::{CatalogRecord, Event, ListFilter, Race, Status};
use trackside_db::{CatalogRepository, Database, DbConfig, EventRepository, RaceRepository};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Catalog {
    Racing,
    Sports,
}

impl Catalog {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "racing" | "races" => Some(Catalog::Racing),
            "sports" | "events" => Some(Catalog::Sports),
            _ => None,
        }
    }

    fn default_path(&self) -> &'static str {
        match self {
            Catalog::Racing => "./db/racing.db",
            Catalog::Sports => "./db/events.db",
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut catalog = Catalog::Racing;
    let mut db_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--catalog" | "-c" => {
                if i + 1 < args.len() {
                    catalog = Catalog::parse(&args[i + 1])
                        .ok_or_else(|| format!("unknown catalog '{}'", args[i + 1]))?;
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Trackside Catalog Seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --catalog <NAME>  racing or sports (default: racing)");
                println!("  -d, --db <PATH>       Database file path (default: ./db/racing.db or ./db/events.db)");
                println!("  -h, --help            Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let db_path = db_path.unwrap_or_else(|| catalog.default_path().to_string());

    println!("🌱 Trackside Catalog Seeder");
    println!("===========================");
    println!("Catalog:  {:?}", catalog);
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");

    let start = std::time::Instant::now();
    let (total, open) = match catalog {
        Catalog::Racing => summarize(&RaceRepository::open(db.pool().clone()).await?, |r: &Race| r.status).await?,
        Catalog::Sports => summarize(&EventRepository::open(db.pool().clone()).await?, |e: &Event| e.status).await?,
    };

    println!("✓ Seeded in {:?}", start.elapsed());
    println!("  Rows:   {}", total);
    println!("  OPEN:   {}", open);
    println!("  CLOSED: {}", total - open);

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Initializes `repo` and counts its rows and OPEN rows.
async fn summarize<R, S>(
    repo: &S,
    status: impl Fn(&R) -> Status,
) -> Result<(usize, usize), Box<dyn std::error::Error>>
where
    R: CatalogRecord,
    S: CatalogRepository<R>,
{
    repo.init().await?;
    let records = repo.list(Some(&ListFilter::default())).await?;
    let open = records.iter().filter(|r| status(r) == Status::Open).count();
    Ok((records.len(), open))
}
