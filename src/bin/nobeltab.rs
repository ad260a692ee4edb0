//! nobeltab: fetch Nobel Prize API collections and flatten them to CSV
//!
//! Usage:
//!   # Fetch both collections, sized from the API's own counts
//!   nobeltab --output-dir ./data
//!
//!   # Fetch only the laureates, with an explicit limit
//!   nobeltab --collection laureates --limit 50
//!
//!   # Flatten a previously saved payload without touching the network
//!   nobeltab --input laureates.json --output-dir ./data

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use nobeltab::{
    normalize, write_csv_file, ApiClient, CollectionShape, Table, DEFAULT_BASE_URL,
    LAUREATES_PATH, NOBEL_PRIZES_PATH,
};
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Collection {
    Laureates,
    Prizes,
    Both,
}

#[derive(Parser, Debug)]
#[command(name = "nobeltab")]
#[command(about = "Flatten Nobel Prize API collections into CSV tables", long_about = None)]
struct Args {
    /// Local JSON payload file to flatten instead of fetching
    #[arg(long, conflicts_with = "collection")]
    input: Option<PathBuf>,

    /// Which collection(s) to fetch
    #[arg(long, value_enum, default_value = "both")]
    collection: Collection,

    /// Base URL of the API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Record limit per fetch (default: the endpoint's meta.count)
    #[arg(long)]
    limit: Option<u64>,

    /// Directory for the output CSV files
    #[arg(long, short = 'o', default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();
    let args = Args::parse();

    if let Some(input) = &args.input {
        return flatten_file(input, &args.output_dir);
    }

    let client = ApiClient::new();

    if matches!(args.collection, Collection::Laureates | Collection::Both) {
        let url = format!("{}/{}", args.base_url, LAUREATES_PATH);
        fetch_and_write(&client, &url, args.limit, &args.output_dir)?;
    }
    if matches!(args.collection, Collection::Prizes | Collection::Both) {
        let url = format!("{}/{}", args.base_url, NOBEL_PRIZES_PATH);
        fetch_and_write(&client, &url, args.limit, &args.output_dir)?;
    }

    Ok(())
}

/// Fetch one endpoint, sized from its metadata unless a limit was given,
/// then flatten and persist it.
fn fetch_and_write(
    client: &ApiClient,
    url: &str,
    limit: Option<u64>,
    output_dir: &Path,
) -> Result<()> {
    let limit = match limit {
        Some(n) => n,
        None => client
            .collection_size(url)
            .with_context(|| format!("Failed to probe collection size: {}", url))?,
    };

    let Some(payload) = client.fetch(url, limit) else {
        bail!("Fetch failed: {}", url);
    };

    let table = normalize(&payload)?;
    write_table(&table, output_dir)
}

/// Flatten a saved payload file. Parsed with simd-json for speed, falling
/// back to serde_json for input simd-json rejects.
fn flatten_file(input: &Path, output_dir: &Path) -> Result<()> {
    let mut content = std::fs::read(input)
        .with_context(|| format!("Failed to read file: {}", input.display()))?;

    let payload: Value = match simd_json::to_owned_value(&mut content) {
        Ok(value) => {
            let json_str = simd_json::to_string(&value)?;
            serde_json::from_str(&json_str)?
        }
        Err(_) => {
            let content_str = String::from_utf8_lossy(&content);
            serde_json::from_str(content_str.trim()).context("Failed to parse JSON")?
        }
    };

    let table = normalize(&payload)?;
    write_table(&table, output_dir)
}

/// Persist a table to the CSV file named for its shape.
fn write_table(table: &Table, output_dir: &Path) -> Result<()> {
    let filename = match table.shape {
        CollectionShape::Laureates => "laureates.csv",
        CollectionShape::NobelPrizes => "nobel_prizes.csv",
        CollectionShape::Unrecognized => {
            eprintln!("⚠ Warning: payload holds no recognized collection, nothing written.");
            return Ok(());
        }
    };

    let path = output_dir.join(filename);
    write_csv_file(table, &path)?;
    println!("✓ Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}
