//! nobeltab-probe: print the record count of each API collection
//!
//! A one-record fetch per endpoint, reading the `meta.count` the API reports
//! about itself. Useful for sizing a full fetch before running `nobeltab`.

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use nobeltab::{ApiClient, DEFAULT_BASE_URL, LAUREATES_PATH, NOBEL_PRIZES_PATH};

#[derive(Parser, Debug)]
#[command(name = "nobeltab-probe")]
#[command(about = "Print the record count of each Nobel Prize API collection", long_about = None)]
struct Args {
    /// Base URL of the API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();
    let args = Args::parse();
    let client = ApiClient::new();

    for path in [LAUREATES_PATH, NOBEL_PRIZES_PATH] {
        let url = format!("{}/{}", args.base_url, path);
        match client.collection_size(&url) {
            Some(count) => println!("{}: {} records", path, count),
            None => println!("{}: count unavailable", path),
        }
    }

    Ok(())
}
