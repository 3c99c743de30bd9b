//! Loading a pre-seeded store from a JSON file.
//!
//! The file holds an array of complete quotes:
//! `[{"id": "1", "content": "...", "author": "...", "genre_type": "..."}]`.
use log::info;
use quote_common::{Quote, QuoteStore, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read `path` and build a store holding its quotes in file order.
pub fn load(path: &Path) -> Result<QuoteStore> {
    let reader = BufReader::new(File::open(path)?);
    let quotes: Vec<Quote> = serde_json::from_reader(reader)?;
    let store = QuoteStore::from_seed(quotes)?;
    info!("Loaded {} seed quotes from {}", store.len(), path.display());
    Ok(store)
}
