#![cfg(not(tarpaulin_include))]

use marypy::loader::{DEFAULT_STRAINS_PATH, load_strains};
use marypy::query::search_strains;
use std::env;

// Usage: inspect [csv_path] [search_term]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_STRAINS_PATH);
    let term = args.get(2).map(String::as_str).unwrap_or("Widow");

    let table = load_strains(path)?;
    println!("{} strains loaded from {}", table.len(), path);

    println!("\nFirst five records:");
    for record in table.records().iter().take(5) {
        println!("  {}", serde_json::to_string(record)?);
    }

    println!("\nSearch term: {}", term);
    match search_strains(&table, term, None) {
        Ok(results) => {
            for record in &results {
                println!("  {}", serde_json::to_string(record)?);
            }
            println!("{} match(es)", results.len());
        }
        Err(e) => eprintln!("Search failed: {}", e),
    }

    Ok(())
}
