//! Basic example running the full tile pipeline from a config file.
//!
//! Run with: cargo run --example generate -- config.json

use std::env;

use terratile::{generate, Config, ElevationStore, TerrainError};

fn main() -> Result<(), TerrainError> {
    let config_path = env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: cargo run --example generate -- config.json");
        std::process::exit(1);
    });

    let config = Config::from_file(&config_path)?;
    let store = ElevationStore::load(&config.files)?;
    println!("Loaded {} elevation tiles", store.len());

    let summary = generate(&config, &store)?;
    println!(
        "Collected {} samples, wrote {} tiles to {}",
        summary.samples,
        summary.tiles_written,
        config.map.path.display()
    );

    Ok(())
}
