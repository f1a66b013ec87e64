use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use terratile::{generate_with_progress, ElevationStore};

pub fn run(config: Option<PathBuf>, out_dir: Option<PathBuf>) -> Result<()> {
    let mut config = super::load_config(config)?;
    if let Some(dir) = out_dir {
        config.map.path = dir;
    }

    let store = ElevationStore::load(&config.files)
        .context("Failed to load elevation rasters")?;
    println!("Loaded {} elevation tiles", store.len());

    let around = config.map.tiles_around();
    let tile_count =
        (around.north + around.south + 1) as u64 * (around.east + around.west + 1) as u64;

    let pb = ProgressBar::new(tile_count);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )?
            .progress_chars("#>-"),
    );

    let summary = generate_with_progress(&config, &store, |_| pb.inc(1))
        .context("Tile generation failed")?;
    pb.finish_and_clear();

    println!(
        "Collected {} samples, wrote {} tiles to {}",
        summary.samples,
        summary.tiles_written,
        config.map.path.display()
    );

    Ok(())
}
