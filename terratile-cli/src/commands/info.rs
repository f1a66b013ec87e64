use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use terratile::tile::TILE_GRID;
use terratile::{filename, ElevationTile};

pub fn run(tile: String) -> Result<()> {
    let path = if tile.ends_with(".hgt") {
        PathBuf::from(&tile)
    } else {
        PathBuf::from(format!("{}.hgt", tile))
    };

    if !path.exists() {
        bail!("Raster not found: {}", path.display());
    }

    let (sw_lat, sw_lon) = filename::parse_tile_name(&path.to_string_lossy())?;
    let loaded = ElevationTile::from_hgt(&path).context("Failed to load raster")?;
    let (origin_lat, origin_lon) = loaded.origin();
    let (min_elev, max_elev) = loaded.sample_range();

    let metadata = std::fs::metadata(&path)?;

    println!("Raster: {}", path.display());
    println!();
    println!("Grid: {}x{} samples, one arc-second spacing", TILE_GRID, TILE_GRID);
    println!(
        "Coverage: {}..{} deg latitude, {}..{} deg longitude",
        sw_lat,
        sw_lat + 1,
        sw_lon,
        sw_lon + 1
    );
    println!("Store origin (NW corner): ({}, {})", origin_lat, origin_lon);
    println!("File size: {} bytes", metadata.len());
    println!();
    println!("Min elevation: {}m", min_elev);
    println!("Max elevation: {}m", max_elev);

    Ok(())
}
