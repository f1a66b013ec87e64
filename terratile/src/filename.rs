//! Raster tile-name utilities.
//!
//! One-degree DEM rasters follow the naming convention
//! `{N|S}{lat}{E|W}{lon}.hgt`, where the encoded coordinate is the
//! **southwest** corner of the 1° × 1° tile. The elevation store keys
//! tiles by their **northwest** corner, one degree further north.

use std::path::Path;

use crate::error::{Result, TerrainError};

/// Parse a raster name into the southwest corner of its tile.
///
/// Accepts a bare name, a name with the `.hgt` extension, or a full path.
///
/// # Examples
///
/// ```
/// use terratile::filename::parse_tile_name;
///
/// assert_eq!(parse_tile_name("N49E018.hgt").unwrap(), (49, 18));
/// assert_eq!(parse_tile_name("S12W077").unwrap(), (-12, -77));
/// assert_eq!(parse_tile_name("/dem/N00E000.hgt").unwrap(), (0, 0));
/// assert!(parse_tile_name("invalid").is_err());
/// ```
pub fn parse_tile_name(name: &str) -> Result<(i32, i32)> {
    let stem = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(name);
    let stem = stem.strip_suffix(".hgt").unwrap_or(stem);

    let invalid = || TerrainError::InvalidFilename(name.to_string());

    // Exactly N00E000 shaped: hemisphere, 2 digits, hemisphere, 3 digits.
    if stem.len() != 7 {
        return Err(invalid());
    }

    let bytes = stem.as_bytes();
    let lat_sign = match bytes[0] {
        b'N' | b'n' => 1,
        b'S' | b's' => -1,
        _ => return Err(invalid()),
    };
    let lon_sign = match bytes[3] {
        b'E' | b'e' => 1,
        b'W' | b'w' => -1,
        _ => return Err(invalid()),
    };
    let lat: i32 = stem[1..3].parse().map_err(|_| invalid())?;
    let lon: i32 = stem[4..7].parse().map_err(|_| invalid())?;

    Ok((lat * lat_sign, lon * lon_sign))
}

/// Northwest corner of the tile named by a raster file.
///
/// This is the key under which the tile is registered in the elevation
/// store: the named southwest latitude plus one degree.
pub fn tile_origin(name: &str) -> Result<(i32, i32)> {
    let (sw_lat, sw_lon) = parse_tile_name(name)?;
    Ok((sw_lat + 1, sw_lon))
}

/// Format the raster name covering the given southwest corner.
///
/// # Examples
///
/// ```
/// use terratile::filename::format_tile_name;
///
/// assert_eq!(format_tile_name(49, 18), "N49E018.hgt");
/// assert_eq!(format_tile_name(-13, -78), "S13W078.hgt");
/// ```
pub fn format_tile_name(sw_lat: i32, sw_lon: i32) -> String {
    format!(
        "{}{:02}{}{:03}.hgt",
        if sw_lat >= 0 { 'N' } else { 'S' },
        sw_lat.abs(),
        if sw_lon >= 0 { 'E' } else { 'W' },
        sw_lon.abs()
    )
}
