//! Generator configuration.
//!
//! The configuration is a JSON document naming the raster files to load
//! and the map parameters: tile geometry, quantization floor, center
//! point, and how many whole tiles to emit around the center.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::geodetic::GeoPoint;

/// Whole-tile counts emitted around the center tile, per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilesAround {
    pub north: u32,
    pub east: u32,
    pub south: u32,
    pub west: u32,
}

/// Top-level configuration document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Raster source files registered into the elevation store.
    pub files: Vec<PathBuf>,
    pub map: MapConfig,
}

/// Map-generation parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapConfig {
    /// Tile extent along east, meters.
    pub tile_size_x: f64,
    /// Tile extent along north, meters.
    pub tile_size_y: f64,
    /// Grid points per tile axis.
    pub tile_resolution: usize,
    /// Quantization floor, meters; the encoded range spans 600 m above it.
    pub minimal_terrain_height: f64,
    /// Center latitude, decimal degrees.
    pub center_latitude: f64,
    /// Center longitude, decimal degrees.
    pub center_longitude: f64,
    /// Tile counts around the center: [north, east, south, west].
    pub tiles_around: [u32; 4],
    /// Output directory.
    pub path: PathBuf,
    /// Output filename prefix.
    pub file_name: String,
}

impl Config {
    /// Load and parse a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl MapConfig {
    /// The configured center point at height zero.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.center_latitude, self.center_longitude, 0.0)
    }

    pub fn tiles_around(&self) -> TilesAround {
        TilesAround {
            north: self.tiles_around[0],
            east: self.tiles_around[1],
            south: self.tiles_around[2],
            west: self.tiles_around[3],
        }
    }
}
