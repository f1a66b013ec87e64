//! Elevation tiles: one-degree squares of one-arc-second samples.
//!
//! A tile holds a 3601 × 3601 grid of elevation values spanning exactly
//! one degree in each direction. Row 0 is the northmost edge, column 0
//! the westmost; the outer rows and columns are shared with the
//! neighboring tiles.

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use crate::error::{Result, TerrainError};
use crate::filename;

/// Arc-seconds spanned by one tile edge.
pub const TILE_SPAN_ARCSEC: i64 = 3600;

/// Samples per tile row/column (edges shared with neighbors).
pub const TILE_GRID: usize = 3601;

/// Byte size of a one-arc-second `.hgt` raster: 3601 × 3601 × 2.
const HGT_SIZE: usize = TILE_GRID * TILE_GRID * 2;

/// A one-degree square of elevation samples, keyed by its northwest corner.
#[derive(Debug, Clone)]
pub struct ElevationTile {
    /// Latitude of the northwest corner, whole degrees.
    origin_lat: i32,
    /// Longitude of the northwest corner, whole degrees.
    origin_lon: i32,
    /// Row-major samples, row 0 = north edge, column 0 = west edge.
    samples: Vec<f64>,
}

impl ElevationTile {
    /// Build a tile from an in-memory sample grid.
    ///
    /// This is the entry point for raster collaborators that decode
    /// formats other than `.hgt`; they only need to supply the rounded
    /// northwest origin and the 3601 × 3601 array.
    pub fn from_samples(origin_lat: i32, origin_lon: i32, samples: Vec<f64>) -> Result<Self> {
        if samples.len() != TILE_GRID * TILE_GRID {
            return Err(TerrainError::InvalidFileSize {
                size: samples.len() * 2,
            });
        }
        Ok(Self {
            origin_lat,
            origin_lon,
            samples,
        })
    }

    /// Load a tile from a `.hgt` raster file.
    ///
    /// The file is memory-mapped, validated against the one-arc-second
    /// size, and decoded from big-endian 16-bit integers into floating
    /// samples. The tile origin comes from the filename.
    ///
    /// # Errors
    ///
    /// Fails if the filename doesn't encode a tile corner, the file can't
    /// be opened or mapped, or its size is not 3601 × 3601 × 2 bytes.
    pub fn from_hgt<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let (origin_lat, origin_lon) = filename::tile_origin(&path.to_string_lossy())?;

        let file = File::open(path)?;

        // SAFETY: the mapping is read-only and never outlives this call;
        // the file is not written through the map.
        let mmap = unsafe { Mmap::map(&file)? };

        if mmap.len() != HGT_SIZE {
            return Err(TerrainError::InvalidFileSize { size: mmap.len() });
        }

        let samples = mmap
            .chunks_exact(2)
            .map(|pair| i16::from_be_bytes([pair[0], pair[1]]) as f64)
            .collect();

        Ok(Self {
            origin_lat,
            origin_lon,
            samples,
        })
    }

    /// Sample at (row, col); row 0 = north edge, col 0 = west edge.
    pub fn sample(&self, row: usize, col: usize) -> f64 {
        debug_assert!(row < TILE_GRID && col < TILE_GRID);
        self.samples[row * TILE_GRID + col]
    }

    /// Northwest corner in whole degrees, used as the store key.
    pub fn origin(&self) -> (i32, i32) {
        (self.origin_lat, self.origin_lon)
    }

    /// Minimum and maximum sample values.
    pub fn sample_range(&self) -> (f64, f64) {
        self.samples.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), &v| (min.min(v), max.max(v)),
        )
    }
}
