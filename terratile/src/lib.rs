//! # terratile - quantized terrain-tile generator
//!
//! Turns one-degree DEM rasters plus a configured center point into a
//! grid of quantized, locally-projected terrain tiles for real-time
//! rendering.
//!
//! ## Pipeline
//!
//! 1. **Elevation store**: every configured raster is registered under
//!    its whole-degree northwest corner; lookups resolve degree-boundary
//!    points through a fixed candidate order shared by up to four tiles.
//! 2. **Local tangent plane**: an East-North-Up frame at the configured
//!    center, on a sphere of radius 6 371 009 m.
//! 3. **Sample cloud**: every whole arc-second offset over the
//!    configured area, projected to ENU with its elevation.
//! 4. **Surface**: Delaunay triangulation with natural-neighbor
//!    evaluation on each tile's regular grid.
//! 5. **Quantization**: heights rescaled to u16 over a 600 m range
//!    above the configured floor (wraparound outside it, by design) and
//!    written as headerless little-endian `.raw` files.
//!
//! ## Quick start
//!
//! ```no_run
//! use terratile::{generate, Config, ElevationStore};
//!
//! let config = Config::from_file("config.json")?;
//! let store = ElevationStore::load(&config.files)?;
//! let summary = generate(&config, &store)?;
//! println!("{} tiles written", summary.tiles_written);
//! # Ok::<(), terratile::TerrainError>(())
//! ```
//!
//! ## Tile format
//!
//! Each output file holds `resolution²` unsigned 16-bit values, no
//! header, little-endian, flattened row-major with the grid transposed
//! relative to its natural (x, y) axis order. Filenames embed the tile
//! index, column, and row: `{prefix}_{index}_{col}_{row}.raw`.

pub mod config;
pub mod error;
pub mod filename;
pub mod geodetic;
pub mod pipeline;
pub mod quantize;
pub mod sampler;
pub mod store;
pub mod surface;
pub mod tile;

// Re-export main types at crate root for convenience
pub use config::{Config, MapConfig, TilesAround};
pub use error::{Result, TerrainError};
pub use geodetic::{
    ecef_to_geog, geo_dist, geog_to_ecef, rotation_matrix, AngleUnit, GeoPoint,
    LocalTangentPlane, EARTH_RADIUS,
};
pub use pipeline::{generate, generate_with_progress, GenerationSummary, TileSpec};
pub use quantize::{encode_tile, payload_bytes, quantize, HEIGHT_RANGE_M};
pub use sampler::{SampleCloud, SamplePoint};
pub use store::{CoordFormat, Coordinate, ElevationStore};
pub use surface::{GridSpec, TerrainSurface};
pub use tile::{ElevationTile, TILE_GRID, TILE_SPAN_ARCSEC};
