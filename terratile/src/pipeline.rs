//! Tile orchestration: iteration order, grid construction, file output.
//!
//! Tiles are walked row by row from the northmost row down to the
//! southmost, west to east within a row, and numbered in that exact
//! order. Downstream consumers depend on the numbering and on the
//! `{prefix}_{index}_{col}_{row}.raw` filenames, so the order is part of
//! the output format.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{Config, TilesAround};
use crate::error::Result;
use crate::geodetic::{AngleUnit, LocalTangentPlane};
use crate::quantize::{encode_tile, payload_bytes};
use crate::sampler::SampleCloud;
use crate::store::ElevationStore;
use crate::surface::{GridSpec, TerrainSurface};

/// One output tile: its position in the grid and its ENU center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSpec {
    /// Monotone output index in iteration order.
    pub index: usize,
    /// Column relative to the center tile, west negative.
    pub col: i64,
    /// Row relative to the center tile, south negative.
    pub row: i64,
    /// ENU offset of the tile center, meters east.
    pub center_east: f64,
    /// ENU offset of the tile center, meters north.
    pub center_north: f64,
}

impl TileSpec {
    /// The regular evaluation grid covering this tile.
    pub fn grid(&self, tile_size_x: f64, tile_size_y: f64, resolution: usize) -> GridSpec {
        GridSpec {
            x_start: self.center_east - tile_size_x / 2.0,
            x_end: self.center_east + tile_size_x / 2.0,
            y_start: self.center_north - tile_size_y / 2.0,
            y_end: self.center_north + tile_size_y / 2.0,
            resolution,
        }
    }

    /// Output filename for this tile.
    pub fn filename(&self, prefix: &str) -> String {
        format!("{}_{}_{}_{}.raw", prefix, self.index, self.col, self.row)
    }
}

/// Enumerate the output tiles in their fixed order.
///
/// Rows run from `north` down to `-south` (outer), columns from `-west`
/// up to `east` (inner); the index increases monotonically across the
/// whole walk.
pub fn tile_specs(around: TilesAround, tile_size_x: f64, tile_size_y: f64) -> Vec<TileSpec> {
    let mut specs = Vec::new();
    let mut index = 0;
    let mut row = around.north as i64;
    while row >= -(around.south as i64) {
        for col in -(around.west as i64)..=(around.east as i64) {
            specs.push(TileSpec {
                index,
                col,
                row,
                center_east: col as f64 * tile_size_x,
                center_north: row as f64 * tile_size_y,
            });
            index += 1;
        }
        row -= 1;
    }
    specs
}

/// Summary of a completed generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerationSummary {
    /// Scattered samples collected for the shared cloud.
    pub samples: usize,
    /// Tiles written.
    pub tiles_written: usize,
    /// Paths of the emitted files, in tile order.
    pub files: Vec<PathBuf>,
}

/// Run the full pipeline: shared cloud, then one file per tile.
///
/// The whole run is all-or-nothing: a missing elevation tile or an IO
/// failure aborts it, and no partial tile set is left behind as a valid
/// result.
pub fn generate(config: &Config, store: &ElevationStore) -> Result<GenerationSummary> {
    generate_with_progress(config, store, |_| {})
}

/// [`generate`] with a per-tile callback, invoked after each tile is
/// written. This is the hook for CLI progress reporting.
pub fn generate_with_progress(
    config: &Config,
    store: &ElevationStore,
    mut on_tile: impl FnMut(&TileSpec),
) -> Result<GenerationSummary> {
    let map = &config.map;
    let center = map.center();
    let ltp = LocalTangentPlane::new(&center, AngleUnit::Degrees);

    let cloud = SampleCloud::collect(
        &ltp,
        store,
        &center,
        map.tile_size_x,
        map.tile_size_y,
        map.tiles_around(),
    )?;
    let surface = TerrainSurface::new(&cloud)?;

    fs::create_dir_all(&map.path)?;

    let specs = tile_specs(map.tiles_around(), map.tile_size_x, map.tile_size_y);
    let mut summary = GenerationSummary {
        samples: cloud.len(),
        ..Default::default()
    };

    for spec in &specs {
        let grid = spec.grid(map.tile_size_x, map.tile_size_y, map.tile_resolution);
        let values = surface.eval_grid(&grid);
        let encoded = encode_tile(&values, map.tile_resolution, map.minimal_terrain_height);

        let path = map.path.join(spec.filename(&map.file_name));
        write_payload(&path, &payload_bytes(&encoded))?;

        summary.tiles_written += 1;
        summary.files.push(path);
        on_tile(spec);
    }

    Ok(summary)
}

fn write_payload(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    Ok(())
}
