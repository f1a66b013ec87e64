//! Elevation lookup over a registry of one-degree tiles.
//!
//! The store maps northwest-corner keys to [`ElevationTile`]s and resolves
//! a query coordinate to a sample. A coordinate that sits exactly on a
//! degree boundary is shared by up to four adjacent tiles; lookup walks a
//! fixed candidate order so the result is deterministic regardless of
//! which neighbors happen to be registered.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, TerrainError};
use crate::tile::{ElevationTile, TILE_SPAN_ARCSEC};

/// A query coordinate in one of the supported input formats.
///
/// Whatever the format, lookup rounds the position to the nearest whole
/// arc-second pair before resolving a tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coordinate {
    /// Decimal degrees.
    Decimal { lat: f64, lon: f64 },
    /// Degree / minute / second triplets.
    Dms {
        lat: (f64, f64, f64),
        lon: (f64, f64, f64),
    },
    /// Whole arc-seconds (possibly fractional before rounding).
    ArcSeconds { lat: f64, lon: f64 },
}

impl Coordinate {
    /// Round to the nearest whole arc-second pair.
    pub fn to_arc_seconds(&self) -> (i64, i64) {
        let (lat_sec, lon_sec) = match *self {
            Coordinate::Decimal { lat, lon } => (lat * 3600.0, lon * 3600.0),
            Coordinate::Dms { lat, lon } => (
                lat.0 * 3600.0 + lat.1 * 60.0 + lat.2,
                lon.0 * 3600.0 + lon.1 * 60.0 + lon.2,
            ),
            Coordinate::ArcSeconds { lat, lon } => (lat, lon),
        };
        (lat_sec.round() as i64, lon_sec.round() as i64)
    }
}

/// Names the supported [`Coordinate`] formats, for parsing user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordFormat {
    Decimal,
    Dms,
    ArcSeconds,
}

impl FromStr for CoordFormat {
    type Err = TerrainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "decimal" => Ok(CoordFormat::Decimal),
            "dms" => Ok(CoordFormat::Dms),
            "arcsec" => Ok(CoordFormat::ArcSeconds),
            other => Err(TerrainError::UnknownFormat(other.to_string())),
        }
    }
}

/// Registry of elevation tiles keyed by northwest corner.
///
/// Built once from the configured raster files and read-only afterward,
/// so it is safe to share across concurrent readers.
///
/// # Example
///
/// ```no_run
/// use terratile::{Coordinate, ElevationStore};
///
/// let store = ElevationStore::load(&["dem/N49E018.hgt"])?;
/// let elevation = store.elevation(&Coordinate::Decimal {
///     lat: 49.628117,
///     lon: 18.915636,
/// })?;
/// println!("{elevation} m");
/// # Ok::<(), terratile::TerrainError>(())
/// ```
#[derive(Debug, Default)]
pub struct ElevationStore {
    tiles: HashMap<(i32, i32), ElevationTile>,
}

impl ElevationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every raster in `paths`. Any unreadable raster fails the
    /// whole load; there is no partial store.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut store = Self::new();
        for path in paths {
            store.insert(ElevationTile::from_hgt(path)?);
        }
        Ok(store)
    }

    /// Register a tile under its northwest origin.
    pub fn insert(&mut self, tile: ElevationTile) {
        self.tiles.insert(tile.origin(), tile);
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, origin: (i32, i32)) -> bool {
        self.tiles.contains_key(&origin)
    }

    /// Resolve a coordinate to an elevation sample.
    ///
    /// The rounded arc-second position splits into whole degrees and a
    /// remainder via floor division. The northern neighbor `(deg + 1)` is
    /// always a latitude candidate; when the remainder is zero the point
    /// lies on the tile edge and `(deg, 3600)` is tried as well. For
    /// longitude the candidates are `(deg, rem)` and, on a zero
    /// remainder, `(deg - 1, 3600)`. Candidates are tried in
    /// latitude-major order and the first registered tile wins, reading
    /// row `3600 - latRem`, column `lonRem`.
    ///
    /// # Errors
    ///
    /// [`TerrainError::MissingTile`] when no candidate tile is
    /// registered. There is no fallback; callers treat this as fatal.
    pub fn elevation(&self, coord: &Coordinate) -> Result<f64> {
        let (lat_sec, lon_sec) = coord.to_arc_seconds();

        let lat_deg = lat_sec.div_euclid(TILE_SPAN_ARCSEC);
        let lat_rem = lat_sec.rem_euclid(TILE_SPAN_ARCSEC);
        let lon_deg = lon_sec.div_euclid(TILE_SPAN_ARCSEC);
        let lon_rem = lon_sec.rem_euclid(TILE_SPAN_ARCSEC);

        let mut lat_candidates = vec![(lat_deg + 1, lat_rem)];
        if lat_rem == 0 {
            lat_candidates.push((lat_deg, TILE_SPAN_ARCSEC));
        }
        let mut lon_candidates = vec![(lon_deg, lon_rem)];
        if lon_rem == 0 {
            lon_candidates.push((lon_deg - 1, TILE_SPAN_ARCSEC));
        }

        for &(cand_lat, cand_lat_rem) in &lat_candidates {
            for &(cand_lon, cand_lon_rem) in &lon_candidates {
                if let Some(tile) = self.tiles.get(&(cand_lat as i32, cand_lon as i32)) {
                    let row = (TILE_SPAN_ARCSEC - cand_lat_rem) as usize;
                    let col = cand_lon_rem as usize;
                    return Ok(tile.sample(row, col));
                }
            }
        }

        Err(TerrainError::MissingTile { lat_sec, lon_sec })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TILE_GRID;

    /// A tile whose every sample encodes its own (row, col) position, so
    /// lookups can assert which cell was read.
    fn addressable_tile(origin_lat: i32, origin_lon: i32) -> ElevationTile {
        let mut samples = vec![0.0; TILE_GRID * TILE_GRID];
        for row in 0..TILE_GRID {
            for col in 0..TILE_GRID {
                samples[row * TILE_GRID + col] = (row * 10_000 + col) as f64;
            }
        }
        ElevationTile::from_samples(origin_lat, origin_lon, samples).unwrap()
    }

    fn constant_tile(origin_lat: i32, origin_lon: i32, value: f64) -> ElevationTile {
        ElevationTile::from_samples(origin_lat, origin_lon, vec![value; TILE_GRID * TILE_GRID])
            .unwrap()
    }

    #[test]
    fn test_interior_lookup() {
        let mut store = ElevationStore::new();
        store.insert(addressable_tile(50, 18));

        // 49.5, 18.25 -> remainders (1800, 900) -> row 1800, col 900.
        let v = store
            .elevation(&Coordinate::Decimal {
                lat: 49.5,
                lon: 18.25,
            })
            .unwrap();
        assert_eq!(v, (1800 * 10_000 + 900) as f64);
    }

    #[test]
    fn test_format_equivalence() {
        let mut store = ElevationStore::new();
        store.insert(addressable_tile(50, 18));

        let decimal = Coordinate::Decimal {
            lat: 49.5,
            lon: 18.25,
        };
        let dms = Coordinate::Dms {
            lat: (49.0, 30.0, 0.0),
            lon: (18.0, 15.0, 0.0),
        };
        let arcsec = Coordinate::ArcSeconds {
            lat: 49.5 * 3600.0,
            lon: 18.25 * 3600.0,
        };

        let expected = store.elevation(&decimal).unwrap();
        assert_eq!(store.elevation(&dms).unwrap(), expected);
        assert_eq!(store.elevation(&arcsec).unwrap(), expected);
    }

    #[test]
    fn test_arc_second_rounding() {
        let mut store = ElevationStore::new();
        store.insert(addressable_tile(50, 18));

        // 0.4" off a whole arc-second rounds back onto it.
        let v = store
            .elevation(&Coordinate::ArcSeconds {
                lat: 49.5 * 3600.0 + 0.4,
                lon: 18.25 * 3600.0 - 0.4,
            })
            .unwrap();
        assert_eq!(v, (1800 * 10_000 + 900) as f64);
    }

    #[test]
    fn test_corner_candidate_priority() {
        // (49, 18) exactly is shared by four tiles. Candidate order:
        // (50,18) row 3600 col 0, (50,17) row 3600 col 3600,
        // (49,18) row 0 col 0,    (49,17) row 0 col 3600.
        let corner = Coordinate::Decimal {
            lat: 49.0,
            lon: 18.0,
        };

        let mut store = ElevationStore::new();
        store.insert(constant_tile(50, 18, 1.0));
        store.insert(constant_tile(50, 17, 2.0));
        store.insert(constant_tile(49, 18, 3.0));
        store.insert(constant_tile(49, 17, 4.0));
        assert_eq!(store.elevation(&corner).unwrap(), 1.0);

        let mut store = ElevationStore::new();
        store.insert(constant_tile(50, 17, 2.0));
        store.insert(constant_tile(49, 18, 3.0));
        store.insert(constant_tile(49, 17, 4.0));
        assert_eq!(store.elevation(&corner).unwrap(), 2.0);

        let mut store = ElevationStore::new();
        store.insert(constant_tile(49, 18, 3.0));
        store.insert(constant_tile(49, 17, 4.0));
        assert_eq!(store.elevation(&corner).unwrap(), 3.0);

        let mut store = ElevationStore::new();
        store.insert(constant_tile(49, 17, 4.0));
        assert_eq!(store.elevation(&corner).unwrap(), 4.0);
    }

    #[test]
    fn test_corner_reads_shared_edge_cell() {
        // The four tiles share the physical corner; each candidate must
        // read its own edge cell for that corner.
        let corner = Coordinate::Decimal {
            lat: 49.0,
            lon: 18.0,
        };

        let mut store = ElevationStore::new();
        store.insert(addressable_tile(50, 18));
        // North tile: south edge, west column.
        assert_eq!(store.elevation(&corner).unwrap(), (3600 * 10_000) as f64);

        let mut store = ElevationStore::new();
        store.insert(addressable_tile(49, 17));
        // Southwest tile: north edge, east column.
        assert_eq!(store.elevation(&corner).unwrap(), 3600.0);
    }

    #[test]
    fn test_edge_latitude_only() {
        // On a latitude edge but longitude interior: two candidates.
        let edge = Coordinate::Decimal {
            lat: 49.0,
            lon: 18.5,
        };

        let mut store = ElevationStore::new();
        store.insert(addressable_tile(50, 18));
        assert_eq!(
            store.elevation(&edge).unwrap(),
            (3600 * 10_000 + 1800) as f64
        );

        let mut store = ElevationStore::new();
        store.insert(addressable_tile(49, 18));
        assert_eq!(store.elevation(&edge).unwrap(), 1800.0);
    }

    #[test]
    fn test_southern_hemisphere_floor_division() {
        // (-0.5, -0.5) must floor to degree -1 with remainder 1800 on
        // both axes, landing in the tile with northwest corner (0, -1).
        let mut store = ElevationStore::new();
        store.insert(addressable_tile(0, -1));

        let v = store
            .elevation(&Coordinate::Decimal {
                lat: -0.5,
                lon: -0.5,
            })
            .unwrap();
        assert_eq!(v, (1800 * 10_000 + 1800) as f64);
    }

    #[test]
    fn test_missing_tile() {
        let store = ElevationStore::new();
        match store.elevation(&Coordinate::Decimal {
            lat: 49.5,
            lon: 18.5,
        }) {
            Err(TerrainError::MissingTile { lat_sec, lon_sec }) => {
                assert_eq!(lat_sec, 178_200);
                assert_eq!(lon_sec, 66_600);
            }
            other => panic!("expected MissingTile, got {:?}", other),
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("decimal".parse::<CoordFormat>().unwrap(), CoordFormat::Decimal);
        assert_eq!("dms".parse::<CoordFormat>().unwrap(), CoordFormat::Dms);
        assert_eq!("arcsec".parse::<CoordFormat>().unwrap(), CoordFormat::ArcSeconds);
        assert!(matches!(
            "utm".parse::<CoordFormat>(),
            Err(TerrainError::UnknownFormat(_))
        ));
    }
}
