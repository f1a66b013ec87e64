//! Scattered sample-cloud construction.
//!
//! Walks every whole arc-second offset over the configured multi-tile
//! area, projecting each position into the local tangent plane and
//! resolving its elevation through the store. The resulting cloud is an
//! explicit immutable value shared by every tile's interpolation.

use glam::DVec3;

use crate::config::TilesAround;
use crate::error::Result;
use crate::geodetic::{AngleUnit, GeoPoint, LocalTangentPlane};
use crate::store::{Coordinate, ElevationStore};

/// One scattered sample: ENU position (meters) and elevation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
    pub elevation: f64,
}

/// The full scattered sample set, immutable once built.
#[derive(Debug, Clone)]
pub struct SampleCloud {
    points: Vec<SamplePoint>,
}

impl SampleCloud {
    /// Build the shared sample cloud around `center`.
    ///
    /// The half-tile spans in arc-seconds come from projecting a point
    /// offset by half a tile's linear size back to geographic
    /// coordinates and measuring the displacement from the center. That
    /// single spacing is reused uniformly across the entire multi-tile
    /// area; the true spacing drifts slightly away from the center and
    /// is not corrected.
    ///
    /// # Errors
    ///
    /// Any missing elevation tile aborts the whole collection; no
    /// partial cloud is produced.
    pub fn collect(
        ltp: &LocalTangentPlane,
        store: &ElevationStore,
        center: &GeoPoint,
        tile_size_x: f64,
        tile_size_y: f64,
        around: TilesAround,
    ) -> Result<Self> {
        let half_y = Self::half_tile_arcsec_lat(ltp, center, tile_size_y);
        let half_x = Self::half_tile_arcsec_lon(ltp, center, tile_size_x);

        let lat_lo = -half_y * (2 * around.south as i64 + 1);
        let lat_hi = half_y * (2 * around.north as i64 + 1);
        let lon_lo = -half_x * (2 * around.west as i64 + 1);
        let lon_hi = half_x * (2 * around.east as i64 + 1);

        let mut points = Vec::with_capacity(
            ((lat_hi - lat_lo + 1) * (lon_hi - lon_lo + 1)).max(0) as usize,
        );

        for i in lat_lo..=lat_hi {
            for j in lon_lo..=lon_hi {
                let geog = GeoPoint::new(
                    center.lat + i as f64 / 3600.0,
                    center.lon + j as f64 / 3600.0,
                    0.0,
                );
                let enu = ltp.from_geographic(&geog, AngleUnit::Degrees);
                let elevation = store.elevation(&Coordinate::ArcSeconds {
                    lat: center.lat * 3600.0 + i as f64,
                    lon: center.lon * 3600.0 + j as f64,
                })?;
                points.push(SamplePoint {
                    x: enu.x,
                    y: enu.y,
                    elevation,
                });
            }
        }

        Ok(Self { points })
    }

    /// Arc-seconds of latitude covered by half a tile's north extent.
    pub fn half_tile_arcsec_lat(
        ltp: &LocalTangentPlane,
        center: &GeoPoint,
        tile_size_y: f64,
    ) -> i64 {
        let geog = ltp.to_geographic(DVec3::new(0.0, tile_size_y / 2.0, 0.0), AngleUnit::Degrees);
        ((geog.lat - center.lat) * 3600.0).ceil() as i64
    }

    /// Arc-seconds of longitude covered by half a tile's east extent.
    pub fn half_tile_arcsec_lon(
        ltp: &LocalTangentPlane,
        center: &GeoPoint,
        tile_size_x: f64,
    ) -> i64 {
        let geog = ltp.to_geographic(DVec3::new(tile_size_x / 2.0, 0.0, 0.0), AngleUnit::Degrees);
        ((geog.lon - center.lon) * 3600.0).ceil() as i64
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<SamplePoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<SamplePoint>> for SampleCloud {
    fn from(points: Vec<SamplePoint>) -> Self {
        Self { points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::{ElevationTile, TILE_GRID};
    use approx::assert_relative_eq;

    fn constant_store(value: f64) -> ElevationStore {
        let mut store = ElevationStore::new();
        for origin in [(50, 18), (50, 19), (51, 18), (51, 19)] {
            store.insert(
                ElevationTile::from_samples(
                    origin.0,
                    origin.1,
                    vec![value; TILE_GRID * TILE_GRID],
                )
                .unwrap(),
            );
        }
        store
    }

    #[test]
    fn test_collect_covers_expected_grid() {
        let center = GeoPoint::new(49.5, 18.5, 0.0);
        let ltp = LocalTangentPlane::new(&center, AngleUnit::Degrees);
        let store = constant_store(321.0);

        let around = TilesAround {
            north: 0,
            east: 0,
            south: 0,
            west: 0,
        };
        let cloud =
            SampleCloud::collect(&ltp, &store, &center, 60.0, 60.0, around).unwrap();

        let half_y = SampleCloud::half_tile_arcsec_lat(&ltp, &center, 60.0);
        let half_x = SampleCloud::half_tile_arcsec_lon(&ltp, &center, 60.0);
        let expected = (2 * half_y + 1) * (2 * half_x + 1);
        assert_eq!(cloud.len() as i64, expected);

        assert!(cloud.points().iter().all(|p| p.elevation == 321.0));

        // The center offset must land on the ENU origin.
        let nearest = cloud
            .points()
            .iter()
            .map(|p| p.x.hypot(p.y))
            .fold(f64::INFINITY, f64::min);
        assert!(nearest < 1e-6);
    }

    #[test]
    fn test_collect_area_scales_with_tiles_around() {
        let center = GeoPoint::new(49.5, 18.5, 0.0);
        let ltp = LocalTangentPlane::new(&center, AngleUnit::Degrees);
        let store = constant_store(0.0);

        let single = SampleCloud::collect(
            &ltp,
            &store,
            &center,
            60.0,
            60.0,
            TilesAround {
                north: 0,
                east: 0,
                south: 0,
                west: 0,
            },
        )
        .unwrap();

        // One ring of tiles in every direction triples each axis span.
        let ring = SampleCloud::collect(
            &ltp,
            &store,
            &center,
            60.0,
            60.0,
            TilesAround {
                north: 1,
                east: 1,
                south: 1,
                west: 1,
            },
        )
        .unwrap();

        let half_y = SampleCloud::half_tile_arcsec_lat(&ltp, &center, 60.0);
        let half_x = SampleCloud::half_tile_arcsec_lon(&ltp, &center, 60.0);
        assert_eq!(
            single.len() as i64,
            (2 * half_y + 1) * (2 * half_x + 1)
        );
        assert_eq!(
            ring.len() as i64,
            (6 * half_y + 1) * (6 * half_x + 1)
        );
    }

    #[test]
    fn test_sample_positions_are_enu() {
        let center = GeoPoint::new(49.5, 18.5, 0.0);
        let ltp = LocalTangentPlane::new(&center, AngleUnit::Degrees);
        let store = constant_store(0.0);

        let cloud = SampleCloud::collect(
            &ltp,
            &store,
            &center,
            60.0,
            60.0,
            TilesAround {
                north: 0,
                east: 0,
                south: 0,
                west: 0,
            },
        )
        .unwrap();

        // One arc-second of latitude is ~30.9 m of northing on this
        // sphere; the northmost row must sit that far up per step.
        let half_y = SampleCloud::half_tile_arcsec_lat(&ltp, &center, 60.0);
        let max_y = cloud
            .points()
            .iter()
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_relative_eq!(max_y, half_y as f64 * 30.9, epsilon = 0.5);
    }

    #[test]
    fn test_missing_tile_aborts_collection() {
        let center = GeoPoint::new(49.5, 18.5, 0.0);
        let ltp = LocalTangentPlane::new(&center, AngleUnit::Degrees);
        let store = ElevationStore::new();

        let result = SampleCloud::collect(
            &ltp,
            &store,
            &center,
            60.0,
            60.0,
            TilesAround {
                north: 0,
                east: 0,
                south: 0,
                west: 0,
            },
        );
        assert!(matches!(
            result,
            Err(crate::error::TerrainError::MissingTile { .. })
        ));
    }
}
