//! Scattered-to-grid interpolation.
//!
//! Fits a smooth surface to the scattered sample cloud by Delaunay
//! triangulation with natural-neighbor evaluation, and samples it on a
//! regular per-tile grid. Grid nodes outside the convex hull of the
//! cloud evaluate to NaN; that value is passed through unmodified so the
//! quantizer encodes whatever the arithmetic produced.

use spade::{DelaunayTriangulation, HasPosition, Point2, Triangulation};

use crate::error::{Result, TerrainError};
use crate::sampler::SampleCloud;

/// A regular evaluation grid for one tile, in ENU meters.
///
/// Both axis ranges are inclusive: `resolution` points span
/// `[start, end]` with the endpoints on the tile border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub x_start: f64,
    pub x_end: f64,
    pub y_start: f64,
    pub y_end: f64,
    pub resolution: usize,
}

impl GridSpec {
    /// The i-th coordinate along an inclusive axis.
    fn axis_value(start: f64, end: f64, resolution: usize, i: usize) -> f64 {
        if resolution < 2 {
            return start;
        }
        start + (end - start) * i as f64 / (resolution - 1) as f64
    }

    pub fn x_value(&self, i: usize) -> f64 {
        Self::axis_value(self.x_start, self.x_end, self.resolution, i)
    }

    pub fn y_value(&self, i: usize) -> f64 {
        Self::axis_value(self.y_start, self.y_end, self.resolution, i)
    }
}

struct SurfaceVertex {
    position: Point2<f64>,
    elevation: f64,
}

impl HasPosition for SurfaceVertex {
    type Scalar = f64;

    fn position(&self) -> Point2<f64> {
        self.position
    }
}

/// A smooth surface fitted to the scattered sample cloud.
pub struct TerrainSurface {
    triangulation: DelaunayTriangulation<SurfaceVertex>,
}

impl TerrainSurface {
    /// Triangulate the sample cloud.
    ///
    /// # Errors
    ///
    /// [`TerrainError::EmptyCloud`] for an empty cloud, or
    /// [`TerrainError::InvalidSample`] if a sample position cannot be
    /// inserted (non-finite coordinates).
    pub fn new(cloud: &SampleCloud) -> Result<Self> {
        if cloud.is_empty() {
            return Err(TerrainError::EmptyCloud);
        }
        let vertices = cloud
            .points()
            .iter()
            .map(|p| SurfaceVertex {
                position: Point2::new(p.x, p.y),
                elevation: p.elevation,
            })
            .collect();
        let triangulation = DelaunayTriangulation::bulk_load(vertices)?;
        Ok(Self { triangulation })
    }

    /// Evaluate the surface at one ENU position.
    ///
    /// Positions outside the convex hull of the samples yield NaN.
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        self.triangulation
            .natural_neighbor()
            .interpolate(|v| v.data().elevation, Point2::new(x, y))
            .unwrap_or(f64::NAN)
    }

    /// Evaluate every node of a regular grid.
    ///
    /// Values are returned in natural (x, y) axis order: index
    /// `a * resolution + b` holds the value at `(x_a, y_b)`.
    pub fn eval_grid(&self, spec: &GridSpec) -> Vec<f64> {
        let nn = self.triangulation.natural_neighbor();
        let mut values = Vec::with_capacity(spec.resolution * spec.resolution);
        for a in 0..spec.resolution {
            let x = spec.x_value(a);
            for b in 0..spec.resolution {
                let y = spec.y_value(b);
                let v = nn
                    .interpolate(|v| v.data().elevation, Point2::new(x, y))
                    .unwrap_or(f64::NAN);
                values.push(v);
            }
        }
        values
    }
}
