//! Geodetic coordinate transforms.
//!
//! Conversions between geographic coordinates (latitude, longitude, height),
//! Earth-centered Cartesian coordinates (ECEF), and a local East-North-Up
//! tangent plane. The Earth is modeled as a sphere of radius
//! [`EARTH_RADIUS`]; no ellipsoidal corrections are applied.

use std::str::FromStr;

use glam::{DMat3, DVec3};

use crate::error::TerrainError;

/// Spherical Earth radius in meters.
pub const EARTH_RADIUS: f64 = 6_371_009.0;

/// Angle unit for geographic coordinates, selected per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    /// Decimal degrees.
    Degrees,
    /// Radians.
    Radians,
}

impl FromStr for AngleUnit {
    type Err = TerrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deg" | "degrees" => Ok(AngleUnit::Degrees),
            "rad" | "radians" => Ok(AngleUnit::Radians),
            other => Err(TerrainError::UnknownUnit(other.to_string())),
        }
    }
}

/// A geographic point: latitude, longitude, height above the sphere.
///
/// Latitude and longitude are interpreted in degrees or radians according
/// to the [`AngleUnit`] passed alongside; height is always meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
    pub height: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64, height: f64) -> Self {
        Self { lat, lon, height }
    }

    /// Latitude and longitude in radians.
    fn angles_rad(&self, unit: AngleUnit) -> (f64, f64) {
        match unit {
            AngleUnit::Degrees => (self.lat.to_radians(), self.lon.to_radians()),
            AngleUnit::Radians => (self.lat, self.lon),
        }
    }
}

/// Convert a geographic point to ECEF coordinates (meters).
pub fn geog_to_ecef(point: &GeoPoint, unit: AngleUnit) -> DVec3 {
    let (phi, lam) = point.angles_rad(unit);
    let radius = EARTH_RADIUS + point.height;
    DVec3::new(
        radius * phi.cos() * lam.cos(),
        radius * phi.cos() * lam.sin(),
        radius * phi.sin(),
    )
}

/// Convert an ECEF point back to geographic coordinates.
///
/// At a pole (x = y = 0) the longitude is `atan2(0, 0) = 0`, a fixed
/// convention, not an error.
pub fn ecef_to_geog(point: DVec3, unit: AngleUnit) -> GeoPoint {
    let norm = point.length();
    let unit_vec = point / norm;
    let phi = unit_vec.z.asin();
    let lam = unit_vec.y.atan2(unit_vec.x);
    let (lat, lon) = match unit {
        AngleUnit::Degrees => (phi.to_degrees(), lam.to_degrees()),
        AngleUnit::Radians => (phi, lam),
    };
    GeoPoint::new(lat, lon, norm - EARTH_RADIUS)
}

/// Straight-line chord distance between two geographic points, in meters.
///
/// This is the Euclidean norm of the ECEF difference, not a great-circle
/// arc length.
pub fn geo_dist(p1: &GeoPoint, p2: &GeoPoint, unit: AngleUnit) -> f64 {
    (geog_to_ecef(p1, unit) - geog_to_ecef(p2, unit)).length()
}

/// Rotation from ECEF axes into East-North-Up axes at (lat, lon).
///
/// The composition is `Rx(-pi/2 + lat) * Rz(-pi/2 - lon)`; this exact
/// order and sign convention puts east on x, north on y, and up on z.
pub fn rotation_matrix(lat: f64, lon: f64, unit: AngleUnit) -> DMat3 {
    let (phi, lam) = match unit {
        AngleUnit::Degrees => (lat.to_radians(), lon.to_radians()),
        AngleUnit::Radians => (lat, lon),
    };
    let rot_x = DMat3::from_rotation_x(-std::f64::consts::FRAC_PI_2 + phi);
    let rot_z = DMat3::from_rotation_z(-std::f64::consts::FRAC_PI_2 - lam);
    rot_x * rot_z
}

/// A local East-North-Up tangent plane anchored at a reference point.
///
/// Immutable once constructed: holds the ECEF rotation for the reference
/// point and its ECEF position.
///
/// # Example
///
/// ```
/// use terratile::{AngleUnit, GeoPoint, LocalTangentPlane};
///
/// let center = GeoPoint::new(49.628117, 18.915636, 0.0);
/// let ltp = LocalTangentPlane::new(&center, AngleUnit::Degrees);
///
/// // The reference point maps to the ENU origin.
/// let enu = ltp.from_geographic(&center, AngleUnit::Degrees);
/// assert!(enu.length() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LocalTangentPlane {
    rotation: DMat3,
    origin: DVec3,
}

impl LocalTangentPlane {
    /// Construct the tangent plane at `center`.
    pub fn new(center: &GeoPoint, unit: AngleUnit) -> Self {
        Self {
            rotation: rotation_matrix(center.lat, center.lon, unit),
            origin: geog_to_ecef(center, unit),
        }
    }

    /// Geographic point to ENU vector (meters east, north, up).
    pub fn from_geographic(&self, point: &GeoPoint, unit: AngleUnit) -> DVec3 {
        self.rotation * (geog_to_ecef(point, unit) - self.origin)
    }

    /// ENU vector back to a geographic point.
    pub fn to_geographic(&self, enu: DVec3, unit: AngleUnit) -> GeoPoint {
        ecef_to_geog(self.rotation.transpose() * enu + self.origin, unit)
    }

    /// ECEF position of the reference point.
    pub fn origin(&self) -> DVec3 {
        self.origin
    }
}
