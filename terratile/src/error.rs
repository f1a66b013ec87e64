//! Error types for the terratile library.

use thiserror::Error;

/// Errors that can occur while generating terrain tiles.
#[derive(Error, Debug)]
pub enum TerrainError {
    /// IO error when reading rasters or writing tiles.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Raster filename does not encode a tile corner.
    #[error("Invalid raster filename: {0}")]
    InvalidFilename(String),

    /// Raster size doesn't match the one-arc-second tile format.
    #[error("Invalid raster size: {size} bytes (expected 25934402 for a 3601x3601 tile)")]
    InvalidFileSize { size: usize },

    /// An angle-unit tag that is neither degrees nor radians.
    #[error("Unknown angle unit: {0}")]
    UnknownUnit(String),

    /// A coordinate-format tag outside decimal/dms/arcsec.
    #[error("Unknown coordinate format: {0}")]
    UnknownFormat(String),

    /// No registered elevation tile covers the queried coordinate.
    #[error("No elevation tile covers ({lat_sec}, {lon_sec}) arc-seconds")]
    MissingTile { lat_sec: i64, lon_sec: i64 },

    /// The sample cloud is empty, so no surface can be fitted.
    #[error("Sample cloud is empty")]
    EmptyCloud,

    /// A sample point could not be inserted into the triangulation.
    #[error("Invalid sample point: {0}")]
    InvalidSample(#[from] spade::InsertionError),
}

/// Result type alias using [`TerrainError`].
pub type Result<T> = std::result::Result<T, TerrainError>;
