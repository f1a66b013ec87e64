use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use terratile::{CoordFormat, Coordinate, ElevationStore};

#[derive(Serialize)]
struct ElevationResponse<'a> {
    lat: &'a str,
    lon: &'a str,
    format: &'a str,
    elevation: f64,
}

pub fn run(
    config: Option<PathBuf>,
    lat: String,
    lon: String,
    format: String,
    json: bool,
) -> Result<()> {
    let coord_format: CoordFormat = format.parse()?;
    let coord = parse_coordinate(&lat, &lon, coord_format)?;

    let config = super::load_config(config)?;
    let store = ElevationStore::load(&config.files)
        .context("Failed to load elevation rasters")?;

    let elevation = store.elevation(&coord)?;

    if json {
        let response = ElevationResponse {
            lat: &lat,
            lon: &lon,
            format: &format,
            elevation,
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("{}", elevation);
    }

    Ok(())
}

fn parse_coordinate(lat: &str, lon: &str, format: CoordFormat) -> Result<Coordinate> {
    match format {
        CoordFormat::Decimal => Ok(Coordinate::Decimal {
            lat: parse_angle(lat)?,
            lon: parse_angle(lon)?,
        }),
        CoordFormat::ArcSeconds => Ok(Coordinate::ArcSeconds {
            lat: parse_angle(lat)?,
            lon: parse_angle(lon)?,
        }),
        CoordFormat::Dms => Ok(Coordinate::Dms {
            lat: parse_dms(lat)?,
            lon: parse_dms(lon)?,
        }),
    }
}

fn parse_angle(s: &str) -> Result<f64> {
    s.parse().with_context(|| format!("Invalid angle: {}", s))
}

/// Parse a colon-separated degree:minute:second triplet.
fn parse_dms(s: &str) -> Result<(f64, f64, f64)> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        bail!("Invalid d:m:s value: {}", s);
    }
    Ok((
        parse_angle(parts[0])?,
        parse_angle(parts[1])?,
        parse_angle(parts[2])?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dms() {
        assert_eq!(parse_dms("49:37:41.2").unwrap(), (49.0, 37.0, 41.2));
        assert!(parse_dms("49:37").is_err());
        assert!(parse_dms("49:37:xx").is_err());
    }

    #[test]
    fn test_unknown_format_is_reported() {
        let err = "utm".parse::<CoordFormat>().unwrap_err();
        assert!(err.to_string().contains("utm"));
    }
}
