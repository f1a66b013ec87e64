use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// Quantized terrain-tile generator CLI
#[derive(Parser)]
#[command(name = "terratile")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, env = "TERRATILE_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the full terrain tile set from the configuration
    Generate {
        /// Overwrite the configured output directory
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Query elevation for a single coordinate through the configured store
    Query {
        /// Latitude (decimal degrees, arc-seconds, or d:m:s per --format)
        #[arg(long)]
        lat: String,

        /// Longitude (decimal degrees, arc-seconds, or d:m:s per --format)
        #[arg(long)]
        lon: String,

        /// Coordinate format: decimal, dms, or arcsec
        #[arg(short, long, default_value = "decimal")]
        format: String,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Display information about one raster tile
    Info {
        /// Path to a .hgt file, or tile name (e.g. N49E018)
        tile: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { out_dir } => commands::generate::run(cli.config, out_dir),
        Commands::Query {
            lat,
            lon,
            format,
            json,
        } => commands::query::run(cli.config, lat, lon, format, json),
        Commands::Info { tile } => commands::info::run(tile),
    }
}
