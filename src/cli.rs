use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "redesaude", version, about)]
pub struct Args {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Load the health network catalog from this URL
    #[arg(long, value_name = "URL")]
    pub catalog_url: Option<String>,

    /// Load the health network catalog from a local GeoJSON file
    #[arg(long, value_name = "FILE", conflicts_with = "catalog_url")]
    pub catalog_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Interactive search next to the current position (default)
    Run,
    /// Search facilities by address once and print the results
    Search {
        /// Part of the address, e.g. the neighborhood
        query: String,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },
}
