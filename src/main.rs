use anyhow::Result;
use clap::Parser as _;

mod app;
mod cli;
mod config;
mod gateways;
mod view;

use self::{
    cli::{Args, Command},
    config::{CatalogSource, Config},
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            log::warn!("Unable to load .env file: {err}");
        }
    }

    let Args {
        config,
        catalog_url,
        catalog_file,
        command,
    } = Args::parse();

    let mut cfg = Config::try_load_from_file_or_default(config)?;
    if let Some(url) = catalog_url {
        cfg.catalog.source = CatalogSource::Url(url);
    }
    if let Some(file) = catalog_file {
        cfg.catalog.source = CatalogSource::File(file);
    }

    match command.unwrap_or(Command::Run) {
        Command::Run => app::run(cfg),
        Command::Search { query, json } => app::search(cfg, query, json),
    }
}
