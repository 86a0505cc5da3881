//! legcal library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Some(Commands::Sessions) => cli::commands::sessions::handle(),
        // Bare `legcal` runs the batch, same as `legcal generate`.
        Some(Commands::Generate) | None => cli::commands::generate::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // Command-line override for the output directory
    if let Some(custom_dir) = &cli.out_dir {
        cfg.output_dir = custom_dir.clone();
    }

    dispatch(&cli, &cfg)
}
