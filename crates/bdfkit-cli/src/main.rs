// this_file: crates/bdfkit-cli/src/main.rs

//! bdfkit CLI: composite glyphs and cosmetic effects for BDF fonts

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match &cli.command {
        Commands::Fill(args) => commands::fill::run(args),
        Commands::Embolden(args) => commands::embolden::run(args),
        Commands::Merge(args) => commands::merge::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Show(args) => commands::show::run(args),
    }
}

fn init_logger(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Warn)
            .init();
    }
}
