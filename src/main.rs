use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use anchorline::cli::{Cli, Commands};
use anchorline::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new().filter_level(level).init();

    match &cli.command {
        Commands::Augment(args) => commands::augment(args),
    }
}
