use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

/// Address-anchor CLI (argument schema only)
#[derive(Parser, Debug)]
#[command(name = "anchorline", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fuse street and address corpora into an anchor table
    Augment(AugmentArgs),
}

#[derive(Args, Debug)]
pub struct AugmentArgs {
    /// Street corpus CSV (id,name,polyline)
    #[arg(value_hint = ValueHint::FilePath)]
    pub streets: PathBuf,

    /// Address corpus CSV (number,street,lon,lat)
    #[arg(value_hint = ValueHint::FilePath)]
    pub addresses: PathBuf,

    /// Output anchor table (must be a file path; "-" is rejected)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,
}
