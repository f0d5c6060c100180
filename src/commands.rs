use anyhow::Result;
use log::info;

use crate::cli::AugmentArgs;
use crate::io::{read_addresses, read_streets, CsvSink};
use crate::parse::StrictParser;
use crate::pipeline;

pub fn augment(args: &AugmentArgs) -> Result<()> {
    let streets = read_streets(&args.streets)?;
    let addresses = read_addresses(&args.addresses)?;
    info!("[augment] {} streets, {} address records", streets.len(), addresses.len());

    let mut sink = CsvSink::new();
    pipeline::run(&streets, &addresses, &StrictParser, &mut sink)?;

    info!("[augment] writing {} anchors to {}", sink.len(), args.output.display());
    sink.finish(&args.output)
}
