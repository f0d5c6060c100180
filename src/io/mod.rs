//! CSV ingest of the street and address corpora, and anchor-table output.

mod read;
mod write;

pub use read::{read_addresses, read_streets, AddressRow, StreetRow};
pub use write::CsvSink;
