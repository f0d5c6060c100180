//! CSV reading operations.

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::CsvReadOptions};

/// One street of the corpus: stable id, display name, encoded geometry.
#[derive(Debug, Clone)]
pub struct StreetRow {
    pub id: String,
    pub name: String,
    pub polyline: String,
}

/// One raw address record: house-number text, the street name it was
/// observed under, and a point location.
#[derive(Debug, Clone)]
pub struct AddressRow {
    pub number: String,
    pub street: String,
    pub lon: f64,
    pub lat: f64,
}

/// Reads a CSV file from `path` with every column as a string, preserving
/// raw house-number text and leading zeros in ids.
fn read_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::read] Failed to open CSV file: {}", path.display()))?;
    CsvReadOptions::default()
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(file)
        .finish()
        .with_context(|| format!("[io::read] Failed to read CSV from {:?}", path))
}

fn column<'a>(df: &'a DataFrame, name: &str) -> Result<impl Iterator<Item = &'a str>> {
    Ok(df
        .column(name)
        .with_context(|| format!("[io::read] Missing column: {name}"))?
        .str()
        .with_context(|| format!("[io::read] Column {name} is not a string column"))?
        .into_no_null_iter())
}

/// Read the street corpus (`id,name,polyline`) from a CSV file.
pub fn read_streets(path: &Path) -> Result<Vec<StreetRow>> {
    let df = read_csv(path)?;
    let rows = column(&df, "id")?
        .zip(column(&df, "name")?)
        .zip(column(&df, "polyline")?)
        .map(|((id, name), polyline)| StreetRow {
            id: id.to_string(),
            name: name.to_string(),
            polyline: polyline.to_string(),
        })
        .collect();
    Ok(rows)
}

/// Read address records (`number,street,lon,lat`) from a CSV file.
pub fn read_addresses(path: &Path) -> Result<Vec<AddressRow>> {
    let df = read_csv(path)?;
    let mut rows = Vec::with_capacity(df.height());
    let iter = column(&df, "number")?
        .zip(column(&df, "street")?)
        .zip(column(&df, "lon")?.zip(column(&df, "lat")?));
    for ((number, street), (lon, lat)) in iter {
        let lon = lon.trim().parse::<f64>()
            .with_context(|| format!("[io::read] Bad longitude {lon:?} for number {number:?}"))?;
        let lat = lat.trim().parse::<f64>()
            .with_context(|| format!("[io::read] Bad latitude {lat:?} for number {number:?}"))?;
        rows.push(AddressRow {
            number: number.to_string(),
            street: street.to_string(),
            lon,
            lat,
        });
    }
    Ok(rows)
}
