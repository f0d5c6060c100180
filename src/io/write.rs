//! Anchor-table CSV output.

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::{CsvWriter, NamedFrom}, series::Series};

use crate::anchor::{coord_field, Anchor};
use crate::sink::AnchorSink;

/// Buffers anchor rows per lookup tuple and writes the whole table as CSV.
///
/// Rows are committed at `end_tuple`, so an abandoned tuple contributes
/// nothing to the output file.
#[derive(Debug, Default)]
pub struct CsvSink {
    committed: Vec<Row>,
    pending: Vec<Row>,
}

#[derive(Debug)]
struct Row {
    id: String,
    source: String,
    housenumber: String,
    lon: Option<String>,
    lat: Option<String>,
    parity: Option<String>,
    proj_lon: String,
    proj_lat: String,
}

impl From<&Anchor> for Row {
    fn from(anchor: &Anchor) -> Self {
        Self {
            id: anchor.street_id.to_string(),
            source: anchor.source.to_str().to_string(),
            housenumber: anchor.housenumber_field(),
            lon: anchor.point.map(|p| coord_field(p.x())),
            lat: anchor.point.map(|p| coord_field(p.y())),
            parity: anchor.side.map(|s| s.to_str().to_string()),
            proj_lon: coord_field(anchor.projected.x()),
            proj_lat: coord_field(anchor.projected.y()),
        }
    }
}

impl AnchorSink for CsvSink {
    fn push(&mut self, anchor: Anchor) -> Result<()> {
        self.pending.push(Row::from(&anchor));
        Ok(())
    }

    fn end_tuple(&mut self) -> Result<()> {
        self.committed.append(&mut self.pending);
        Ok(())
    }
}

impl CsvSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed row count.
    #[inline] pub fn len(&self) -> usize { self.committed.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.committed.is_empty() }

    /// Write all committed rows to `path`.
    pub fn finish(self, path: &Path) -> Result<()> {
        let mut df = self.into_frame()?;
        let file = File::create(path)
            .with_context(|| format!("[io::write] Failed to create CSV file: {}", path.display()))?;
        CsvWriter::new(file)
            .finish(&mut df)
            .with_context(|| format!("[io::write] Failed to write CSV to {:?}", path))
    }

    fn into_frame(self) -> Result<DataFrame> {
        let rows = &self.committed;
        let df = DataFrame::new(vec![
            Series::new("id".into(), rows.iter().map(|r| r.id.clone()).collect::<Vec<_>>()).into(),
            Series::new("source".into(), rows.iter().map(|r| r.source.clone()).collect::<Vec<_>>()).into(),
            Series::new("housenumber".into(), rows.iter().map(|r| r.housenumber.clone()).collect::<Vec<_>>()).into(),
            Series::new("lon".into(), rows.iter().map(|r| r.lon.clone()).collect::<Vec<_>>()).into(),
            Series::new("lat".into(), rows.iter().map(|r| r.lat.clone()).collect::<Vec<_>>()).into(),
            Series::new("parity".into(), rows.iter().map(|r| r.parity.clone()).collect::<Vec<_>>()).into(),
            Series::new("proj_lon".into(), rows.iter().map(|r| r.proj_lon.clone()).collect::<Vec<_>>()).into(),
            Series::new("proj_lat".into(), rows.iter().map(|r| r.proj_lat.clone()).collect::<Vec<_>>()).into(),
        ])?;
        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use geo::{Coord, Point};

    use super::*;
    use crate::types::{Side, StreetId};

    #[test]
    fn observed_rows_carry_every_field() {
        let anchor = Anchor::observed(
            StreetId::new("S1"),
            12,
            Point::new(1.25, 0.5),
            Point::new(1.25, 0.0),
            Side::Left,
        );
        let row = Row::from(&anchor);
        assert_eq!(row.source, "OBS");
        assert_eq!(row.housenumber, "12");
        assert_eq!(row.lon.as_deref(), Some("1.2500000"));
        assert_eq!(row.parity.as_deref(), Some("L"));
        assert_eq!(row.proj_lat, "0.0000000");
    }

    #[test]
    fn vertex_rows_leave_observed_fields_null() {
        let anchor = Anchor::vertex(StreetId::new("S1"), 2.5, Coord { x: 2.0, y: 0.0 });
        let row = Row::from(&anchor);
        assert_eq!(row.source, "VTX");
        assert_eq!(row.housenumber, "2.500");
        assert!(row.lon.is_none());
        assert!(row.parity.is_none());
        assert_eq!(row.proj_lon, "2.0000000");
    }
}
