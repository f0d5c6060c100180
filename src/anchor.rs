use geo::{Coord, Point};

use crate::types::{Side, StreetId};

/// Provenance of an anchor row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// An observed address record.
    Obs,
    /// A synthetic anchor interpolated at a linestring vertex.
    Vtx,
}

impl Source {
    pub fn to_str(&self) -> &'static str {
        match self {
            Source::Obs => "OBS",
            Source::Vtx => "VTX",
        }
    }
}

/// One row of the persisted anchor table.
///
/// Observed anchors carry the original point, the projection foot, and a
/// side. Vertex anchors carry only the vertex coordinate (as the projected
/// position) and a fractional house number.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub street_id: StreetId,
    pub source: Source,
    pub housenumber: f64,
    pub point: Option<Point<f64>>,
    pub projected: Point<f64>,
    pub side: Option<Side>,
}

impl Anchor {
    pub fn observed(
        street_id: StreetId,
        housenumber: u32,
        point: Point<f64>,
        foot: Point<f64>,
        side: Side,
    ) -> Self {
        Self {
            street_id,
            source: Source::Obs,
            housenumber: housenumber as f64,
            point: Some(point),
            projected: foot,
            side: Some(side),
        }
    }

    pub fn vertex(street_id: StreetId, housenumber: f64, vertex: Coord<f64>) -> Self {
        Self {
            street_id,
            source: Source::Vtx,
            housenumber,
            point: None,
            projected: vertex.into(),
            side: None,
        }
    }

    /// House number as persisted: whole for observed anchors, truncated (not
    /// rounded) to three fractional digits for vertex anchors.
    pub fn housenumber_field(&self) -> String {
        match self.source {
            Source::Obs => format!("{}", self.housenumber as u64),
            Source::Vtx => {
                // Interpolated numbers are never negative, so trunc is floor.
                let milli = (self.housenumber * 1000.0).trunc() as i64;
                format!("{}.{:03}", milli / 1000, milli % 1000)
            }
        }
    }
}

/// Coordinates are persisted with seven fractional digits.
#[inline]
pub fn coord_field(value: f64) -> String {
    format!("{value:.7}")
}
