//! Spherical geometry over street linestrings.
//!
//! All distances here are haversine meters; projection, arc length, and
//! slicing use the same metric so cumulative distances and interpolation
//! domains line up exactly.

mod project;

pub use project::{distance_along, project, side_of, slice_at, Projection};

use geo::{Coord, Distance, Haversine, Length, LineString, Point};

/// Remove consecutive duplicate coordinates.
///
/// Equality is exact on both axes, never tolerance-based.
pub fn dedupe(coords: Vec<Coord<f64>>) -> Vec<Coord<f64>> {
    let mut out: Vec<Coord<f64>> = Vec::with_capacity(coords.len());
    for coord in coords {
        if out.last() != Some(&coord) {
            out.push(coord);
        }
    }
    out
}

/// Total spherical length of a linestring, in meters.
#[inline]
pub fn arc_length(line: &LineString<f64>) -> f64 {
    Haversine.length(line)
}

/// Spherical length of a single edge, in meters.
#[inline]
pub fn edge_length(a: Coord<f64>, b: Coord<f64>) -> f64 {
    Haversine.distance(Point::from(a), Point::from(b))
}
