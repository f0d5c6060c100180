use geo::{Closest, ClosestPoint, Distance, Haversine, LineString, Point};

use super::arc_length;
use crate::types::Side;

/// Closest point on a linestring to a query point.
///
/// `edge` is the index of the segment carrying `foot`; `offset` is the
/// spherical distance from the query point to `foot`, the quantity candidate
/// streets compete on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub edge: usize,
    pub foot: Point<f64>,
    pub offset: f64,
}

/// Project `point` onto the nearest segment of `line`.
///
/// The foot is the planar perpendicular foot clamped to each segment;
/// segments are ranked by spherical distance to the query point, with ties
/// going to the lowest edge index. Returns `None` when the linestring has
/// fewer than two distinct vertices.
pub fn project(line: &LineString<f64>, point: Point<f64>) -> Option<Projection> {
    let mut best: Option<Projection> = None;
    for (edge, segment) in line.lines().enumerate() {
        let foot = match segment.closest_point(&point) {
            Closest::Intersection(p) | Closest::SinglePoint(p) => p,
            Closest::Indeterminate => continue,
        };
        let offset = Haversine.distance(point, foot);
        if best.as_ref().map_or(true, |b| offset < b.offset) {
            best = Some(Projection { edge, foot, offset });
        }
    }
    best
}

/// Side of the street at a projection: the sign of the 2-D cross product of
/// the edge direction and the vector from the edge start to the point.
///
/// Exact collinearity (`c == 0`) resolves to `Right`, so the result is total.
/// `edge` must be an edge index of `line`, as produced by [`project`].
pub fn side_of(line: &LineString<f64>, edge: usize, point: Point<f64>) -> Side {
    let a = line.0[edge];
    let b = line.0[edge + 1];
    let cross = (b.x - a.x) * (point.y() - a.y) - (b.y - a.y) * (point.x() - a.x);
    if cross > 0.0 {
        Side::Left
    } else {
        Side::Right
    }
}

/// The prefix of `line` cut at a projection: vertices `0..=edge` followed by
/// the foot itself.
pub fn slice_at(line: &LineString<f64>, projection: &Projection) -> LineString<f64> {
    let mut coords = line.0[..=projection.edge].to_vec();
    coords.push(projection.foot.into());
    LineString::new(coords)
}

/// Cumulative arc length from the start of `line` to the projection foot.
#[inline]
pub fn distance_along(line: &LineString<f64>, projection: &Projection) -> f64 {
    arc_length(&slice_at(line, projection))
}
