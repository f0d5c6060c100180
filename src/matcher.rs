use geo::Point;
use log::debug;

use crate::geom::{self, Projection};
use crate::street::Street;

/// Outcome of matching one address point against a candidate street list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    /// Index of the winning street within the candidate list.
    pub street: usize,
    pub projection: Projection,
}

/// Pick the candidate street with the smallest projection distance.
///
/// Degenerate candidates (fewer than two distinct vertices) are logged and
/// passed over; ties go to the lowest candidate index. `None` means every
/// candidate failed to produce a foot.
pub fn nearest_street(streets: &[Street], point: Point<f64>) -> Option<Match> {
    let mut best: Option<Match> = None;
    for (i, street) in streets.iter().enumerate() {
        let Some(projection) = geom::project(&street.line, point) else {
            debug!("[matcher] street {} is degenerate, no projection", street.id);
            continue;
        };
        if best.as_ref().map_or(true, |b| projection.offset < b.projection.offset) {
            best = Some(Match { street: i, projection });
        }
    }
    best
}
