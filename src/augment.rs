//! Per-tuple augmentation: observed anchors plus synthetic vertex anchors.

use anyhow::Result;
use geo::Point;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::anchor::Anchor;
use crate::geom;
use crate::interp;
use crate::matcher;
use crate::parse::HousenumberParser;
use crate::polyline;
use crate::scheme;
use crate::sink::AnchorSink;
use crate::street::{Observation, Street};
use crate::types::{Scheme, Side, StreetId};

/// A candidate street as handed over by the grouping stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateStreet {
    pub id: String,
    /// Polyline-encoded geometry at [`polyline::PRECISION`] digits.
    pub line: String,
}

/// One raw address record in a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct AddressRecord {
    /// Raw house-number text, normalized by the caller-supplied parser.
    pub number: String,
    pub lon: f64,
    pub lat: f64,
}

/// The unit of work: candidate streets sharing a name in a locality, plus
/// the address records observed under that name. How the narrowing happened
/// is the upstream grouping stage's business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupTuple {
    pub streets: Vec<CandidateStreet>,
    pub batch: Vec<AddressRecord>,
}

/// Process one lookup tuple.
///
/// Emits an `OBS` anchor per matchable address record, in batch order, then
/// walks every street's vertices (skipping the first) and emits a `VTX`
/// anchor wherever the street's observations bracket the vertex — one per
/// vertex under `zigzag`, up to two (left before right) under `updown`.
/// Unusable records are logged and skipped, never fatal; only sink errors
/// propagate. The function holds no state between tuples.
pub fn augment(
    tuple: &LookupTuple,
    parser: &dyn HousenumberParser,
    sink: &mut dyn AnchorSink,
) -> Result<()> {
    let mut streets = decode_streets(&tuple.streets);

    for record in &tuple.batch {
        let Some(housenumber) = parser.parse(&record.number) else {
            warn!("[augment] unparseable housenumber {:?}, skipping record", record.number);
            continue;
        };
        let point = Point::new(record.lon, record.lat);
        let Some(found) = matcher::nearest_street(&streets, point) else {
            warn!(
                "[augment] no street match for {housenumber} at ({}, {}), skipping record",
                record.lon, record.lat,
            );
            continue;
        };

        let street = &mut streets[found.street];
        let side = geom::side_of(&street.line, found.projection.edge, point);
        let distance = geom::distance_along(&street.line, &found.projection);
        street.observations.push(Observation { housenumber, distance, side });
        sink.push(Anchor::observed(
            street.id.clone(),
            housenumber,
            point,
            found.projection.foot,
            side,
        ))?;
    }

    for street in &mut streets {
        // Stable sort, so equal distances keep their insertion order.
        street.observations.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        let scheme = scheme::classify(&street.observations);
        debug!(
            "[augment] street {}: {} observations over {:.0} m, scheme {}",
            street.id,
            street.observations.len(),
            street.length(),
            scheme.to_str(),
        );
        emit_vertex_anchors(street, scheme, sink)?;
    }

    sink.end_tuple()
}

fn decode_streets(candidates: &[CandidateStreet]) -> Vec<Street> {
    candidates.iter()
        .map(|candidate| {
            let coords = match polyline::decode(&candidate.line, polyline::PRECISION) {
                Ok(coords) => coords,
                Err(err) => {
                    warn!("[augment] undecodable geometry for street {}: {err}", candidate.id);
                    Vec::new()
                }
            };
            Street::new(StreetId::new(&candidate.id), coords)
        })
        .collect()
}

/// Walk a street's vertices and emit interpolated anchors at each one the
/// observations bracket. The first vertex is never anchored.
fn emit_vertex_anchors(street: &Street, scheme: Scheme, sink: &mut dyn AnchorSink) -> Result<()> {
    // The tracks the interpolator runs over: the whole street under zigzag,
    // one per side (left first) under updown.
    let tracks: Vec<Vec<Observation>> = match scheme {
        Scheme::ZigZag => vec![street.observations.clone()],
        Scheme::UpDown => [Side::Left, Side::Right].iter()
            .map(|&side| {
                street.observations.iter().copied().filter(|o| o.side == side).collect()
            })
            .collect(),
    };

    let coords = &street.line.0;
    let mut cumulative = 0.0;
    for i in 1..coords.len() {
        cumulative += geom::edge_length(coords[i - 1], coords[i]);
        for track in &tracks {
            if let Some(estimate) = interp::interpolate(track, cumulative) {
                sink.push(Anchor::vertex(street.id.clone(), estimate, coords[i]))?;
            }
        }
    }
    Ok(())
}
