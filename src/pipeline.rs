//! Groups the street and address corpora into lookup tuples and drives the
//! augmentation over each one.

use std::collections::{HashMap, HashSet};

use anyhow::Result;
use geo::LineString;
use log::{debug, warn};
use rstar::AABB;

use crate::augment::{augment, AddressRecord, CandidateStreet, LookupTuple};
use crate::geom;
use crate::io::{AddressRow, StreetRow};
use crate::parse::HousenumberParser;
use crate::polyline;
use crate::sink::AnchorSink;
use crate::street::StreetIndex;

/// Margin in degrees added around a batch's bounding box when narrowing
/// same-name candidates (roughly 500 m at mid latitudes).
const ENVELOPE_MARGIN_DEG: f64 = 0.005;

/// Normalized form of a street name used for grouping: trimmed, case-folded,
/// inner whitespace collapsed.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Pair each batch of same-name address records with the candidate streets
/// of that name near the batch, and run the augmentation per tuple. Batches
/// are processed in the order their names first appear in the address
/// corpus, so output order follows input order.
pub fn run(
    streets: &[StreetRow],
    addresses: &[AddressRow],
    parser: &dyn HousenumberParser,
    sink: &mut dyn AnchorSink,
) -> Result<()> {
    // Geometries are decoded once up front for the spatial index; tuples
    // still carry the encoded form, which the driver decodes itself.
    let mut lines = Vec::with_capacity(streets.len());
    for row in streets {
        let coords = match polyline::decode(&row.polyline, polyline::PRECISION) {
            Ok(coords) => coords,
            Err(err) => {
                warn!("[pipeline] undecodable geometry for street {}: {err}", row.id);
                Vec::new()
            }
        };
        lines.push(LineString::new(geom::dedupe(coords)));
    }
    let index = StreetIndex::new(&lines);

    let mut by_name: HashMap<String, Vec<usize>> = HashMap::new();
    for (i, row) in streets.iter().enumerate() {
        by_name.entry(normalize_name(&row.name)).or_default().push(i);
    }

    let mut order: Vec<String> = Vec::new();
    let mut batches: HashMap<String, Vec<&AddressRow>> = HashMap::new();
    for row in addresses {
        let key = normalize_name(&row.street);
        if !batches.contains_key(&key) {
            order.push(key.clone());
        }
        batches.entry(key).or_default().push(row);
    }

    for key in &order {
        let batch = &batches[key];
        let Some(candidates) = by_name.get(key) else {
            warn!("[pipeline] no street named {key:?} for {} address records", batch.len());
            continue;
        };

        let near: HashSet<usize> = index.query(&batch_envelope(batch)).collect();
        let chosen: Vec<usize> =
            candidates.iter().copied().filter(|i| near.contains(i)).collect();
        if chosen.is_empty() {
            warn!(
                "[pipeline] no street named {key:?} near its {} address records",
                batch.len(),
            );
            continue;
        }

        debug!(
            "[pipeline] {key:?}: {} candidate streets, {} records",
            chosen.len(),
            batch.len(),
        );
        let tuple = LookupTuple {
            streets: chosen.iter()
                .map(|&i| CandidateStreet {
                    id: streets[i].id.clone(),
                    line: streets[i].polyline.clone(),
                })
                .collect(),
            batch: batch.iter()
                .map(|row| AddressRecord {
                    number: row.number.clone(),
                    lon: row.lon,
                    lat: row.lat,
                })
                .collect(),
        };
        augment(&tuple, parser, sink)?;
    }
    Ok(())
}

fn batch_envelope(batch: &[&AddressRow]) -> AABB<[f64; 2]> {
    let mut min = [f64::INFINITY; 2];
    let mut max = [f64::NEG_INFINITY; 2];
    for row in batch {
        min[0] = min[0].min(row.lon);
        min[1] = min[1].min(row.lat);
        max[0] = max[0].max(row.lon);
        max[1] = max[1].max(row.lat);
    }
    AABB::from_corners(
        [min[0] - ENVELOPE_MARGIN_DEG, min[1] - ENVELOPE_MARGIN_DEG],
        [max[0] + ENVELOPE_MARGIN_DEG, max[1] + ENVELOPE_MARGIN_DEG],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_normalize_across_case_and_whitespace() {
        assert_eq!(normalize_name("  Main   Street "), "main street");
        assert_eq!(normalize_name("MAIN STREET"), "main street");
    }
}
