use geo::{BoundingRect, Coord, LineString, Rect};
use rstar::{RTree, RTreeObject, AABB};

use crate::geom;
use crate::types::{Side, StreetId};

/// One observed address on a street: the normalized house number, its
/// cumulative distance from the start of the linestring, and which side of
/// the centerline it sits on. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub housenumber: u32,
    pub distance: f64,
    pub side: Side,
}

/// A candidate street inside one lookup tuple: stable id, deduped geometry,
/// and the observations accumulated against it. Observations are owned 1:1
/// by the street, so there is no parallel index list to keep in sync.
#[derive(Debug, Clone)]
pub struct Street {
    pub id: StreetId,
    pub line: LineString<f64>,
    pub observations: Vec<Observation>,
}

impl Street {
    pub fn new(id: StreetId, coords: Vec<Coord<f64>>) -> Self {
        Self {
            id,
            line: LineString::new(geom::dedupe(coords)),
            observations: Vec::new(),
        }
    }

    /// Total spherical length in meters.
    #[inline]
    pub fn length(&self) -> f64 {
        geom::arc_length(&self.line)
    }
}

/// Bounding box of one street of the corpus, stored in the spatial index.
#[derive(Debug, Clone)]
pub struct StreetEnvelope {
    idx: usize,
    bbox: Rect<f64>,
}

impl StreetEnvelope {
    #[inline] pub fn index(&self) -> usize { self.idx }
}

impl RTreeObject for StreetEnvelope {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.bbox.min().into(), self.bbox.max().into())
    }
}

/// Spatial index over street geometries, used by the grouping stage to
/// narrow same-name candidates to those near a batch of address points.
#[derive(Debug)]
pub struct StreetIndex {
    rtree: RTree<StreetEnvelope>,
}

impl StreetIndex {
    /// Build from per-street linestrings. Streets with no bounding rect
    /// (empty geometry) are left out of the index.
    pub fn new(lines: &[LineString<f64>]) -> Self {
        Self {
            rtree: RTree::bulk_load(
                lines.iter().enumerate()
                    .filter_map(|(i, line)| {
                        line.bounding_rect().map(|bbox| StreetEnvelope { idx: i, bbox })
                    })
                    .collect(),
            ),
        }
    }

    /// Indices of streets whose bounding box intersects `envelope`.
    pub fn query(&self, envelope: &AABB<[f64; 2]>) -> impl Iterator<Item = usize> + '_ {
        self.rtree
            .locate_in_envelope_intersecting(envelope)
            .map(StreetEnvelope::index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn street_dedupes_its_coordinates() {
        let street = Street::new(
            StreetId::new("S1"),
            vec![
                Coord { x: 0.0, y: 0.0 },
                Coord { x: 0.0, y: 0.0 },
                Coord { x: 1.0, y: 0.0 },
            ],
        );
        assert_eq!(street.line.0.len(), 2);
    }

    #[test]
    fn index_finds_streets_by_envelope() {
        let lines = vec![
            LineString::new(vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 0.0 }]),
            LineString::new(vec![Coord { x: 5.0, y: 5.0 }, Coord { x: 6.0, y: 5.0 }]),
        ];
        let index = StreetIndex::new(&lines);

        let near_origin: Vec<usize> =
            index.query(&AABB::from_corners([-0.5, -0.5], [0.5, 0.5])).collect();
        assert_eq!(near_origin, vec![0]);

        let nowhere: Vec<usize> =
            index.query(&AABB::from_corners([10.0, 10.0], [11.0, 11.0])).collect();
        assert!(nowhere.is_empty());
    }
}
