//! Linear interpolation over sorted distance/house-number observations.

use crate::street::Observation;

/// Estimate a fractional house number at distance `q` along a track.
///
/// The track must be sorted by distance ascending. Returns `None` when the
/// track has fewer than two observations or when `q` is not bracketed by the
/// observed range; anchors are never extrapolated. Coincident bracketing
/// distances short-circuit to the lower bound's number.
pub fn interpolate(track: &[Observation], q: f64) -> Option<f64> {
    if track.len() < 2 {
        return None;
    }

    let lo = track.iter().take_while(|o| o.distance <= q).last()?;
    let hi = track.iter().find(|o| o.distance >= q)?;
    if lo.distance == hi.distance {
        return Some(lo.housenumber as f64);
    }

    let fraction = (q - lo.distance) / (hi.distance - lo.distance);
    Some(lo.housenumber as f64 + (hi.housenumber as f64 - lo.housenumber as f64) * fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    fn track(points: &[(f64, u32)]) -> Vec<Observation> {
        points.iter()
            .map(|&(distance, housenumber)| Observation {
                housenumber,
                distance,
                side: Side::Left,
            })
            .collect()
    }

    #[test]
    fn interpolates_between_brackets() {
        let track = track(&[(0.0, 1), (100.0, 11)]);
        assert_eq!(interpolate(&track, 50.0), Some(6.0));
        assert_eq!(interpolate(&track, 25.0), Some(3.5));
    }

    #[test]
    fn exact_hit_returns_the_observed_number() {
        let track = track(&[(0.0, 1), (100.0, 11), (200.0, 21)]);
        assert_eq!(interpolate(&track, 100.0), Some(11.0));
    }

    #[test]
    fn never_extrapolates() {
        let track = track(&[(50.0, 2), (100.0, 4)]);
        assert_eq!(interpolate(&track, 49.0), None);
        assert_eq!(interpolate(&track, 101.0), None);
    }

    #[test]
    fn single_observation_cannot_interpolate() {
        let track = track(&[(50.0, 2)]);
        assert_eq!(interpolate(&track, 50.0), None);
    }

    #[test]
    fn coincident_brackets_short_circuit_to_the_lower_bound() {
        // Both brackets sit at q; the later insertion wins the lower bound.
        let track = track(&[(50.0, 2), (50.0, 8)]);
        assert_eq!(interpolate(&track, 50.0), Some(8.0));
    }

    #[test]
    fn is_monotone_for_increasing_numbers() {
        let track = track(&[(0.0, 1), (40.0, 5), (100.0, 11)]);
        let mut last = f64::NEG_INFINITY;
        for step in 0..=20 {
            let estimate = interpolate(&track, step as f64 * 5.0).unwrap();
            assert!(estimate >= last);
            last = estimate;
        }
    }
}
