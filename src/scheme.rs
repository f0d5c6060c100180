//! Numbering-scheme inference from observed house-number parities.

use crate::street::Observation;
use crate::types::{Scheme, Side};

/// Classify a street's numbering scheme from its observations.
///
/// `ZigZag` requires one side to be all-odd and the other all-even (either
/// assignment); any mixed side makes the street `UpDown`. A street with no
/// observations defaults to `UpDown`.
pub fn classify(observations: &[Observation]) -> Scheme {
    if observations.is_empty() {
        return Scheme::UpDown;
    }

    let mut right_odd = 0usize;
    let mut right_even = 0usize;
    let mut left_odd = 0usize;
    let mut left_even = 0usize;
    for obs in observations {
        match (obs.side, obs.housenumber % 2 == 1) {
            (Side::Right, true) => right_odd += 1,
            (Side::Right, false) => right_even += 1,
            (Side::Left, true) => left_odd += 1,
            (Side::Left, false) => left_even += 1,
        }
    }

    let right_odd_left_even = right_even == 0 && left_odd == 0;
    let left_odd_right_even = left_even == 0 && right_odd == 0;
    if right_odd_left_even || left_odd_right_even {
        Scheme::ZigZag
    } else {
        Scheme::UpDown
    }
}
