use std::{fmt, sync::Arc};

/// Which side of the street centerline a point falls on, determined by the
/// sign of the 2-D cross product at the projection edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn to_str(&self) -> &'static str {
        match self {
            Side::Left => "L",
            Side::Right => "R",
        }
    }
}

/// A street's numbering rule, inferred from observed house-number parities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Odd numbers on one side, even on the other; both sides run together,
    /// so one track covers the whole street.
    ZigZag,
    /// Numbers run up one side and down the other; each side interpolates
    /// on its own.
    UpDown,
}

impl Scheme {
    pub fn to_str(&self) -> &'static str {
        match self {
            Scheme::ZigZag => "zigzag",
            Scheme::UpDown => "updown",
        }
    }
}

/// Stable key for a street, assigned by the upstream corpus.
/// Keeps the original id text but avoids repeated owned Strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StreetId(Arc<str>);

impl StreetId {
    pub fn new(id: &str) -> Self {
        Self(Arc::from(id))
    }

    #[inline] pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for StreetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
