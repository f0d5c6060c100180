#![doc = "Anchorline public API"]

mod anchor;
mod augment;
mod matcher;
mod scheme;
mod street;
mod types;

pub mod cli;
pub mod commands;
pub mod geom;
pub mod interp;
pub mod io;
pub mod parse;
pub mod pipeline;
pub mod polyline;
pub mod sink;

#[doc(inline)]
pub use anchor::{coord_field, Anchor, Source};

#[doc(inline)]
pub use augment::{augment, AddressRecord, CandidateStreet, LookupTuple};

#[doc(inline)]
pub use matcher::{nearest_street, Match};

#[doc(inline)]
pub use scheme::classify;

#[doc(inline)]
pub use street::{Observation, Street, StreetIndex};

#[doc(inline)]
pub use types::{Scheme, Side, StreetId};
