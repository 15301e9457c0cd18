//! Tri-state occupancy encoding.
//!
//! Occupancy layers store `0` for free cells and `100` for occupied cells. Every
//! other value, conventionally [`UNKNOWN`], is unknown space.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::layer::Layer;

pub const FREE: f32 = 0.0;
pub const OCCUPIED: f32 = 100.0;
pub const UNKNOWN: f32 = -1.0;

/// Classification of a raw occupancy value.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Occupancy {
    Free,
    Occupied,
    Unknown,
}

impl Occupancy {
    /// Classify a raw layer value. Only exact `0` and `100` are known.
    #[inline]
    pub fn classify(value: f32) -> Self {
        if value == FREE {
            Occupancy::Free
        } else if value == OCCUPIED {
            Occupancy::Occupied
        } else {
            Occupancy::Unknown
        }
    }

    /// Canonical layer value for this state.
    pub fn value(self) -> f32 {
        match self {
            Occupancy::Free => FREE,
            Occupancy::Occupied => OCCUPIED,
            Occupancy::Unknown => UNKNOWN,
        }
    }
}

impl From<Occupancy> for f32 {
    fn from(value: Occupancy) -> Self {
        value.value()
    }
}

/// Returns `true` if the cell value marks free space.
#[inline]
pub fn is_free(value: f32) -> bool {
    value == FREE
}

/// Counts free, occupied and unknown cells of an occupancy layer.
pub fn census(layer: &Layer) -> (usize, usize, usize) {
    layer
        .data()
        .iter()
        .fold((0, 0, 0), |(f, o, u), v| match Occupancy::classify(*v) {
            Occupancy::Free => (f + 1, o, u),
            Occupancy::Occupied => (f, o + 1, u),
            Occupancy::Unknown => (f, o, u + 1),
        })
}
