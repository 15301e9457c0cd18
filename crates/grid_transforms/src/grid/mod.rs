//! Grid storage: named float layers over a fixed 2D cell grid.
//!
//! This module groups the layer container consumed by the transforms and the
//! occupancy encoding they interpret.
pub mod layer;
pub mod map;
pub mod occupancy;

pub use layer::Layer;
pub use map::GridMap;
pub use occupancy::{Occupancy, FREE, OCCUPIED, UNKNOWN};

/// Cell index `(ix, iy)`.
pub type Index = glam::UVec2;
