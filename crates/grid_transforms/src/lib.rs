#![forbid(unsafe_code)]
//! grid_transforms: wavefront distance and exploration cost fields over 2D occupancy grids.
//!
//! Modules:
//! - grid: named float layers over a fixed cell grid, occupancy encoding
//! - transform: boundary classification, distance and exploration wavefronts, inflation,
//!   chamfer and exact distance transforms
//! - config: layer names and thresholds
//!
//! For runnable demos, see the `grid_transforms_examples` crate.
pub mod config;
pub mod error;
pub mod grid;
pub mod transform;

/// Convenient re-exports for common types. Import with `use grid_transforms::prelude::*;`.
pub mod prelude {
    pub use crate::config::{ExplorationParams, LayerNames, TransformConfig};
    pub use crate::error::{Error, Result};
    pub use crate::grid::{GridMap, Index, Layer, Occupancy, FREE, OCCUPIED, UNKNOWN};
    pub use crate::transform::{
        add_chamfer_distance_transform, add_distance_transform, add_exact_distance_transform,
        add_exploration_transform, add_inflated_layer, collect_reachable_obstacle_cells,
        BoundaryCells, CellState, ExplorationPipeline, PipelineResult, PropagationStats,
        ADJACENT_COST, DIAGONAL_COST,
    };
}
