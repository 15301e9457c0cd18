//! Grid transforms over the occupancy layer.
//!
//! - [`classify`]: obstacle and frontier cells around a seed
//! - [`distance`]: wavefront distance-to-obstacle field
//! - [`exploration`]: goal-directed exploration cost field
//! - [`inflation`]: obstacle inflation by dilation
//! - [`chamfer`]: 3×3 chamfer distance field in wavefront units
//! - [`edt`]: exact Euclidean distance field
//! - [`pipeline`]: all of the above chained for one exploration step
pub mod chamfer;
pub mod classify;
pub mod distance;
pub mod edt;
pub mod exploration;
pub mod inflation;
pub mod pipeline;
pub mod wavefront;

pub use chamfer::add_chamfer_distance_transform;
pub use classify::{collect_reachable_obstacle_cells, BoundaryCells, CellState};
pub use distance::add_distance_transform;
pub use edt::add_exact_distance_transform;
pub use exploration::{add_exploration_transform, proximity_penalty};
pub use inflation::{add_inflated_layer, dilate, elliptical_element};
pub use pipeline::{ExplorationPipeline, PipelineResult};
pub use wavefront::{PropagationStats, ADJACENT_COST, DIAGONAL_COST};
