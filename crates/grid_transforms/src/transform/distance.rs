//! Weighted wavefront distance-to-obstacle transform.
//!
//! Seeds every obstacle cell bordering the seed's free region at zero and
//! propagates the chamfer step weights through free space. Free cells that no
//! seeded obstacle reaches through free space, and every non-free cell other than
//! the seeded obstacles, stay at `+infinity`.
use glam::UVec2;
use tracing::{debug, warn};

use super::classify::{collect_reachable_obstacle_cells, BoundaryCells};
use super::wavefront::{PropagationStats, Wavefront};
use crate::config::LayerNames;
use crate::error::Result;
use crate::grid::occupancy::is_free;
use crate::grid::{GridMap, Layer};

/// Computes the distance layer `layers.distance` from the occupancy layer.
///
/// `boundary` is cleared and refilled with the obstacle and frontier cells found
/// around `seed`. The output layer is installed only after propagation finishes.
///
/// # Errors
///
/// Fails if the occupancy layer is missing, `seed` lies outside the grid, or the
/// distance layer name aliases the occupancy layer.
pub fn add_distance_transform(
    grid: &mut GridMap,
    seed: UVec2,
    boundary: &mut BoundaryCells,
    layers: &LayerNames,
) -> Result<PropagationStats> {
    LayerNames::ensure_distinct(&layers.distance, &[&layers.occupancy])?;

    boundary.clear();
    collect_reachable_obstacle_cells(grid, seed, layers, boundary)?;

    if boundary.obstacles.is_empty() {
        warn!(
            "No obstacles reachable from ({}, {}); '{}' stays unreachable everywhere.",
            seed.x, seed.y, layers.distance
        );
    }

    let occupancy = grid.get(&layers.occupancy)?;
    let mut distance = Layer::filled(grid.size(), f32::INFINITY);

    let mut wave = Wavefront::new();
    for &cell in &boundary.obstacles {
        wave.seed(&mut distance, cell);
    }
    let stats = wave.run(&mut distance, |nb| is_free(occupancy[nb]).then_some(0.0));

    debug!(
        "Distance transform '{}': {} seeds, {} pops, {} improvements.",
        layers.distance, stats.seeds, stats.pops, stats.improvements
    );

    grid.install_output(&layers.distance, distance)?;
    Ok(stats)
}
