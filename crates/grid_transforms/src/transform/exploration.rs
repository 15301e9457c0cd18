//! Goal-directed exploration cost transform.
//!
//! Propagates path cost outward from goal cells (typically frontier cells) through
//! free space. Each step adds the chamfer step weight plus a quadratic proximity
//! penalty for cells closer than `penalty_dist` to an obstacle. Cells closer than
//! `lethal_dist` are impassable and never receive a finite cost.
use glam::UVec2;
use tracing::{debug, warn};

use super::wavefront::{is_interior, PropagationStats, Wavefront};
use crate::config::{ExplorationParams, LayerNames};
use crate::error::Result;
use crate::grid::occupancy::is_free;
use crate::grid::{GridMap, Layer};

/// Extra cost of entering a cell `distance` away from the nearest obstacle.
///
/// Zero at or beyond `penalty_dist`, `(penalty_dist - distance)^2` inside it.
#[inline]
pub fn proximity_penalty(distance: f32, penalty_dist: f32) -> f32 {
    if distance < penalty_dist {
        let d = penalty_dist - distance;
        d * d
    } else {
        0.0
    }
}

/// Computes the exploration cost layer `layers.exploration` from `goals`.
///
/// Goals are seeded at zero whatever their occupancy. A goal on the grid border is
/// seeded but never expanded.
///
/// # Errors
///
/// Fails if the occupancy or distance layer is missing, a goal lies outside the
/// grid, the thresholds are invalid, or the output name aliases an input layer.
pub fn add_exploration_transform(
    grid: &mut GridMap,
    goals: &[UVec2],
    params: &ExplorationParams,
    layers: &LayerNames,
) -> Result<PropagationStats> {
    params.validate()?;
    LayerNames::ensure_distinct(
        &layers.exploration,
        &[&layers.occupancy, &layers.distance],
    )?;

    let occupancy = grid.get(&layers.occupancy)?;
    let distance = grid.get(&layers.distance)?;
    for goal in goals {
        grid.check_index(*goal)?;
    }

    let size = grid.size();
    if goals.is_empty() {
        warn!(
            "No exploration goals; '{}' stays unreachable everywhere.",
            layers.exploration
        );
    }
    let border_goals = goals.iter().filter(|g| !is_interior(**g, size)).count();
    if border_goals > 0 {
        debug!(
            "{} of {} goals lie on the grid border and will not be expanded.",
            border_goals,
            goals.len()
        );
    }

    let mut cost = Layer::filled(size, f32::INFINITY);
    let mut wave = Wavefront::new();
    for &goal in goals {
        wave.seed(&mut cost, goal);
    }

    let ExplorationParams {
        lethal_dist,
        penalty_dist,
    } = *params;
    let stats = wave.run(&mut cost, |nb| {
        if !is_free(occupancy[nb]) {
            return None;
        }
        let dist = distance[nb];
        if dist < lethal_dist {
            return None;
        }
        Some(proximity_penalty(dist, penalty_dist))
    });

    debug!(
        "Exploration transform '{}': {} goals, {} pops, {} improvements.",
        layers.exploration, stats.seeds, stats.pops, stats.improvements
    );

    grid.install_output(&layers.exploration, cost)?;
    Ok(stats)
}
