//! High-level runner chaining the transforms for frontier exploration.
//!
//! One run optionally inflates the occupancy layer, computes the wavefront distance
//! field from the robot cell, and propagates exploration cost from the frontier
//! cells that classification found.
use std::borrow::Cow;

use glam::UVec2;
use tracing::{info, warn};

use super::classify::BoundaryCells;
use super::distance::add_distance_transform;
use super::exploration::add_exploration_transform;
use super::inflation::add_inflated_layer;
use super::wavefront::PropagationStats;
use crate::config::{LayerNames, TransformConfig};
use crate::error::Result;
use crate::grid::GridMap;

/// Result of one pipeline run.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct PipelineResult {
    /// Obstacle and frontier cells around the seed.
    pub boundary: BoundaryCells,
    /// Counters of the distance propagation.
    pub distance: PropagationStats,
    /// Counters of the exploration propagation.
    pub exploration: PropagationStats,
}

impl PipelineResult {
    /// Returns `true` if no frontier was reachable, i.e. exploration is complete.
    pub fn is_exhausted(&self) -> bool {
        self.boundary.frontiers.is_empty()
    }
}

/// Runs inflation, distance and exploration transforms with one configuration.
#[derive(Debug, Clone)]
pub struct ExplorationPipeline {
    config: TransformConfig,
    inflate: bool,
}

impl ExplorationPipeline {
    /// Creates a pipeline after validating `config`.
    pub fn try_new(config: TransformConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            inflate: false,
        })
    }

    /// Propagate over the inflated occupancy layer instead of the raw one.
    pub fn with_inflation(mut self, inflate: bool) -> Self {
        self.inflate = inflate;
        self
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Runs the pipeline from the robot cell `seed`.
    pub fn run(&self, grid: &mut GridMap, seed: UVec2) -> Result<PipelineResult> {
        let layers = self.propagation_layers();

        if self.inflate {
            add_inflated_layer(grid, self.config.inflation_radius_cells, &self.config.layers)?;
        }

        let mut result = PipelineResult::default();
        result.distance = add_distance_transform(grid, seed, &mut result.boundary, &layers)?;

        if result.is_exhausted() {
            warn!(
                "No frontier reachable from ({}, {}); exploration is complete.",
                seed.x, seed.y
            );
        }

        result.exploration = add_exploration_transform(
            grid,
            &result.boundary.frontiers,
            &self.config.exploration,
            &layers,
        )?;

        info!(
            "Exploration pipeline from ({}, {}): {} obstacles, {} frontiers.",
            seed.x,
            seed.y,
            result.boundary.obstacles.len(),
            result.boundary.frontiers.len()
        );

        Ok(result)
    }

    /// Layer names the propagators read, with the occupancy input swapped for the
    /// inflated layer when inflation is on.
    fn propagation_layers(&self) -> Cow<'_, LayerNames> {
        if self.inflate {
            let layers = &self.config.layers;
            Cow::Owned(
                layers
                    .clone()
                    .with_occupancy(layers.inflated_occupancy.clone()),
            )
        } else {
            Cow::Borrowed(&self.config.layers)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExplorationParams;
    use crate::error::Error;
    use crate::grid::{FREE, OCCUPIED, UNKNOWN};

    /// Room with a wall on three sides and unknown space beyond the right edge.
    fn room() -> GridMap {
        let size = UVec2::new(12, 10);
        let mut grid = GridMap::new(size);
        let layer = grid.add("occupancy", FREE).unwrap();
        for x in 0..size.x {
            layer.set(UVec2::new(x, 0), OCCUPIED).unwrap();
            layer.set(UVec2::new(x, size.y - 1), OCCUPIED).unwrap();
        }
        for y in 0..size.y {
            layer.set(UVec2::new(0, y), OCCUPIED).unwrap();
            layer.set(UVec2::new(10, y), UNKNOWN).unwrap();
            layer.set(UVec2::new(11, y), UNKNOWN).unwrap();
        }
        grid
    }

    fn small_thresholds() -> TransformConfig {
        TransformConfig::new().with_exploration(ExplorationParams::new(0.5, 2.0))
    }

    #[test]
    fn run_writes_distance_and_exploration_layers() {
        let mut grid = room();
        let pipeline = ExplorationPipeline::try_new(small_thresholds()).unwrap();
        let result = pipeline.run(&mut grid, UVec2::new(3, 4)).unwrap();

        assert!(!result.boundary.obstacles.is_empty());
        assert!(!result.boundary.frontiers.is_empty());
        assert!(!result.is_exhausted());
        assert!(grid.exists("distance_transform"));

        let cost = grid.get("exploration_transform").unwrap();
        for f in &result.boundary.frontiers {
            assert_eq!(cost[*f], 0.0);
            assert_eq!(f.x, 9);
        }
        assert!(cost[UVec2::new(3, 4)].is_finite());
        assert!(cost[UVec2::new(3, 4)] > cost[UVec2::new(8, 4)]);
    }

    #[test]
    fn closed_room_is_exhausted() {
        let size = UVec2::new(8, 8);
        let mut grid = GridMap::new(size);
        let layer = grid.add("occupancy", FREE).unwrap();
        for i in 0..8 {
            layer.set(UVec2::new(i, 0), OCCUPIED).unwrap();
            layer.set(UVec2::new(i, 7), OCCUPIED).unwrap();
            layer.set(UVec2::new(0, i), OCCUPIED).unwrap();
            layer.set(UVec2::new(7, i), OCCUPIED).unwrap();
        }
        let pipeline = ExplorationPipeline::try_new(small_thresholds()).unwrap();
        let result = pipeline.run(&mut grid, UVec2::new(3, 3)).unwrap();
        assert!(result.is_exhausted());
        let cost = grid.get("exploration_transform").unwrap();
        assert!(cost.data().iter().all(|v| *v == f32::INFINITY));
    }

    #[test]
    fn inflation_feeds_the_propagators() {
        let mut grid = room();
        let pipeline = ExplorationPipeline::try_new(
            small_thresholds().with_inflation_radius_cells(1.0),
        )
        .unwrap()
        .with_inflation(true);
        let result = pipeline.run(&mut grid, UVec2::new(4, 4)).unwrap();

        let inflated = grid.get("occupancy_inflated").unwrap();
        assert_eq!(inflated[UVec2::new(1, 4)], OCCUPIED);
        // Inflated cells are obstacles now, so the wall column itself is no longer adjacent.
        assert!(result.boundary.obstacles.iter().all(|o| o.x != 0));
        assert!(grid.exists("exploration_transform"));
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let err = ExplorationPipeline::try_new(TransformConfig::new().with_lethal_dist(f32::NAN))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn distance_aliasing_inflated_layer_is_rejected_before_any_write() {
        let grid = room();
        let layers = LayerNames::default().with_distance("occupancy_inflated");
        let err = ExplorationPipeline::try_new(small_thresholds().with_layers(layers))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert_eq!(grid.len(), 1);
        assert!(!grid.exists("occupancy_inflated"));
    }
}
