//! Flood-fill classification of the obstacle and frontier boundary around a seed.
//!
//! Starting at a free seed cell, a breadth-first fill over 8-connected free cells
//! collects:
//! - obstacle cells: occupied cells touching the reachable free region,
//! - frontier cells: reachable free cells touching unknown space.
//!
//! Visitation is tracked in a transient [`CellState`] grid owned by the call.
use std::collections::VecDeque;

use glam::UVec2;
use tracing::{debug, warn};

use super::wavefront::{is_interior, neighbours};
use crate::config::LayerNames;
use crate::error::Result;
use crate::grid::{GridMap, Occupancy};

/// Visitation state of a cell during classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellState {
    #[default]
    Unvisited,
    VisitedFree,
    VisitedObstacle,
    VisitedFrontier,
}

/// Boundary cells found by [`collect_reachable_obstacle_cells`], in discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundaryCells {
    /// Occupied cells adjacent to the reachable free region.
    pub obstacles: Vec<UVec2>,
    /// Reachable free cells adjacent to unknown space.
    pub frontiers: Vec<UVec2>,
}

impl BoundaryCells {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears both sequences.
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.frontiers.clear();
    }

    /// Returns `true` if neither obstacles nor frontiers were found.
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty() && self.frontiers.is_empty()
    }
}

struct StateGrid {
    size: UVec2,
    cells: Vec<CellState>,
}

impl StateGrid {
    fn new(size: UVec2) -> Self {
        Self {
            size,
            cells: vec![CellState::Unvisited; (size.x as usize) * (size.y as usize)],
        }
    }

    #[inline]
    fn at(&mut self, idx: UVec2) -> &mut CellState {
        &mut self.cells[(idx.y as usize) * (self.size.x as usize) + idx.x as usize]
    }
}

/// Classifies the boundary of the free region connected to `seed`.
///
/// Found cells are appended to `out`; existing contents are kept. Border cells are
/// classified as neighbours but never expanded.
///
/// # Errors
///
/// Fails if the occupancy layer is missing or `seed` lies outside the grid.
pub fn collect_reachable_obstacle_cells(
    grid: &GridMap,
    seed: UVec2,
    layers: &LayerNames,
    out: &mut BoundaryCells,
) -> Result<()> {
    let occupancy = grid.get(&layers.occupancy)?;
    grid.check_index(seed)?;

    if Occupancy::classify(occupancy[seed]) != Occupancy::Free {
        warn!(
            "Classification seed ({}, {}) is not free space.",
            seed.x, seed.y
        );
    }

    let size = grid.size();
    let mut states = StateGrid::new(size);
    let mut queue = VecDeque::new();
    let (obstacles_before, frontiers_before) = (out.obstacles.len(), out.frontiers.len());

    *states.at(seed) = CellState::VisitedFree;
    queue.push_back(seed);

    let mut expanded = 0usize;
    while let Some(current) = queue.pop_front() {
        if !is_interior(current, size) {
            continue;
        }
        expanded += 1;

        for (nb, _) in neighbours(current) {
            match Occupancy::classify(occupancy[nb]) {
                Occupancy::Free => {
                    let state = states.at(nb);
                    if *state == CellState::Unvisited {
                        *state = CellState::VisitedFree;
                        queue.push_back(nb);
                    }
                }
                Occupancy::Occupied => {
                    let state = states.at(nb);
                    if *state != CellState::VisitedObstacle {
                        *state = CellState::VisitedObstacle;
                        out.obstacles.push(nb);
                    }
                }
                Occupancy::Unknown => {
                    let state = states.at(current);
                    if *state != CellState::VisitedFrontier {
                        *state = CellState::VisitedFrontier;
                        out.frontiers.push(current);
                    }
                }
            }
        }
    }

    debug!(
        "Classified from ({}, {}): {} cells expanded, {} obstacles, {} frontiers.",
        seed.x,
        seed.y,
        expanded,
        out.obstacles.len() - obstacles_before,
        out.frontiers.len() - frontiers_before
    );

    Ok(())
}
