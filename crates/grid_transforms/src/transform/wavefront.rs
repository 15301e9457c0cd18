//! Shared neighbour-relaxation primitives for the wavefront transforms.
//!
//! The 8-connected step weights are the chamfer weights of the 3×3 Euclidean
//! distance mask, so propagated values approximate Euclidean distances scaled by
//! roughly `0.955`. Lethal and penalty thresholds are expressed in these units.
//!
//! Propagation is label-correcting with a FIFO queue: a cell is re-enqueued
//! whenever its value strictly improves. Border cells are popped and dropped, which
//! lets neighbour access skip per-neighbour bounds checks.
use std::collections::VecDeque;

use glam::{IVec2, UVec2};

use crate::grid::Layer;

/// Step weight to the four axis-aligned neighbours.
pub const ADJACENT_COST: f32 = 0.955;
/// Step weight to the four diagonal neighbours.
pub const DIAGONAL_COST: f32 = 1.3693;

/// The 8 neighbour offsets with their step weights, in relaxation order.
pub(crate) const NEIGHBOURS: [(IVec2, f32); 8] = [
    (IVec2::new(-1, -1), DIAGONAL_COST),
    (IVec2::new(0, -1), ADJACENT_COST),
    (IVec2::new(1, -1), DIAGONAL_COST),
    (IVec2::new(-1, 0), ADJACENT_COST),
    (IVec2::new(1, 0), ADJACENT_COST),
    (IVec2::new(-1, 1), DIAGONAL_COST),
    (IVec2::new(0, 1), ADJACENT_COST),
    (IVec2::new(1, 1), DIAGONAL_COST),
];

/// Counters collected during one propagation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PropagationStats {
    /// Cells seeded into the queue before propagation.
    pub seeds: usize,
    /// Cells popped from the queue, including border drops.
    pub pops: usize,
    /// Popped cells dropped because they lie on the grid border.
    pub border_drops: usize,
    /// Neighbour updates that strictly improved a stored value.
    pub improvements: usize,
}

/// Returns `true` if `idx` is not on the outermost row or column.
#[inline]
pub(crate) fn is_interior(idx: UVec2, size: UVec2) -> bool {
    idx.x >= 1 && idx.y >= 1 && idx.x + 1 < size.x && idx.y + 1 < size.y
}

/// Neighbours of an interior cell with their step weights.
#[inline]
pub(crate) fn neighbours(idx: UVec2) -> impl Iterator<Item = (UVec2, f32)> {
    let base = idx.as_ivec2();
    NEIGHBOURS
        .iter()
        .map(move |(offset, weight)| ((base + *offset).as_uvec2(), *weight))
}

/// Multi-source FIFO wavefront over a value layer.
pub(crate) struct Wavefront {
    queue: VecDeque<UVec2>,
    stats: PropagationStats,
}

impl Wavefront {
    pub(crate) fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            stats: PropagationStats::default(),
        }
    }

    /// Sets `idx` to zero cost and enqueues it.
    pub(crate) fn seed(&mut self, values: &mut Layer, idx: UVec2) {
        values[idx] = 0.0;
        self.queue.push_back(idx);
        self.stats.seeds += 1;
    }

    /// Relaxes until the queue is empty.
    ///
    /// `extra_cost` is asked for every neighbour touched. `None` makes the neighbour
    /// impassable; `Some(c)` adds `c` on top of the step weight.
    pub(crate) fn run<F>(mut self, values: &mut Layer, mut extra_cost: F) -> PropagationStats
    where
        F: FnMut(UVec2) -> Option<f32>,
    {
        let size = values.size();

        while let Some(idx) = self.queue.pop_front() {
            self.stats.pops += 1;

            if !is_interior(idx, size) {
                self.stats.border_drops += 1;
                continue;
            }

            let current = values[idx];

            for (nb, weight) in neighbours(idx) {
                let Some(extra) = extra_cost(nb) else {
                    continue;
                };

                let cost = current + weight + extra;
                if values[nb] > cost {
                    values[nb] = cost;
                    self.queue.push_back(nb);
                    self.stats.improvements += 1;
                }
            }
        }

        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_excludes_outer_ring() {
        let size = UVec2::new(4, 3);
        assert!(!is_interior(UVec2::new(0, 1), size));
        assert!(!is_interior(UVec2::new(3, 1), size));
        assert!(!is_interior(UVec2::new(1, 0), size));
        assert!(!is_interior(UVec2::new(1, 2), size));
        assert!(is_interior(UVec2::new(1, 1), size));
        assert!(is_interior(UVec2::new(2, 1), size));
    }

    #[test]
    fn tiny_grids_have_no_interior() {
        for size in [UVec2::new(0, 0), UVec2::new(1, 1), UVec2::new(2, 5)] {
            for y in 0..size.y {
                for x in 0..size.x {
                    assert!(!is_interior(UVec2::new(x, y), size));
                }
            }
        }
    }

    #[test]
    fn neighbours_cover_ring_with_weights() {
        let ring: Vec<_> = neighbours(UVec2::new(1, 1)).collect();
        assert_eq!(ring.len(), 8);
        assert_eq!(ring[0], (UVec2::new(0, 0), DIAGONAL_COST));
        assert_eq!(ring[1], (UVec2::new(1, 0), ADJACENT_COST));
        assert_eq!(ring[7], (UVec2::new(2, 2), DIAGONAL_COST));
        let diagonals = ring.iter().filter(|(_, w)| *w == DIAGONAL_COST).count();
        assert_eq!(diagonals, 4);
    }

    #[test]
    fn run_relaxes_open_field() {
        let mut values = Layer::filled(UVec2::new(5, 5), f32::INFINITY);
        let mut wave = Wavefront::new();
        wave.seed(&mut values, UVec2::new(2, 2));
        let stats = wave.run(&mut values, |_| Some(0.0));

        assert_eq!(stats.seeds, 1);
        assert_eq!(values[UVec2::new(2, 2)], 0.0);
        assert_eq!(values[UVec2::new(3, 2)], ADJACENT_COST);
        assert_eq!(values[UVec2::new(3, 3)], DIAGONAL_COST);
        assert_eq!(values[UVec2::new(4, 4)], 2.0 * DIAGONAL_COST);
        assert!(stats.border_drops > 0);
    }

    #[test]
    fn impassable_cells_are_never_written() {
        let mut values = Layer::filled(UVec2::new(5, 5), f32::INFINITY);
        let wall = UVec2::new(3, 2);
        let mut wave = Wavefront::new();
        wave.seed(&mut values, UVec2::new(2, 2));
        wave.run(&mut values, |nb| (nb != wall).then_some(0.0));
        assert_eq!(values[wall], f32::INFINITY);
    }

    #[test]
    fn border_seed_relaxes_nothing() {
        let mut values = Layer::filled(UVec2::new(4, 4), f32::INFINITY);
        let mut wave = Wavefront::new();
        wave.seed(&mut values, UVec2::new(0, 0));
        let stats = wave.run(&mut values, |_| Some(0.0));
        assert_eq!(stats.pops, 1);
        assert_eq!(stats.border_drops, 1);
        assert_eq!(stats.improvements, 0);
        assert_eq!(values.data().iter().filter(|v| v.is_finite()).count(), 1);
    }
}
