//! Two-pass 3×3 chamfer distance transform of the occupancy layer.
//!
//! A forward raster sweep and a backward raster sweep propagate the same axis and
//! diagonal step weights as the wavefront transforms, so the values share units
//! with the exploration thresholds. Unlike the wavefront, connectivity is ignored:
//! distances pass through unknown space and walls alike, and border cells are
//! processed like any other.
use glam::{IVec2, UVec2};
use tracing::{debug, warn};

use super::wavefront::{ADJACENT_COST, DIAGONAL_COST};
use crate::config::LayerNames;
use crate::error::Result;
use crate::grid::{GridMap, Layer, Occupancy};

/// Mask half visited before the current cell in row-major order.
const FORWARD: [(IVec2, f32); 4] = [
    (IVec2::new(-1, -1), DIAGONAL_COST),
    (IVec2::new(0, -1), ADJACENT_COST),
    (IVec2::new(1, -1), DIAGONAL_COST),
    (IVec2::new(-1, 0), ADJACENT_COST),
];

/// Mask half visited after the current cell in row-major order.
const BACKWARD: [(IVec2, f32); 4] = [
    (IVec2::new(1, 0), ADJACENT_COST),
    (IVec2::new(-1, 1), DIAGONAL_COST),
    (IVec2::new(0, 1), ADJACENT_COST),
    (IVec2::new(1, 1), DIAGONAL_COST),
];

/// Writes the chamfer distance-to-obstacle field into `layers.distance`.
///
/// Occupied cells hold `0`; every other cell holds the weighted length of the
/// shortest 8-connected step path to an occupied cell. If the grid has no
/// occupied cell every value is `+infinity`.
///
/// # Errors
///
/// Fails if the occupancy layer is missing or the distance layer name aliases it.
pub fn add_chamfer_distance_transform(grid: &mut GridMap, layers: &LayerNames) -> Result<()> {
    LayerNames::ensure_distinct(&layers.distance, &[&layers.occupancy])?;

    let occupancy = grid.get(&layers.occupancy)?;
    let size = grid.size();

    let mut distance = Layer::from_fn(size, |idx| {
        if Occupancy::classify(occupancy[idx]) == Occupancy::Occupied {
            0.0
        } else {
            f32::INFINITY
        }
    });

    if distance.data().contains(&0.0) {
        for y in 0..size.y {
            for x in 0..size.x {
                relax(&mut distance, UVec2::new(x, y), &FORWARD);
            }
        }
        for y in (0..size.y).rev() {
            for x in (0..size.x).rev() {
                relax(&mut distance, UVec2::new(x, y), &BACKWARD);
            }
        }
    } else {
        warn!(
            "No occupied cells in '{}'; '{}' is unreachable everywhere.",
            layers.occupancy, layers.distance
        );
    }

    debug!(
        "Chamfer distance transform '{}' over {}x{} cells.",
        layers.distance, size.x, size.y
    );

    grid.install_output(&layers.distance, distance)
}

/// Lowers `idx` to the cheapest in-grid `mask` neighbour plus its step weight.
#[inline]
fn relax(values: &mut Layer, idx: UVec2, mask: &[(IVec2, f32)]) {
    let mut best = values[idx];
    if best == 0.0 {
        return;
    }

    let base = idx.as_ivec2();
    for (offset, weight) in mask {
        let n = base + *offset;
        if n.x < 0 || n.y < 0 {
            continue;
        }
        if let Some(v) = values.get(n.as_uvec2()) {
            best = best.min(v + weight);
        }
    }
    values[idx] = best;
}
