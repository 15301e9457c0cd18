use std::time::Duration;

use criterion::{Criterion, Throughput};
use glam::UVec2;
use grid_transforms::prelude::{GridMap, FREE, OCCUPIED, UNKNOWN};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub const GRID_SIDES: [u32; 3] = [128, 256, 512];

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn cells_throughput(size: UVec2) -> Throughput {
    Throughput::Elements((size.x as u64 * size.y as u64).max(1))
}

/// Walled square map with `obstacle_percent` random obstacles and unknown space
/// beyond the right quarter. The robot cell in the centre is free.
pub fn random_map(side: u32, obstacle_percent: u32, seed: u64) -> (GridMap, UVec2) {
    let size = UVec2::splat(side);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = GridMap::new(size);
    let layer = grid
        .add("occupancy", FREE)
        .expect("fresh grid has no layers");

    for y in 0..side {
        for x in 0..side {
            let on_border = x == 0 || y == 0 || x + 1 == side || y + 1 == side;
            let value = if on_border || rng.next_u32() % 100 < obstacle_percent {
                OCCUPIED
            } else if x > side * 3 / 4 {
                UNKNOWN
            } else {
                FREE
            };
            layer[UVec2::new(x, y)] = value;
        }
    }

    let robot = size / 2;
    layer[robot] = FREE;
    (grid, robot)
}
