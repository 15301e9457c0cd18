//! Synthetic occupancy maps for the demos.
use glam::UVec2;
use grid_transforms::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Builds a partially explored floor plan: a walled building split into rooms by
/// inner walls with doorways, scattered clutter, and unknown space covering the
/// rightmost third. Returns the grid and a free robot cell.
pub fn floor_plan(size: UVec2, seed: u64) -> Result<(GridMap, UVec2)> {
    if size.x < 24 || size.y < 24 {
        return Err(Error::InvalidConfig(format!(
            "floor plan needs at least 24x24 cells, got {}x{}",
            size.x, size.y
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = GridMap::new(size);
    let layer = grid.add("occupancy", FREE)?;

    for y in 0..size.y {
        for x in 0..size.x {
            if x == 0 || y == 0 || x + 1 == size.x || y + 1 == size.y {
                layer.set(UVec2::new(x, y), OCCUPIED)?;
            }
        }
    }

    // Vertical inner walls, one doorway each.
    let rooms = 3;
    for i in 1..rooms {
        let wall_x = size.x * i / rooms;
        let door = 2 + rng.next_u32() % (size.y - 8);
        for y in 1..size.y - 1 {
            if y < door || y >= door + 4 {
                layer.set(UVec2::new(wall_x, y), OCCUPIED)?;
            }
        }
    }

    // Horizontal wall through the first room.
    let wall_y = size.y / 2;
    let door = 2 + rng.next_u32() % (size.x / rooms - 6);
    for x in 1..size.x / rooms {
        if x < door || x >= door + 4 {
            layer.set(UVec2::new(x, wall_y), OCCUPIED)?;
        }
    }

    for _ in 0..(size.x * size.y / 400).max(4) {
        let cx = 2 + rng.next_u32() % (size.x - 4);
        let cy = 2 + rng.next_u32() % (size.y - 4);
        for dy in 0..2 {
            for dx in 0..2 {
                layer.set(UVec2::new(cx + dx, cy + dy), OCCUPIED)?;
            }
        }
    }

    for y in 0..size.y {
        for x in size.x * 2 / 3..size.x {
            layer.set(UVec2::new(x, y), UNKNOWN)?;
        }
    }

    let robot = UVec2::new(size.x / 6, size.y / 4);
    for dy in 0..3 {
        for dx in 0..3 {
            layer.set(robot + UVec2::new(dx, dy) - UVec2::ONE, FREE)?;
        }
    }

    Ok((grid, robot))
}
