use glam::UVec2;
use grid_transforms::grid::occupancy::census;
use grid_transforms::prelude::*;
use grid_transforms_examples::{floor_plan, init_tracing, render_occupancy_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let (mut grid, _) = floor_plan(UVec2::new(80, 60), 42)?;
    let layers = LayerNames::default();
    let rc = RenderConfig::default().with_cell_pixels(6);

    render_occupancy_to_png(grid.get(&layers.occupancy)?, &[], &rc, "inflation-input.png")?;

    for radius in [1.0, 3.0] {
        add_inflated_layer(&mut grid, radius, &layers)?;
        let inflated = grid.get(&layers.inflated_occupancy)?;

        let (free, occupied, unknown) = census(inflated);
        info!("radius {radius}: {free} free, {occupied} occupied, {unknown} unknown");

        let out = format!("inflation-radius-{radius}.png");
        render_occupancy_to_png(inflated, &[], &rc, out)?;
    }

    Ok(())
}
