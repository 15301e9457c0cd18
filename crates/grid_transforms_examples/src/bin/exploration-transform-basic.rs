use glam::UVec2;
use grid_transforms::prelude::*;
use grid_transforms_examples::{
    floor_plan, init_tracing, render_cost_layer_to_png, render_occupancy_to_png, RenderConfig,
};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let (mut grid, robot) = floor_plan(UVec2::new(120, 80), 2025)?;

    // Thresholds scaled down from the defaults to suit the narrow doorways.
    let config = TransformConfig::new()
        .with_lethal_dist(1.5)
        .with_penalty_dist(4.0);
    let pipeline = ExplorationPipeline::try_new(config)?;
    let result = pipeline.run(&mut grid, robot)?;

    info!(
        "distance: {:?}, exploration: {:?}",
        result.distance, result.exploration
    );

    let cost = grid.get("exploration_transform")?;
    match cost.get(robot).filter(|c| c.is_finite()) {
        Some(c) => info!("Cost to the nearest frontier from the robot: {c:.2}"),
        None => info!("No frontier reachable from the robot."),
    }

    let rc = RenderConfig::default();
    render_occupancy_to_png(
        grid.get("occupancy")?,
        &result.boundary.frontiers,
        &rc,
        "exploration-transform-basic-map.png",
    )?;
    render_cost_layer_to_png(
        grid.get("distance_transform")?,
        &rc,
        "exploration-transform-basic-distance.png",
    )?;
    render_cost_layer_to_png(cost, &rc, "exploration-transform-basic-cost.png")?;

    Ok(())
}
