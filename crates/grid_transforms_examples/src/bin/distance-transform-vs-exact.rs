use glam::UVec2;
use grid_transforms::prelude::*;
use grid_transforms_examples::{floor_plan, init_tracing, render_cost_layer_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let (mut grid, robot) = floor_plan(UVec2::new(96, 64), 7)?;

    // Wavefront field, restricted to the free region around the robot.
    let wavefront = LayerNames::default().with_distance("distance_wavefront");
    let mut boundary = BoundaryCells::new();
    add_distance_transform(&mut grid, robot, &mut boundary, &wavefront)?;

    // Chamfer field over the whole grid, in wavefront units.
    let chamfer = LayerNames::default().with_distance("distance_chamfer");
    add_chamfer_distance_transform(&mut grid, &chamfer)?;

    // Exact Euclidean field over the whole grid.
    let exact = LayerNames::default().with_distance("distance_exact");
    add_exact_distance_transform(&mut grid, &exact)?;

    let approx = grid.get("distance_wavefront")?;
    let library = grid.get("distance_chamfer")?;
    let truth = grid.get("distance_exact")?;

    // Inside the robot's region the wavefront and chamfer fields mostly agree; they
    // differ where the chamfer sweep reaches through walls or unknown space.
    let agreeing = approx
        .iter_cells()
        .filter(|(idx, a)| a.is_finite() && (a - library[*idx]).abs() < 1e-3)
        .count();
    info!("{agreeing} reachable cells where wavefront and chamfer agree");

    // Wavefront units are roughly 0.955 per cell; compare in cells.
    let mut compared = 0usize;
    let mut max_err = 0.0f32;
    let mut sum_err = 0.0f32;
    for (idx, a) in approx.iter_cells() {
        if !a.is_finite() || a == 0.0 {
            continue;
        }
        let err = (a / ADJACENT_COST - truth[idx]).abs();
        max_err = max_err.max(err);
        sum_err += err;
        compared += 1;
    }

    if compared > 0 {
        info!(
            "{} cells compared: mean error {:.3} cells, max error {:.3} cells",
            compared,
            sum_err / compared as f32,
            max_err
        );
    }

    let rc = RenderConfig::default();
    render_cost_layer_to_png(approx, &rc, "distance-transform-wavefront.png")?;
    render_cost_layer_to_png(library, &rc, "distance-transform-chamfer.png")?;
    render_cost_layer_to_png(truth, &rc, "distance-transform-exact.png")?;

    Ok(())
}
