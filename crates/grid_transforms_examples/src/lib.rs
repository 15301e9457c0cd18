#![forbid(unsafe_code)]

mod maps;
mod rendering;

pub use maps::floor_plan;
pub use rendering::{
    init_tracing, render_cost_layer_to_png, render_occupancy_to_png, RenderConfig,
};
