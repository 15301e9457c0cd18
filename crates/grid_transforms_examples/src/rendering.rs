//! PNG rendering of grid layers and tracing setup for the demos.
use std::path::Path;

use glam::UVec2;
use grid_transforms::prelude::*;
use image::{Rgb, RgbImage};
use tracing::info;

/// Image scaling and colours used when rendering layers.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Pixels per grid cell.
    pub cell_pixels: u32,
    pub free: [u8; 3],
    pub occupied: [u8; 3],
    pub unknown: [u8; 3],
    /// Colour of cells with no finite value.
    pub unreachable: [u8; 3],
    /// Colour of highlighted cells, e.g. frontiers.
    pub highlight: [u8; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_pixels: 4,
            free: [235, 235, 235],
            occupied: [26, 26, 26],
            unknown: [128, 128, 140],
            unreachable: [60, 20, 20],
            highlight: [40, 220, 90],
        }
    }
}

impl RenderConfig {
    pub fn with_cell_pixels(mut self, cell_pixels: u32) -> Self {
        self.cell_pixels = cell_pixels.max(1);
        self
    }
}

/// Installs a `fmt` subscriber honouring `RUST_LOG`, with this workspace at debug.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into())
                .add_directive(
                    "grid_transforms=debug"
                        .parse()
                        .unwrap_or_else(|_| tracing::Level::DEBUG.into()),
                ),
        )
        .init();
}

/// Renders an occupancy layer with `highlights` painted on top.
pub fn render_occupancy_to_png(
    layer: &Layer,
    highlights: &[UVec2],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let mut colors: Vec<[u8; 3]> = layer
        .data()
        .iter()
        .map(|v| match Occupancy::classify(*v) {
            Occupancy::Free => config.free,
            Occupancy::Occupied => config.occupied,
            Occupancy::Unknown => config.unknown,
        })
        .collect();

    let width = layer.size().x as usize;
    for h in highlights.iter().filter(|h| layer.contains(**h)) {
        colors[h.y as usize * width + h.x as usize] = config.highlight;
    }

    save(layer.size(), &colors, config, path.as_ref())
}

/// Renders a distance or cost layer as a blue-to-yellow ramp over its finite range.
pub fn render_cost_layer_to_png(
    layer: &Layer,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (min, max) = layer
        .data()
        .iter()
        .filter(|v| v.is_finite())
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        });
    let span = if max > min { max - min } else { 1.0 };

    let colors: Vec<[u8; 3]> = layer
        .data()
        .iter()
        .map(|v| {
            if v.is_finite() {
                ramp((v - min) / span)
            } else {
                config.unreachable
            }
        })
        .collect();

    save(layer.size(), &colors, config, path.as_ref())
}

fn ramp(t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: f32, b: f32| (a + (b - a) * t).round() as u8;
    [lerp(20.0, 250.0), lerp(40.0, 220.0), lerp(160.0, 30.0)]
}

fn save(size: UVec2, colors: &[[u8; 3]], config: &RenderConfig, path: &Path) -> anyhow::Result<()> {
    let px = config.cell_pixels.max(1);
    let mut img = RgbImage::new(size.x * px, size.y * px);

    for (i, color) in colors.iter().enumerate() {
        let cx = i as u32 % size.x;
        let cy = i as u32 / size.x;
        // +y points up in the image.
        let row = size.y - 1 - cy;
        for dy in 0..px {
            for dx in 0..px {
                img.put_pixel(cx * px + dx, row * px + dy, Rgb(*color));
            }
        }
    }

    img.save(path)?;
    info!("Wrote {}", path.display());
    Ok(())
}
