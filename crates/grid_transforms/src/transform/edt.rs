//! Exact Euclidean distance transform of the occupancy layer.
//!
//! Computes, for every cell, the Euclidean distance in cells to the nearest occupied
//! cell. Unlike the wavefront transform this ignores connectivity: distances pass
//! through unknown space and walls alike. Values are in cells, not wavefront units;
//! use the chamfer transform when the layer feeds the exploration thresholds.
//!
//! This implementation is based on the Felzenszwalb-Huttenlocher algorithm,
//! which computes exact Euclidean distances using a separable approach with
//! two 1D passes.
use tracing::{debug, warn};

use crate::config::LayerNames;
use crate::error::Result;
use crate::grid::{GridMap, Layer, Occupancy};

/// Writes the exact distance-to-obstacle field into `layers.distance`.
///
/// Occupied cells hold `0`. If the grid has no occupied cell every value is
/// `+infinity`.
///
/// # Errors
///
/// Fails if the occupancy layer is missing or the distance layer name aliases it.
pub fn add_exact_distance_transform(grid: &mut GridMap, layers: &LayerNames) -> Result<()> {
    LayerNames::ensure_distinct(&layers.distance, &[&layers.occupancy])?;

    let occupancy = grid.get(&layers.occupancy)?;
    let size = grid.size();
    let (w, h) = (size.x as usize, size.y as usize);

    let obstacles: Vec<bool> = occupancy
        .data()
        .iter()
        .map(|v| Occupancy::classify(*v) == Occupancy::Occupied)
        .collect();

    let data = if obstacles.iter().any(|o| *o) {
        edt(&obstacles, w, h)
    } else {
        warn!(
            "No occupied cells in '{}'; '{}' is unreachable everywhere.",
            layers.occupancy, layers.distance
        );
        vec![f32::INFINITY; w * h]
    };
    let layer = Layer::from_vec(size, data)?;

    debug!(
        "Exact distance transform '{}' over {}x{} cells.",
        layers.distance, w, h
    );

    grid.install_output(&layers.distance, layer)
}

/// Computes the 1D squared-distance transform using the lower envelope of parabolas.
fn edt_1d(f: &[f32], output: &mut [f32], v: &mut [usize], z: &mut [f32]) {
    let n = f.len();
    if n == 0 {
        return;
    }
    debug_assert_eq!(n, output.len(), "Input and output must have same length");
    debug_assert!(v.len() >= n && z.len() > n, "scratch buffers too small");

    let mut k = 0;
    v[0] = 0;
    z[0] = f32::NEG_INFINITY;
    z[1] = f32::INFINITY;

    for q in 1..n {
        let mut s = intersection(q, v[k], f);
        // z[0] is -inf, so stopping at k == 0 drops no parabola.
        while k > 0 && s <= z[k] {
            k -= 1;
            s = intersection(q, v[k], f);
        }

        k += 1;
        v[k] = q;
        z[k] = s;
        z[k + 1] = f32::INFINITY;
    }

    k = 0;
    for (q, dq) in output.iter_mut().enumerate() {
        while z[k + 1] < q as f32 {
            k += 1;
        }
        let dx = q as f32 - v[k] as f32;
        *dq = dx * dx + f[v[k]];
    }
}

/// Horizontal position where the parabolas rooted at `i` and `j` intersect.
fn intersection(i: usize, j: usize, f: &[f32]) -> f32 {
    if i == j {
        return f32::INFINITY;
    }

    let fi = f[i];
    let fj = f[j];
    if !fi.is_finite() || !fj.is_finite() {
        return f32::INFINITY;
    }

    let numerator = (fi + (i * i) as f32) - (fj + (j * j) as f32);
    let denominator = 2.0 * (i as f32 - j as f32);
    numerator / denominator
}

/// Euclidean distance from every cell to the nearest `true` cell of `obstacles`.
///
/// Callers must ensure at least one obstacle exists.
fn edt(obstacles: &[bool], w: usize, h: usize) -> Vec<f32> {
    debug_assert_eq!(obstacles.len(), w * h, "Mask size must match dimensions");

    // Larger than any squared distance inside the grid, but finite.
    let far = (w * w + h * h) as f32;
    let mut f: Vec<f32> = obstacles
        .iter()
        .map(|o| if *o { 0.0 } else { far })
        .collect();

    let n = w.max(h);
    let mut v = vec![0usize; n];
    let mut z = vec![0.0f32; n + 1];

    let mut row_out = vec![0.0; w];
    for y in 0..h {
        let row = &mut f[y * w..(y + 1) * w];
        edt_1d(row, &mut row_out, &mut v, &mut z);
        row.copy_from_slice(&row_out);
    }

    let mut col_in = vec![0.0; h];
    let mut col_out = vec![0.0; h];
    for x in 0..w {
        for y in 0..h {
            col_in[y] = f[y * w + x];
        }
        edt_1d(&col_in, &mut col_out, &mut v, &mut z);
        for y in 0..h {
            f[y * w + x] = col_out[y];
        }
    }

    for val in &mut f {
        *val = val.sqrt();
    }
    f
}
