//! Obstacle inflation by morphological dilation.
//!
//! The occupancy layer is binarized (occupied cells set), dilated with an
//! elliptical structuring element, and written to the inflated layer:
//! - non-free cells keep their occupancy value,
//! - free cells covered by the dilation become occupied,
//! - other free cells stay free.
use glam::{IVec2, UVec2};
use tracing::debug;

use crate::config::LayerNames;
use crate::error::{Error, Result};
use crate::grid::{GridMap, Layer, Occupancy, FREE, OCCUPIED};

/// Offsets of a filled ellipse inscribed in a `(2r+1) × (2r+1)` box, centred on the origin.
///
/// Row `dy` spans `±round(sqrt(r² - dy²))`, so radius 0 is the single centre cell.
pub fn elliptical_element(radius: u32) -> Vec<IVec2> {
    let r = radius.min(i32::MAX as u32) as i32;
    let r_sq = i64::from(r) * i64::from(r);
    let mut offsets = Vec::new();
    for dy in -r..=r {
        let span = ((r_sq - i64::from(dy) * i64::from(dy)) as f64).sqrt().round() as i32;
        for dx in -span..=span {
            offsets.push(IVec2::new(dx, dy));
        }
    }
    offsets
}

/// Dilates a row-major mask of `size` with `element`. Cells outside the grid
/// contribute nothing.
pub fn dilate(mask: &[bool], size: UVec2, element: &[IVec2]) -> Vec<bool> {
    let (w, h) = (size.x as usize, size.y as usize);
    debug_assert_eq!(mask.len(), w * h, "mask size must match grid");

    let mut out = vec![false; mask.len()];
    for (i, _) in mask.iter().enumerate().filter(|(_, set)| **set) {
        let (cx, cy) = (i % w, i / w);
        for offset in element {
            let (Some(nx), Some(ny)) = (
                cx.checked_add_signed(offset.x as isize),
                cy.checked_add_signed(offset.y as isize),
            ) else {
                continue;
            };
            if nx >= w || ny >= h {
                continue;
            }
            out[ny * w + nx] = true;
        }
    }
    out
}

/// Writes `layers.inflated_occupancy`: the occupancy layer with free cells within
/// `radius_cells` of an occupied cell marked occupied.
///
/// The radius is truncated to whole cells.
///
/// # Errors
///
/// Fails if the occupancy layer is missing, the radius is negative or NaN, or the
/// output name aliases the occupancy layer.
pub fn add_inflated_layer(
    grid: &mut GridMap,
    radius_cells: f32,
    layers: &LayerNames,
) -> Result<()> {
    if radius_cells.is_nan() || radius_cells < 0.0 {
        return Err(Error::InvalidConfig(format!(
            "inflation radius must be a non-negative number, got {radius_cells}"
        )));
    }
    LayerNames::ensure_distinct(&layers.inflated_occupancy, &[&layers.occupancy])?;

    let occupancy = grid.get(&layers.occupancy)?;
    let size = grid.size();

    let mask: Vec<bool> = occupancy
        .data()
        .iter()
        .map(|v| Occupancy::classify(*v) == Occupancy::Occupied)
        .collect();
    let element = elliptical_element(radius_cells as u32);
    let dilated = dilate(&mask, size, &element);

    let data: Vec<f32> = occupancy
        .data()
        .iter()
        .zip(&dilated)
        .map(|(v, covered)| if *v == FREE && *covered { OCCUPIED } else { *v })
        .collect();
    let inflated = Layer::from_vec(size, data)?;

    debug!(
        "Inflated '{}' into '{}' with a {}-cell element.",
        layers.occupancy,
        layers.inflated_occupancy,
        element.len()
    );

    grid.install_output(&layers.inflated_occupancy, inflated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::UNKNOWN;

    fn grid_with(size: UVec2, cells: &[(u32, u32, f32)]) -> GridMap {
        let mut grid = GridMap::new(size);
        let layer = grid.add("occupancy", FREE).unwrap();
        for (x, y, v) in cells {
            layer.set(UVec2::new(*x, *y), *v).unwrap();
        }
        grid
    }

    #[test]
    fn element_radius_zero_is_single_cell() {
        assert_eq!(elliptical_element(0), vec![IVec2::ZERO]);
    }

    #[test]
    fn element_radius_one_is_a_cross() {
        let e = elliptical_element(1);
        assert_eq!(e.len(), 5);
        assert!(e.contains(&IVec2::new(0, -1)));
        assert!(e.contains(&IVec2::new(-1, 0)));
        assert!(!e.contains(&IVec2::new(1, 1)));
    }

    #[test]
    fn element_radius_two_rows() {
        let e = elliptical_element(2);
        // Row spans: dy=±2 -> 0, dy=±1 -> round(sqrt(3)) = 2, dy=0 -> 2.
        assert_eq!(e.len(), 1 + 5 + 5 + 5 + 1);
        assert!(e.contains(&IVec2::new(2, 1)));
        assert!(!e.contains(&IVec2::new(1, 2)));
    }

    #[test]
    fn dilate_clips_at_grid_edges() {
        let size = UVec2::new(3, 3);
        let mut mask = vec![false; 9];
        mask[0] = true;
        let out = dilate(&mask, size, &elliptical_element(1));
        assert_eq!(
            out,
            vec![true, true, false, true, false, false, false, false, false]
        );
    }

    #[test]
    fn dilate_does_not_wrap_across_rows() {
        // Wide grid: the last cell of row 0 must not spill into the first cell of row 1.
        let size = UVec2::new(5, 2);
        let mut mask = vec![false; 10];
        mask[4] = true;
        let out = dilate(&mask, size, &elliptical_element(1));
        assert_eq!(
            out,
            vec![false, false, false, true, true, false, false, false, false, true]
        );

        // And the first cell of row 1 must not spill back into the end of row 0.
        let mut mask = vec![false; 10];
        mask[5] = true;
        let out = dilate(&mask, size, &elliptical_element(1));
        assert_eq!(
            out,
            vec![true, false, false, false, false, true, true, false, false, false]
        );
    }

    #[test]
    fn inflation_marks_free_cells_near_obstacles() {
        let mut grid = grid_with(UVec2::new(7, 7), &[(3, 3, OCCUPIED)]);
        add_inflated_layer(&mut grid, 2.0, &LayerNames::default()).unwrap();
        let inflated = grid.get("occupancy_inflated").unwrap();
        assert_eq!(inflated[UVec2::new(5, 3)], OCCUPIED);
        assert_eq!(inflated[UVec2::new(5, 4)], OCCUPIED);
        assert_eq!(inflated[UVec2::new(4, 5)], FREE);
        assert_eq!(inflated[UVec2::new(6, 3)], FREE);
        // Input is untouched.
        assert_eq!(grid.get("occupancy").unwrap()[UVec2::new(5, 3)], FREE);
    }

    #[test]
    fn unknown_cells_are_copied_not_inflated() {
        let mut grid = grid_with(
            UVec2::new(5, 5),
            &[(2, 2, OCCUPIED), (3, 2, UNKNOWN), (0, 0, 42.0)],
        );
        add_inflated_layer(&mut grid, 1.0, &LayerNames::default()).unwrap();
        let inflated = grid.get("occupancy_inflated").unwrap();
        assert_eq!(inflated[UVec2::new(3, 2)], UNKNOWN);
        assert_eq!(inflated[UVec2::new(0, 0)], 42.0);
        assert_eq!(inflated[UVec2::new(1, 2)], OCCUPIED);
    }

    #[test]
    fn fractional_radius_truncates() {
        let mut grid = grid_with(UVec2::new(5, 5), &[(2, 2, OCCUPIED)]);
        add_inflated_layer(&mut grid, 0.9, &LayerNames::default()).unwrap();
        let inflated = grid.get("occupancy_inflated").unwrap();
        assert_eq!(inflated[UVec2::new(3, 2)], FREE);
    }

    #[test]
    fn invalid_radius_is_rejected() {
        let mut grid = grid_with(UVec2::new(3, 3), &[]);
        assert!(add_inflated_layer(&mut grid, -1.0, &LayerNames::default()).is_err());
        assert!(add_inflated_layer(&mut grid, f32::NAN, &LayerNames::default()).is_err());
        assert!(!grid.exists("occupancy_inflated"));
    }

    #[test]
    fn missing_occupancy_fails() {
        let mut grid = GridMap::new(UVec2::new(3, 3));
        let err = add_inflated_layer(&mut grid, 1.0, &LayerNames::default()).unwrap_err();
        assert!(matches!(err, Error::MissingLayer { .. }));
    }
}
