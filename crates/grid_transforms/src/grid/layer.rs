//! Dense storage for one named grid layer.
//!
//! Cells are addressed by `UVec2(ix, iy)` and stored with `ix` varying fastest.
use std::ops::{Index, IndexMut};

use glam::UVec2;

use crate::error::{Error, Result};

/// A `size_x × size_y` field of `f32` values.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    size: UVec2,
    data: Vec<f32>,
}

impl Layer {
    /// Create a layer with every cell set to `value`.
    pub fn filled(size: UVec2, value: f32) -> Self {
        Self {
            size,
            data: vec![value; cell_count(size)],
        }
    }

    /// Create a layer by evaluating `f` at every cell.
    pub fn from_fn(size: UVec2, mut f: impl FnMut(UVec2) -> f32) -> Self {
        let mut data = Vec::with_capacity(cell_count(size));
        for iy in 0..size.y {
            for ix in 0..size.x {
                data.push(f(UVec2::new(ix, iy)));
            }
        }
        Self { size, data }
    }

    /// Wrap existing data laid out with `ix` varying fastest.
    pub fn from_vec(size: UVec2, data: Vec<f32>) -> Result<Self> {
        if data.len() != cell_count(size) {
            return Err(Error::InvalidConfig(format!(
                "data length {} does not match layer size {}x{}",
                data.len(),
                size.x,
                size.y
            )));
        }
        Ok(Self { size, data })
    }

    /// Size of the layer as `(size_x, size_y)`.
    pub fn size(&self) -> UVec2 {
        self.size
    }

    /// Returns `true` if `idx` addresses a cell of this layer.
    #[inline]
    pub fn contains(&self, idx: UVec2) -> bool {
        idx.x < self.size.x && idx.y < self.size.y
    }

    /// Get the value at `idx`, or `None` outside the layer.
    #[inline]
    pub fn get(&self, idx: UVec2) -> Option<f32> {
        self.contains(idx).then(|| self.data[self.offset(idx)])
    }

    /// Set the value at `idx`.
    pub fn set(&mut self, idx: UVec2, value: f32) -> Result<()> {
        if !self.contains(idx) {
            return Err(Error::OutOfBounds {
                x: idx.x,
                y: idx.y,
                size_x: self.size.x,
                size_y: self.size.y,
            });
        }
        let i = self.offset(idx);
        self.data[i] = value;
        Ok(())
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Iterate over `(index, value)` pairs in storage order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (UVec2, f32)> + '_ {
        let w = self.size.x.max(1) as usize;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| (UVec2::new((i % w) as u32, (i / w) as u32), *v))
    }

    #[inline]
    fn offset(&self, idx: UVec2) -> usize {
        (idx.y as usize) * (self.size.x as usize) + idx.x as usize
    }
}

impl Index<UVec2> for Layer {
    type Output = f32;

    #[inline]
    fn index(&self, idx: UVec2) -> &f32 {
        debug_assert!(self.contains(idx), "index {idx} outside layer");
        &self.data[self.offset(idx)]
    }
}

impl IndexMut<UVec2> for Layer {
    #[inline]
    fn index_mut(&mut self, idx: UVec2) -> &mut f32 {
        debug_assert!(self.contains(idx), "index {idx} outside layer");
        let i = self.offset(idx);
        &mut self.data[i]
    }
}

fn cell_count(size: UVec2) -> usize {
    (size.x as usize) * (size.y as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_sets_every_cell() {
        let layer = Layer::filled(UVec2::new(3, 2), f32::INFINITY);
        assert_eq!(layer.data().len(), 6);
        assert!(layer.data().iter().all(|v| *v == f32::INFINITY));
    }

    #[test]
    fn get_returns_none_outside_bounds() {
        let layer = Layer::filled(UVec2::new(2, 2), 1.0);
        assert_eq!(layer.get(UVec2::new(1, 1)), Some(1.0));
        assert_eq!(layer.get(UVec2::new(2, 0)), None);
        assert_eq!(layer.get(UVec2::new(0, 2)), None);
    }

    #[test]
    fn set_rejects_out_of_bounds() {
        let mut layer = Layer::filled(UVec2::new(2, 2), 0.0);
        assert!(layer.set(UVec2::new(1, 0), 5.0).is_ok());
        assert_eq!(layer[UVec2::new(1, 0)], 5.0);
        assert!(matches!(
            layer.set(UVec2::new(4, 0), 5.0),
            Err(Error::OutOfBounds { x: 4, .. })
        ));
    }

    #[test]
    fn from_fn_lays_out_x_fastest() {
        let layer = Layer::from_fn(UVec2::new(3, 2), |p| (p.y * 10 + p.x) as f32);
        assert_eq!(layer.data(), &[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
        let cells: Vec<_> = layer.iter_cells().collect();
        assert_eq!(cells[4], (UVec2::new(1, 1), 11.0));
    }

    #[test]
    fn from_vec_checks_length() {
        assert!(Layer::from_vec(UVec2::new(2, 2), vec![0.0; 3]).is_err());
        assert!(Layer::from_vec(UVec2::new(2, 2), vec![0.0; 4]).is_ok());
    }
}
