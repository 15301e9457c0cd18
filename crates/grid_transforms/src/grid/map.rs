//! Named-layer grid container.
//!
//! A [`GridMap`] owns any number of same-sized [`Layer`]s keyed by name:
//! - Create layers with [`GridMap::add`] (never overwrites) or install a computed
//!   layer with [`GridMap::insert`] / [`GridMap::replace`].
//! - Read them with [`GridMap::get`], which fails with [`Error::MissingLayer`].
use std::collections::HashMap;

use glam::UVec2;
use tracing::debug;

use super::layer::Layer;
use crate::error::{Error, Result};

/// Fixed-size 2D grid holding named float layers.
#[derive(Clone, Debug)]
pub struct GridMap {
    size: UVec2,
    layers: HashMap<String, Layer>,
}

impl GridMap {
    /// Creates an empty grid of `size_x × size_y` cells.
    pub fn new(size: UVec2) -> Self {
        Self {
            size,
            layers: HashMap::new(),
        }
    }

    /// Grid size as `(size_x, size_y)`.
    pub fn size(&self) -> UVec2 {
        self.size
    }

    /// Returns the number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` if the grid holds no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Checks if a layer with the given name exists.
    pub fn exists(&self, name: &str) -> bool {
        self.layers.contains_key(name)
    }

    /// Names of all layers, in no particular order.
    pub fn layer_names(&self) -> impl Iterator<Item = &str> {
        self.layers.keys().map(String::as_str)
    }

    /// Returns `true` if `idx` addresses a cell of the grid.
    #[inline]
    pub fn is_inside(&self, idx: UVec2) -> bool {
        idx.x < self.size.x && idx.y < self.size.y
    }

    /// Fails with [`Error::OutOfBounds`] if `idx` is outside the grid.
    pub fn check_index(&self, idx: UVec2) -> Result<()> {
        if self.is_inside(idx) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                x: idx.x,
                y: idx.y,
                size_x: self.size.x,
                size_y: self.size.y,
            })
        }
    }

    /// Adds a new layer filled with `value`. Fails if the name is taken.
    pub fn add(&mut self, name: impl Into<String>, value: f32) -> Result<&mut Layer> {
        let layer = Layer::filled(self.size, value);
        self.insert(name, layer)
    }

    /// Adds an existing layer under a new name. Fails if the name is taken or the
    /// layer size differs from the grid.
    pub fn insert(&mut self, name: impl Into<String>, layer: Layer) -> Result<&mut Layer> {
        let name = name.into();
        self.check_size(&layer)?;
        if self.layers.contains_key(&name) {
            return Err(Error::LayerExists { name });
        }
        Ok(self.layers.entry(name).or_insert(layer))
    }

    /// Installs `layer` under `name`, returning the layer it replaced, if any.
    pub fn replace(&mut self, name: impl Into<String>, layer: Layer) -> Result<Option<Layer>> {
        let name = name.into();
        self.check_size(&layer)?;
        let previous = self.layers.insert(name, layer);
        Ok(previous)
    }

    /// Retrieves a layer by name.
    pub fn get(&self, name: &str) -> Result<&Layer> {
        self.layers.get(name).ok_or_else(|| Error::MissingLayer {
            name: name.to_owned(),
        })
    }

    /// Retrieves a layer by name for writing.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Layer> {
        self.layers.get_mut(name).ok_or_else(|| Error::MissingLayer {
            name: name.to_owned(),
        })
    }

    /// Removes a layer by name, returning it if it existed.
    pub fn remove(&mut self, name: &str) -> Option<Layer> {
        self.layers.remove(name)
    }

    /// Installs a computed output layer, logging when an older one is dropped.
    pub(crate) fn install_output(&mut self, name: &str, layer: Layer) -> Result<()> {
        if self.replace(name, layer)?.is_some() {
            debug!("Replaced existing layer '{}'.", name);
        }
        Ok(())
    }

    fn check_size(&self, layer: &Layer) -> Result<()> {
        let actual = layer.size();
        if actual != self.size {
            return Err(Error::SizeMismatch {
                expected_x: self.size.x,
                expected_y: self.size.y,
                actual_x: actual.x,
                actual_y: actual.y,
            });
        }
        Ok(())
    }
}
