//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! missing or duplicate grid layers, indices outside the grid, layer size mismatches,
//! and invalid configuration.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing layer '{name}'")]
    MissingLayer { name: String },

    #[error("layer '{name}' already exists")]
    LayerExists { name: String },

    #[error("cell ({x}, {y}) is outside the {size_x}x{size_y} grid")]
    OutOfBounds {
        x: u32,
        y: u32,
        size_x: u32,
        size_y: u32,
    },

    #[error("layer size {actual_x}x{actual_y} does not match grid size {expected_x}x{expected_y}")]
    SizeMismatch {
        expected_x: u32,
        expected_y: u32,
        actual_x: u32,
        actual_y: u32,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
