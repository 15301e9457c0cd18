//! Per-call configuration: layer names, exploration thresholds and inflation radius.
//!
//! All transforms take their configuration explicitly. [`TransformConfig`] bundles the
//! pieces for callers that run the whole pipeline.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default name of the occupancy input layer.
pub const DEFAULT_OCCUPANCY_LAYER: &str = "occupancy";
/// Default name of the inflated occupancy layer.
pub const DEFAULT_INFLATED_LAYER: &str = "occupancy_inflated";
/// Default name of the distance-to-obstacle layer.
pub const DEFAULT_DISTANCE_LAYER: &str = "distance_transform";
/// Default name of the exploration cost layer.
pub const DEFAULT_EXPLORATION_LAYER: &str = "exploration_transform";

/// Default lethal distance in weighted grid units.
pub const DEFAULT_LETHAL_DIST: f32 = 6.0;
/// Default penalty distance in weighted grid units.
pub const DEFAULT_PENALTY_DIST: f32 = 12.0;
/// Default inflation radius in cells.
pub const DEFAULT_INFLATION_RADIUS_CELLS: f32 = 6.0;

/// Names of the grid layers read and written by the transforms.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerNames {
    /// Occupancy input layer (`0` free, `100` occupied, anything else unknown).
    pub occupancy: String,
    /// Output of the inflation transform.
    pub inflated_occupancy: String,
    /// Output of the distance transforms, input of the exploration transform.
    pub distance: String,
    /// Output of the exploration transform.
    pub exploration: String,
}

impl Default for LayerNames {
    fn default() -> Self {
        Self {
            occupancy: DEFAULT_OCCUPANCY_LAYER.to_owned(),
            inflated_occupancy: DEFAULT_INFLATED_LAYER.to_owned(),
            distance: DEFAULT_DISTANCE_LAYER.to_owned(),
            exploration: DEFAULT_EXPLORATION_LAYER.to_owned(),
        }
    }
}

impl LayerNames {
    /// Sets the occupancy layer name.
    pub fn with_occupancy(mut self, name: impl Into<String>) -> Self {
        self.occupancy = name.into();
        self
    }

    /// Sets the inflated occupancy layer name.
    pub fn with_inflated_occupancy(mut self, name: impl Into<String>) -> Self {
        self.inflated_occupancy = name.into();
        self
    }

    /// Sets the distance layer name.
    pub fn with_distance(mut self, name: impl Into<String>) -> Self {
        self.distance = name.into();
        self
    }

    /// Sets the exploration layer name.
    pub fn with_exploration(mut self, name: impl Into<String>) -> Self {
        self.exploration = name.into();
        self
    }

    /// Fails if `output` would overwrite one of `inputs`.
    pub(crate) fn ensure_distinct(output: &str, inputs: &[&str]) -> Result<()> {
        if inputs.contains(&output) {
            return Err(Error::InvalidConfig(format!(
                "output layer '{output}' must differ from its input layers"
            )));
        }
        Ok(())
    }
}

/// Thresholds of the exploration cost transform, in the same weighted grid units as
/// the propagation edge weights.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExplorationParams {
    /// Cells nearer than this to an obstacle are impassable.
    pub lethal_dist: f32,
    /// Cells nearer than this to an obstacle pay `(penalty_dist - distance)^2` extra.
    pub penalty_dist: f32,
}

impl Default for ExplorationParams {
    fn default() -> Self {
        Self {
            lethal_dist: DEFAULT_LETHAL_DIST,
            penalty_dist: DEFAULT_PENALTY_DIST,
        }
    }
}

impl ExplorationParams {
    pub fn new(lethal_dist: f32, penalty_dist: f32) -> Self {
        Self {
            lethal_dist,
            penalty_dist,
        }
    }

    /// Validates the thresholds, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.lethal_dist.is_nan() || self.lethal_dist < 0.0 {
            return Err(Error::InvalidConfig(
                "lethal_dist must be a non-negative number".into(),
            ));
        }
        if self.penalty_dist.is_nan() || self.penalty_dist < 0.0 {
            return Err(Error::InvalidConfig(
                "penalty_dist must be a non-negative number".into(),
            ));
        }
        Ok(())
    }
}

/// Configuration for running the full transform pipeline.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, PartialEq)]
pub struct TransformConfig {
    /// Layer names read and written by the transforms.
    pub layers: LayerNames,
    /// Exploration cost thresholds.
    pub exploration: ExplorationParams,
    /// Radius of the elliptical structuring element used for inflation, in cells.
    pub inflation_radius_cells: f32,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            layers: LayerNames::default(),
            exploration: ExplorationParams::default(),
            inflation_radius_cells: DEFAULT_INFLATION_RADIUS_CELLS,
        }
    }
}

impl TransformConfig {
    /// Creates a new [`TransformConfig`] with default names and thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the layer names.
    pub fn with_layers(mut self, layers: LayerNames) -> Self {
        self.layers = layers;
        self
    }

    /// Sets the exploration thresholds.
    pub fn with_exploration(mut self, exploration: ExplorationParams) -> Self {
        self.exploration = exploration;
        self
    }

    /// Sets the lethal distance.
    pub fn with_lethal_dist(mut self, lethal_dist: f32) -> Self {
        self.exploration.lethal_dist = lethal_dist;
        self
    }

    /// Sets the penalty distance.
    pub fn with_penalty_dist(mut self, penalty_dist: f32) -> Self {
        self.exploration.penalty_dist = penalty_dist;
        self
    }

    /// Sets the inflation radius in cells.
    pub fn with_inflation_radius_cells(mut self, radius: f32) -> Self {
        self.inflation_radius_cells = radius;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        self.exploration.validate()?;
        if self.inflation_radius_cells.is_nan() || self.inflation_radius_cells < 0.0 {
            return Err(Error::InvalidConfig(
                "inflation_radius_cells must be a non-negative number".into(),
            ));
        }

        let l = &self.layers;
        LayerNames::ensure_distinct(&l.inflated_occupancy, &[&l.occupancy])?;
        // Either occupancy layer may feed the propagators.
        LayerNames::ensure_distinct(&l.distance, &[&l.occupancy, &l.inflated_occupancy])?;
        LayerNames::ensure_distinct(
            &l.exploration,
            &[&l.occupancy, &l.inflated_occupancy, &l.distance],
        )?;

        Ok(())
    }
}
