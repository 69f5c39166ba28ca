// SPDX-License-Identifier: MPL-2.0
//! Effect parameter values.
//!
//! Effects take heterogeneous parameters (a blur radius, a distortion
//! center, a tint color). Instead of an untyped map, each value is one of a
//! small set of kinds, which lets the effect registry check a catalog entry
//! against a schema before it is ever selected.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of value an effect parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Number,
    Vector,
    Color,
}

/// RGBA color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Rgba {
    /// Opaque gray, the usual monochrome tint.
    pub const GRAY: Self = Self {
        r: 0.5,
        g: 0.5,
        b: 0.5,
        a: 1.0,
    };

    /// Returns true if every channel is finite and within `0.0..=1.0`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }
}

/// A single effect parameter value.
///
/// In TOML a number is written as `radius = 20`, a vector as
/// `center = [150.0, 150.0]` and a color as `color = { r = 0.5, g = 0.5, b = 0.5 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Vector(Vec<f64>),
    Color(Rgba),
}

/// Maximum number of components in a vector parameter.
pub const MAX_VECTOR_COMPONENTS: usize = 4;

impl ParamValue {
    /// Returns the kind of this value.
    #[must_use]
    pub fn kind(&self) -> ParamKind {
        match self {
            Self::Number(_) => ParamKind::Number,
            Self::Vector(_) => ParamKind::Vector,
            Self::Color(_) => ParamKind::Color,
        }
    }

    /// Returns true if the value can be handed to an effect as-is.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        match self {
            Self::Number(n) => n.is_finite(),
            Self::Vector(v) => {
                !v.is_empty() && v.len() <= MAX_VECTOR_COMPONENTS && v.iter().all(|c| c.is_finite())
            }
            Self::Color(c) => c.is_valid(),
        }
    }

    /// Shorthand for a two-component vector.
    #[must_use]
    pub fn vec2(x: f64, y: f64) -> Self {
        Self::Vector(vec![x, y])
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Rgba> for ParamValue {
    fn from(value: Rgba) -> Self {
        Self::Color(value)
    }
}

/// Named parameters of one effect, ordered by name.
pub type Parameters = BTreeMap<String, ParamValue>;

/// One selectable entry of the filter catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterEntry {
    pub name: String,
    #[serde(default)]
    pub parameters: Parameters,
}

impl FilterEntry {
    /// Creates an entry without parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Parameters::new(),
        }
    }

    /// Adds a parameter, builder style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }
}
