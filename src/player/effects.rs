// SPDX-License-Identifier: MPL-2.0
//! Host effect system.
//!
//! The registry knows which effects the render engine can build and which
//! parameters each one takes. Catalog entries are checked against it once,
//! when the catalog is built; anything the registry cannot construct is
//! replaced by the fallback effect.

use super::command::Effect;
use super::params::{ParamKind, Parameters};
use std::collections::{BTreeMap, HashMap};

/// Identifier of the fallback effect.
pub const FALLBACK_EFFECT_ID: &str = "art";

/// Parameter schema of one effect: parameter name to expected kind.
///
/// Parameters may be omitted (the engine uses its defaults), but every
/// supplied parameter must be declared and of the declared kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectSchema {
    params: BTreeMap<String, ParamKind>,
}

impl EffectSchema {
    /// Creates an empty schema (an effect without parameters).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a parameter, builder style.
    #[must_use]
    pub fn param(mut self, name: &str, kind: ParamKind) -> Self {
        self.params.insert(name.to_string(), kind);
        self
    }

    /// Returns true if `parameters` satisfies this schema.
    #[must_use]
    pub fn accepts(&self, parameters: &Parameters) -> bool {
        parameters.iter().all(|(name, value)| {
            self.params.get(name) == Some(&value.kind()) && value.is_well_formed()
        })
    }
}

/// Effects the render engine can construct.
#[derive(Debug, Clone)]
pub struct EffectRegistry {
    schemas: HashMap<String, EffectSchema>,
    fallback_id: String,
}

impl EffectRegistry {
    /// Creates a registry that knows no effects.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            schemas: HashMap::new(),
            fallback_id: FALLBACK_EFFECT_ID.to_string(),
        }
    }

    /// Registry with the effects the standard engine ships.
    #[must_use]
    pub fn standard() -> Self {
        use ParamKind::{Color, Number, Vector};

        Self::empty()
            .register("sepia_tone", EffectSchema::new().param("intensity", Number))
            .register(
                "color_monochrome",
                EffectSchema::new()
                    .param("color", Color)
                    .param("intensity", Number),
            )
            .register("pixellate", EffectSchema::new().param("scale", Number))
            .register(
                "crystallize",
                EffectSchema::new()
                    .param("radius", Number)
                    .param("center", Vector),
            )
            .register(
                "gloom",
                EffectSchema::new()
                    .param("radius", Number)
                    .param("intensity", Number),
            )
            .register(
                "hole_distortion",
                EffectSchema::new()
                    .param("radius", Number)
                    .param("center", Vector),
            )
            .register(
                "kaleidoscope",
                EffectSchema::new()
                    .param("count", Number)
                    .param("center", Vector),
            )
            .register(
                "zoom_blur",
                EffectSchema::new()
                    .param("amount", Number)
                    .param("center", Vector),
            )
    }

    /// Adds (or replaces) an effect schema, builder style.
    #[must_use]
    pub fn register(mut self, id: &str, schema: EffectSchema) -> Self {
        self.schemas.insert(id.to_string(), schema);
        self
    }

    /// Overrides the fallback effect identifier.
    #[must_use]
    pub fn with_fallback(mut self, id: &str) -> Self {
        self.fallback_id = id.to_string();
        self
    }

    /// Returns the fallback effect identifier.
    #[must_use]
    pub fn fallback_id(&self) -> &str {
        &self.fallback_id
    }

    /// Builds the named effect, or `None` if `id` is unknown or the
    /// parameters do not satisfy its schema.
    #[must_use]
    pub fn construct(&self, id: &str, parameters: &Parameters) -> Option<Effect> {
        let schema = self.schemas.get(id)?;
        schema.accepts(parameters).then(|| Effect::Named {
            id: id.to_string(),
            parameters: parameters.clone(),
        })
    }

    /// Builds the named effect, falling back to the fixed effect.
    #[must_use]
    pub fn construct_or_fallback(&self, id: &str, parameters: &Parameters) -> Effect {
        self.construct(id, parameters).unwrap_or_else(|| Effect::Fallback {
            id: self.fallback_id.clone(),
        })
    }
}

impl Default for EffectRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
