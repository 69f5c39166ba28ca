// SPDX-License-Identifier: MPL-2.0
//! Filter catalog: the ordered list of effects a user can pick from.
//!
//! Index 0 is always the "no filter" sentinel. Every other entry is checked
//! against the [`EffectRegistry`] when the catalog is built, so resolving an
//! index later is a plain lookup that cannot fail on a bad effect.

use super::command::Effect;
use super::effects::EffectRegistry;
use super::params::{FilterEntry, ParamValue, Rgba};
use crate::error::CatalogError;

/// Name of the "no filter" sentinel entry.
pub const NO_FILTER: &str = "None";

/// Ordered, immutable list of selectable filters.
#[derive(Debug, Clone)]
pub struct FilterCatalog {
    entries: Vec<FilterEntry>,
    /// Cached resolution, parallel to `entries`. `None` only at index 0.
    resolved: Vec<Option<Effect>>,
}

impl FilterCatalog {
    /// Builds a catalog from `entries`, resolving each one with `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingSentinel`] if the list is empty or does
    /// not start with [`NO_FILTER`], and [`CatalogError::MisplacedSentinel`]
    /// if the sentinel appears again later.
    pub fn new(entries: Vec<FilterEntry>, registry: &EffectRegistry) -> Result<Self, CatalogError> {
        match entries.first() {
            Some(first) if first.name == NO_FILTER => {}
            _ => return Err(CatalogError::MissingSentinel),
        }
        if let Some(index) = entries.iter().skip(1).position(|e| e.name == NO_FILTER) {
            return Err(CatalogError::MisplacedSentinel { index: index + 1 });
        }

        Ok(Self::resolve_all(entries, registry))
    }

    /// The catalog offered by default, resolved against the standard registry.
    #[must_use]
    pub fn standard() -> Self {
        Self::resolve_all(standard_entries(), &EffectRegistry::standard())
    }

    fn resolve_all(entries: Vec<FilterEntry>, registry: &EffectRegistry) -> Self {
        let resolved = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                (index != 0).then(|| registry.construct_or_fallback(&entry.name, &entry.parameters))
            })
            .collect();
        Self { entries, resolved }
    }

    /// Number of entries, sentinel included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a catalog holds at least the sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[FilterEntry] {
        &self.entries
    }

    /// Returns the display name of the entry at `index`.
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.name.as_str())
    }

    /// Resolves `index` to the effect it stands for.
    ///
    /// `Ok(None)` means "no filter" (index 0). Named effects the registry
    /// could not build resolve to [`Effect::Fallback`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::IndexOutOfRange`] if `index >= len()`.
    pub fn resolve(&self, index: usize) -> Result<Option<Effect>, CatalogError> {
        self.resolved
            .get(index)
            .cloned()
            .ok_or(CatalogError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }
}

impl Default for FilterCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// The ten entries of the standard catalog.
///
/// `glow` has no registry schema, so selecting it shows the fallback effect.
#[must_use]
pub fn standard_entries() -> Vec<FilterEntry> {
    vec![
        FilterEntry::new(NO_FILTER),
        FilterEntry::new("glow"),
        FilterEntry::new("sepia_tone").with("intensity", 0.8),
        FilterEntry::new("color_monochrome")
            .with("color", Rgba::GRAY)
            .with("intensity", 1.0),
        FilterEntry::new("pixellate").with("scale", 8.0),
        FilterEntry::new("crystallize")
            .with("radius", 20.0)
            .with("center", ParamValue::vec2(150.0, 150.0)),
        FilterEntry::new("gloom")
            .with("radius", 10.0)
            .with("intensity", 0.75),
        FilterEntry::new("hole_distortion")
            .with("radius", 150.0)
            .with("center", ParamValue::vec2(150.0, 150.0)),
        FilterEntry::new("kaleidoscope")
            .with("count", 6.0)
            .with("center", ParamValue::vec2(150.0, 150.0)),
        FilterEntry::new("zoom_blur")
            .with("amount", 20.0)
            .with("center", ParamValue::vec2(150.0, 150.0)),
    ]
}
