// SPDX-License-Identifier: MPL-2.0
//! Playback commands sent from the controller to the render engine.
//!
//! A command is a transient value: it is built by the controller, handed to
//! the outbound channel and never retained. The same type is used for the
//! inbound direction, where the engine reports confirmed transitions.

use super::params::Parameters;

/// An effect the engine can add to its filter stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// An effect the host effect system recognizes, with its parameters.
    Named { id: String, parameters: Parameters },
    /// The fixed effect used when a named effect cannot be constructed.
    Fallback { id: String },
}

impl Effect {
    /// Returns the effect identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Named { id, .. } | Self::Fallback { id } => id,
        }
    }

    /// Returns true if this is the fallback effect.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// A compositing layer drawn over the video, independent of pixel filters.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayDescriptor {
    /// Layer name, used by the engine to pick the graphic.
    pub name: String,
    /// Anchor point in normalized output coordinates (0,0 = top left).
    pub anchor: (f32, f32),
    /// Size relative to the output height.
    pub scale: f32,
    pub opacity: f32,
}

impl OverlayDescriptor {
    /// The vector logo layer shown by the overlay toggle.
    #[must_use]
    pub fn vector_logo() -> Self {
        Self {
            name: "vector_logo".to_string(),
            anchor: (0.5, 0.5),
            scale: 0.25,
            opacity: 1.0,
        }
    }
}

impl Default for OverlayDescriptor {
    fn default() -> Self {
        Self::vector_logo()
    }
}

/// Commands understood by the render engine.
///
/// Equality compares the tag and the payload. Numeric payloads are not
/// validated or clamped here.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlaybackCommand {
    /// No-op, the value before any command is issued.
    #[default]
    Idle,
    Play,
    Pause,
    /// Jump to the start of the video.
    Begin,
    /// Jump to the end of the video.
    End,
    /// Jump to an absolute position in seconds.
    Seek { position_secs: f64 },
    Mute,
    Unmute,
    Brightness(f32),
    Contrast(f32),
    /// Add an effect to the filter stack, optionally clearing it first.
    SetFilter { effect: Effect, clear_previous: bool },
    ClearAllFilters,
    AddOverlay(OverlayDescriptor),
    ClearAllOverlays,
}

impl PlaybackCommand {
    /// Short name used in logs and journal dumps.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Begin => "begin",
            Self::End => "end",
            Self::Seek { .. } => "seek",
            Self::Mute => "mute",
            Self::Unmute => "unmute",
            Self::Brightness(_) => "brightness",
            Self::Contrast(_) => "contrast",
            Self::SetFilter { .. } => "set_filter",
            Self::ClearAllFilters => "clear_all_filters",
            Self::AddOverlay(_) => "add_overlay",
            Self::ClearAllOverlays => "clear_all_overlays",
        }
    }

    /// Returns true for play, pause and the discontinuous jumps.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Play | Self::Pause | Self::Begin | Self::End | Self::Seek { .. }
        )
    }

    /// Returns the playing flag this command confirms when reported by the
    /// engine, or `None` if it says nothing about playback.
    #[must_use]
    pub fn confirmed_playing(&self) -> Option<bool> {
        match self {
            Self::Play => Some(true),
            Self::Pause => Some(false),
            _ => None,
        }
    }
}
