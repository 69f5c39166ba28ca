// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for playback values that the
//! controller is allowed to normalize. Color adjustment levels are the
//! exception: they are passed to the engine exactly as given, so only their
//! declared bounds live here.

use std::time::Duration;

// =============================================================================
// Color adjustment bounds
// =============================================================================

/// Declared brightness range offered by UI sliders.
///
/// The controller does not clamp to this range.
pub mod brightness_bounds {
    /// Minimum brightness level.
    pub const MIN: f32 = 0.0;
    /// Maximum brightness level.
    pub const MAX: f32 = 1.0;
    /// Neutral brightness level.
    pub const DEFAULT: f32 = 0.0;

    /// Returns true if `level` lies within the declared range.
    #[must_use]
    pub fn contains(level: f32) -> bool {
        (MIN..=MAX).contains(&level)
    }
}

/// Declared contrast range offered by UI sliders.
///
/// The controller does not clamp to this range.
pub mod contrast_bounds {
    /// Minimum contrast level.
    pub const MIN: f32 = 1.0;
    /// Maximum contrast level.
    pub const MAX: f32 = 2.0;
    /// Neutral contrast level.
    pub const DEFAULT: f32 = 1.0;

    /// Returns true if `level` lies within the declared range.
    #[must_use]
    pub fn contains(level: f32) -> bool {
        (MIN..=MAX).contains(&level)
    }
}

// =============================================================================
// SeekPosition
// =============================================================================

/// Target position of a seek, in seconds.
///
/// Always finite and non-negative. Negative input maps to the start of the
/// video, NaN maps to the start as well. Values past the end of the video
/// are left to the engine, which is the only party that knows the duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekPosition(f64);

impl SeekPosition {
    /// Creates a seek position, normalizing invalid values to 0.
    #[must_use]
    pub fn new(secs: f64) -> Self {
        if secs.is_finite() && secs > 0.0 {
            Self(secs)
        } else if secs == f64::INFINITY {
            Self(f64::MAX)
        } else {
            Self(0.0)
        }
    }

    /// Returns the position in seconds.
    #[must_use]
    pub fn secs(self) -> f64 {
        self.0
    }
}

impl From<f64> for SeekPosition {
    fn from(secs: f64) -> Self {
        Self::new(secs)
    }
}

// =============================================================================
// DeferredPauseDelay
// =============================================================================

/// Deferred pause delay bounds (10 ms to 5 s).
pub mod deferred_pause_bounds {
    /// Minimum delay in milliseconds.
    pub const MIN_MS: u64 = 10;
    /// Maximum delay in milliseconds.
    pub const MAX_MS: u64 = 5_000;
    /// Default delay in milliseconds.
    pub const DEFAULT_MS: u64 = 100;
}

/// Delay between a discontinuous transport action and the settle-to-paused
/// command that follows it.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (10 to 5000 ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredPauseDelay(u64);

impl DeferredPauseDelay {
    /// Creates a new delay, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(
            deferred_pause_bounds::MIN_MS,
            deferred_pause_bounds::MAX_MS,
        ))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DeferredPauseDelay {
    fn default() -> Self {
        Self(deferred_pause_bounds::DEFAULT_MS)
    }
}
