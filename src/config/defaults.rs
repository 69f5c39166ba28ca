// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Player**: initial session settings
//! - **Controller**: deferred pause behavior
//! - **Diagnostics**: command journal sizing

use crate::domain::diagnostics::journal_capacity_bounds;
use crate::domain::video::{brightness_bounds, contrast_bounds, deferred_pause_bounds};

// ==========================================================================
// Player Defaults
// ==========================================================================

/// Source played when none is configured.
pub const DEFAULT_SOURCE: &str = "apple_logo";

/// Whether playback restarts from the beginning when it ends.
pub const DEFAULT_LOOPING: bool = true;

/// Whether the session starts muted.
pub const DEFAULT_MUTED: bool = true;

/// Whether the session starts playing.
pub const DEFAULT_AUTOPLAY: bool = true;

/// Initial brightness level.
pub const DEFAULT_BRIGHTNESS: f32 = brightness_bounds::DEFAULT;

/// Initial contrast level.
pub const DEFAULT_CONTRAST: f32 = contrast_bounds::DEFAULT;

// ==========================================================================
// Controller Defaults
// ==========================================================================

/// Delay before the settle-to-paused command after a jump (milliseconds).
pub const DEFAULT_DEFERRED_PAUSE_MS: u64 = deferred_pause_bounds::DEFAULT_MS;

/// Whether a new transport intent cancels a pending deferred pause.
pub const DEFAULT_CANCEL_PENDING_PAUSE: bool = true;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of command journal entries kept in memory.
pub const DEFAULT_JOURNAL_CAPACITY: usize = journal_capacity_bounds::DEFAULT;
