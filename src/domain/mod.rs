// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value types with ZERO external dependencies.
//!
//! This module contains the playback value objects the controller reasons
//! about. Nothing here talks to a channel, a runtime or the filesystem.
//!
//! # Modules
//!
//! - [`diagnostics`]: Journal sizing ([`JournalCapacity`](diagnostics::JournalCapacity))
//! - [`video`]: Playback types ([`PlaybackState`](video::PlaybackState),
//!   [`SeekPosition`](video::SeekPosition), [`DeferredPauseDelay`](video::DeferredPauseDelay))

pub mod diagnostics;
pub mod video;
