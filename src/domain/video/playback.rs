// SPDX-License-Identifier: MPL-2.0
//! Local playback state machine.
//!
//! The controller only tracks whether the UI should show the video as
//! playing. There is no terminal state: a session ends when its owner
//! tears the controller down.

/// Whether the video is considered playing by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Video is playing.
    Playing,
    /// Video is paused.
    #[default]
    Paused,
}

impl PlaybackState {
    /// Builds the state from a plain flag.
    #[must_use]
    pub fn from_playing(playing: bool) -> Self {
        if playing {
            Self::Playing
        } else {
            Self::Paused
        }
    }

    /// Returns true if the video is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the video is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }
}
