// SPDX-License-Identifier: MPL-2.0
//! Playback command controller.
//!
//! Turns discrete user intents into [`PlaybackCommand`]s on a single ordered
//! channel and keeps the UI-facing state consistent with what the engine
//! reports back.
//!
//! # State ownership
//!
//! [`ControllerState`] is only written by the intent methods below and by
//! [`PlaybackController::on_engine_state_changed`]. Every intent is handled
//! synchronously: the state is updated and exactly one command is emitted
//! before the method returns. Jumps additionally schedule a deferred pause.
//!
//! # Optimistic toggles
//!
//! Mute and overlay flip their local flag without waiting for the engine.
//! There is no acknowledgment path, so a command the engine fails to apply
//! leaves the flag out of sync until the next toggle.

use super::catalog::FilterCatalog;
use super::command::{OverlayDescriptor, PlaybackCommand};
use super::deferred::DeferredPause;
use super::sender::CommandSender;
use crate::config::{ControllerSettings, PlayerSettings};
use crate::diagnostics::{Direction, JournalHandle};
use crate::domain::video::{PlaybackState, SeekPosition};
use crate::error::Result;
use std::sync::Arc;
use tracing::debug;

/// Local, UI-facing playback state.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerState {
    pub is_playing: bool,
    pub is_muted: bool,
    pub is_overlay_present: bool,
    pub selected_filter_index: usize,
    /// Last requested brightness, not clamped.
    pub brightness: f32,
    /// Last requested contrast, not clamped.
    pub contrast: f32,
}

impl ControllerState {
    /// Initial state declared by the session settings.
    #[must_use]
    pub fn from_settings(settings: &PlayerSettings) -> Self {
        Self {
            is_playing: settings.autoplay,
            is_muted: settings.muted,
            is_overlay_present: false,
            selected_filter_index: 0,
            brightness: settings.brightness,
            contrast: settings.contrast,
        }
    }

    /// Returns the playing flag as a state machine value.
    #[must_use]
    pub fn playback(&self) -> PlaybackState {
        PlaybackState::from_playing(self.is_playing)
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::from_settings(&PlayerSettings::default())
    }
}

/// Owns the [`ControllerState`] of one playback session and issues commands.
pub struct PlaybackController {
    state: ControllerState,
    catalog: Arc<FilterCatalog>,
    sender: CommandSender,
    deferred: DeferredPause,
    overlay: OverlayDescriptor,
    last_command: PlaybackCommand,
    journal: Option<JournalHandle>,
}

impl PlaybackController {
    /// Creates a controller emitting on `sender`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Runtime`](crate::error::Error::Runtime) when called
    /// outside a tokio runtime, which the deferred pause needs.
    pub fn new(
        player: &PlayerSettings,
        settings: &ControllerSettings,
        catalog: Arc<FilterCatalog>,
        sender: CommandSender,
    ) -> Result<Self> {
        let deferred =
            DeferredPause::new(settings.deferred_pause_delay(), settings.cancel_pending_pause)?;

        Ok(Self {
            state: ControllerState::from_settings(player),
            catalog,
            sender,
            deferred,
            overlay: OverlayDescriptor::vector_logo(),
            last_command: PlaybackCommand::Idle,
            journal: None,
        })
    }

    /// Replaces the overlay added by [`toggle_overlay`](Self::toggle_overlay).
    #[must_use]
    pub fn with_overlay(mut self, overlay: OverlayDescriptor) -> Self {
        self.overlay = overlay;
        self
    }

    /// Records outbound commands and inbound notifications in a journal.
    pub fn set_journal(&mut self, journal: JournalHandle) {
        self.sender.set_journal(journal.clone());
        self.journal = Some(journal);
    }

    #[must_use]
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    #[must_use]
    pub fn catalog(&self) -> &FilterCatalog {
        &self.catalog
    }

    /// Last command emitted directly by an intent (`Idle` before the first).
    ///
    /// Deferred pauses are not reflected here.
    #[must_use]
    pub fn last_command(&self) -> &PlaybackCommand {
        &self.last_command
    }

    // =========================================================================
    // Transport
    // =========================================================================

    pub fn request_play(&mut self) {
        self.state.is_playing = true;
        self.emit(PlaybackCommand::Play);
    }

    pub fn request_pause(&mut self) {
        self.state.is_playing = false;
        self.emit(PlaybackCommand::Pause);
    }

    /// Jumps to the start, then settles to paused after the delay.
    pub fn request_seek_to_start(&mut self) {
        self.jump(PlaybackCommand::Begin);
    }

    /// Jumps to the end, then settles to paused after the delay.
    pub fn request_seek_to_end(&mut self) {
        self.jump(PlaybackCommand::End);
    }

    /// Jumps to `position`, then settles to paused after the delay.
    pub fn request_seek(&mut self, position: impl Into<SeekPosition>) {
        let position_secs = position.into().secs();
        self.jump(PlaybackCommand::Seek { position_secs });
    }

    fn jump(&mut self, command: PlaybackCommand) {
        self.emit(command);
        self.deferred.schedule(&self.sender);
    }

    // =========================================================================
    // Audio, filters, overlay, color
    // =========================================================================

    pub fn toggle_mute(&mut self) {
        self.state.is_muted = !self.state.is_muted;
        let command = if self.state.is_muted {
            PlaybackCommand::Mute
        } else {
            PlaybackCommand::Unmute
        };
        self.emit(command);
    }

    /// Selects the catalog entry at `index`.
    ///
    /// Index 0 clears every filter. Any other index replaces the active
    /// filter with the resolved effect. Brightness and contrast are a
    /// separate layer and are never touched.
    ///
    /// # Errors
    ///
    /// Returns a catalog error if `index` is out of range; state is left
    /// unchanged and nothing is emitted.
    pub fn select_filter(&mut self, index: usize) -> Result<()> {
        let resolved = self.catalog.resolve(index)?;
        self.state.selected_filter_index = index;

        let command = match resolved {
            None => PlaybackCommand::ClearAllFilters,
            Some(effect) => PlaybackCommand::SetFilter {
                effect,
                clear_previous: true,
            },
        };
        self.emit(command);
        Ok(())
    }

    pub fn toggle_overlay(&mut self) {
        self.state.is_overlay_present = !self.state.is_overlay_present;
        let command = if self.state.is_overlay_present {
            PlaybackCommand::AddOverlay(self.overlay.clone())
        } else {
            PlaybackCommand::ClearAllOverlays
        };
        self.emit(command);
    }

    /// Passes `level` through unchanged, even outside the slider range.
    pub fn set_brightness(&mut self, level: f32) {
        self.state.brightness = level;
        self.emit(PlaybackCommand::Brightness(level));
    }

    /// Passes `level` through unchanged, even outside the slider range.
    pub fn set_contrast(&mut self, level: f32) {
        self.state.contrast = level;
        self.emit(PlaybackCommand::Contrast(level));
    }

    // =========================================================================
    // Engine notifications
    // =========================================================================

    /// Reconciles local state with a transition the engine confirmed.
    ///
    /// Only `play` and `pause` carry information; anything else is ignored.
    pub fn on_engine_state_changed(&mut self, notification: &PlaybackCommand) {
        if let Some(journal) = &self.journal {
            journal.record(Direction::Inbound, notification);
        }
        if let Some(playing) = notification.confirmed_playing() {
            if self.state.is_playing != playing {
                debug!(playing, "engine changed playback state");
            }
            self.state.is_playing = playing;
        }
    }

    /// Transport commands supersede any pause still waiting to fire.
    fn emit(&mut self, command: PlaybackCommand) {
        if command.is_transport() {
            self.deferred.invalidate();
        }
        self.sender.emit(command.clone(), Direction::Outbound);
        self.last_command = command;
    }
}

impl std::fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("state", &self.state)
            .field("catalog_len", &self.catalog.len())
            .field("last_command", &self.last_command)
            .field("deferred", &self.deferred)
            .finish()
    }
}
