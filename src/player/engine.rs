// SPDX-License-Identifier: MPL-2.0
//! Render engine seam and an in-memory reference engine.
//!
//! The controller only talks to the engine through the command channel. Any
//! type implementing [`RenderEngine`] can sit on the receiving end; it
//! applies each command and may answer with a notification when its
//! playback state changed.

use super::command::{Effect, OverlayDescriptor, PlaybackCommand};
use crate::config::PlayerSettings;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

/// Receiving end of the command stream.
pub trait RenderEngine: Send + 'static {
    /// Applies one command.
    ///
    /// Returns a notification (`play` or `pause`) when the command changed
    /// whether the engine is playing.
    fn apply(&mut self, command: &PlaybackCommand) -> Option<PlaybackCommand>;
}

/// Range the composition can render; requested levels are clamped into it.
pub mod render_bounds {
    pub const BRIGHTNESS_MIN: f32 = -1.0;
    pub const BRIGHTNESS_MAX: f32 = 1.0;
    pub const CONTRAST_MIN: f32 = 0.0;
    pub const CONTRAST_MAX: f32 = 4.0;
}

/// Color layer, kept apart from the filter stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorAdjustment {
    pub brightness: f32,
    pub contrast: f32,
}

impl ColorAdjustment {
    fn clamp_level(requested: f32, current: f32, min: f32, max: f32) -> f32 {
        if requested.is_nan() {
            warn!("ignoring NaN color level");
            current
        } else {
            requested.clamp(min, max)
        }
    }
}

/// In-memory video composition driven by [`PlaybackCommand`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    playing: bool,
    muted: bool,
    looping: bool,
    position_secs: f64,
    duration_secs: Option<f64>,
    filters: Vec<Effect>,
    color: ColorAdjustment,
    overlays: Vec<OverlayDescriptor>,
}

impl Composition {
    /// Creates a composition in the state the session settings declare.
    #[must_use]
    pub fn new(settings: &PlayerSettings) -> Self {
        Self {
            playing: settings.autoplay,
            muted: settings.muted,
            looping: settings.looping,
            position_secs: 0.0,
            duration_secs: None,
            filters: Vec::new(),
            color: ColorAdjustment {
                brightness: settings.brightness,
                contrast: settings.contrast,
            },
            overlays: Vec::new(),
        }
    }

    /// Sets the media duration; jumps are clamped to it from then on.
    #[must_use]
    pub fn with_duration(mut self, secs: f64) -> Self {
        self.duration_secs = (secs.is_finite() && secs >= 0.0).then_some(secs);
        self
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    #[must_use]
    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    #[must_use]
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration_secs
    }

    /// Active filter stack, bottom first.
    #[must_use]
    pub fn filters(&self) -> &[Effect] {
        &self.filters
    }

    #[must_use]
    pub fn color(&self) -> ColorAdjustment {
        self.color
    }

    #[must_use]
    pub fn overlays(&self) -> &[OverlayDescriptor] {
        &self.overlays
    }

    /// End of media reached.
    ///
    /// Rewinds and keeps playing when looping. Otherwise stops and returns
    /// the `pause` notification the controller has to see.
    pub fn finish(&mut self) -> Option<PlaybackCommand> {
        if self.looping {
            self.position_secs = 0.0;
            return None;
        }
        if let Some(duration) = self.duration_secs {
            self.position_secs = duration;
        }
        self.set_playing(false)
    }

    fn set_playing(&mut self, playing: bool) -> Option<PlaybackCommand> {
        if self.playing == playing {
            return None;
        }
        self.playing = playing;
        Some(if playing {
            PlaybackCommand::Play
        } else {
            PlaybackCommand::Pause
        })
    }

    fn move_to(&mut self, secs: f64) {
        self.position_secs = match self.duration_secs {
            Some(duration) => secs.clamp(0.0, duration),
            None => secs.max(0.0),
        };
    }
}

impl Default for Composition {
    fn default() -> Self {
        Self::new(&PlayerSettings::default())
    }
}

impl RenderEngine for Composition {
    fn apply(&mut self, command: &PlaybackCommand) -> Option<PlaybackCommand> {
        trace!(command = command.name(), "composition applying command");
        match command {
            PlaybackCommand::Idle => None,
            PlaybackCommand::Play => self.set_playing(true),
            PlaybackCommand::Pause => self.set_playing(false),
            PlaybackCommand::Begin => {
                self.move_to(0.0);
                None
            }
            PlaybackCommand::End => {
                let end = self.duration_secs.unwrap_or(self.position_secs);
                self.move_to(end);
                None
            }
            PlaybackCommand::Seek { position_secs } => {
                self.move_to(*position_secs);
                None
            }
            PlaybackCommand::Mute => {
                self.muted = true;
                None
            }
            PlaybackCommand::Unmute => {
                self.muted = false;
                None
            }
            PlaybackCommand::Brightness(level) => {
                self.color.brightness = ColorAdjustment::clamp_level(
                    *level,
                    self.color.brightness,
                    render_bounds::BRIGHTNESS_MIN,
                    render_bounds::BRIGHTNESS_MAX,
                );
                None
            }
            PlaybackCommand::Contrast(level) => {
                self.color.contrast = ColorAdjustment::clamp_level(
                    *level,
                    self.color.contrast,
                    render_bounds::CONTRAST_MIN,
                    render_bounds::CONTRAST_MAX,
                );
                None
            }
            PlaybackCommand::SetFilter {
                effect,
                clear_previous,
            } => {
                if *clear_previous {
                    self.filters.clear();
                }
                self.filters.push(effect.clone());
                None
            }
            PlaybackCommand::ClearAllFilters => {
                self.filters.clear();
                None
            }
            PlaybackCommand::AddOverlay(overlay) => {
                self.overlays.push(overlay.clone());
                None
            }
            PlaybackCommand::ClearAllOverlays => {
                self.overlays.clear();
                None
            }
        }
    }
}

/// Runs `engine` on the runtime until the command channel closes.
///
/// Notifications go to `notify_tx`. The engine is handed back when the
/// task ends so its final state can be inspected.
pub fn spawn_engine<E: RenderEngine>(
    mut engine: E,
    mut command_rx: mpsc::UnboundedReceiver<PlaybackCommand>,
    notify_tx: mpsc::UnboundedSender<PlaybackCommand>,
) -> JoinHandle<E> {
    tokio::spawn(async move {
        while let Some(command) = command_rx.recv().await {
            let Some(notification) = engine.apply(&command) else {
                continue;
            };
            if notify_tx.send(notification).is_err() {
                debug!("no listener for engine notifications");
            }
        }
        debug!("command channel closed, render engine stopping");
        engine
    })
}
