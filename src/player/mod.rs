// SPDX-License-Identifier: MPL-2.0
//! Playback command controller and its engine-facing plumbing.
//!
//! User intents go through [`PlaybackController`], which keeps the UI state
//! and emits [`PlaybackCommand`]s on a single ordered channel. A
//! [`RenderEngine`] consumes the channel and reports play/pause transitions
//! back; [`PlaybackSession`] wires the two together.

pub mod catalog;
pub mod command;
pub mod controller;
pub mod deferred;
pub mod effects;
pub mod engine;
pub mod params;
mod sender;
pub mod session;

pub use catalog::{FilterCatalog, NO_FILTER};
pub use command::{Effect, OverlayDescriptor, PlaybackCommand};
pub use controller::{ControllerState, PlaybackController};
pub use deferred::DeferredPause;
pub use effects::{EffectRegistry, EffectSchema, FALLBACK_EFFECT_ID};
pub use engine::{spawn_engine, ColorAdjustment, Composition, RenderEngine};
pub use params::{FilterEntry, ParamKind, ParamValue, Rgba};
pub use sender::{command_channel, CommandSender};
pub use session::PlaybackSession;
