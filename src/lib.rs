// SPDX-License-Identifier: MPL-2.0
//! `loop_player` drives a looping video player from discrete user intents.
//!
//! A [`PlaybackController`](player::PlaybackController) turns play, pause,
//! jumps, mute, filter selection, overlay and color adjustments into an
//! ordered stream of [`PlaybackCommand`](player::PlaybackCommand)s for a
//! render engine, and keeps its own state in line with what the engine
//! reports back.

#![doc(html_root_url = "https://docs.rs/loop_player/0.3.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod player;
