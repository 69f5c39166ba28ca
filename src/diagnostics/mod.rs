// SPDX-License-Identifier: MPL-2.0
//! Command journal for inspecting a playback session.
//!
//! Every command the controller emits, every deferred pause that fires and
//! every notification the engine reports back can be recorded in a
//! memory-bounded journal. UI tests read it to assert what reached the
//! engine and in which order, without touching the engine itself.
//!
//! # Architecture
//!
//! - [`JournalBuffer`]: ring buffer of [`JournalEntry`] values
//! - [`CommandJournal`]: owns the buffer and the receiving end of the channel
//! - [`JournalHandle`]: cheap, cloneable sender given to the controller

mod buffer;
mod journal;

pub use crate::domain::diagnostics::JournalCapacity;
pub use buffer::JournalBuffer;
pub use journal::{CommandJournal, Direction, JournalEntry, JournalHandle};
