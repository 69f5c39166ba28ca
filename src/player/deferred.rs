// SPDX-License-Identifier: MPL-2.0
//! Deferred pause after discontinuous transport actions.
//!
//! After a jump (start, end or arbitrary seek) the engine keeps whatever
//! playing state it likes. The controller settles it to paused by sending a
//! `pause` a short, fixed delay later. The engine never reports when a seek
//! completes, so the delay is not tied to anything the engine does.
//!
//! Each scheduled pause remembers the generation it was created in. Bumping
//! the generation (see [`DeferredPause::invalidate`]) turns every pause still
//! waiting into a no-op, so a `play` pressed during the delay window is not
//! overridden by an older pause.
//!
//! A firing pause holds the generation lock while it checks and sends.
//! `invalidate` takes the same lock, so a command emitted right after it is
//! always ordered after any pause that won the race.

use super::command::PlaybackCommand;
use super::sender::CommandSender;
use crate::diagnostics::Direction;
use crate::domain::video::DeferredPauseDelay;
use crate::error::Result;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tracing::trace;

/// Scheduler for the settle-to-paused command.
pub struct DeferredPause {
    delay: DeferredPauseDelay,
    /// When false, `invalidate` does nothing and the last command sent wins.
    cancel_on_intent: bool,
    generation: Arc<Mutex<u64>>,
    runtime: Handle,
    pending: Vec<AbortHandle>,
}

impl DeferredPause {
    /// Creates a scheduler bound to the current tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Runtime`](crate::error::Error::Runtime) when called
    /// outside a tokio runtime.
    pub fn new(delay: DeferredPauseDelay, cancel_on_intent: bool) -> Result<Self> {
        Ok(Self {
            delay,
            cancel_on_intent,
            generation: Arc::new(Mutex::new(0)),
            runtime: Handle::try_current()?,
            pending: Vec::new(),
        })
    }

    /// Returns the configured delay.
    #[must_use]
    pub fn delay(&self) -> DeferredPauseDelay {
        self.delay
    }

    /// Returns the current generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        *lock_generation(&self.generation)
    }

    /// Number of scheduled pauses that have not finished yet.
    #[must_use]
    pub fn pending(&mut self) -> usize {
        self.pending.retain(|handle| !handle.is_finished());
        self.pending.len()
    }

    /// Schedules a `pause` on `sender` after the delay.
    pub fn schedule(&mut self, sender: &CommandSender) {
        self.pending.retain(|handle| !handle.is_finished());

        let scheduled_in = self.generation();
        let generation = Arc::clone(&self.generation);
        let sender = sender.clone();
        let delay = self.delay.as_duration();

        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let current = lock_generation(&generation);
            if *current != scheduled_in {
                trace!(scheduled_in, "deferred pause superseded by a newer intent");
                return;
            }
            sender.emit(PlaybackCommand::Pause, Direction::Deferred);
            drop(current);
        });
        self.pending.push(task.abort_handle());
    }

    /// Invalidates every pause still waiting.
    ///
    /// No-op when the scheduler was built with `cancel_on_intent == false`.
    pub fn invalidate(&mut self) {
        if self.cancel_on_intent {
            *lock_generation(&self.generation) += 1;
        }
    }
}

// The counter is a plain integer, so a poisoned lock still holds a usable value.
fn lock_generation(generation: &Mutex<u64>) -> MutexGuard<'_, u64> {
    generation.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Drop for DeferredPause {
    fn drop(&mut self) {
        for handle in &self.pending {
            handle.abort();
        }
    }
}

impl std::fmt::Debug for DeferredPause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredPause")
            .field("delay_ms", &self.delay.millis())
            .field("cancel_on_intent", &self.cancel_on_intent)
            .field("generation", &self.generation())
            .finish()
    }
}
