// SPDX-License-Identifier: MPL-2.0
//! Outbound command channel to the render engine.

use super::command::PlaybackCommand;
use crate::diagnostics::{Direction, JournalHandle};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Creates the ordered command channel between controller and engine.
#[must_use]
pub fn command_channel() -> (CommandSender, mpsc::UnboundedReceiver<PlaybackCommand>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (CommandSender::new(tx), rx)
}

/// Fire-and-forget sender for playback commands.
///
/// Commands arrive in emission order. Nothing is batched, deduplicated or
/// acknowledged: if the engine side is gone the command is logged and
/// dropped, and the caller is not told.
#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<PlaybackCommand>,
    journal: Option<JournalHandle>,
}

impl CommandSender {
    /// Wraps the sending half of a command channel.
    #[must_use]
    pub fn new(tx: mpsc::UnboundedSender<PlaybackCommand>) -> Self {
        Self { tx, journal: None }
    }

    /// Records every emission in the given journal from now on.
    pub fn set_journal(&mut self, journal: JournalHandle) {
        self.journal = Some(journal);
    }

    /// Returns true while the engine is still receiving.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        !self.tx.is_closed()
    }

    /// Emits `command`. Returns whether the channel accepted it.
    pub(crate) fn emit(&self, command: PlaybackCommand, direction: Direction) -> bool {
        if let Some(journal) = &self.journal {
            journal.record(direction, &command);
        }
        debug!(command = command.name(), ?direction, "emitting playback command");

        match self.tx.send(command) {
            Ok(()) => true,
            Err(mpsc::error::SendError(command)) => {
                warn!(
                    command = command.name(),
                    "render engine is not receiving, command dropped"
                );
                false
            }
        }
    }
}

impl std::fmt::Debug for CommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSender")
            .field("connected", &self.is_connected())
            .field("has_journal", &self.journal.is_some())
            .finish()
    }
}
