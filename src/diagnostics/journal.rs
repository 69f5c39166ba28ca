// SPDX-License-Identifier: MPL-2.0
//! Journal collector and the handle used to feed it.

use std::time::Instant;

use crossbeam_channel::{bounded, Receiver, Sender};

use super::{JournalBuffer, JournalCapacity};
use crate::player::PlaybackCommand;

/// Which way a recorded command travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Emitted by the controller in response to a user intent.
    Outbound,
    /// Emitted by a deferred pause after its delay.
    Deferred,
    /// Reported by the engine as a confirmed transition.
    Inbound,
}

/// One recorded command.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    pub at: Instant,
    pub direction: Direction,
    pub command: PlaybackCommand,
}

/// Handle for recording commands into a [`CommandJournal`].
///
/// Cheap to clone. Recording never blocks: entries are dropped when the
/// channel is full or the journal is gone.
#[derive(Clone, Debug)]
pub struct JournalHandle {
    entry_tx: Sender<JournalEntry>,
}

impl JournalHandle {
    /// Records `command` as travelling in `direction`.
    pub fn record(&self, direction: Direction, command: &PlaybackCommand) {
        let entry = JournalEntry {
            at: Instant::now(),
            direction,
            command: command.clone(),
        };
        let _ = self.entry_tx.try_send(entry);
    }
}

/// Collects journal entries into a bounded buffer.
pub struct CommandJournal {
    buffer: JournalBuffer,
    entry_rx: Receiver<JournalEntry>,
    entry_tx: Sender<JournalEntry>,
}

impl CommandJournal {
    /// Creates a journal keeping at most `capacity` entries.
    ///
    /// The channel feeding it holds as many, so up to `capacity` records
    /// survive between two calls to [`process_pending`](Self::process_pending).
    #[must_use]
    pub fn new(capacity: JournalCapacity) -> Self {
        let (entry_tx, entry_rx) = bounded(capacity.value());

        Self {
            buffer: JournalBuffer::new(capacity),
            entry_rx,
            entry_tx,
        }
    }

    /// Creates a handle for recording into this journal.
    #[must_use]
    pub fn handle(&self) -> JournalHandle {
        JournalHandle {
            entry_tx: self.entry_tx.clone(),
        }
    }

    /// Moves all pending entries from the channel into the buffer.
    ///
    /// Call this before reading the journal.
    pub fn process_pending(&mut self) {
        while let Ok(entry) = self.entry_rx.try_recv() {
            self.buffer.push(entry);
        }
    }

    /// Returns the stored entries.
    #[must_use]
    pub fn buffer(&self) -> &JournalBuffer {
        &self.buffer
    }

    /// Returns the stored commands recorded in `direction`, oldest first.
    #[must_use]
    pub fn commands(&self, direction: Direction) -> Vec<PlaybackCommand> {
        self.buffer.commands(direction).cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl std::fmt::Debug for CommandJournal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandJournal")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_records_are_visible_after_processing() {
        let mut journal = CommandJournal::new(JournalCapacity::default());
        let handle = journal.handle();

        handle.record(Direction::Outbound, &PlaybackCommand::Play);
        handle.record(Direction::Inbound, &PlaybackCommand::Play);
        assert!(journal.is_empty());

        journal.process_pending();
        assert_eq!(journal.len(), 2);
        assert_eq!(
            journal.commands(Direction::Outbound),
            vec![PlaybackCommand::Play]
        );
    }

    #[test]
    fn records_up_to_configured_capacity_between_reads() {
        let mut journal = CommandJournal::new(JournalCapacity::new(1000));
        let handle = journal.handle();

        for i in 0..300 {
            handle.record(Direction::Outbound, &PlaybackCommand::Brightness(i as f32));
        }
        journal.process_pending();

        assert_eq!(journal.len(), 300);
        assert_eq!(
            journal.buffer().last().map(|e| &e.command),
            Some(&PlaybackCommand::Brightness(299.0))
        );
    }

    #[test]
    fn record_drops_entries_beyond_capacity() {
        let capacity = JournalCapacity::new(16);
        let mut journal = CommandJournal::new(capacity);
        let handle = journal.handle();

        for _ in 0..(capacity.value() + 10) {
            handle.record(Direction::Outbound, &PlaybackCommand::Mute);
        }
        journal.process_pending();

        assert_eq!(journal.len(), capacity.value());
    }

    #[test]
    fn recording_after_journal_dropped_is_silent() {
        let journal = CommandJournal::new(JournalCapacity::default());
        let handle = journal.handle();
        drop(journal);

        handle.record(Direction::Outbound, &PlaybackCommand::Unmute);
    }

    #[test]
    fn clear_discards_stored_entries() {
        let mut journal = CommandJournal::new(JournalCapacity::default());
        journal.handle().record(Direction::Deferred, &PlaybackCommand::Pause);
        journal.process_pending();
        journal.clear();
        assert!(journal.is_empty());
    }
}
