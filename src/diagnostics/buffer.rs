// SPDX-License-Identifier: MPL-2.0
//! Ring buffer holding journal entries.

use std::collections::VecDeque;

use super::journal::{Direction, JournalEntry};
use super::JournalCapacity;
use crate::player::PlaybackCommand;

/// Fixed-capacity buffer of journal entries, oldest first.
///
/// When the buffer is full, pushing a new entry evicts the oldest one.
#[derive(Debug, Clone)]
pub struct JournalBuffer {
    data: VecDeque<JournalEntry>,
    capacity: usize,
}

impl JournalBuffer {
    /// Creates a new buffer with the specified capacity.
    #[must_use]
    pub fn new(capacity: JournalCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a buffer with a raw capacity value (at least 1).
    fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an entry, evicting the oldest if at capacity.
    pub fn push(&mut self, entry: JournalEntry) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(entry);
    }

    /// Returns an iterator over the entries in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &JournalEntry> {
        self.data.iter()
    }

    /// Returns the commands recorded in `direction`, oldest first.
    pub fn commands(&self, direction: Direction) -> impl Iterator<Item = &PlaybackCommand> {
        self.data
            .iter()
            .filter(move |e| e.direction == direction)
            .map(|e| &e.command)
    }

    /// Returns the most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&JournalEntry> {
        self.data.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn entry(direction: Direction, command: PlaybackCommand) -> JournalEntry {
        JournalEntry {
            at: Instant::now(),
            direction,
            command,
        }
    }

    #[test]
    fn push_evicts_oldest_at_capacity() {
        let mut buffer = JournalBuffer::with_raw_capacity(2);
        buffer.push(entry(Direction::Outbound, PlaybackCommand::Play));
        buffer.push(entry(Direction::Outbound, PlaybackCommand::Pause));
        buffer.push(entry(Direction::Outbound, PlaybackCommand::Mute));

        let names: Vec<_> = buffer.iter().map(|e| e.command.name()).collect();
        assert_eq!(names, vec!["pause", "mute"]);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let buffer = JournalBuffer::with_raw_capacity(0);
        assert_eq!(buffer.capacity(), 1);
    }

    #[test]
    fn commands_filters_by_direction() {
        let mut buffer = JournalBuffer::new(JournalCapacity::default());
        buffer.push(entry(Direction::Outbound, PlaybackCommand::Play));
        buffer.push(entry(Direction::Inbound, PlaybackCommand::Play));
        buffer.push(entry(Direction::Deferred, PlaybackCommand::Pause));

        let inbound: Vec<_> = buffer.commands(Direction::Inbound).collect();
        assert_eq!(inbound, vec![&PlaybackCommand::Play]);
        assert_eq!(
            buffer.last().map(|e| e.direction),
            Some(Direction::Deferred)
        );
    }

    #[test]
    fn clear_empties_buffer() {
        let mut buffer = JournalBuffer::with_raw_capacity(4);
        buffer.push(entry(Direction::Outbound, PlaybackCommand::Idle));
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
