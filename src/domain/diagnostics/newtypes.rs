// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

// =============================================================================
// Journal Capacity Bounds
// =============================================================================

/// Journal capacity bounds (16 to 4096 entries).
pub mod journal_capacity_bounds {
    /// Minimum journal capacity.
    pub const MIN: usize = 16;
    /// Maximum journal capacity.
    pub const MAX: usize = 4096;
    /// Default journal capacity.
    pub const DEFAULT: usize = 256;
}

// =============================================================================
// JournalCapacity
// =============================================================================

/// Number of command journal entries kept in memory.
///
/// # Example
///
/// ```
/// use loop_player::domain::diagnostics::JournalCapacity;
///
/// assert_eq!(JournalCapacity::new(64).value(), 64);
/// // Values outside range are clamped
/// assert_eq!(JournalCapacity::new(1).value(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalCapacity(usize);

impl JournalCapacity {
    /// Creates a new journal capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(journal_capacity_bounds::MIN, journal_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for JournalCapacity {
    fn default() -> Self {
        Self(journal_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_capacity_clamps() {
        assert_eq!(JournalCapacity::new(0).value(), journal_capacity_bounds::MIN);
        assert_eq!(
            JournalCapacity::new(100_000).value(),
            journal_capacity_bounds::MAX
        );
    }

    #[test]
    fn journal_capacity_default() {
        assert_eq!(
            JournalCapacity::default().value(),
            journal_capacity_bounds::DEFAULT
        );
    }
}
