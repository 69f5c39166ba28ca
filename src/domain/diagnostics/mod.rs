// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.

pub mod newtypes;

pub use newtypes::{journal_capacity_bounds, JournalCapacity};
