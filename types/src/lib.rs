//! Core domain types for teamsplit.
//!
//! This crate contains pure domain types with no IO, no async, and no source of
//! randomness. The shuffle lives in the engine; everything here is deterministic
//! and can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod history;
mod partition;
mod roster;
pub mod ui;

pub use history::{HISTORY_CAPACITY, HistoryEntry, HistoryLedger};
pub use partition::{Partition, TEAM_A_LABEL, TEAM_B_LABEL, format_team_line};
pub use roster::{DEFAULT_MEMBER_PREFIX, DEFAULT_MEMBERS, Roster, RosterError};
