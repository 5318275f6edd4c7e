//! # statdiff
//!
//! A snapshot delta tool for date-stamped video statistics exports. Given two
//! snapshots of the same 14-column statistics table, statdiff aligns them by
//! item id, replaces the counter columns with their increase since the older
//! snapshot, and admits rows that were genuinely posted after the older
//! snapshot's rollover cutoff.

pub mod cli;
pub mod error;
pub mod snapshot;
pub mod timestamp;
pub mod resolver;
pub mod diff;
pub mod output;
pub mod commands;

pub use error::{Result, StatdiffError};
pub use snapshot::{CounterValue, Relation, SnapshotRow};

/// Fixed column count of a snapshot file.
pub const SNAPSHOT_COLUMNS: usize = 14;

/// Hour of day at which platform statistics roll over. Rows posted before
/// this hour on the older snapshot's date count as pre-existing, not new.
pub const CUTOFF_HOUR: u32 = 5;
