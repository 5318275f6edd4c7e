//! Delta computation between two loaded snapshots
//!
//! The combined result keeps the newer snapshot's row order and field values,
//! with one exception: for items present in both snapshots, the four counter
//! fields become the increase since the baseline. Items that exist only in
//! the newer snapshot are admitted when their posted-at timestamp is at or
//! after the cutoff; items that vanished from the newer snapshot are dropped.

use crate::snapshot::{Relation, SnapshotRow};
use crate::timestamp;
use chrono::NaiveDateTime;

/// Result of a diff run: the combined relation plus how many of its rows are
/// genuinely new entries.
#[derive(Debug, Clone)]
pub struct DiffOutcome {
    pub combined: Relation,
    pub new_entries: usize,
}

/// Compute the field-wise delta between two snapshots.
///
/// Output key set: `(old ∩ new) ∪ {new-only rows posted at or after cutoff}`.
/// Zero and negative counter deltas are kept; a row with an unreadable
/// posted-at timestamp never qualifies as a new entry.
pub fn compute_diff(old: &Relation, new: &Relation, cutoff: NaiveDateTime) -> DiffOutcome {
    let mut combined = Relation::new();
    let mut new_entries = 0;

    for row in new.iter() {
        if let Some(baseline) = old.get(&row.id) {
            combined.insert(diff_row(row, baseline));
        } else if is_new_entry(row, cutoff) {
            new_entries += 1;
            combined.insert(row.clone());
        }
    }

    log::debug!(
        "combined {} rows ({} new entries) from {} old / {} new",
        combined.len(),
        new_entries,
        old.len(),
        new.len()
    );

    DiffOutcome {
        combined,
        new_entries,
    }
}

/// A newer row with its counter fields replaced by the delta against the
/// baseline row. Every other field is taken from the newer row as-is.
fn diff_row(new: &SnapshotRow, baseline: &SnapshotRow) -> SnapshotRow {
    let mut row = new.clone();
    row.views = new.views.minus(&baseline.views);
    row.comments = new.comments.minus(&baseline.comments);
    row.mylists = new.mylists.minus(&baseline.mylists);
    row.likes = new.likes.minus(&baseline.likes);
    row
}

fn is_new_entry(row: &SnapshotRow, cutoff: NaiveDateTime) -> bool {
    timestamp::parse_posted_at(&row.posted_at).map_or(false, |posted| posted >= cutoff)
}
