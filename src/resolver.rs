//! Snapshot orientation and cutoff resolution
//!
//! Snapshot files carry their capture date as the final underscore-delimited
//! token of the filename (`stats_20240601.txt`). The resolver extracts both
//! dates, orients the pair so the chronologically earlier file is always the
//! baseline, and derives the rollover cutoff from the baseline's date.

use crate::error::{Result, StatdiffError};
use crate::CUTOFF_HOUR;
use chrono::{NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};

/// A pair of snapshot paths resolved into chronological order.
#[derive(Debug, Clone)]
pub struct SnapshotPair {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    pub old_date: NaiveDate,
    pub new_date: NaiveDate,
    /// Rows in the newer snapshot posted at or after this instant count as
    /// genuinely new entries.
    pub cutoff: NaiveDateTime,
}

impl SnapshotPair {
    /// Resolve two snapshot paths, in either order, into an oriented pair.
    ///
    /// The earlier-dated file always becomes the baseline; arguments given
    /// newest-first are swapped transparently. The cutoff is the baseline's
    /// date at the statistics rollover hour.
    pub fn resolve(first: &Path, second: &Path) -> Result<Self> {
        let first_date = date_from_filename(first)?;
        let second_date = date_from_filename(second)?;

        let (old_path, old_date, new_path, new_date) = if first_date > second_date {
            log::debug!(
                "inputs given newest-first, using {} as baseline",
                second.display()
            );
            (second.to_path_buf(), second_date, first.to_path_buf(), first_date)
        } else {
            (first.to_path_buf(), first_date, second.to_path_buf(), second_date)
        };

        let cutoff = old_date.and_hms_opt(CUTOFF_HOUR, 0, 0).unwrap();

        Ok(Self {
            old_path,
            new_path,
            old_date,
            new_date,
            cutoff,
        })
    }
}

/// Extract the capture date embedded in a snapshot filename.
///
/// The final `_`-delimited token of the file stem (the whole stem when there
/// is no underscore) must be an 8-digit `YYYYMMDD` calendar date.
pub fn date_from_filename(path: &Path) -> Result<NaiveDate> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| StatdiffError::invalid_filename(path))?;
    let token = stem.rsplit('_').next().unwrap_or(stem);

    if token.len() != 8 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(StatdiffError::invalid_filename(path));
    }

    let (year, rest) = token.split_at(4);
    let (month, day) = rest.split_at(2);
    let year: i32 = year
        .parse()
        .map_err(|_| StatdiffError::invalid_filename(path))?;
    let month: u32 = month
        .parse()
        .map_err(|_| StatdiffError::invalid_filename(path))?;
    let day: u32 = day
        .parse()
        .map_err(|_| StatdiffError::invalid_filename(path))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| StatdiffError::invalid_filename(path))
}
