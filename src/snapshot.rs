//! Snapshot loading and the in-memory relation model

use crate::error::{Result, StatdiffError};
use crate::SNAPSHOT_COLUMNS;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::Path;

/// A counter cell as read from a snapshot file.
///
/// Counter columns arrive as human-formatted numeric strings with thousands
/// separators ("12,345"). A cell that does not parse as a number is retained
/// verbatim instead of aborting the load.
#[derive(Debug, Clone, PartialEq)]
pub enum CounterValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl CounterValue {
    /// Parse a raw cell: strip thousands separators, try integer, then
    /// float, and fall back to the original text.
    pub fn parse(raw: &str) -> Self {
        let stripped = raw.replace(',', "");
        if let Ok(n) = stripped.parse::<i64>() {
            return Self::Int(n);
        }
        if let Ok(f) = stripped.parse::<f64>() {
            return Self::Float(f);
        }
        Self::Text(raw.to_string())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(f) => Some(*f),
            Self::Text(_) => None,
        }
    }

    /// Counter difference, truncated to an integer. If either side never
    /// coerced to a number the newer value is carried through unchanged.
    pub fn minus(&self, old: &Self) -> Self {
        match (self, old) {
            (Self::Int(new), Self::Int(old)) => Self::Int(new - old),
            _ => match (self.as_number(), old.as_number()) {
                (Some(new), Some(old)) => Self::Int((new - old) as i64),
                _ => self.clone(),
            },
        }
    }

    /// Ordering key for descending sort. Non-numeric cells sort after every
    /// numeric value.
    pub fn sort_key(&self) -> f64 {
        self.as_number().unwrap_or(f64::NEG_INFINITY)
    }
}

impl Serialize for CounterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Float(v) => serializer.serialize_f64(*v),
            Self::Text(t) => serializer.serialize_str(t),
        }
    }
}

impl<'de> Deserialize<'de> for CounterValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// One row of a statistics snapshot.
///
/// Field order mirrors the fixed on-disk column order exactly; the struct is
/// read and written positionally (the files carry no header). The channel id
/// stays a string even when it looks numeric, so ids with leading zeros
/// survive a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRow {
    pub id: String,
    pub title: String,
    pub views: CounterValue,
    pub comments: CounterValue,
    pub mylists: CounterValue,
    pub length: String,
    pub thumbnail: String,
    pub channel_id: String,
    pub uploader: String,
    pub posted_at: String,
    pub genre: String,
    pub tags: String,
    pub description: String,
    pub likes: CounterValue,
}

/// An in-memory snapshot: rows keyed by item id, in source-file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Relation {
    rows: IndexMap<String, SnapshotRow>,
}

impl Relation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row keyed by its item id. A duplicate id replaces the
    /// earlier row's fields but keeps its original position (last row wins).
    pub fn insert(&mut self, row: SnapshotRow) -> Option<SnapshotRow> {
        self.rows.insert(row.id.clone(), row)
    }

    pub fn get(&self, id: &str) -> Option<&SnapshotRow> {
        self.rows.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rows.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SnapshotRow> {
        self.rows.values()
    }

    /// Sort rows by the view counter, descending. Rows whose view counter
    /// never coerced to a number order last.
    pub fn sort_by_views_desc(&mut self) {
        self.rows
            .sort_by(|_, a, _, b| b.views.sort_key().total_cmp(&a.views.sort_key()));
    }
}

/// Load a snapshot file into a [`Relation`].
///
/// The file must be tab-delimited with no header and exactly 14 columns per
/// row; anything else is fatal. A counter cell that fails numeric coercion is
/// not — it degrades to [`CounterValue::Text`].
pub fn load(path: &Path) -> Result<Relation> {
    if !path.is_file() {
        return Err(StatdiffError::invalid_input(format!(
            "snapshot file not found: {}",
            path.display()
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut relation = Relation::new();
    let mut record = csv::StringRecord::new();
    while reader
        .read_record(&mut record)
        .map_err(|e| StatdiffError::malformed_snapshot(path, e.to_string()))?
    {
        if record.len() != SNAPSHOT_COLUMNS {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(StatdiffError::malformed_snapshot(
                path,
                format!(
                    "expected {} columns, found {} (line {})",
                    SNAPSHOT_COLUMNS,
                    record.len(),
                    line
                ),
            ));
        }
        let row: SnapshotRow = record
            .deserialize(None)
            .map_err(|e| StatdiffError::malformed_snapshot(path, e.to_string()))?;
        relation.insert(row);
    }

    log::debug!("loaded {} rows from {}", relation.len(), path.display());
    Ok(relation)
}
