//! Parsing for the localized posted-at timestamps carried in snapshot rows

use chrono::NaiveDateTime;

/// On-disk format of the posted-at column.
const POSTED_AT_FORMAT: &str = "%Y年%m月%d日 %H:%M:%S";

/// Exact character shape a value must have before chrono sees it; `0` marks
/// a digit, everything else is a literal. chrono alone accepts single-digit
/// fields and elastic whitespace, which the snapshot format never uses.
const POSTED_AT_SHAPE: &str = "0000年00月00日 00:00:00";

/// Parse a posted-at cell.
///
/// The full-width colon variant is normalized to a standard colon first.
/// Anything that deviates from the exact format — wrong separators, fused
/// date and time, wrong field widths, or a calendar-invalid date — yields
/// `None` rather than an error: a row whose timestamp cannot be read simply
/// never qualifies as a new entry.
pub fn parse_posted_at(raw: &str) -> Option<NaiveDateTime> {
    let normalized = raw.replace('：', ":");
    if !matches_shape(&normalized) {
        return None;
    }
    NaiveDateTime::parse_from_str(&normalized, POSTED_AT_FORMAT).ok()
}

/// Render a timestamp back into the on-disk format.
pub fn format_posted_at(timestamp: &NaiveDateTime) -> String {
    timestamp.format(POSTED_AT_FORMAT).to_string()
}

fn matches_shape(value: &str) -> bool {
    value.chars().count() == POSTED_AT_SHAPE.chars().count()
        && value
            .chars()
            .zip(POSTED_AT_SHAPE.chars())
            .all(|(c, pattern)| match pattern {
                '0' => c.is_ascii_digit(),
                literal => c == literal,
            })
}
