//! Exclusion filtering and cross-page duplicate merging.
//!
//! The wiki lists some songs on more than one page. A copy with identical
//! data is harmless and dropped; a copy that disagrees makes the title
//! ambiguous, so every row for it is withdrawn and an error is reported
//! instead.

use std::collections::HashMap;
use wikisync_config::IgnoredTitles;
use wikisync_extract::models::{ParsedTrack, Row, RowError};

/// Drops rows whose title is ignored for the page they came from.
///
/// Errors always pass through.
pub fn filter_ignored(rows: Vec<Row>, ignored: &IgnoredTitles) -> Vec<Row> {
    if ignored.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|row| match row {
            Row::Track(track) if ignored.contains(track.source, &track.title) => {
                tracing::debug!(source = %track.source, row = track.row, title = %track.title, "ignoring title");
                false
            },
            _ => true,
        })
        .collect()
}

fn conflict(existing: &ParsedTrack, later: &ParsedTrack) -> RowError {
    RowError::new(
        later.source,
        Some(later.row),
        format!("conflicting duplicate data: \"{}\" {} ({})", later.title, existing.source, existing.row),
    )
}

/// Collapses rows that describe the same title.
///
/// The first row seen for a title is the reference. Later rows with the same
/// data are dropped. A later row with different data removes every kept row
/// for that title and adds a [`RowError`] in its place, carrying the later
/// row's position and naming the reference row. Relative order of what
/// remains is preserved.
pub fn merge_duplicates(rows: Vec<Row>) -> Vec<Row> {
    let mut first_seen: HashMap<String, ParsedTrack> = HashMap::new();
    let mut merged: Vec<Row> = Vec::with_capacity(rows.len());

    for row in rows {
        let track = match row {
            Row::Track(track) => track,
            error @ Row::Error(_) => {
                merged.push(error);
                continue;
            },
        };
        match first_seen.get(&track.title) {
            None => {
                first_seen.insert(track.title.clone(), track.clone());
                merged.push(Row::Track(track));
            },
            Some(existing) if existing.same_track_data(&track) => {
                tracing::trace!(title = %track.title, source = %track.source, row = track.row, "dropping identical duplicate");
            },
            Some(existing) => {
                tracing::debug!(
                    title = %track.title,
                    source = %track.source,
                    row = track.row,
                    first_source = %existing.source,
                    first_row = existing.row,
                    "conflicting duplicate"
                );
                let error = conflict(existing, &track);
                merged.retain(|kept| kept.as_track().is_none_or(|kept| kept.title != track.title));
                merged.push(Row::Error(error));
            },
        }
    }

    merged
}
