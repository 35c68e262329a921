use crate::accessor::TrackAccessor;
use crate::diff::compare_track;
use crate::error::{ErrorKind, Result};
use crate::existing::ExistingTracks;
use crate::issue::{Issue, IssueList};
use exn::{OptionExt, ResultExt};
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use std::collections::{HashSet, VecDeque};
use tracing::instrument;
use uuid::Uuid;
use wikisync_extract::models::{ParsedTrack, Row};

/// Outcome of comparing parsed rows against the catalog.
#[derive(Debug, Clone, Default)]
pub struct Reconciliation {
    pub issues: IssueList,
    /// Catalog titles that at least one row accounted for, changed or not.
    pub matched: HashSet<String>,
}

#[derive(Debug, Default)]
struct Evaluated {
    issue: Option<Issue>,
    matched: Option<String>,
}

fn new_track_id() -> String {
    Uuid::new_v4().to_string()
}

async fn evaluate_track(track: ParsedTrack, existing: &ExistingTracks, accessor: &dyn TrackAccessor) -> Result<Evaluated> {
    let Some(id) = existing.get(&track.title) else {
        tracing::trace!(title = %track.title, "new track");
        let (source, row) = (track.source, track.row);
        return Ok(Evaluated {
            issue: Some(Issue::New {
                source,
                row,
                track: track.into_track(new_track_id()),
            }),
            matched: None,
        });
    };

    let stored = accessor
        .load_track(id)
        .await
        .or_raise(|| ErrorKind::Accessor)?
        .ok_or_raise(|| ErrorKind::TrackNotFound(id.to_string()))?;
    let differences = compare_track(&stored, &track);
    let matched = Some(track.title.clone());
    if differences.is_empty() {
        return Ok(Evaluated { issue: None, matched });
    }

    tracing::trace!(title = %track.title, id, differences = differences.len(), "changed track");
    let (source, row) = (track.source, track.row);
    Ok(Evaluated {
        issue: Some(Issue::Diff {
            source,
            row,
            track: track.into_track(id),
            differences,
        }),
        matched,
    })
}

async fn evaluate(row: Row, existing: &ExistingTracks, accessor: &dyn TrackAccessor) -> Result<Evaluated> {
    match row {
        Row::Error(error) => Ok(Evaluated {
            issue: Some(Issue::Error(error)),
            matched: None,
        }),
        Row::Track(track) => evaluate_track(track, existing, accessor).await,
    }
}

/// Turns merged rows into issues against the `existing` catalog index.
///
/// Rows are evaluated with at most `concurrency` stored-track loads in flight
/// (at least one), promoting the next row as each finishes. Issues come back
/// in row order regardless of which loads finish first, followed by one
/// [`Issue::Delete`] per catalog title no row matched, in index order.
///
/// `existing` is not modified. An index entry the accessor can't resolve, or
/// an accessor failure, aborts the whole pass: the index and the store
/// disagree, so no partial result is returned.
#[instrument(skip_all, fields(rows = rows.len(), existing = existing.len(), concurrency))]
pub async fn reconcile(
    rows: Vec<Row>,
    existing: &ExistingTracks,
    accessor: &dyn TrackAccessor,
    concurrency: usize,
) -> Result<Reconciliation> {
    let concurrency = concurrency.max(1);
    tracing::Span::current().record("concurrency", concurrency);

    let total = rows.len();
    let mut pending: VecDeque<_> = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| async move { evaluate(row, existing, accessor).await.map(|evaluated| (index, evaluated)) })
        .collect();
    let mut processing = FuturesUnordered::new();
    processing.extend(pending.drain(..concurrency.min(pending.len())));

    let mut evaluated = Vec::with_capacity(total);
    while let Some(result) = processing.next().await {
        evaluated.push(result?);
        // FIFO, so rows start in the order they were read.
        if let Some(next) = pending.pop_front() {
            processing.push(next);
        }
    }
    evaluated.sort_unstable_by_key(|(index, _)| *index);

    let mut issues = Vec::with_capacity(evaluated.len());
    let mut matched = HashSet::new();
    for (_, outcome) in evaluated {
        if let Some(title) = outcome.matched {
            matched.insert(title);
        }
        issues.extend(outcome.issue);
    }
    for (title, id) in existing.iter() {
        if !matched.contains(title) {
            issues.push(Issue::Delete {
                id: id.to_string(),
                title: title.to_string(),
            });
        }
    }

    Ok(Reconciliation {
        issues: IssueList::from(issues),
        matched,
    })
}
