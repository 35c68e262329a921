//! Reconciles the wiki's song lists against the track catalog.
//!
//! Nothing here writes anywhere. A pass reads three wiki pages, works out
//! what would have to change in the catalog to match them, and returns that
//! as an [`IssueList`] for the caller to show, confirm and apply:
//!
//! 1. each page is parsed into rows ([`wikisync_extract::parse_html`]),
//! 2. ignored titles are dropped ([`filter_ignored`]),
//! 3. titles listed on more than one page are merged ([`merge_duplicates`]),
//! 4. the remaining rows are compared with the catalog ([`reconcile`]).
//!
//! An `IssueList` that [`has_errors`](IssueList::has_errors) must not be
//! applied.

mod accessor;
mod diff;
pub mod error;
mod existing;
mod issue;
mod merge;
mod reconcile;

pub use crate::accessor::{AccessorHandle, TrackAccessor};
#[cfg(any(test, feature = "mock"))]
pub use crate::accessor::MemoryAccessor;
pub use crate::diff::{NO_LEVEL, compare_track};
pub use crate::existing::ExistingTracks;
pub use crate::issue::{Difference, Issue, IssueCounts, IssueList, Property};
pub use crate::merge::{filter_ignored, merge_duplicates};
pub use crate::reconcile::{Reconciliation, reconcile};

use crate::error::Result;
use tracing::instrument;
use wikisync_config::Config;
use wikisync_extract::models::Source;
use wikisync_extract::parse_html;

/// The song table HTML of each wiki page.
#[derive(Debug, Clone, Default)]
pub struct WikiPages {
    /// 新曲リスト.
    pub new: String,
    /// 旧曲リスト, first edition through XG3.
    pub old_gfdm: String,
    /// 旧曲リスト, GITADORA era.
    pub old_gd: String,
}
impl WikiPages {
    pub fn html(&self, source: Source) -> &str {
        match source {
            Source::New => &self.new,
            Source::OldGfdm => &self.old_gfdm,
            Source::OldGd => &self.old_gd,
        }
    }
}

/// Runs a full pass over all three pages.
///
/// Pages are read in [`Source::ALL`] order, which decides the reference row
/// when a title appears on several of them. Rows that fail to parse end up
/// as [`Issue::Error`]s in the result; only a disagreement between
/// `existing` and `accessor` (or an accessor failure) is an `Err`.
#[instrument(skip_all, fields(existing = existing.len()))]
pub async fn load_wiki_html(
    pages: &WikiPages,
    existing: &ExistingTracks,
    accessor: &dyn TrackAccessor,
    config: &Config,
) -> Result<IssueList> {
    let rows: Vec<_> = Source::ALL.into_iter().flat_map(|source| parse_html(source, pages.html(source))).collect();
    let parsed = rows.len();
    let rows = merge_duplicates(filter_ignored(rows, &config.ignored_titles));
    tracing::debug!(parsed, kept = rows.len(), "rows merged");

    let Reconciliation { issues, .. } = reconcile(rows, existing, accessor, config.concurrency).await?;
    let counts = issues.counts();
    tracing::info!(
        new = counts.new,
        diff = counts.diff,
        delete = counts.delete,
        error = counts.error,
        "reconciliation complete"
    );
    Ok(issues)
}
