//! Read access to the authoritative track store.

use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use wikisync_extract::models::Track;

/// Loads full track records by identifier.
///
/// Reconciliation only ever reads through this trait, and may have several
/// loads in flight at once, so implementations must be shareable across
/// tasks. Return `Ok(None)` for an identifier the store doesn't know; raise
/// [`ErrorKind::Accessor`](crate::error::ErrorKind::Accessor) when the store
/// itself can't answer.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use wikisync_extract::models::Track;
/// use wikisync_reconcile::{TrackAccessor, error::Result};
///
/// struct Nothing;
///
/// #[async_trait]
/// impl TrackAccessor for Nothing {
///     async fn load_track(&self, _id: &str) -> Result<Option<Track>> {
///         Ok(None)
///     }
/// }
/// ```
#[async_trait]
pub trait TrackAccessor: Send + Sync {
    async fn load_track(&self, id: &str) -> Result<Option<Track>>;
}

pub type AccessorHandle = Arc<dyn TrackAccessor>;

#[cfg(any(test, feature = "mock"))]
pub use self::memory::MemoryAccessor;

#[cfg(any(test, feature = "mock"))]
mod memory {
    use super::TrackAccessor;
    use crate::error::Result;
    use crate::existing::ExistingTracks;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use wikisync_extract::models::Track;

    /// In-memory track store for testing.
    ///
    /// Keeps insertion order so [`existing`](Self::existing) produces a
    /// deterministic index.
    #[derive(Debug, Clone, Default)]
    pub struct MemoryAccessor {
        tracks: Vec<Track>,
        by_id: HashMap<String, usize>,
    }

    impl MemoryAccessor {
        pub fn with_tracks(tracks: impl IntoIterator<Item = Track>) -> Self {
            let mut accessor = Self::default();
            for track in tracks {
                accessor.insert(track);
            }
            accessor
        }

        /// Adds a track, replacing any stored under the same id.
        pub fn insert(&mut self, track: Track) {
            match self.by_id.get(&track.id) {
                Some(&position) => self.tracks[position] = track,
                None => {
                    self.by_id.insert(track.id.clone(), self.tracks.len());
                    self.tracks.push(track);
                },
            }
        }

        /// Title index over the stored tracks, as a real store would report it.
        pub fn existing(&self) -> ExistingTracks {
            self.tracks.iter().map(|track| (track.title.as_str(), track.id.as_str())).collect()
        }

        pub fn len(&self) -> usize {
            self.tracks.len()
        }

        pub fn is_empty(&self) -> bool {
            self.tracks.is_empty()
        }
    }

    #[async_trait]
    impl TrackAccessor for MemoryAccessor {
        async fn load_track(&self, id: &str) -> Result<Option<Track>> {
            Ok(self.by_id.get(id).map(|&position| self.tracks[position].clone()))
        }
    }

}
