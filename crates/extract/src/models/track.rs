use super::{Difficulty, Level, OpenType, SkillType, Source};
use std::collections::BTreeMap;

/// Rating per difficulty tier. A missing tier means the track has no chart at
/// that difficulty.
pub type Scores = BTreeMap<Difficulty, Level>;

/// A catalog entry, as held by the authoritative store.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    /// Opaque unique identifier.
    pub id: String,
    /// Business key; unique across the catalog.
    pub title: String,
    pub artist: String,
    pub skill_type: SkillType,
    pub long: bool,
    pub open_type: OpenType,
    pub scores: Scores,
}
impl Track {
    pub fn level(&self, difficulty: Difficulty) -> Option<Level> {
        self.scores.get(&difficulty).copied()
    }
}

/// A track as read from one row of a wiki table, before it has an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTrack {
    pub title: String,
    pub artist: String,
    pub skill_type: SkillType,
    pub long: bool,
    pub open_type: OpenType,
    pub scores: Scores,
    /// Page the row came from.
    pub source: Source,
    /// 0-based logical row index within `source`.
    pub row: usize,
}
impl ParsedTrack {
    pub fn level(&self, difficulty: Difficulty) -> Option<Level> {
        self.scores.get(&difficulty).copied()
    }

    /// Compares the track data of two rows, ignoring where they came from.
    ///
    /// Used to decide whether a title listed on two pages is a harmless copy
    /// or a conflict. `Scores` is a map, so the order charts were read in
    /// doesn't matter.
    pub fn same_track_data(&self, other: &Self) -> bool {
        self.title == other.title
            && self.artist == other.artist
            && self.skill_type == other.skill_type
            && self.long == other.long
            && self.open_type == other.open_type
            && self.scores == other.scores
    }

    /// Attaches an identifier, producing a record ready to be stored.
    pub fn into_track(self, id: impl Into<String>) -> Track {
        Track {
            id: id.into(),
            title: self.title,
            artist: self.artist,
            skill_type: self.skill_type,
            long: self.long,
            open_type: self.open_type,
            scores: self.scores,
        }
    }
}

/// A row (or a whole page) that could not be turned into a track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub source: Source,
    /// `None` when the problem isn't tied to a single row.
    pub row: Option<usize>,
    pub message: String,
}
impl RowError {
    pub const NO_ROWS: &'static str = "no rows found";

    pub fn new(source: Source, row: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            source,
            row,
            message: message.into(),
        }
    }

    /// Page-level error for a table without a single row.
    pub fn no_rows(source: Source) -> Self {
        Self::new(source, None, Self::NO_ROWS)
    }
}

/// Outcome of parsing one table row that is worth keeping.
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    Track(ParsedTrack),
    Error(RowError),
}
impl Row {
    pub fn source(&self) -> Source {
        match self {
            Self::Track(track) => track.source,
            Self::Error(error) => error.source,
        }
    }

    pub fn as_track(&self) -> Option<&ParsedTrack> {
        match self {
            Self::Track(track) => Some(track),
            Self::Error(_) => None,
        }
    }
}
impl From<ParsedTrack> for Row {
    fn from(track: ParsedTrack) -> Self {
        Self::Track(track)
    }
}
impl From<RowError> for Row {
    fn from(error: RowError) -> Self {
        Self::Error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(source: Source, row: usize, scores: &[(Difficulty, f64)]) -> ParsedTrack {
        ParsedTrack {
            title: "Cosmic Cowgirl".to_string(),
            artist: "Mutsuhiko Izumi".to_string(),
            skill_type: SkillType::Other,
            long: false,
            open_type: OpenType::Initial,
            scores: scores.iter().map(|(d, l)| (*d, Level::new(*l).unwrap())).collect(),
            source,
            row,
        }
    }

    #[test]
    fn test_same_track_data_ignores_provenance_and_order() {
        let a = parsed(Source::OldGfdm, 3, &[(Difficulty::Basic, 2.5), (Difficulty::Master, 8.2)]);
        let b = parsed(Source::OldGd, 40, &[(Difficulty::Master, 8.2), (Difficulty::Basic, 2.5)]);
        assert!(a.same_track_data(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_track_data_detects_missing_chart() {
        let a = parsed(Source::OldGfdm, 3, &[(Difficulty::Basic, 2.5), (Difficulty::Master, 8.2)]);
        let b = parsed(Source::OldGd, 40, &[(Difficulty::Basic, 2.5)]);
        assert!(!a.same_track_data(&b));
    }

    #[test]
    fn test_into_track() {
        let track = parsed(Source::New, 0, &[(Difficulty::Extreme, 6.0)]).into_track("abc");
        assert_eq!(track.id, "abc");
        assert_eq!(track.level(Difficulty::Extreme), Level::new(6.0));
        assert_eq!(track.level(Difficulty::Basic), None);
    }
}
