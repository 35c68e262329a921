//! Reconciliation output.

use std::fmt::{Display, Formatter, Result as FmtResult};
use wikisync_extract::models::{Difficulty, RowError, Source, Track};

/// Field of a track that can differ between the catalog and the wiki.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Title,
    Artist,
    SkillType,
    Long,
    OpenType,
    /// Rating of one chart; the difficulty is on the [`Difference`].
    Level,
}
impl Property {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Artist => "artist",
            Self::SkillType => "skillType",
            Self::Long => "long",
            Self::OpenType => "openType",
            Self::Level => "lv",
        }
    }
}
impl Display for Property {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// One field that differs between a stored track and its wiki row.
///
/// Values are rendered for display when the difference is found, so the
/// caller never has to know how each field is formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference {
    pub track_id: String,
    pub property: Property,
    /// Only set for [`Property::Level`].
    pub difficulty: Option<Difficulty>,
    pub old_value: String,
    pub new_value: String,
}
impl Display for Difference {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if let Some(difficulty) = self.difficulty {
            write!(f, "{difficulty} ")?;
        }
        write!(f, "{} : {} -> {}", self.property, self.old_value, self.new_value)
    }
}

/// A single action item found while reconciling.
#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    /// The title isn't in the catalog; `track` carries a freshly generated id.
    New { source: Source, row: usize, track: Track },
    /// The title is in the catalog with different data; `track` carries the
    /// existing id and the wiki's data.
    Diff {
        source: Source,
        row: usize,
        track: Track,
        differences: Vec<Difference>,
    },
    /// The catalog has a title that no page lists any more.
    Delete { id: String, title: String },
    /// A row, or a whole page, couldn't be read.
    Error(RowError),
}
impl Issue {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Self::New { track, .. } | Self::Diff { track, .. } => Some(&track.title),
            Self::Delete { title, .. } => Some(title),
            Self::Error(_) => None,
        }
    }
}
impl From<RowError> for Issue {
    fn from(error: RowError) -> Self {
        Self::Error(error)
    }
}

struct Position(Source, Option<usize>);
impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "@{}", self.0.view_text())?;
        if let Some(row) = self.1 {
            write!(f, " ({row})")?;
        }
        Ok(())
    }
}

impl Display for Issue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::New { source, row, track } => write!(f, "add: {} {}", track.title, Position(*source, Some(*row))),
            Self::Diff {
                source,
                row,
                track,
                differences,
            } => {
                write!(f, "diff: {} {}", track.title, Position(*source, Some(*row)))?;
                for difference in differences {
                    write!(f, "\n  {difference}")?;
                }
                Ok(())
            },
            Self::Delete { title, .. } => write!(f, "delete: {title}"),
            Self::Error(error) => write!(f, "error: {}\n  {}", Position(error.source, error.row), error.message),
        }
    }
}

/// How many issues of each kind a pass produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IssueCounts {
    pub new: usize,
    pub diff: usize,
    pub delete: usize,
    pub error: usize,
}
impl IssueCounts {
    pub fn total(&self) -> usize {
        self.new + self.diff + self.delete + self.error
    }
}

/// The ordered issues of one reconciliation pass.
///
/// Row-derived issues come first in the order rows were read, then deletions.
/// Nothing should be written to the catalog while [`has_errors`](Self::has_errors)
/// is `true`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueList(Vec<Issue>);
impl IssueList {
    pub fn has_errors(&self) -> bool {
        self.0.iter().any(Issue::is_error)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Issue] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Issue> {
        self.0
    }

    pub fn counts(&self) -> IssueCounts {
        let mut counts = IssueCounts::default();
        for issue in &self.0 {
            match issue {
                Issue::New { .. } => counts.new += 1,
                Issue::Diff { .. } => counts.diff += 1,
                Issue::Delete { .. } => counts.delete += 1,
                Issue::Error(_) => counts.error += 1,
            }
        }
        counts
    }
}
impl From<Vec<Issue>> for IssueList {
    fn from(issues: Vec<Issue>) -> Self {
        Self(issues)
    }
}
impl IntoIterator for IssueList {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
impl<'a> IntoIterator for &'a IssueList {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
impl Display for IssueList {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for issue in &self.0 {
            writeln!(f, "{issue}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikisync_extract::models::{OpenType, Scores, SkillType};

    fn track(title: &str) -> Track {
        Track {
            id: "id-1".to_string(),
            title: title.to_string(),
            artist: "Artist".to_string(),
            skill_type: SkillType::Hot,
            long: false,
            open_type: OpenType::Initial,
            scores: Scores::new(),
        }
    }

    #[test]
    fn test_display_new() {
        let issue = Issue::New {
            source: Source::New,
            row: 4,
            track: track("Foo"),
        };
        assert_eq!(issue.to_string(), "add: Foo @新曲リスト (4)");
    }

    #[test]
    fn test_display_diff() {
        let issue = Issue::Diff {
            source: Source::OldGd,
            row: 12,
            track: track("Foo"),
            differences: vec![
                Difference {
                    track_id: "id-1".to_string(),
                    property: Property::Artist,
                    difficulty: None,
                    old_value: "A".to_string(),
                    new_value: "B".to_string(),
                },
                Difference {
                    track_id: "id-1".to_string(),
                    property: Property::Level,
                    difficulty: Some(Difficulty::Master),
                    old_value: "--".to_string(),
                    new_value: "8.50".to_string(),
                },
            ],
        };
        assert_eq!(
            issue.to_string(),
            "diff: Foo @旧曲リスト GITADORA (12)\n  artist : A -> B\n  MASTER lv : -- -> 8.50"
        );
    }

    #[test]
    fn test_display_delete_and_error() {
        let delete = Issue::Delete {
            id: "x".to_string(),
            title: "Gone".to_string(),
        };
        assert_eq!(delete.to_string(), "delete: Gone");
        let error = Issue::Error(RowError::no_rows(Source::OldGfdm));
        assert_eq!(error.to_string(), "error: @旧曲リスト 初代〜XG3\n  no rows found");
    }

    #[test]
    fn test_counts_and_errors() {
        let list = IssueList::from(vec![
            Issue::New {
                source: Source::New,
                row: 0,
                track: track("Foo"),
            },
            Issue::Error(RowError::new(Source::New, Some(1), "bad")),
            Issue::Delete {
                id: "x".to_string(),
                title: "Gone".to_string(),
            },
        ]);
        assert!(list.has_errors());
        assert_eq!(
            list.counts(),
            IssueCounts {
                new: 1,
                diff: 0,
                delete: 1,
                error: 1
            }
        );
        assert_eq!(list.counts().total(), list.len());
    }
}
