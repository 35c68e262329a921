use super::Source;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Which skill point table a track counts towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillType {
    /// Songs from the current version.
    Hot,
    /// Everything else.
    Other,
}
impl SkillType {
    /// The skill table is decided by the page, not by anything in the row.
    pub fn for_source(source: Source) -> Self {
        match source {
            Source::New => Self::Hot,
            Source::OldGfdm | Source::OldGd => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hot => "HOT",
            Self::Other => "OTHER",
        }
    }
}
impl Display for SkillType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// How a track is unlocked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpenType {
    /// Playable from the start.
    #[default]
    Initial,
    /// Unlocked through an event (`SEC`, `10`, `20`).
    Event,
    /// Encore stage (`EN<n>`).
    Encore,
    /// Premium encore stage (`PE<n>`).
    PremiumEncore,
    /// DX cabinet exclusive.
    Dx,
}
impl OpenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Event => "event",
            Self::Encore => "encore",
            Self::PremiumEncore => "premium encore",
            Self::Dx => "DX",
        }
    }
}
impl Display for OpenType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
