use crate::error::{Error, ErrorKind};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// The wiki page a song list was scraped from.
///
/// Pages are always processed in [`Source::ALL`] order; that order decides
/// which row "wins" when the same title shows up on more than one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Source {
    /// 新曲リスト: songs added in the current version.
    #[cfg_attr(feature = "serde", serde(rename = "new"))]
    New,
    /// 旧曲リスト: first edition through XG3 (GuitarFreaks & DrumMania).
    #[cfg_attr(feature = "serde", serde(rename = "old_GFDM"))]
    OldGfdm,
    /// 旧曲リスト: GITADORA era.
    #[cfg_attr(feature = "serde", serde(rename = "old_GD"))]
    OldGd,
}
impl Source {
    pub const ALL: [Source; 3] = [Source::New, Source::OldGfdm, Source::OldGd];

    /// Returns the stable identifier, as used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::OldGfdm => "old_GFDM",
            Self::OldGd => "old_GD",
        }
    }

    /// Returns the page name as a human would recognise it.
    pub fn view_text(&self) -> &'static str {
        match self {
            Self::New => "新曲リスト",
            Self::OldGfdm => "旧曲リスト 初代〜XG3",
            Self::OldGd => "旧曲リスト GITADORA",
        }
    }
}
impl FromStr for Source {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "new" => Self::New,
            "old_GFDM" => Self::OldGfdm,
            "old_GD" => Self::OldGd,
            _ => exn::bail!(ErrorKind::ParseError {
                field: "source",
                value: s.to_string(),
            }),
        })
    }
}
impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
