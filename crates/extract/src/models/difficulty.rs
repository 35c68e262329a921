use std::fmt::{Display, Formatter, Result as FmtResult};

/// Chart difficulty tier.
///
/// Ordering follows the wiki's column order, which is also the order
/// differences are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    Basic,
    Advanced,
    Extreme,
    Master,
}
impl Difficulty {
    pub const ALL: [Difficulty; 4] = [Self::Basic, Self::Advanced, Self::Extreme, Self::Master];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "BASIC",
            Self::Advanced => "ADVANCED",
            Self::Extreme => "EXTREME",
            Self::Master => "MASTER",
        }
    }
}
impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
