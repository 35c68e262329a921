mod difficulty;
mod kind;
mod level;
mod source;
mod track;

pub use self::difficulty::Difficulty;
pub use self::kind::{OpenType, SkillType};
pub use self::level::Level;
pub use self::source::Source;
pub use self::track::{ParsedTrack, Row, RowError, Scores, Track};
