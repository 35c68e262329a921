use crate::issue::{Difference, Property};
use wikisync_extract::models::{Difficulty, Level, ParsedTrack, Track};

/// Rendered in place of a rating for a chart that doesn't exist.
pub const NO_LEVEL: &str = "--";

fn render_level(level: Option<Level>) -> String {
    level.map_or_else(|| NO_LEVEL.to_string(), |level| level.to_string())
}

/// Lists every field where `new` disagrees with the stored `old` track.
///
/// Fields are checked in a fixed order (title, artist, skill type, long flag,
/// open type, then one rating per difficulty from BASIC to MASTER), so the
/// same pair always yields the same list. An empty list means nothing needs
/// writing.
pub fn compare_track(old: &Track, new: &ParsedTrack) -> Vec<Difference> {
    let mut differences = Vec::new();
    let mut push = |property: Property, difficulty: Option<Difficulty>, old_value: String, new_value: String| {
        differences.push(Difference {
            track_id: old.id.clone(),
            property,
            difficulty,
            old_value,
            new_value,
        });
    };

    if old.title != new.title {
        push(Property::Title, None, old.title.clone(), new.title.clone());
    }
    if old.artist != new.artist {
        push(Property::Artist, None, old.artist.clone(), new.artist.clone());
    }
    if old.skill_type != new.skill_type {
        push(Property::SkillType, None, old.skill_type.to_string(), new.skill_type.to_string());
    }
    if old.long != new.long {
        push(Property::Long, None, old.long.to_string(), new.long.to_string());
    }
    if old.open_type != new.open_type {
        push(Property::OpenType, None, old.open_type.to_string(), new.open_type.to_string());
    }
    for difficulty in Difficulty::ALL {
        let (stored, parsed) = (old.level(difficulty), new.level(difficulty));
        if stored != parsed {
            push(Property::Level, Some(difficulty), render_level(stored), render_level(parsed));
        }
    }

    differences
}
