//! The "分類" (category) column.
//!
//! A cell holds zero or more short tokens. Some decide how the track is
//! unlocked, `L` marks a long track, and the rest are markers that don't
//! affect the catalog.

use crate::consts;
use crate::error::{ErrorKind, Result};
use crate::models::OpenType;

/// Tokens that are recognised but carry nothing we store.
const IGNORED_TOKENS: [&str; 6] = [
    "版", // licensed song
    "S",  // session only
    "GF", // GuitarFreaks only
    "DM", // DrumMania only
    "×",  // no session play
    "e",  // e-amusement pass unlock
];

/// What the category cell says about a track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Category {
    pub open_type: OpenType,
    pub long: bool,
}

enum Token {
    Open(OpenType),
    Long,
    Ignored,
}

fn classify(token: &str) -> Result<Token> {
    if consts::ENCORE_REGEX.is_match(token) {
        return Ok(Token::Open(OpenType::Encore));
    }
    if consts::PREMIUM_ENCORE_REGEX.is_match(token) {
        return Ok(Token::Open(OpenType::PremiumEncore));
    }
    Ok(match token {
        "SEC" | "10" | "20" => Token::Open(OpenType::Event),
        "DX" => Token::Open(OpenType::Dx),
        "L" => Token::Long,
        t if IGNORED_TOKENS.contains(&t) => Token::Ignored,
        _ => exn::bail!(ErrorKind::UnknownCategoryToken(token.to_string())),
    })
}

/// Parses the tokens of a category cell.
///
/// At most one open type and one long flag may be given. Without an open type
/// the track is [`OpenType::Initial`]; without `L` it is not long.
pub fn parse_category<S: AsRef<str>>(tokens: &[S]) -> Result<Category> {
    let mut open_types = Vec::new();
    let mut longs = 0usize;
    for token in tokens {
        match classify(token.as_ref())? {
            Token::Open(open_type) => open_types.push(open_type),
            Token::Long => longs += 1,
            Token::Ignored => {},
        }
    }
    if open_types.len() > 1 {
        let listed = open_types.iter().map(OpenType::as_str).collect::<Vec<_>>().join(",");
        exn::bail!(ErrorKind::MultipleOpenTypes(listed));
    }
    if longs > 1 {
        exn::bail!(ErrorKind::MultipleLongFlags);
    }
    Ok(Category {
        open_type: open_types.first().copied().unwrap_or_default(),
        long: longs == 1,
    })
}
