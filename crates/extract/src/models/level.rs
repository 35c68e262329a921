use crate::error::{Error, ErrorKind};
use exn::OptionExt;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Numeric rating of a single chart (e.g. `7.45`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level(f64);
impl Level {
    /// Wraps a rating; returns `None` for NaN and infinities.
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}
impl FromStr for Level {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .ok()
            .and_then(Self::new)
            .ok_or_raise(|| ErrorKind::InvalidLevel(s.to_string()))
    }
}
impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("5", 5.0)]
    #[case("7.5", 7.5)]
    #[case(" 9.45 ", 9.45)]
    fn test_level_from_str(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(input.parse::<Level>().unwrap().value(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("?")]
    #[case("NaN")]
    #[case("inf")]
    fn test_level_rejects(#[case] input: &str) {
        let err = input.parse::<Level>().unwrap_err();
        assert!(matches!(&*err, ErrorKind::InvalidLevel(_)));
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::new(7.5).unwrap().to_string(), "7.50");
        assert_eq!(Level::new(5.0).unwrap().to_string(), "5.00");
    }
}
