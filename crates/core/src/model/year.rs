use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when building a `Year` from raw input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum YearError {
    #[error("year {0} is outside the quiz range 2000-2024")]
    OutOfRange(u16),

    #[error("failed to parse year from {raw:?}")]
    Parse { raw: String },
}

/// A season covered by the quiz (2000 through 2024).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(u16);

impl Year {
    /// Oldest season in the quiz.
    pub const FIRST: Year = Year(2000);
    /// Most recent season in the quiz; the only one unlocked at start.
    pub const LAST: Year = Year(2024);
    /// Number of seasons between `FIRST` and `LAST`, inclusive.
    pub const COUNT: usize = (Self::LAST.0 - Self::FIRST.0 + 1) as usize;

    /// Creates a `Year` inside the quiz range.
    ///
    /// # Errors
    ///
    /// Returns `YearError::OutOfRange` for seasons before 2000 or after 2024.
    pub fn new(value: u16) -> Result<Self, YearError> {
        if (Self::FIRST.0..=Self::LAST.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(YearError::OutOfRange(value))
        }
    }

    /// Returns the underlying calendar year.
    #[must_use]
    pub fn value(&self) -> u16 {
        self.0
    }

    /// The chronologically previous season, if it is still inside the range.
    #[must_use]
    pub fn previous(&self) -> Option<Year> {
        (self.0 > Self::FIRST.0).then(|| Year(self.0 - 1))
    }

    /// All seasons, most recent first.
    pub fn all_descending() -> impl Iterator<Item = Year> {
        (Self::FIRST.0..=Self::LAST.0).rev().map(Year)
    }
}

impl TryFrom<u16> for Year {
    type Error = YearError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Debug for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Year({})", self.0)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = YearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<u16>().map_err(|_| YearError::Parse {
            raw: s.to_string(),
        })?;
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_range_bounds() {
        assert_eq!(Year::new(2000).unwrap(), Year::FIRST);
        assert_eq!(Year::new(2024).unwrap(), Year::LAST);
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(Year::new(1999).unwrap_err(), YearError::OutOfRange(1999));
        assert_eq!(Year::new(2025).unwrap_err(), YearError::OutOfRange(2025));
    }

    #[test]
    fn previous_stops_at_first_year() {
        assert_eq!(Year::LAST.previous(), Some(Year::new(2023).unwrap()));
        assert_eq!(Year::FIRST.previous(), None);
    }

    #[test]
    fn all_descending_covers_every_season() {
        let years: Vec<Year> = Year::all_descending().collect();
        assert_eq!(years.len(), Year::COUNT);
        assert_eq!(years.len(), 25);
        assert_eq!(years.first(), Some(&Year::LAST));
        assert_eq!(years.last(), Some(&Year::FIRST));
    }

    #[test]
    fn parses_and_displays() {
        let year: Year = " 2012 ".parse().unwrap();
        assert_eq!(year.to_string(), "2012");
        assert!("twenty".parse::<Year>().is_err());
        assert_eq!(
            "1990".parse::<Year>().unwrap_err(),
            YearError::OutOfRange(1990)
        );
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        let year: Year = serde_json::from_str("2008").unwrap();
        assert_eq!(year.value(), 2008);
        assert!(serde_json::from_str::<Year>("1980").is_err());
    }
}
