use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TournamentError {
    #[error("unknown tournament: {0:?}")]
    Unknown(String),
}

/// The four Grand Slam tournaments, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tournament {
    #[serde(rename = "AO")]
    AustralianOpen,
    #[serde(rename = "RG")]
    RolandGarros,
    #[serde(rename = "WB")]
    Wimbledon,
    #[serde(rename = "US")]
    UsOpen,
}

impl Tournament {
    /// Calendar order. Reveal hints walk the tournaments in this order.
    pub const ALL: [Tournament; 4] = [
        Tournament::AustralianOpen,
        Tournament::RolandGarros,
        Tournament::Wimbledon,
        Tournament::UsOpen,
    ];

    /// Short code used in data files and DOM ids.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Tournament::AustralianOpen => "AO",
            Tournament::RolandGarros => "RG",
            Tournament::Wimbledon => "WB",
            Tournament::UsOpen => "US",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Tournament::AustralianOpen => "Australian Open",
            Tournament::RolandGarros => "French Open",
            Tournament::Wimbledon => "Wimbledon",
            Tournament::UsOpen => "US Open",
        }
    }

    /// Position inside `ALL`.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Tournament::AustralianOpen => 0,
            Tournament::RolandGarros => 1,
            Tournament::Wimbledon => 2,
            Tournament::UsOpen => 3,
        }
    }
}

impl fmt::Display for Tournament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Tournament {
    type Err = TournamentError;

    /// Accepts the short code or a common full name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ao" | "australian open" => Ok(Tournament::AustralianOpen),
            "rg" | "roland garros" | "french open" => Ok(Tournament::RolandGarros),
            "wb" | "w" | "wimbledon" => Ok(Tournament::Wimbledon),
            "us" | "uso" | "us open" => Ok(Tournament::UsOpen),
            _ => Err(TournamentError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_calendar_order() {
        let codes: Vec<&str> = Tournament::ALL.iter().map(|t| t.code()).collect();
        assert_eq!(codes, ["AO", "RG", "WB", "US"]);
        for (idx, tournament) in Tournament::ALL.iter().enumerate() {
            assert_eq!(tournament.index(), idx);
        }
    }

    #[test]
    fn parses_codes_and_names() {
        assert_eq!("ao".parse::<Tournament>().unwrap(), Tournament::AustralianOpen);
        assert_eq!(
            "Roland Garros".parse::<Tournament>().unwrap(),
            Tournament::RolandGarros
        );
        assert_eq!("USO".parse::<Tournament>().unwrap(), Tournament::UsOpen);
        assert_eq!(" WB ".parse::<Tournament>().unwrap(), Tournament::Wimbledon);
    }

    #[test]
    fn rejects_unknown_key() {
        let err = "Queen's Club".parse::<Tournament>().unwrap_err();
        assert_eq!(err, TournamentError::Unknown("Queen's Club".to_string()));
    }

    #[test]
    fn serializes_as_code() {
        let json = serde_json::to_string(&Tournament::Wimbledon).unwrap();
        assert_eq!(json, "\"WB\"");
        let parsed: Tournament = serde_json::from_str("\"RG\"").unwrap();
        assert_eq!(parsed, Tournament::RolandGarros);
    }
}
