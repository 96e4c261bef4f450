use services::CellState;
use slam_core::model::{Tournament, Year};

use crate::views::ViewError;

/// How a cell should look. Derived from `CellState` only, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellPresentation {
    Empty,
    Pending,
    Correct,
    Incorrect,
    Revealed,
}

impl CellPresentation {
    #[must_use]
    pub fn from_state(cell: &CellState) -> Self {
        if cell.is_revealed() {
            return Self::Revealed;
        }
        match (cell.correct(), cell.selection()) {
            (Some(true), _) => Self::Correct,
            (Some(false), _) => Self::Incorrect,
            (None, Some(_)) => Self::Pending,
            (None, None) => Self::Empty,
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Empty => "cell--empty",
            Self::Pending => "cell--pending",
            Self::Correct => "cell--correct",
            Self::Incorrect => "cell--incorrect",
            Self::Revealed => "cell--revealed",
        }
    }

    /// Short feedback under the picker; `None` for cells without news.
    #[must_use]
    pub fn feedback(self) -> Option<&'static str> {
        match self {
            Self::Empty | Self::Pending => None,
            Self::Correct => Some("Correct!"),
            Self::Incorrect => Some("Guess again"),
            Self::Revealed => Some("Revealed"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellVm {
    pub tournament: Tournament,
    /// Stable DOM key, e.g. `2024-AO`.
    pub key: String,
    pub selection: String,
    pub presentation: CellPresentation,
}

impl CellVm {
    #[must_use]
    pub fn new(year: Year, tournament: Tournament, cell: &CellState) -> Self {
        Self {
            tournament,
            key: cell_key(year, tournament),
            selection: cell.selection().unwrap_or_default().to_string(),
            presentation: CellPresentation::from_state(cell),
        }
    }
}

#[must_use]
pub fn cell_key(year: Year, tournament: Tournament) -> String {
    format!("{year}-{}", tournament.code())
}

/// Parse a key produced by `cell_key`.
///
/// # Errors
///
/// Returns `ViewError::UnknownYear` or `ViewError::UnknownTournament` for
/// malformed keys.
pub fn parse_cell_key(key: &str) -> Result<(Year, Tournament), ViewError> {
    let (year, tournament) = key.split_once('-').ok_or(ViewError::UnknownTournament)?;
    let year = year.parse::<Year>().map_err(|_| ViewError::UnknownYear)?;
    let tournament = tournament
        .parse::<Tournament>()
        .map_err(|_| ViewError::UnknownTournament)?;
    Ok((year, tournament))
}
