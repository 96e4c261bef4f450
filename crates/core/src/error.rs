use thiserror::Error;

use crate::model::{ChampionTableError, TournamentError, YearError};

/// Umbrella error for callers that do not care which domain check failed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Year(#[from] YearError),
    #[error(transparent)]
    Tournament(#[from] TournamentError),
    #[error(transparent)]
    ChampionTable(#[from] ChampionTableError),
}
