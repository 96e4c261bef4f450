//! Shared error types for the services crate.

use thiserror::Error;

use slam_core::model::{ChampionTableError, TournamentError, Year, YearError};
use storage::StorageError;

/// Errors emitted by the quiz engine and `QuizService`.
///
/// Every variant is recoverable: the session is left untouched and the caller
/// can report the message and carry on.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("{year} is locked")]
    LockedYear { year: Year },
    #[error("nothing left to reveal in {year}")]
    AlreadyRevealed { year: Year },
    #[error(transparent)]
    UnknownYear(#[from] YearError),
    #[error(transparent)]
    UnknownTournament(#[from] TournamentError),
    #[error(transparent)]
    Table(#[from] ChampionTableError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
