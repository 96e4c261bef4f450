use services::QuizError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    DataUnavailable,
    LockedYear,
    NothingToReveal,
    UnknownYear,
    UnknownTournament,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
            ViewError::DataUnavailable => "The champion list could not be loaded.",
            ViewError::LockedYear => "Finish the year above to unlock this one.",
            ViewError::NothingToReveal => "Every answer in this year is already known.",
            ViewError::UnknownYear => "That year is not part of the quiz.",
            ViewError::UnknownTournament => "That tournament is not part of the quiz.",
        }
    }

    /// Keep error mapping at the UI boundary.
    #[must_use]
    pub fn from_quiz(err: &QuizError) -> Self {
        match err {
            QuizError::LockedYear { .. } => ViewError::LockedYear,
            QuizError::AlreadyRevealed { .. } => ViewError::NothingToReveal,
            QuizError::UnknownYear(_) => ViewError::UnknownYear,
            QuizError::UnknownTournament(_) => ViewError::UnknownTournament,
            QuizError::Table(_) | QuizError::Storage(_) => ViewError::DataUnavailable,
            _ => ViewError::Unknown,
        }
    }
}

impl From<QuizError> for ViewError {
    fn from(err: QuizError) -> Self {
        Self::from_quiz(&err)
    }
}
