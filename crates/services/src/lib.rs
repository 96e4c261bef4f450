#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use slam_core::Clock;

pub use error::QuizError;
pub use quiz::{
    CellCheck, CellState, CheckOutcome, QuizService, QuizSession, QuizStats, RevealResult,
    YearCheck, YearState, YearStatus,
};
