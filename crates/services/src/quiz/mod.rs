mod check;
mod progress;
mod session;
mod state;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use check::{CellCheck, CheckOutcome, RevealResult, YearCheck};
pub use progress::QuizStats;
pub use session::QuizSession;
pub use state::{CellState, YearState, YearStatus};
pub use workflow::QuizService;
