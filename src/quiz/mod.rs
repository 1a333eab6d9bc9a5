//! Question data and the session that walks through it

pub mod question;
pub mod session;

pub use question::{Question, QuestionSet, QuestionSetError};
pub use session::{run_session, CuePlayer, QuizFrontend, SessionEnd, StageOutcome, TransitionError};
