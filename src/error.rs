use thiserror::Error;

use crate::quiz::{QuestionSetError, TransitionError};

/// Errors that end a quiz session
///
/// Everything here is fatal: it propagates up to `main`, which lets the SDL
/// contexts drop and exits non-zero. A user quit is not an error and never
/// shows up as one of these.
#[derive(Debug, Error)]
pub enum QuizError {
    /// SDL or one of its subsystems failed to start
    #[error("SDL initialization failed: {0}")]
    Init(String),

    /// Image, sound or font file could not be loaded
    #[error("failed to load {path}: {reason}")]
    Asset { path: String, reason: String },

    /// Mixer refused to play a loaded chunk
    #[error("audio error: {0}")]
    Audio(String),

    /// Drawing to the canvas failed
    #[error("render error: {0}")]
    Render(String),

    /// Built-in question data is malformed
    #[error(transparent)]
    QuestionSet(#[from] QuestionSetError),

    /// Driver asked the session for a step it can't take from its current state
    #[error(transparent)]
    Session(#[from] TransitionError),
}

impl QuizError {
    pub fn asset(path: &str, reason: impl ToString) -> Self {
        QuizError::Asset {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}

// SDL reports most failures as plain strings; drawing calls are the bulk of them.
impl From<String> for QuizError {
    fn from(error: String) -> Self {
        QuizError::Render(error)
    }
}
