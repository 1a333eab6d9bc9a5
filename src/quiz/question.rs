use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;

/// Question data compiled into the binary
const DEFAULT_SET_JSON: &str = include_str!("questions.json");

/// One multiple-choice image question
///
/// `choices` are image file names, drawn in grid order. `correct` must be one
/// of them; `cue` is the sound file played when the player picks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub choices: Vec<String>,
    pub correct: String,
    pub cue: String,
}

impl Question {
    /// Exact identifier match against the expected answer
    pub fn is_correct(&self, selected: &str) -> bool {
        self.correct == selected
    }
}

/// Screen text with `{placeholder}` slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    /// Memorization banner, `{remaining}` is replaced with whole seconds
    pub countdown: String,

    /// Summary line, `{score}` and `{total}` are replaced
    pub summary: String,
}

impl Default for Messages {
    fn default() -> Self {
        Messages {
            countdown: "You have {remaining} seconds to memorize the harness!".to_string(),
            summary: "You got {score} of {total} questions right.".to_string(),
        }
    }
}

impl Messages {
    pub fn countdown_text(&self, remaining_secs: u64) -> String {
        self.countdown.replace("{remaining}", &remaining_secs.to_string())
    }

    pub fn summary_text(&self, score: usize, total: usize) -> String {
        self.summary
            .replace("{score}", &score.to_string())
            .replace("{total}", &total.to_string())
    }
}

/// Everything a session needs to run: the reference image, how long to show
/// it, and the questions asked afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub reference_image: String,
    pub memorize_seconds: u64,
    #[serde(default)]
    pub messages: Messages,
    pub questions: Vec<Question>,
}

/// Reasons a question set is rejected before the session starts
#[derive(Debug, Error, PartialEq)]
pub enum QuestionSetError {
    #[error("question data is not valid JSON: {0}")]
    Parse(String),

    #[error("question set has no questions")]
    Empty,

    #[error("question {index} has no choices")]
    NoChoices { index: usize },

    #[error("question {index}: correct answer '{correct}' is not among its choices")]
    CorrectNotInChoices { index: usize, correct: String },

    #[error("question {index}: choice '{choice}' is listed twice")]
    DuplicateChoice { index: usize, choice: String },
}

impl QuestionSet {
    /// The built-in harness quiz
    pub fn builtin() -> Result<Self, QuestionSetError> {
        Self::from_json(DEFAULT_SET_JSON)
    }

    /// Parse and validate a question set
    pub fn from_json(json: &str) -> Result<Self, QuestionSetError> {
        let set: QuestionSet =
            serde_json::from_str(json).map_err(|e| QuestionSetError::Parse(e.to_string()))?;
        set.validate()?;
        Ok(set)
    }

    /// Check the static invariants every question must satisfy
    pub fn validate(&self) -> Result<(), QuestionSetError> {
        if self.questions.is_empty() {
            return Err(QuestionSetError::Empty);
        }

        for (index, question) in self.questions.iter().enumerate() {
            if question.choices.is_empty() {
                return Err(QuestionSetError::NoChoices { index });
            }

            // Hit-testing returns the first match, so duplicates would shadow each other
            let mut seen = HashSet::new();
            for choice in &question.choices {
                if !seen.insert(choice.as_str()) {
                    return Err(QuestionSetError::DuplicateChoice {
                        index,
                        choice: choice.clone(),
                    });
                }
            }

            if !question.choices.contains(&question.correct) {
                return Err(QuestionSetError::CorrectNotInChoices {
                    index,
                    correct: question.correct.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn memorize_duration(&self) -> Duration {
        Duration::from_secs(self.memorize_seconds)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Every image file the session will try to load, without repeats
    pub fn image_files(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        std::iter::once(self.reference_image.as_str())
            .chain(self.questions.iter().flat_map(|q| q.choices.iter().map(String::as_str)))
            .filter(|name| seen.insert(*name))
            .collect()
    }
}
