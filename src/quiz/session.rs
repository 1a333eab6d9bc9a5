//! Session Driver
//!
//! Runs the quiz from start to finish: memorization, one selection per
//! question, scoring, summary. The driver only talks to the outside world
//! through two traits, so the whole flow runs in tests without a window.
//!
//! # Lifecycle
//!
//! ```text
//! Idle → Memorizing → AwaitingSelection(0) → Scored(0) → AwaitingSelection(1)
//!      → … → Summary → Terminated
//! ```
//!
//! Any non-terminal state can jump to `Aborted` when the player quits.
//! Nothing moves backwards.

use super::question::{Question, QuestionSet};
use crate::error::QuizError;
use log::{debug, info};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Result of one blocking stage: either it ran to completion or the player
/// asked to leave
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome<T> {
    Done(T),
    Quit,
}

/// The screens the driver needs, one blocking call per stage
pub trait QuizFrontend {
    /// Show the reference image with a countdown until `duration` elapses
    fn memorize(
        &mut self,
        image: &str,
        duration: Duration,
        countdown: &dyn Fn(u64) -> String,
    ) -> Result<StageOutcome<()>, QuizError>;

    /// Show the choice grid and wait for a click on one of the choices
    fn select(&mut self, question: &Question) -> Result<StageOutcome<String>, QuizError>;

    /// Show the final score line and hold it
    fn show_summary(&mut self, text: &str) -> Result<StageOutcome<()>, QuizError>;
}

/// Plays the per-question sound cue
pub trait CuePlayer {
    fn play_cue(&mut self, cue: &str) -> Result<(), QuizError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Memorizing,
    AwaitingSelection(usize),
    Scored(usize),
    Summary,
    Terminated,
    Aborted,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Terminated | SessionState::Aborted)
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("cannot {action} while session is {state:?}")]
pub struct TransitionError {
    pub state: SessionState,
    pub action: &'static str,
}

/// Final tally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    pub score: usize,
    pub total: usize,
}

impl fmt::Display for ScoreSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.score, self.total)
    }
}

/// How the session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    Completed(ScoreSummary),
    Aborted,
}

/// Verdict for one answered question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict<'q> {
    pub correct: bool,
    /// Cue to play, present only for a correct answer
    pub cue: Option<&'q str>,
}

/// Score keeping and state transitions for one run through a question set
pub struct Session<'q> {
    set: &'q QuestionSet,
    state: SessionState,
    score: usize,
}

impl<'q> Session<'q> {
    pub fn new(set: &'q QuestionSet) -> Self {
        Session {
            set,
            state: SessionState::Idle,
            score: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> usize {
        self.score
    }

    fn reject(&self, action: &'static str) -> TransitionError {
        TransitionError {
            state: self.state,
            action,
        }
    }

    pub fn start_memorizing(&mut self) -> Result<(), TransitionError> {
        match self.state {
            SessionState::Idle => {
                self.state = SessionState::Memorizing;
                Ok(())
            }
            _ => Err(self.reject("start memorizing")),
        }
    }

    pub fn begin_questions(&mut self) -> Result<(), TransitionError> {
        match self.state {
            SessionState::Memorizing => {
                self.state = SessionState::AwaitingSelection(0);
                Ok(())
            }
            _ => Err(self.reject("begin questions")),
        }
    }

    /// Question currently waiting for an answer
    pub fn current_question(&self) -> Option<&'q Question> {
        match self.state {
            SessionState::AwaitingSelection(i) => self.set.questions.get(i),
            _ => None,
        }
    }

    /// Score the selection for the current question
    pub fn answer(&mut self, selected: &str) -> Result<Verdict<'q>, TransitionError> {
        let SessionState::AwaitingSelection(index) = self.state else {
            return Err(self.reject("answer"));
        };
        let Some(question) = self.set.questions.get(index) else {
            return Err(self.reject("answer"));
        };

        let correct = question.is_correct(selected);
        if correct {
            self.score += 1;
        }
        self.state = SessionState::Scored(index);

        Ok(Verdict {
            correct,
            cue: correct.then_some(question.cue.as_str()),
        })
    }

    /// Move past a scored question, to the next one or to the summary
    pub fn advance(&mut self) -> Result<(), TransitionError> {
        let SessionState::Scored(index) = self.state else {
            return Err(self.reject("advance"));
        };
        self.state = if index + 1 < self.set.len() {
            SessionState::AwaitingSelection(index + 1)
        } else {
            SessionState::Summary
        };
        Ok(())
    }

    pub fn finish(&mut self) -> Result<(), TransitionError> {
        match self.state {
            SessionState::Summary => {
                self.state = SessionState::Terminated;
                Ok(())
            }
            _ => Err(self.reject("finish")),
        }
    }

    /// Player quit; allowed from any state that hasn't already ended
    pub fn abort(&mut self) -> Result<(), TransitionError> {
        if self.state.is_terminal() {
            return Err(self.reject("abort"));
        }
        self.state = SessionState::Aborted;
        Ok(())
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary {
            score: self.score,
            total: self.set.len(),
        }
    }
}

/// Run a whole session against the given screens and cue player
pub fn run_session<F, C>(
    frontend: &mut F,
    cues: &mut C,
    set: &QuestionSet,
) -> Result<SessionEnd, QuizError>
where
    F: QuizFrontend,
    C: CuePlayer,
{
    let mut session = Session::new(set);

    session.start_memorizing()?;
    info!(
        "Memorizing {} for {}s",
        set.reference_image, set.memorize_seconds
    );
    let countdown = |remaining: u64| set.messages.countdown_text(remaining);
    let outcome = frontend.memorize(&set.reference_image, set.memorize_duration(), &countdown)?;
    if outcome == StageOutcome::Quit {
        return quit(&mut session);
    }

    session.begin_questions()?;
    while let Some(question) = session.current_question() {
        let selected = match frontend.select(question)? {
            StageOutcome::Done(selected) => selected,
            StageOutcome::Quit => return quit(&mut session),
        };

        let verdict = session.answer(&selected)?;
        debug!(
            "Selected {} (expected {}): {}, score {}",
            selected,
            question.correct,
            if verdict.correct { "correct" } else { "incorrect" },
            session.score()
        );
        // No cue on a wrong answer
        if let Some(cue) = verdict.cue {
            cues.play_cue(cue)?;
        }
        session.advance()?;
    }

    let summary = session.summary();
    info!("Session finished: {}", summary);
    let text = set.messages.summary_text(summary.score, summary.total);
    if frontend.show_summary(&text)? == StageOutcome::Quit {
        debug!("Summary dismissed early");
    }
    session.finish()?;

    Ok(SessionEnd::Completed(summary))
}

fn quit(session: &mut Session<'_>) -> Result<SessionEnd, QuizError> {
    info!("Player quit during {:?}", session.state());
    session.abort()?;
    Ok(SessionEnd::Aborted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::question::Messages;
    use std::collections::VecDeque;

    fn two_question_set() -> QuestionSet {
        QuestionSet {
            reference_image: "complete.PNG".to_string(),
            memorize_seconds: 20,
            messages: Messages::default(),
            questions: vec![
                Question {
                    prompt: "Which is the terminal?".to_string(),
                    choices: vec!["a.PNG".into(), "terminal.PNG".into()],
                    correct: "terminal.PNG".to_string(),
                    cue: "OK.mp3".to_string(),
                },
                Question {
                    prompt: "Which is the module?".to_string(),
                    choices: vec!["module.PNG".into(), "b.PNG".into()],
                    correct: "module.PNG".to_string(),
                    cue: "success.mp3".to_string(),
                },
            ],
        }
    }

    /// Plays back canned outcomes instead of opening a window
    struct ScriptedFrontend {
        memorize: StageOutcome<()>,
        selections: VecDeque<StageOutcome<String>>,
        countdown_seen: Option<String>,
        summaries: Vec<String>,
        asked: Vec<String>,
    }

    impl ScriptedFrontend {
        fn answering(selections: &[&str]) -> Self {
            ScriptedFrontend {
                memorize: StageOutcome::Done(()),
                selections: selections
                    .iter()
                    .map(|s| StageOutcome::Done(s.to_string()))
                    .collect(),
                countdown_seen: None,
                summaries: Vec::new(),
                asked: Vec::new(),
            }
        }
    }

    impl QuizFrontend for ScriptedFrontend {
        fn memorize(
            &mut self,
            _image: &str,
            duration: Duration,
            countdown: &dyn Fn(u64) -> String,
        ) -> Result<StageOutcome<()>, QuizError> {
            self.countdown_seen = Some(countdown(duration.as_secs()));
            Ok(self.memorize.clone())
        }

        fn select(&mut self, question: &Question) -> Result<StageOutcome<String>, QuizError> {
            self.asked.push(question.prompt.clone());
            Ok(self.selections.pop_front().unwrap_or(StageOutcome::Quit))
        }

        fn show_summary(&mut self, text: &str) -> Result<StageOutcome<()>, QuizError> {
            self.summaries.push(text.to_string());
            Ok(StageOutcome::Done(()))
        }
    }

    #[derive(Default)]
    struct RecordingCues {
        played: Vec<String>,
    }

    impl CuePlayer for RecordingCues {
        fn play_cue(&mut self, cue: &str) -> Result<(), QuizError> {
            self.played.push(cue.to_string());
            Ok(())
        }
    }

    fn run(selections: &[&str]) -> (SessionEnd, ScriptedFrontend, RecordingCues) {
        let set = two_question_set();
        let mut frontend = ScriptedFrontend::answering(selections);
        let mut cues = RecordingCues::default();
        let end = run_session(&mut frontend, &mut cues, &set).unwrap();
        (end, frontend, cues)
    }

    #[test]
    fn test_correct_then_incorrect_scores_one_of_two() {
        let (end, frontend, _) = run(&["terminal.PNG", "b.PNG"]);
        let SessionEnd::Completed(summary) = end else {
            panic!("session should complete");
        };
        assert_eq!(summary.to_string(), "1 of 2");
        assert_eq!(frontend.summaries, vec!["You got 1 of 2 questions right."]);
    }

    #[test]
    fn test_all_correct_scores_two_of_two() {
        let (end, _, _) = run(&["terminal.PNG", "module.PNG"]);
        assert_eq!(end, SessionEnd::Completed(ScoreSummary { score: 2, total: 2 }));
    }

    #[test]
    fn test_all_incorrect_scores_zero_of_two() {
        let (end, _, cues) = run(&["a.PNG", "b.PNG"]);
        assert_eq!(end, SessionEnd::Completed(ScoreSummary { score: 0, total: 2 }));
        assert!(cues.played.is_empty());
    }

    #[test]
    fn test_cue_plays_only_for_correct_answers() {
        let (_, _, cues) = run(&["a.PNG", "module.PNG"]);
        assert_eq!(cues.played, vec!["success.mp3"]);

        let (_, _, cues) = run(&["terminal.PNG", "module.PNG"]);
        assert_eq!(cues.played, vec!["OK.mp3", "success.mp3"]);
    }

    #[test]
    fn test_unknown_identifier_scores_nothing() {
        let (end, _, cues) = run(&["not-a-choice.PNG", "module.PNG"]);
        assert_eq!(end, SessionEnd::Completed(ScoreSummary { score: 1, total: 2 }));
        assert_eq!(cues.played, vec!["success.mp3"]);
    }

    #[test]
    fn test_questions_asked_in_order() {
        let (_, frontend, _) = run(&["a.PNG", "b.PNG"]);
        assert_eq!(
            frontend.asked,
            vec!["Which is the terminal?", "Which is the module?"]
        );
    }

    #[test]
    fn test_countdown_text_uses_full_duration_first() {
        let (_, frontend, _) = run(&["a.PNG", "b.PNG"]);
        assert_eq!(
            frontend.countdown_seen.as_deref(),
            Some("You have 20 seconds to memorize the harness!")
        );
    }

    #[test]
    fn test_quit_during_memorization_skips_everything() {
        let set = two_question_set();
        let mut frontend = ScriptedFrontend::answering(&["terminal.PNG", "module.PNG"]);
        frontend.memorize = StageOutcome::Quit;
        let mut cues = RecordingCues::default();

        let end = run_session(&mut frontend, &mut cues, &set).unwrap();

        assert_eq!(end, SessionEnd::Aborted);
        assert!(frontend.asked.is_empty());
        assert!(frontend.summaries.is_empty());
        assert!(cues.played.is_empty());
    }

    #[test]
    fn test_quit_during_selection_emits_no_summary() {
        // One correct answer, then the script runs dry and quits
        let (end, frontend, cues) = run(&["terminal.PNG"]);
        assert_eq!(end, SessionEnd::Aborted);
        assert!(frontend.summaries.is_empty());
        assert_eq!(cues.played, vec!["OK.mp3"]);
    }

    #[test]
    fn test_answer_increments_by_exactly_one() {
        let set = two_question_set();
        let mut session = Session::new(&set);
        session.start_memorizing().unwrap();
        session.begin_questions().unwrap();

        let verdict = session.answer("terminal.PNG").unwrap();
        assert!(verdict.correct);
        assert_eq!(verdict.cue, Some("OK.mp3"));
        assert_eq!(session.score(), 1);

        session.advance().unwrap();
        let verdict = session.answer("b.PNG").unwrap();
        assert!(!verdict.correct);
        assert_eq!(verdict.cue, None);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_state_walk() {
        let set = two_question_set();
        let mut session = Session::new(&set);
        assert_eq!(session.state(), SessionState::Idle);

        session.start_memorizing().unwrap();
        assert_eq!(session.state(), SessionState::Memorizing);
        session.begin_questions().unwrap();
        assert_eq!(session.state(), SessionState::AwaitingSelection(0));
        session.answer("a.PNG").unwrap();
        assert_eq!(session.state(), SessionState::Scored(0));
        session.advance().unwrap();
        assert_eq!(session.state(), SessionState::AwaitingSelection(1));
        session.answer("module.PNG").unwrap();
        session.advance().unwrap();
        assert_eq!(session.state(), SessionState::Summary);
        session.finish().unwrap();
        assert_eq!(session.state(), SessionState::Terminated);
    }

    #[test]
    fn test_cannot_answer_twice() {
        let set = two_question_set();
        let mut session = Session::new(&set);
        session.start_memorizing().unwrap();
        session.begin_questions().unwrap();
        session.answer("terminal.PNG").unwrap();

        let err = session.answer("terminal.PNG").unwrap_err();
        assert_eq!(err.state, SessionState::Scored(0));
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_no_backward_transitions() {
        let set = two_question_set();
        let mut session = Session::new(&set);
        session.start_memorizing().unwrap();
        assert!(session.start_memorizing().is_err());
        session.begin_questions().unwrap();
        assert!(session.begin_questions().is_err());
        assert!(session.finish().is_err());
    }

    #[test]
    fn test_abort_only_once() {
        let set = two_question_set();
        let mut session = Session::new(&set);
        session.start_memorizing().unwrap();
        session.abort().unwrap();
        assert_eq!(session.state(), SessionState::Aborted);
        assert!(session.abort().is_err());
        assert!(session.current_question().is_none());
    }
}
