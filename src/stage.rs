//! Stage Loop
//!
//! Every screen of the quiz is a blocking loop with the same shape. One frame
//! of that loop is [`tick`]:
//!
//! 1. feed the frame's input actions to the stage
//! 2. stop if any of them asked to quit
//! 3. render
//! 4. ask the stage whether it is done
//!
//! Stages hold only the state they need to answer those questions. Rendering
//! is passed in as a closure so the loop runs in tests without a canvas.

use crate::error::QuizError;
use crate::input_system::QuizAction;
use crate::layout::GridLayout;
use std::time::{Duration, Instant};

/// One screen's logic
pub trait Stage {
    type Output;

    /// React to one input action (quit is handled by `tick`)
    fn handle(&mut self, action: QuizAction);

    /// Exit condition, checked once per frame after rendering
    fn poll_exit(&mut self, now: Instant) -> Option<Self::Output>;
}

/// What one frame decided
#[derive(Debug, PartialEq, Eq)]
pub enum Tick<T> {
    Continue,
    Finished(T),
    Quit,
}

/// Run one frame of a stage
pub fn tick<S, R>(stage: &mut S, actions: &[QuizAction], now: Instant, render: R) -> Result<Tick<S::Output>, QuizError>
where
    S: Stage,
    R: FnOnce(&S) -> Result<(), QuizError>,
{
    // A quit anywhere in the batch wins over a click earlier in the same frame
    if actions.contains(&QuizAction::Quit) {
        return Ok(Tick::Quit);
    }

    for action in actions {
        stage.handle(*action);
    }

    render(stage)?;

    Ok(match stage.poll_exit(now) {
        Some(output) => Tick::Finished(output),
        None => Tick::Continue,
    })
}

/// Shows something for a fixed time, then finishes
///
/// Used for the memorization countdown and the summary hold.
pub struct TimedStage {
    started: Instant,
    duration: Duration,
}

impl TimedStage {
    pub fn new(duration: Duration, started: Instant) -> Self {
        TimedStage { started, duration }
    }

    /// Whole seconds left, counting down from the full duration
    ///
    /// The first frame shows the full duration; it reaches zero only once the
    /// time is up.
    pub fn remaining_secs(&self, now: Instant) -> u64 {
        let elapsed = now.saturating_duration_since(self.started);
        self.duration.as_secs().saturating_sub(elapsed.as_secs())
    }

    pub fn is_elapsed(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

impl Stage for TimedStage {
    type Output = ();

    fn handle(&mut self, _action: QuizAction) {}

    fn poll_exit(&mut self, now: Instant) -> Option<()> {
        self.is_elapsed(now).then_some(())
    }
}

/// Waits for a click on one of the choice cells
pub struct SelectStage<'q> {
    choices: &'q [String],
    grid: GridLayout,
    pointer: Option<(i32, i32)>,
    selected: Option<usize>,
}

impl<'q> SelectStage<'q> {
    pub fn new(choices: &'q [String], grid: GridLayout) -> Self {
        SelectStage {
            choices,
            grid,
            pointer: None,
            selected: None,
        }
    }

    /// Start with a known pointer position so hover shows before the mouse moves
    pub fn with_pointer(mut self, x: i32, y: i32) -> Self {
        self.pointer = Some((x, y));
        self
    }

    pub fn grid(&self) -> &GridLayout {
        &self.grid
    }

    pub fn choices(&self) -> &'q [String] {
        self.choices
    }

    /// Cell currently under the pointer
    pub fn hovered(&self) -> Option<usize> {
        let (x, y) = self.pointer?;
        self.grid.hit_test(x, y)
    }
}

impl<'q> Stage for SelectStage<'q> {
    type Output = &'q str;

    fn handle(&mut self, action: QuizAction) {
        match action {
            QuizAction::PointerMoved(x, y) => self.pointer = Some((x, y)),
            QuizAction::PointerPressed(x, y) => {
                self.pointer = Some((x, y));
                // First press that lands on a cell decides; later ones in the frame don't
                if self.selected.is_none() {
                    self.selected = self.grid.hit_test(x, y);
                }
            }
            QuizAction::Quit => {}
        }
    }

    fn poll_exit(&mut self, _now: Instant) -> Option<&'q str> {
        let index = self.selected?;
        self.choices.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::fraction_of;

    const SCREEN: (u32, u32) = (1920, 1080);

    fn choices() -> Vec<String> {
        ["other1.PNG", "other2.PNG", "other3.PNG", "terminal.PNG"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn grid_for(count: usize) -> GridLayout {
        GridLayout::new(SCREEN, count, 2, fraction_of(SCREEN, 0.25), 50)
    }

    #[test]
    fn test_timed_stage_counts_down_whole_seconds() {
        let start = Instant::now();
        let stage = TimedStage::new(Duration::from_secs(20), start);

        assert_eq!(stage.remaining_secs(start), 20);
        assert_eq!(stage.remaining_secs(start + Duration::from_millis(999)), 20);
        assert_eq!(stage.remaining_secs(start + Duration::from_millis(1000)), 19);
        assert_eq!(stage.remaining_secs(start + Duration::from_secs(19)), 1);
        assert_eq!(stage.remaining_secs(start + Duration::from_secs(25)), 0);
    }

    #[test]
    fn test_timed_stage_finishes_after_duration() {
        let start = Instant::now();
        let mut stage = TimedStage::new(Duration::from_secs(4), start);

        let early = tick(&mut stage, &[], start + Duration::from_secs(3), |_| Ok(())).unwrap();
        assert_eq!(early, Tick::Continue);

        let done = tick(&mut stage, &[], start + Duration::from_secs(4), |_| Ok(())).unwrap();
        assert_eq!(done, Tick::Finished(()));
    }

    #[test]
    fn test_quit_stops_timed_stage_early() {
        let start = Instant::now();
        let mut stage = TimedStage::new(Duration::from_secs(20), start);
        let result = tick(&mut stage, &[QuizAction::Quit], start, |_| Ok(())).unwrap();
        assert_eq!(result, Tick::Quit);
    }

    #[test]
    fn test_click_on_each_center_selects_it() {
        let choices = choices();
        let grid = grid_for(choices.len());
        for (i, cell) in grid.cells().to_vec().into_iter().enumerate() {
            let mut stage = SelectStage::new(&choices, grid.clone());
            let c = cell.center();
            let result = tick(
                &mut stage,
                &[QuizAction::PointerPressed(c.x(), c.y())],
                Instant::now(),
                |_| Ok(()),
            )
            .unwrap();
            assert_eq!(result, Tick::Finished(choices[i].as_str()));
        }
    }

    #[test]
    fn test_click_outside_keeps_waiting() {
        let choices = choices();
        let mut stage = SelectStage::new(&choices, grid_for(choices.len()));
        let result = tick(
            &mut stage,
            &[QuizAction::PointerPressed(5, 5)],
            Instant::now(),
            |_| Ok(()),
        )
        .unwrap();
        assert_eq!(result, Tick::Continue);
    }

    #[test]
    fn test_first_hit_in_frame_wins() {
        let choices = choices();
        let grid = grid_for(choices.len());
        let second = grid.cells()[1].center();
        let third = grid.cells()[2].center();
        let mut stage = SelectStage::new(&choices, grid);

        let result = tick(
            &mut stage,
            &[
                QuizAction::PointerPressed(1, 1),
                QuizAction::PointerPressed(second.x(), second.y()),
                QuizAction::PointerPressed(third.x(), third.y()),
            ],
            Instant::now(),
            |_| Ok(()),
        )
        .unwrap();
        assert_eq!(result, Tick::Finished("other2.PNG"));
    }

    #[test]
    fn test_quit_beats_click_in_same_frame() {
        let choices = choices();
        let grid = grid_for(choices.len());
        let c = grid.cells()[3].center();
        let mut stage = SelectStage::new(&choices, grid);

        let result = tick(
            &mut stage,
            &[QuizAction::PointerPressed(c.x(), c.y()), QuizAction::Quit],
            Instant::now(),
            |_| Ok(()),
        )
        .unwrap();
        assert_eq!(result, Tick::Quit);
    }

    #[test]
    fn test_hover_follows_pointer() {
        let choices = choices();
        let grid = grid_for(choices.len());
        let c = grid.cells()[2].center();
        let mut stage = SelectStage::new(&choices, grid);
        assert_eq!(stage.hovered(), None);

        stage.handle(QuizAction::PointerMoved(c.x(), c.y()));
        assert_eq!(stage.hovered(), Some(2));

        stage.handle(QuizAction::PointerMoved(0, 0));
        assert_eq!(stage.hovered(), None);
    }

    #[test]
    fn test_initial_pointer_hover() {
        let choices = choices();
        let grid = grid_for(choices.len());
        let c = grid.cells()[0].center();
        let stage = SelectStage::new(&choices, grid).with_pointer(c.x(), c.y());
        assert_eq!(stage.hovered(), Some(0));
    }

    #[test]
    fn test_render_runs_before_exit_check() {
        let choices = choices();
        let grid = grid_for(choices.len());
        let c = grid.cells()[0].center();
        let mut stage = SelectStage::new(&choices, grid);
        let mut rendered_hover = None;

        tick(
            &mut stage,
            &[QuizAction::PointerPressed(c.x(), c.y())],
            Instant::now(),
            |s| {
                rendered_hover = Some(s.hovered());
                Ok(())
            },
        )
        .unwrap();
        assert_eq!(rendered_hover, Some(Some(0)));
    }

    #[test]
    fn test_render_error_propagates() {
        let start = Instant::now();
        let mut stage = TimedStage::new(Duration::from_secs(1), start);
        let result = tick(&mut stage, &[], start, |_| {
            Err(QuizError::Render("lost device".to_string()))
        });
        assert!(matches!(result, Err(QuizError::Render(_))));
    }
}
