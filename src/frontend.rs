//! SDL2 Frontend
//!
//! [`Screen`] owns the window canvas and event pump and implements
//! [`QuizFrontend`]: each stage is a frame loop driven through
//! [`tick`](crate::stage::tick) until the stage finishes or the player quits.

use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::gui::{memorize_screen, question_screen, summary_screen, ScreenAssets};
use crate::input_system::InputSystem;
use crate::layout::{fraction_of, GridLayout};
use crate::quiz::{Question, QuizFrontend, StageOutcome};
use crate::stage::{tick, SelectStage, Stage, Tick, TimedStage};
use log::debug;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::EventPump;
use std::time::{Duration, Instant};

/// Window, input and frame pacing
struct Display {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    input: InputSystem,
    frame_delay: Duration,
}

impl Display {
    /// Run one stage to completion, drawing each frame with `draw`
    fn run_stage<S, F>(&mut self, stage: &mut S, mut draw: F) -> Result<StageOutcome<S::Output>, QuizError>
    where
        S: Stage,
        F: FnMut(&mut Canvas<Window>, &S) -> Result<(), QuizError>,
    {
        loop {
            let actions = self.input.poll_events(&mut self.event_pump);
            let canvas = &mut self.canvas;

            let frame = tick(stage, &actions, Instant::now(), |stage| {
                draw(canvas, stage)?;
                canvas.present();
                Ok(())
            })?;

            match frame {
                Tick::Continue => std::thread::sleep(self.frame_delay),
                Tick::Finished(output) => return Ok(StageOutcome::Done(output)),
                Tick::Quit => return Ok(StageOutcome::Quit),
            }
        }
    }

    fn size(&self) -> Result<(u32, u32), QuizError> {
        Ok(self.canvas.output_size()?)
    }

    fn pointer(&self) -> (i32, i32) {
        let state = self.event_pump.mouse_state();
        (state.x(), state.y())
    }
}

/// The fullscreen quiz window
pub struct Screen<'a> {
    display: Display,
    assets: ScreenAssets<'a>,
    config: QuizConfig,
}

impl<'a> Screen<'a> {
    pub fn new(
        canvas: Canvas<Window>,
        event_pump: EventPump,
        assets: ScreenAssets<'a>,
        config: QuizConfig,
    ) -> Self {
        Screen {
            display: Display {
                canvas,
                event_pump,
                input: InputSystem::new(),
                frame_delay: config.frame_delay(),
            },
            assets,
            config,
        }
    }
}

impl QuizFrontend for Screen<'_> {
    fn memorize(
        &mut self,
        image: &str,
        duration: Duration,
        countdown: &dyn Fn(u64) -> String,
    ) -> Result<StageOutcome<()>, QuizError> {
        let mut stage = TimedStage::new(duration, Instant::now());
        let (assets, config) = (&self.assets, &self.config);

        self.display.run_stage(&mut stage, |canvas, stage| {
            let banner = countdown(stage.remaining_secs(Instant::now()));
            memorize_screen::render(canvas, assets, config, image, &banner)
        })
    }

    fn select(&mut self, question: &Question) -> Result<StageOutcome<String>, QuizError> {
        let size = self.display.size()?;
        let grid = GridLayout::new(
            size,
            question.choices.len(),
            self.config.grid_columns,
            fraction_of(size, self.config.choice_fraction),
            self.config.grid_padding,
        );
        let (x, y) = self.display.pointer();
        let mut stage = SelectStage::new(&question.choices, grid).with_pointer(x, y);
        let (assets, config) = (&self.assets, &self.config);

        let outcome = self.display.run_stage(&mut stage, |canvas, stage| {
            question_screen::render(canvas, assets, config, &question.prompt, stage)
        })?;

        Ok(match outcome {
            StageOutcome::Done(selected) => {
                debug!("Clicked {}", selected);
                StageOutcome::Done(selected.to_string())
            }
            StageOutcome::Quit => StageOutcome::Quit,
        })
    }

    fn show_summary(&mut self, text: &str) -> Result<StageOutcome<()>, QuizError> {
        let mut stage = TimedStage::new(self.config.summary_hold, Instant::now());
        let (assets, config) = (&self.assets, &self.config);

        self.display.run_stage(&mut stage, |canvas, _| {
            summary_screen::render(canvas, assets, config, text)
        })
    }
}
