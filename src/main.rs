use env_logger::Env;
use log::{error, info, warn};
use sdl2::image::InitFlag;
use std::process::ExitCode;

mod assets;
mod audio;
mod config;
mod error;
mod frontend;
mod gui;
mod input_system;
mod layout;
mod quiz;
mod render;
mod stage;
mod text;

use assets::TextureCache;
use audio::CueBank;
use config::{QuizConfig, WINDOW_TITLE};
use error::QuizError;
use frontend::Screen;
use gui::ScreenAssets;
use quiz::{run_session, QuestionSet, SessionEnd};
use text::Fonts;

/// Fallback window size if the desktop mode can't be read
const FALLBACK_SIZE: (u32, u32) = (1280, 720);

/// Size of the primary display, used for the fullscreen window
fn desktop_size(video_subsystem: &sdl2::VideoSubsystem) -> (u32, u32) {
    match video_subsystem.desktop_display_mode(0) {
        Ok(mode) => (mode.w as u32, mode.h as u32),
        Err(e) => {
            warn!("Could not read desktop display mode ({}), using {:?}", e, FALLBACK_SIZE);
            FALLBACK_SIZE
        }
    }
}

/// Set up SDL, load every asset, run the session
///
/// SDL contexts are locals here, so they are released in reverse order on
/// every return path, including a quit and an error.
fn run() -> Result<(), QuizError> {
    let config = QuizConfig::default();
    let questions = QuestionSet::builtin()?;
    info!("Loaded {} questions", questions.len());

    let sdl_context = sdl2::init().map_err(QuizError::Init)?;
    let video_subsystem = sdl_context.video().map_err(QuizError::Init)?;
    let _audio_subsystem = sdl_context.audio().map_err(QuizError::Init)?;
    let _image_context =
        sdl2::image::init(InitFlag::PNG | InitFlag::JPG).map_err(QuizError::Init)?;

    // Text still works without SDL_ttf, just in the bitmap font
    let ttf_context = match sdl2::ttf::init() {
        Ok(context) => Some(context),
        Err(e) => {
            warn!("SDL_ttf unavailable ({}), text will use the bitmap font", e);
            None
        }
    };

    // Smooth scaling for the choice images
    sdl2::hint::set("SDL_RENDER_SCALE_QUALITY", "1");

    let (width, height) = desktop_size(&video_subsystem);
    let window = video_subsystem
        .window(WINDOW_TITLE, width, height)
        .fullscreen_desktop()
        .build()
        .map_err(|e| QuizError::Init(e.to_string()))?;
    let canvas = window
        .into_canvas()
        .build()
        .map_err(|e| QuizError::Init(e.to_string()))?;
    info!("Window {}x{}", width, height);

    let texture_creator = canvas.texture_creator();
    let event_pump = sdl_context.event_pump().map_err(QuizError::Init)?;

    let mut cues = CueBank::open(questions.questions.iter().map(|q| q.cue.as_str()))?;
    let assets = ScreenAssets {
        textures: TextureCache::load(&texture_creator, questions.image_files())?,
        fonts: Fonts::load(ttf_context.as_ref(), &config),
        texture_creator: &texture_creator,
    };

    let mut screen = Screen::new(canvas, event_pump, assets, config);

    match run_session(&mut screen, &mut cues, &questions)? {
        SessionEnd::Completed(summary) => info!("Final score: {}", summary),
        SessionEnd::Aborted => info!("Session ended by player"),
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
