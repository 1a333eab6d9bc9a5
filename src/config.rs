//! Quiz Tuning Values
//!
//! All the numbers that shape the session live here, grouped the same way the
//! GUI style structs are: one struct, sensible `Default`, override a field with
//! struct update syntax when needed.
//!
//! ```rust
//! let config = QuizConfig {
//!     summary_hold: Duration::from_secs(2),
//!     ..Default::default()
//! };
//! ```

use sdl2::pixels::Color;
use std::time::Duration;

pub const WINDOW_TITLE: &str = "Memory Harness Game";

/// Colors used by every screen
#[derive(Debug, Clone)]
pub struct Palette {
    /// Gradient color at the top scan line
    pub background_top: Color,

    /// Gradient color at the bottom scan line
    pub background_bottom: Color,

    /// Prompt and summary text
    pub text: Color,

    /// Memorization countdown text
    pub timer: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background_top: Color::RGB(10, 10, 20),
            background_bottom: Color::RGB(30, 30, 40),
            text: Color::RGB(220, 220, 220),
            timer: Color::RGB(255, 200, 100),
        }
    }
}

/// Point sizes for the text roles
#[derive(Debug, Clone, Copy)]
pub struct FontSizes {
    /// Summary line
    pub title: u16,
    /// Prompts and the countdown
    pub text: u16,
}

impl Default for FontSizes {
    fn default() -> Self {
        FontSizes { title: 64, text: 40 }
    }
}

#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// How long the summary screen stays up before the session ends
    pub summary_hold: Duration,

    /// Number of columns in the choice grid
    pub grid_columns: u32,

    /// Gap between choice images in pixels
    pub grid_padding: u32,

    /// Choice image size as a fraction of the screen (per axis)
    pub choice_fraction: f32,

    /// Memorization image size as a fraction of the screen (per axis)
    pub reference_fraction: f32,

    /// Scale applied to the choice under the pointer
    pub hover_scale: f32,

    /// Y coordinate of the prompt and countdown lines
    pub header_y: i32,

    /// TrueType font tried first; the bitmap font is used if it can't be opened
    pub font_path: String,

    pub font_sizes: FontSizes,

    pub palette: Palette,

    /// Target frames per second for every stage loop
    pub frame_rate: u32,
}

impl QuizConfig {
    pub fn frame_delay(&self) -> Duration {
        Duration::new(0, 1_000_000_000u32 / self.frame_rate.max(1))
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            summary_hold: Duration::from_millis(4000),
            grid_columns: 2,
            grid_padding: 50,
            choice_fraction: 0.25,
            reference_fraction: 0.5,
            hover_scale: 1.05,
            header_y: 80,
            font_path: "assets/fonts/DejaVuSans-Bold.ttf".to_string(),
            font_sizes: FontSizes::default(),
            palette: Palette::default(),
            frame_rate: 60,
        }
    }
}
