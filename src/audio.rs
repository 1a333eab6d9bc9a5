//! Sound cues played through SDL2_mixer
//!
//! All cues are decoded up front so a missing sound file stops the program
//! before the quiz starts, not in the middle of it.

use crate::error::QuizError;
use crate::quiz::CuePlayer;
use log::{debug, info};
use sdl2::mixer::{self, Channel, Chunk, InitFlag, Sdl2MixerContext, AUDIO_S16LSB, DEFAULT_CHANNELS};
use std::collections::HashMap;

const FREQUENCY: i32 = 44_100;
const CHUNK_SIZE: i32 = 1_024;
const MIXING_CHANNELS: i32 = 8;

/// Open mixer plus every decoded cue
///
/// Dropping the bank frees the chunks and closes the audio device.
pub struct CueBank {
    chunks: HashMap<String, Chunk>,
    _mixer: Sdl2MixerContext,
}

impl CueBank {
    /// Open the audio device and load each named cue file once
    pub fn open<'n>(cues: impl IntoIterator<Item = &'n str>) -> Result<Self, QuizError> {
        let mixer_context = mixer::init(InitFlag::MP3 | InitFlag::OGG).map_err(QuizError::Audio)?;
        mixer::open_audio(FREQUENCY, AUDIO_S16LSB, DEFAULT_CHANNELS, CHUNK_SIZE).map_err(QuizError::Audio)?;
        mixer::allocate_channels(MIXING_CHANNELS);

        // Build the bank before loading so a failed load still closes the device
        let mut bank = CueBank {
            chunks: HashMap::new(),
            _mixer: mixer_context,
        };

        for name in cues {
            if bank.chunks.contains_key(name) {
                continue;
            }
            let chunk = Chunk::from_file(name).map_err(|e| QuizError::asset(name, e))?;
            debug!("Loaded cue {}", name);
            bank.chunks.insert(name.to_string(), chunk);
        }

        info!("Audio ready with {} cues", bank.chunks.len());
        Ok(bank)
    }
}

impl CuePlayer for CueBank {
    fn play_cue(&mut self, cue: &str) -> Result<(), QuizError> {
        let chunk = self
            .chunks
            .get(cue)
            .ok_or_else(|| QuizError::asset(cue, "cue was not preloaded"))?;
        Channel::all().play(chunk, 0).map_err(QuizError::Audio)?;
        debug!("Playing cue {}", cue);
        Ok(())
    }
}

impl Drop for CueBank {
    fn drop(&mut self) {
        // Chunks go before the device they play on
        self.chunks.clear();
        mixer::close_audio();
    }
}
