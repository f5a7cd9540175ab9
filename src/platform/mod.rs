//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (`Clock`)
//! - Input events (keyboard and touch buttons)
//! - Storage (LocalStorage on web, in-memory elsewhere)
//! - Audio and HUD sinks fed by the game driver

pub mod input;
pub mod storage;
pub mod time;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{InputState, KeyAction, TouchButton};
pub use storage::{MemoryStorage, Storage};
pub use time::{Clock, ManualClock};

#[cfg(not(target_arch = "wasm32"))]
pub use time::SystemClock;

use crate::error::PlatformError;
use crate::hud::{HudSnapshot, Screen};
use crate::sim::SoundCue;

/// Fire-and-forget sound playback
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue) -> Result<(), PlatformError>;
}

/// Receives HUD counter refreshes and overlay changes
pub trait HudSink {
    fn refresh(&mut self, hud: &HudSnapshot);
    fn show(&mut self, screen: &Screen);
}

/// Audio sink that discards every cue (native builds, headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) -> Result<(), PlatformError> {
        Ok(())
    }
}

/// HUD sink that logs overlay changes and ignores counters
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHud;

impl HudSink for LogHud {
    fn refresh(&mut self, _hud: &HudSnapshot) {}

    fn show(&mut self, screen: &Screen) {
        log::info!("Screen: {:?}", screen);
    }
}
