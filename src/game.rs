//! Frame driver
//!
//! Owns the session together with its persistent side: settings, the stored
//! high score and the clock. Each frame ticks the simulation once, hands the
//! resulting events to the audio and HUD sinks, and paints the scene.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::STAR_COUNT;
use crate::error::PlatformError;
use crate::hud::{HudSnapshot, Screen};
use crate::persistence;
use crate::platform::{AudioSink, Clock, HudSink, Storage};
use crate::renderer::{self, RenderOptions, Starfield, Surface};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use crate::tuning::Tuning;

/// Stream id separating the starfield RNG from the simulation's
const SKY_STREAM: u64 = 0x5ca1_ab1e;

pub struct Game<S: Storage, C: Clock> {
    state: GameState,
    settings: Settings,
    storage: S,
    clock: C,
    starfield: Starfield,
    sky_rng: Pcg32,
    /// High score as currently persisted
    stored_high_score: u64,
    /// Set when the last finished run beat the stored high score
    new_high_score: bool,
    /// Phase seen at the last sync, to detect overlay changes
    last_phase: GamePhase,
}

impl<S: Storage, C: Clock> Game<S, C> {
    pub fn new(storage: S, clock: C, tuning: Tuning, arena: Vec2, seed: u64) -> Self {
        let settings = Settings::load(&storage);
        let stored_high_score = persistence::load_high_score(&storage);

        let mut state = GameState::new(seed, arena, tuning, stored_high_score);
        state.sound_enabled = settings.sound_enabled;

        let mut sky_rng = Pcg32::new(seed, SKY_STREAM);
        let starfield = Starfield::generate(arena, STAR_COUNT, &mut sky_rng);

        log::info!(
            "Game ready (seed {}, high score {})",
            seed,
            stored_high_score
        );

        Self {
            state,
            settings,
            storage,
            clock,
            starfield,
            sky_rng,
            stored_high_score,
            new_high_score: false,
            last_phase: GamePhase::Idle,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn stored_high_score(&self) -> u64 {
        self.stored_high_score
    }

    /// Start a new run (also used for play again and restart)
    ///
    /// A run abandoned mid-session still keeps its record.
    pub fn start(&mut self) {
        if self.state.is_running() {
            self.save_high_score(self.state.score);
        }
        self.new_high_score = false;
        self.state.start();
    }

    pub fn toggle_pause(&mut self) {
        self.state.toggle_pause();
    }

    /// Continue after a level is complete; returns false in any other phase
    pub fn next_level(&mut self) -> bool {
        self.state.advance_level()
    }

    /// Flip sound on/off and persist the choice; returns the new setting
    pub fn toggle_sound(&mut self) -> bool {
        let enabled = self.state.toggle_sound();
        self.settings.sound_enabled = enabled;
        if let Err(e) = self.settings.save(&mut self.storage) {
            log::warn!("Failed to save settings: {}", e);
        }
        enabled
    }

    /// Adopt a new canvas size; the sky is regenerated to fill it
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
        self.starfield = Starfield::generate(self.state.arena, STAR_COUNT, &mut self.sky_rng);
    }

    /// Forget the persisted high score
    pub fn clear_scores(&mut self) -> Result<(), PlatformError> {
        persistence::clear_high_score(&mut self.storage)?;
        self.stored_high_score = 0;
        self.state.high_score = self.state.score;
        self.state.refresh_hud();
        log::info!("High score cleared");
        Ok(())
    }

    /// Run one animation frame; returns whether another frame should be scheduled
    pub fn frame(
        &mut self,
        input: &TickInput,
        audio: &mut impl AudioSink,
        hud: &mut impl HudSink,
        surface: Option<&mut dyn Surface>,
    ) -> bool {
        if self.state.phase == GamePhase::Running {
            let now = self.clock.now_ms();
            tick(&mut self.state, input, now);
        }

        self.sync(audio, hud);

        if let Some(surface) = surface {
            self.render(surface);
        }

        self.state.wants_frames()
    }

    /// Deliver pending events and overlay changes to the sinks
    pub fn sync(&mut self, audio: &mut impl AudioSink, hud: &mut impl HudSink) {
        let mut hud_dirty = false;
        for event in self.state.drain_events() {
            match event {
                GameEvent::Sound(cue) => {
                    if let Err(e) = audio.play(cue) {
                        log::warn!("Sound {:?} failed: {}", cue, e);
                    }
                }
                GameEvent::HudChanged => hud_dirty = true,
                GameEvent::LevelComplete => {}
                GameEvent::GameOver => self.record_high_score(),
            }
        }

        if hud_dirty {
            hud.refresh(&HudSnapshot::from_state(&self.state));
        }

        if self.state.phase != self.last_phase {
            hud.show(&Screen::for_state(&self.state, self.new_high_score));
            self.last_phase = self.state.phase;
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        renderer::draw_frame(
            &self.state,
            &self.starfield,
            RenderOptions::from(&self.settings),
            surface,
        );
    }

    /// Persist the final score if it beats the stored one
    fn record_high_score(&mut self) {
        if self.save_high_score(self.state.score) {
            self.new_high_score = true;
        }
    }

    /// Write `score` when it beats the stored value; returns whether it did
    fn save_high_score(&mut self, score: u64) -> bool {
        if score <= self.stored_high_score {
            return false;
        }
        match persistence::save_high_score(&mut self.storage, score) {
            Ok(()) => {
                log::info!("New high score: {}", score);
                self.stored_high_score = score;
            }
            Err(e) => log::warn!("Failed to save high score: {}", e),
        }
        true
    }
}
