//! Session state and the phase state machine
//!
//! One `GameState` is one play-through: counters, the entity collections and
//! the events produced for the collaborators since the last drain.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entities::{Alien, Bullet, Particle, Player, PowerUp};
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Before the first start
    Idle,
    /// Active gameplay
    Running,
    /// Paused by the player
    Paused,
    /// Level target reached, waiting for an explicit advance
    LevelComplete,
    /// Out of lives
    GameOver,
}

/// Sound cues requested by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Shoot,
    Explosion,
    PowerUp,
}

/// Notifications for the collaborators, drained by the driver after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Play a sound (only emitted while sound is enabled)
    Sound(SoundCue),
    /// Score, lives or level changed
    HudChanged,
    LevelComplete,
    GameOver,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: u64,
    /// Best score seen, seeded from storage
    pub high_score: u64,
    pub lives: u8,
    /// Current level (1-based)
    pub level: u32,
    pub aliens_destroyed: u32,
    pub sound_enabled: bool,
    /// Playfield size in pixels
    pub arena: Vec2,
    pub tuning: Tuning,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    pub power_ups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
    pub rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create an idle session
    pub fn new(seed: u64, arena: Vec2, tuning: Tuning, high_score: u64) -> Self {
        let player = Player::new(arena, &tuning);
        Self {
            phase: GamePhase::Idle,
            score: 0,
            high_score,
            lives: STARTING_LIVES,
            level: 1,
            aliens_destroyed: 0,
            sound_enabled: true,
            arena,
            tuning,
            player,
            bullets: Vec::new(),
            aliens: Vec::new(),
            power_ups: Vec::new(),
            particles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// True from start until game over, including while paused
    pub fn is_running(&self) -> bool {
        matches!(
            self.phase,
            GamePhase::Running | GamePhase::Paused | GamePhase::LevelComplete
        )
    }

    /// True while the frame loop is suspended mid-session
    pub fn is_paused(&self) -> bool {
        matches!(self.phase, GamePhase::Paused | GamePhase::LevelComplete)
    }

    /// Whether the next frame should be scheduled
    pub fn wants_frames(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Reset counters, the ship and all collections; keeps high score and sound
    pub fn reset(&mut self) {
        self.player = Player::new(self.arena, &self.tuning);
        self.bullets.clear();
        self.aliens.clear();
        self.power_ups.clear();
        self.particles.clear();
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.level = 1;
        self.aliens_destroyed = 0;
        self.refresh_hud();
    }

    /// Begin a fresh run (from idle, game over, or as a restart)
    pub fn start(&mut self) {
        self.reset();
        self.phase = GamePhase::Running;
        log::info!("Game started");
    }

    /// Toggle between running and paused; other phases are left alone
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            other => other,
        };
    }

    /// Move on from a completed level; returns false outside `LevelComplete`
    pub fn advance_level(&mut self) -> bool {
        if self.phase != GamePhase::LevelComplete {
            return false;
        }
        self.level += 1;
        self.phase = GamePhase::Running;
        self.refresh_hud();
        log::info!("Advancing to level {}", self.level);
        true
    }

    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    /// Adopt a new playfield size, keeping the ship inside it
    pub fn resize(&mut self, width: f32, height: f32) {
        self.arena = Vec2::new(width, height);
        self.player.pos.y = height - PLAYER_BOTTOM_OFFSET;
        self.player.clamp_to(width);
    }

    /// Signal a HUD refresh, raising the high score if it was beaten
    pub fn refresh_hud(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        self.events.push(GameEvent::HudChanged);
    }

    pub fn play_sound(&mut self, cue: SoundCue) {
        if self.sound_enabled {
            self.events.push(GameEvent::Sound(cue));
        }
    }

    /// Burst of particles in the given color, with an explosion sound
    pub fn explode(&mut self, center: Vec2, color: &'static str) {
        for _ in 0..EXPLOSION_PARTICLES {
            let particle = Particle::burst(center, color, &mut self.rng);
            self.particles.push(particle);
        }
        self.play_sound(SoundCue::Explosion);
    }

    pub(crate) fn complete_level(&mut self) {
        self.phase = GamePhase::LevelComplete;
        self.events.push(GameEvent::LevelComplete);
        log::info!(
            "Level {} complete ({} aliens destroyed)",
            self.level,
            self.aliens_destroyed
        );
    }

    pub(crate) fn end_game(&mut self) {
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver);
        log::info!(
            "Game over: score {}, level {}, {} aliens destroyed",
            self.score,
            self.level,
            self.aliens_destroyed
        );
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
