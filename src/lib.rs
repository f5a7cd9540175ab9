//! Space Shooter - A wave-based arcade shooter
//!
//! Core modules:
//! - `sim`: Simulation (entities, spawning, collisions, session state)
//! - `renderer`: Drawing surface abstraction and frame layering
//! - `platform`: Browser/native collaborators (clock, storage, audio, HUD, input)
//! - `persistence`: High score storage
//! - `settings`: Player preferences (sound, volume, effects)
//! - `hud`: HUD text and overlay screen model
//! - `tuning`: Data-driven game balance
//! - `game`: Frame driver tying the simulation to its collaborators

pub mod error;
pub mod game;
pub mod hud;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod audio;

pub use error::PlatformError;
pub use game::Game;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Default arena dimensions (the canvas is resized to its container at runtime)
    pub const DEFAULT_ARENA_WIDTH: f32 = 800.0;
    pub const DEFAULT_ARENA_HEIGHT: f32 = 600.0;

    /// Player ship
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Distance of the ship's top edge from the bottom of the arena
    pub const PLAYER_BOTTOM_OFFSET: f32 = 100.0;
    /// Inset of the outer guns used during rapid fire
    pub const RAPID_FIRE_GUN_INSET: f32 = 10.0;

    /// Bullets
    pub const BULLET_WIDTH: f32 = 3.0;
    pub const BULLET_HEIGHT: f32 = 15.0;
    pub const BULLET_SPEED: f32 = 10.0;

    /// Horizontal drift amplitude of an alien around its anchor
    pub const ALIEN_DRIFT_AMPLITUDE: f32 = 50.0;

    /// Power-ups
    pub const POWER_UP_SIZE: f32 = 30.0;
    pub const POWER_UP_SPEED: f32 = 2.0;

    /// Lives
    pub const STARTING_LIVES: u8 = 3;
    pub const MAX_LIVES: u8 = 5;

    /// Explosions
    pub const EXPLOSION_PARTICLES: usize = 20;
    pub const PARTICLE_LIFE_TICKS: u32 = 30;
    pub const PARTICLE_GRAVITY: f32 = 0.1;
    pub const PARTICLE_SHRINK: f32 = 0.95;
    pub const PARTICLE_MAX_SPEED: f32 = 3.0;
    pub const PARTICLE_MIN_SIZE: f32 = 2.0;
    pub const PARTICLE_SIZE_RANGE: f32 = 5.0;

    /// Background stars
    pub const STAR_COUNT: usize = 100;
}
