//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - Time arrives as an explicit timestamp argument
//! - Randomness comes from the session's own RNG
//! - Collaborators are reached only through drained `GameEvent`s

pub mod collision;
pub mod entities;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Bounded, Rect, collides, overlaps};
pub use entities::{
    Alien, AlienKind, AlienStats, AlienStatus, Bullet, Particle, Player, PowerUp, PowerUpKind,
};
pub use state::{GameEvent, GamePhase, GameState, SoundCue};
pub use tick::{TickInput, apply_power_up, tick};
