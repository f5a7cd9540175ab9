//! HUD text and overlay screens
//!
//! Counters are formatted the way the cabinet shows them: five-digit score,
//! two-digit level, one heart per life.

use crate::sim::{GamePhase, GameState};

const HEART: &str = "❤️";

pub fn format_score(score: u64) -> String {
    format!("{:05}", score)
}

pub fn format_level(level: u32) -> String {
    format!("{:02}", level)
}

pub fn format_lives(lives: u8) -> String {
    HEART.repeat(lives as usize)
}

/// Formatted HUD counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudSnapshot {
    pub score: String,
    pub high_score: String,
    pub level: String,
    pub lives: String,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: format_score(state.score),
            high_score: format_score(state.high_score),
            level: format_level(state.level),
            lives: format_lives(state.lives),
        }
    }
}

/// Run summary shown on the game over screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalStats {
    pub score: String,
    pub level: String,
    pub aliens_destroyed: u32,
    /// The run beat the stored high score
    pub new_high_score: bool,
}

/// Overlay shown on top of the canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Start,
    Playing,
    Paused,
    LevelComplete,
    GameOver(FinalStats),
}

impl Screen {
    /// Overlay for the session's current phase
    pub fn for_state(state: &GameState, new_high_score: bool) -> Self {
        match state.phase {
            GamePhase::Idle => Screen::Start,
            GamePhase::Running => Screen::Playing,
            GamePhase::Paused => Screen::Paused,
            GamePhase::LevelComplete => Screen::LevelComplete,
            GamePhase::GameOver => Screen::GameOver(FinalStats {
                score: format_score(state.score),
                level: format_level(state.level),
                aliens_destroyed: state.aliens_destroyed,
                new_high_score,
            }),
        }
    }
}
