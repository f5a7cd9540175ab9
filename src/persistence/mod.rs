//! High score persistence
//!
//! A single key holds the best score as a plain decimal string. Anything
//! unreadable is treated as "no high score yet".

use crate::error::PlatformError;
use crate::platform::Storage;

/// Storage key of the high score
pub const HIGH_SCORE_KEY: &str = "spaceShooterHighScore";

/// Parse a stored high score; `None` for malformed data
pub fn parse_high_score(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if let Ok(score) = raw.parse::<u64>() {
        return Some(score);
    }
    // Numbers written by older builds may carry a fraction ("1200.0")
    raw.parse::<f64>()
        .ok()
        .filter(|score| score.is_finite() && *score >= 0.0)
        .map(|score| score as u64)
}

/// Load the stored high score, falling back to zero
pub fn load_high_score(storage: &impl Storage) -> u64 {
    match storage.get(HIGH_SCORE_KEY) {
        Ok(Some(raw)) => parse_high_score(&raw).unwrap_or_else(|| {
            log::warn!("Ignoring malformed high score {:?}", raw);
            0
        }),
        Ok(None) => {
            log::info!("No high score found, starting fresh");
            0
        }
        Err(e) => {
            log::warn!("High score unavailable: {}", e);
            0
        }
    }
}

pub fn save_high_score(storage: &mut impl Storage, score: u64) -> Result<(), PlatformError> {
    storage.set(HIGH_SCORE_KEY, &score.to_string())
}

pub fn clear_high_score(storage: &mut impl Storage) -> Result<(), PlatformError> {
    storage.remove(HIGH_SCORE_KEY)
}
