//! Alien and power-up spawning
//!
//! Spawn chances are rolled once per tick. The alien type policy checks
//! level-gated thresholds in order against a single roll, so higher tiers do
//! not form a normalized distribution (boss stays at 5% from level 4 onward).

use rand::Rng;

use super::entities::{Alien, AlienKind, PowerUp, PowerUpKind};
use crate::tuning::Tuning;

/// Pick an alien type for `level` from a uniform roll in `[0, 1)`
pub fn alien_kind_for_roll(level: u32, roll: f64) -> AlienKind {
    if level >= 4 && roll < 0.05 {
        AlienKind::Boss
    } else if level >= 3 && roll < 0.1 {
        AlienKind::Large
    } else if level >= 2 && roll < 0.2 {
        AlienKind::Medium
    } else {
        AlienKind::Small
    }
}

/// Roll this tick's alien spawn
pub fn roll_alien(
    level: u32,
    arena_width: f32,
    tuning: &Tuning,
    rng: &mut impl Rng,
) -> Option<Alien> {
    if rng.random::<f64>() >= tuning.alien_spawn_rate(level) {
        return None;
    }
    let kind = alien_kind_for_roll(level, rng.random::<f64>());
    log::debug!("Spawning {:?} alien (level {})", kind, level);
    Some(Alien::spawn(kind, arena_width, rng))
}

/// Roll for a power-up of uniformly random type
pub fn roll_power_up(arena_width: f32, tuning: &Tuning, rng: &mut impl Rng) -> Option<PowerUp> {
    if rng.random::<f64>() >= tuning.power_up_chance {
        return None;
    }
    let kind = PowerUpKind::ALL[rng.random_range(0..PowerUpKind::ALL.len())];
    log::debug!("Spawning {:?} power-up", kind);
    Some(PowerUp::spawn(kind, arena_width, rng))
}

/// Roll the bonus power-up granted for destroying an alien
///
/// A successful kill-drop roll only earns another ordinary power-up roll.
pub fn roll_kill_drop(arena_width: f32, tuning: &Tuning, rng: &mut impl Rng) -> Option<PowerUp> {
    if rng.random::<f64>() >= tuning.kill_drop_chance {
        return None;
    }
    roll_power_up(arena_width, tuning, rng)
}
