//! Per-frame simulation tick
//!
//! Advances every entity collection by one step and resolves collisions.
//! The order of the steps and the reverse iteration over aliens, bullets and
//! power-ups are significant: they decide which bullet hits which alien when
//! several overlap.

use super::collision::{Bounded, collides, overlaps};
use super::entities::{Alien, AlienStatus, Particle, PowerUpKind};
use super::spawn;
use super::state::{GamePhase, GameState, SoundCue};
use crate::consts::MAX_LIVES;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left (keyboard or touch)
    pub left: bool,
    /// Move right (keyboard or touch)
    pub right: bool,
    /// Fire held or tapped
    pub fire: bool,
}

/// Advance the session by one frame
///
/// `now` is the wall-clock time in milliseconds, used for the shot cooldown
/// and power-up expiry. Does nothing unless the session is running.
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) {
    if state.phase != GamePhase::Running {
        return;
    }
    let arena = state.arena;

    // Player
    state.player.advance(input, now, arena.x);
    if input.fire && state.player.fire(now, &mut state.bullets) {
        state.play_sound(SoundCue::Shoot);
    }

    // Spawning
    if let Some(alien) = spawn::roll_alien(state.level, arena.x, &state.tuning, &mut state.rng) {
        state.aliens.push(alien);
    }
    if let Some(power_up) = spawn::roll_power_up(arena.x, &state.tuning, &mut state.rng) {
        state.power_ups.push(power_up);
    }

    state.bullets.retain_mut(|bullet| !bullet.advance());

    if !update_aliens(state) {
        // Out of lives: the rest of the frame is skipped
        return;
    }

    update_power_ups(state, now);

    state.particles.retain_mut(Particle::advance);

    if state.aliens.is_empty()
        && state.aliens_destroyed >= state.tuning.kills_to_clear(state.level)
    {
        state.complete_level();
    }
}

/// Move aliens and resolve bullet hits; returns false if the game ended
fn update_aliens(state: &mut GameState) -> bool {
    let arena_height = state.arena.y;

    let mut i = state.aliens.len();
    while i > 0 {
        i -= 1;

        if state.aliens[i].advance(arena_height) == AlienStatus::ReachedBottom {
            state.aliens.remove(i);
            if !state.player.shield {
                state.lives = state.lives.saturating_sub(1);
                state.refresh_hud();
                if state.lives == 0 {
                    state.end_game();
                    return false;
                }
            }
            continue;
        }

        let target = state.aliens[i].bounds();
        let Some(j) = state
            .bullets
            .iter()
            .rposition(|bullet| overlaps(&bullet.bounds(), &target))
        else {
            continue;
        };

        state.bullets.remove(j);
        if state.aliens[i].hit() {
            let alien = state.aliens.remove(i);
            destroy_alien(state, &alien);

            let arena_width = state.arena.x;
            if let Some(power_up) =
                spawn::roll_kill_drop(arena_width, &state.tuning, &mut state.rng)
            {
                state.power_ups.push(power_up);
            }
            state.refresh_hud();
        }
    }

    true
}

/// Score a destroyed alien and blow it up
fn destroy_alien(state: &mut GameState, alien: &Alien) {
    state.score += alien.points();
    state.aliens_destroyed += 1;
    state.explode(alien.center(), alien.stats().color);
}

/// Move power-ups and collect the ones touching the ship
fn update_power_ups(state: &mut GameState, now: f64) {
    let arena_height = state.arena.y;

    let mut i = state.power_ups.len();
    while i > 0 {
        i -= 1;

        if state.power_ups[i].advance(arena_height) {
            state.power_ups.remove(i);
            continue;
        }

        if collides(&state.player, &state.power_ups[i]) {
            let power_up = state.power_ups.remove(i);
            apply_power_up(state, power_up.kind, now);
            state.refresh_hud();
            state.play_sound(SoundCue::PowerUp);
        }
    }
}

/// Apply a collected power-up's effect
pub fn apply_power_up(state: &mut GameState, kind: PowerUpKind, now: f64) {
    log::debug!("Collected {:?}", kind);
    match kind {
        PowerUpKind::Shield => {
            let duration = state.tuning.shield_duration_ms;
            state.player.activate_shield(now, duration);
        }
        PowerUpKind::RapidFire => {
            let duration = state.tuning.rapid_fire_duration_ms;
            let delay = state.tuning.rapid_shoot_delay_ms;
            state.player.activate_rapid_fire(now, duration, delay);
        }
        PowerUpKind::Bomb => {
            let aliens = std::mem::take(&mut state.aliens);
            for alien in &aliens {
                destroy_alien(state, alien);
            }
        }
        PowerUpKind::Life => {
            state.lives = (state.lives + 1).min(MAX_LIVES);
        }
    }
}
