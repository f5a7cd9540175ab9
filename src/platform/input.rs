//! Keyboard and touch input
//!
//! Movement follows held keys and touch buttons. Firing is edge-triggered:
//! each Space keydown (including key auto-repeat) or shoot-button tap queues
//! one shot attempt for the next tick, subject to the ship's cooldown.

use std::collections::HashSet;

use crate::sim::TickInput;

const LEFT_KEYS: [&str; 3] = ["ArrowLeft", "a", "A"];
const RIGHT_KEYS: [&str; 3] = ["ArrowRight", "d", "D"];
const FIRE_KEY: &str = " ";

/// On-screen touch controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchButton {
    Left,
    Right,
    Shoot,
}

/// Side effects of a keydown beyond the tick input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    /// Caller should prevent the browser default (page scroll on Space)
    Fire,
    TogglePause,
}

/// Accumulated input between ticks
#[derive(Debug, Default, Clone)]
pub struct InputState {
    held: HashSet<String>,
    touch_left: bool,
    touch_right: bool,
    fire_queued: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) -> KeyAction {
        self.held.insert(key.to_string());
        match key {
            FIRE_KEY => {
                self.fire_queued = true;
                KeyAction::Fire
            }
            "p" | "P" => KeyAction::TogglePause,
            _ => KeyAction::None,
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(key);
    }

    pub fn touch(&mut self, button: TouchButton, pressed: bool) {
        match button {
            TouchButton::Left => self.touch_left = pressed,
            TouchButton::Right => self.touch_right = pressed,
            TouchButton::Shoot => {
                if pressed {
                    self.fire_queued = true;
                }
            }
        }
    }

    /// Forget a shot queued while the session could not use it
    pub fn cancel_fire(&mut self) {
        self.fire_queued = false;
    }

    /// Drop everything held (window lost focus)
    pub fn release_all(&mut self) {
        self.held.clear();
        self.touch_left = false;
        self.touch_right = false;
        self.fire_queued = false;
    }

    fn any_held(&self, keys: &[&str]) -> bool {
        keys.iter().any(|key| self.held.contains(*key))
    }

    /// Snapshot for the next tick; consumes the queued shot
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            left: self.touch_left || self.any_held(&LEFT_KEYS),
            right: self.touch_right || self.any_held(&RIGHT_KEYS),
            fire: self.fire_queued,
        };
        self.fire_queued = false;
        input
    }
}
