//! Data-driven game balance
//!
//! Probabilities are per tick, timers are in milliseconds.

/// Balance knobs for spawning, power-up timers and level pacing
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    /// Base per-tick alien spawn probability
    pub alien_spawn_base: f64,
    /// Extra alien spawn probability per level
    pub alien_spawn_per_level: f64,
    /// Per-tick chance that a power-up drops from the top
    pub power_up_chance: f64,
    /// Chance that a destroyed alien earns another power-up roll
    pub kill_drop_chance: f64,
    /// Default delay between shots
    pub shoot_delay_ms: f64,
    /// Delay between shots while rapid fire is active
    pub rapid_shoot_delay_ms: f64,
    /// Shield duration
    pub shield_duration_ms: f64,
    /// Rapid fire duration
    pub rapid_fire_duration_ms: f64,
    /// Kills required per level (multiplied by the level number)
    pub kills_per_level: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            alien_spawn_base: 0.02,
            alien_spawn_per_level: 0.005,
            power_up_chance: 0.01,
            kill_drop_chance: 0.1,
            shoot_delay_ms: 300.0,
            rapid_shoot_delay_ms: 100.0,
            shield_duration_ms: 10_000.0,
            rapid_fire_duration_ms: 8_000.0,
            kills_per_level: 10,
        }
    }
}

impl Tuning {
    /// Per-tick alien spawn probability for a level
    pub fn alien_spawn_rate(&self, level: u32) -> f64 {
        self.alien_spawn_base + level as f64 * self.alien_spawn_per_level
    }

    /// Kills needed before a level can complete
    pub fn kills_to_clear(&self, level: u32) -> u32 {
        level.saturating_mul(self.kills_per_level)
    }

    /// Tuning with every random spawn disabled (scripted scenarios, demos)
    pub fn without_spawns() -> Self {
        Self {
            alien_spawn_base: 0.0,
            alien_spawn_per_level: 0.0,
            power_up_chance: 0.0,
            kill_drop_chance: 0.0,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_rate_scales_with_level() {
        let tuning = Tuning::default();
        assert!((tuning.alien_spawn_rate(1) - 0.025).abs() < 1e-9);
        assert!((tuning.alien_spawn_rate(4) - 0.04).abs() < 1e-9);
    }

    #[test]
    fn test_kills_to_clear() {
        let tuning = Tuning::default();
        assert_eq!(tuning.kills_to_clear(1), 10);
        assert_eq!(tuning.kills_to_clear(3), 30);
    }

    #[test]
    fn test_without_spawns_keeps_timers() {
        let tuning = Tuning::without_spawns();
        assert_eq!(tuning.alien_spawn_rate(50), 0.0);
        assert_eq!(tuning.shoot_delay_ms, 300.0);
    }
}
