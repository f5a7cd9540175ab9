//! Entity kinds: the player ship, bullets, aliens, power-ups and particles
//!
//! Entities carry no identity beyond their slot in a collection. Each one
//! advances itself by a single tick; interactions between entities are
//! resolved by the tick.

use glam::Vec2;
use rand::Rng;

use super::collision::{Bounded, Rect};
use super::tick::TickInput;
use crate::consts::*;
use crate::tuning::Tuning;

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub speed: f32,
    /// Timestamp (ms) of the last volley
    pub last_shot: f64,
    /// Current delay between volleys (ms)
    pub shoot_delay: f64,
    /// Delay restored when rapid fire runs out
    base_shoot_delay: f64,
    pub shield: bool,
    pub shield_until: f64,
    pub rapid_fire: bool,
    pub rapid_fire_until: f64,
}

impl Player {
    /// Create a ship centered horizontally near the bottom of the arena
    pub fn new(arena: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                arena.x / 2.0 - PLAYER_WIDTH / 2.0,
                arena.y - PLAYER_BOTTOM_OFFSET,
            ),
            speed: PLAYER_SPEED,
            last_shot: 0.0,
            shoot_delay: tuning.shoot_delay_ms,
            base_shoot_delay: tuning.shoot_delay_ms,
            shield: false,
            shield_until: 0.0,
            rapid_fire: false,
            rapid_fire_until: 0.0,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT) / 2.0
    }

    /// Move from the input snapshot, clamp to the arena, expire timed effects
    pub fn advance(&mut self, input: &TickInput, now: f64, arena_width: f32) {
        if input.left {
            self.pos.x -= self.speed;
        }
        if input.right {
            self.pos.x += self.speed;
        }
        self.clamp_to(arena_width);

        if self.shield && now > self.shield_until {
            self.shield = false;
        }
        if self.rapid_fire && now > self.rapid_fire_until {
            self.rapid_fire = false;
            self.shoot_delay = self.base_shoot_delay;
        }
    }

    /// Keep the ship fully inside `[0, arena_width]`
    pub fn clamp_to(&mut self, arena_width: f32) {
        let max_x = (arena_width - PLAYER_WIDTH).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);
    }

    /// Fire a volley if the cooldown has elapsed
    ///
    /// Appends one bullet (three under rapid fire) and returns true when a
    /// volley was fired.
    pub fn fire(&mut self, now: f64, bullets: &mut Vec<Bullet>) -> bool {
        if now - self.last_shot <= self.shoot_delay {
            return false;
        }
        self.last_shot = now;

        let y = self.pos.y;
        if self.rapid_fire {
            bullets.push(Bullet::centered(self.pos.x + RAPID_FIRE_GUN_INSET, y));
            bullets.push(Bullet::centered(self.pos.x + PLAYER_WIDTH / 2.0, y));
            bullets.push(Bullet::centered(
                self.pos.x + PLAYER_WIDTH - RAPID_FIRE_GUN_INSET,
                y,
            ));
        } else {
            bullets.push(Bullet::centered(self.pos.x + PLAYER_WIDTH / 2.0, y));
        }
        true
    }

    pub fn activate_shield(&mut self, now: f64, duration_ms: f64) {
        self.shield = true;
        self.shield_until = now + duration_ms;
    }

    pub fn activate_rapid_fire(&mut self, now: f64, duration_ms: f64, delay_ms: f64) {
        self.rapid_fire = true;
        self.rapid_fire_until = now + duration_ms;
        self.shoot_delay = delay_ms;
    }
}

impl Bounded for Player {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

/// A player bullet travelling straight up
#[derive(Debug, Clone)]
pub struct Bullet {
    /// Top-left corner
    pub pos: Vec2,
}

impl Bullet {
    /// Bullet whose horizontal center is `center_x`
    pub fn centered(center_x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(center_x - BULLET_WIDTH / 2.0, y),
        }
    }

    /// Move up; returns true once it has left the top of the arena
    pub fn advance(&mut self) -> bool {
        self.pos.y -= BULLET_SPEED;
        self.pos.y < 0.0
    }
}

impl Bounded for Bullet {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, BULLET_WIDTH, BULLET_HEIGHT)
    }
}

/// Alien types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlienKind {
    Small,
    Medium,
    Large,
    Boss,
}

/// Per-kind alien attributes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlienStats {
    /// Width and height (aliens are square)
    pub size: f32,
    /// Downward speed per tick
    pub speed: f32,
    pub health: u32,
    pub points: u64,
    pub color: &'static str,
}

const ALIEN_TABLE: [AlienStats; 4] = [
    AlienStats {
        size: 30.0,
        speed: 1.5,
        health: 1,
        points: 100,
        color: "#00ffaa",
    },
    AlienStats {
        size: 50.0,
        speed: 1.0,
        health: 2,
        points: 250,
        color: "#ffaa00",
    },
    AlienStats {
        size: 70.0,
        speed: 0.7,
        health: 3,
        points: 500,
        color: "#ff5500",
    },
    AlienStats {
        size: 100.0,
        speed: 0.3,
        health: 10,
        points: 1000,
        color: "#ff00ff",
    },
];

impl AlienKind {
    pub const ALL: [AlienKind; 4] = [
        AlienKind::Small,
        AlienKind::Medium,
        AlienKind::Large,
        AlienKind::Boss,
    ];

    pub fn stats(self) -> &'static AlienStats {
        &ALIEN_TABLE[self as usize]
    }
}

/// Result of advancing an alien
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlienStatus {
    Alive,
    ReachedBottom,
}

/// A descending alien that drifts sideways around its anchor
#[derive(Debug, Clone)]
pub struct Alien {
    pub kind: AlienKind,
    /// Top-left corner
    pub pos: Vec2,
    /// Center of the horizontal drift
    pub anchor_x: f32,
    pub phase: f32,
    pub phase_speed: f32,
    pub health: u32,
}

impl Alien {
    pub fn new(kind: AlienKind, anchor_x: f32, y: f32, phase: f32, phase_speed: f32) -> Self {
        Self {
            kind,
            pos: Vec2::new(anchor_x, y),
            anchor_x,
            phase,
            phase_speed,
            health: kind.stats().health,
        }
    }

    /// Spawn just above the arena at a random anchor with a random drift
    pub fn spawn(kind: AlienKind, arena_width: f32, rng: &mut impl Rng) -> Self {
        let size = kind.stats().size;
        let anchor_x = rng.random::<f32>() * (arena_width - size).max(0.0);
        let phase = rng.random::<f32>() * std::f32::consts::TAU;
        let phase_speed = rng.random::<f32>() * 0.05 + 0.02;
        Self::new(kind, anchor_x, -size, phase, phase_speed)
    }

    pub fn stats(&self) -> &'static AlienStats {
        self.kind.stats()
    }

    pub fn points(&self) -> u64 {
        self.stats().points
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    pub fn advance(&mut self, arena_height: f32) -> AlienStatus {
        self.phase += self.phase_speed;
        self.pos.x = self.anchor_x + self.phase.sin() * ALIEN_DRIFT_AMPLITUDE;
        self.pos.y += self.stats().speed;

        if self.pos.y > arena_height {
            AlienStatus::ReachedBottom
        } else {
            AlienStatus::Alive
        }
    }

    /// Take one point of damage; returns true when this hit destroyed it
    pub fn hit(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.health == 0
    }
}

impl Bounded for Alien {
    fn bounds(&self) -> Rect {
        let size = self.stats().size;
        Rect::new(self.pos.x, self.pos.y, size, size)
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    Shield,
    RapidFire,
    Bomb,
    Life,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Shield,
        PowerUpKind::RapidFire,
        PowerUpKind::Bomb,
        PowerUpKind::Life,
    ];

    pub fn color(self) -> &'static str {
        match self {
            PowerUpKind::Shield => "#00f3ff",
            PowerUpKind::RapidFire => "#ffaa00",
            PowerUpKind::Bomb => "#ff0000",
            PowerUpKind::Life => "#00ff00",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            PowerUpKind::Shield => "🛡️",
            PowerUpKind::RapidFire => "🔥",
            PowerUpKind::Bomb => "💣",
            PowerUpKind::Life => "❤️",
        }
    }
}

/// A falling power-up capsule
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    /// Top-left corner
    pub pos: Vec2,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, pos: Vec2) -> Self {
        Self { kind, pos }
    }

    /// Spawn just above the arena at a random column
    pub fn spawn(kind: PowerUpKind, arena_width: f32, rng: &mut impl Rng) -> Self {
        let x = rng.random::<f32>() * (arena_width - POWER_UP_SIZE).max(0.0);
        Self::new(kind, Vec2::new(x, -POWER_UP_SIZE))
    }

    /// Fall; returns true once it has left the bottom of the arena
    pub fn advance(&mut self, arena_height: f32) -> bool {
        self.pos.y += POWER_UP_SPEED;
        self.pos.y > arena_height
    }
}

impl Bounded for PowerUp {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, POWER_UP_SIZE, POWER_UP_SIZE)
    }
}

/// An explosion particle (visual only)
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Remaining ticks
    pub life: u32,
    pub color: &'static str,
}

impl Particle {
    /// Particle flying out of `origin` in a random direction
    pub fn burst(origin: Vec2, color: &'static str, rng: &mut impl Rng) -> Self {
        let spread = PARTICLE_MAX_SPEED * 2.0;
        Self {
            pos: origin,
            vel: Vec2::new(
                rng.random::<f32>() * spread - PARTICLE_MAX_SPEED,
                rng.random::<f32>() * spread - PARTICLE_MAX_SPEED,
            ),
            size: rng.random::<f32>() * PARTICLE_SIZE_RANGE + PARTICLE_MIN_SIZE,
            life: PARTICLE_LIFE_TICKS,
            color,
        }
    }

    /// Move, fall, shrink; returns true while the particle is still alive
    pub fn advance(&mut self) -> bool {
        self.pos += self.vel;
        self.vel.y += PARTICLE_GRAVITY;
        self.life = self.life.saturating_sub(1);
        self.size *= PARTICLE_SHRINK;
        self.life > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const ARENA: Vec2 = Vec2::new(DEFAULT_ARENA_WIDTH, DEFAULT_ARENA_HEIGHT);

    fn held(left: bool, right: bool) -> TickInput {
        TickInput {
            left,
            right,
            fire: false,
        }
    }

    #[test]
    fn test_player_spawn_position() {
        let player = Player::new(ARENA, &Tuning::default());
        assert_eq!(player.pos, Vec2::new(375.0, 500.0));
        assert_eq!(player.shoot_delay, 300.0);
    }

    #[test]
    fn test_player_moves_and_clamps() {
        let mut player = Player::new(ARENA, &Tuning::default());
        player.advance(&held(false, true), 0.0, ARENA.x);
        assert_eq!(player.pos.x, 380.0);

        for _ in 0..500 {
            player.advance(&held(true, false), 0.0, ARENA.x);
        }
        assert_eq!(player.pos.x, 0.0);

        for _ in 0..500 {
            player.advance(&held(false, true), 0.0, ARENA.x);
        }
        assert_eq!(player.pos.x, ARENA.x - PLAYER_WIDTH);
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let mut player = Player::new(ARENA, &Tuning::default());
        let mut bullets = Vec::new();

        assert!(player.fire(1_000.0, &mut bullets));
        assert_eq!(bullets.len(), 1);
        // Exactly at the delay is still too soon
        assert!(!player.fire(1_300.0, &mut bullets));
        assert!(player.fire(1_301.0, &mut bullets));
        assert_eq!(bullets.len(), 2);
        assert_eq!(player.last_shot, 1_301.0);
    }

    #[test]
    fn test_single_bullet_is_centered() {
        let mut player = Player::new(ARENA, &Tuning::default());
        let mut bullets = Vec::new();
        player.fire(1_000.0, &mut bullets);
        let center = bullets[0].bounds().center().x;
        assert!((center - player.center().x).abs() < 1e-4);
        assert_eq!(bullets[0].pos.y, player.pos.y);
    }

    #[test]
    fn test_rapid_fire_volley_and_expiry() {
        let tuning = Tuning::default();
        let mut player = Player::new(ARENA, &tuning);
        let mut bullets = Vec::new();

        player.activate_rapid_fire(1_000.0, 8_000.0, 100.0);
        assert!(player.fire(1_000.0 + 101.0, &mut bullets));
        assert_eq!(bullets.len(), 3);
        let centers: Vec<f32> = bullets.iter().map(|b| b.bounds().center().x).collect();
        assert!((centers[0] - (player.pos.x + 10.0)).abs() < 1e-4);
        assert!((centers[1] - (player.pos.x + 25.0)).abs() < 1e-4);
        assert!((centers[2] - (player.pos.x + 40.0)).abs() < 1e-4);

        // Still active at the expiry instant, gone just after
        player.advance(&TickInput::default(), 9_000.0, ARENA.x);
        assert!(player.rapid_fire);
        player.advance(&TickInput::default(), 9_001.0, ARENA.x);
        assert!(!player.rapid_fire);
        assert_eq!(player.shoot_delay, 300.0);
    }

    #[test]
    fn test_shield_expiry() {
        let mut player = Player::new(ARENA, &Tuning::default());
        player.activate_shield(0.0, 10_000.0);
        player.advance(&TickInput::default(), 5_000.0, ARENA.x);
        assert!(player.shield);
        player.advance(&TickInput::default(), 10_000.5, ARENA.x);
        assert!(!player.shield);
    }

    #[test]
    fn test_bullet_leaves_top() {
        let mut bullet = Bullet::centered(100.0, 15.0);
        assert!(!bullet.advance());
        assert!(bullet.advance());
    }

    #[test]
    fn test_alien_table() {
        assert_eq!(AlienKind::Small.stats().health, 1);
        assert_eq!(AlienKind::Medium.stats().health, 2);
        assert_eq!(AlienKind::Large.stats().health, 3);
        assert_eq!(AlienKind::Boss.stats().health, 10);
        assert_eq!(AlienKind::Boss.stats().points, 1000);
        assert_eq!(AlienKind::Medium.stats().size, 50.0);
    }

    #[test]
    fn test_alien_hit_counts_down() {
        for kind in AlienKind::ALL {
            let mut alien = Alien::new(kind, 100.0, 0.0, 0.0, 0.0);
            let health = kind.stats().health;
            for i in 1..=health {
                let destroyed = alien.hit();
                assert_eq!(destroyed, i == health, "{kind:?} hit {i}");
            }
            assert_eq!(alien.health, 0);
            // Further hits never underflow
            alien.hit();
            assert_eq!(alien.health, 0);
        }
    }

    #[test]
    fn test_alien_drift_and_descent() {
        let mut alien = Alien::new(AlienKind::Small, 200.0, 0.0, 0.0, std::f32::consts::FRAC_PI_2);
        assert_eq!(alien.advance(600.0), AlienStatus::Alive);
        assert!((alien.pos.x - 250.0).abs() < 1e-3);
        assert!((alien.pos.y - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_alien_reaches_bottom() {
        let mut alien = Alien::new(AlienKind::Small, 200.0, 599.0, 0.0, 0.0);
        assert_eq!(alien.advance(600.0), AlienStatus::ReachedBottom);
    }

    #[test]
    fn test_alien_spawn_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let alien = Alien::spawn(AlienKind::Large, ARENA.x, &mut rng);
            assert!(alien.anchor_x >= 0.0 && alien.anchor_x <= ARENA.x - 70.0);
            assert_eq!(alien.pos.y, -70.0);
            assert!(alien.phase_speed >= 0.02 && alien.phase_speed <= 0.07);
            assert_eq!(alien.health, 3);
        }
    }

    #[test]
    fn test_power_up_falls_off_screen() {
        let mut power_up = PowerUp::new(PowerUpKind::Bomb, Vec2::new(0.0, 599.0));
        assert!(power_up.advance(600.0));
    }

    #[test]
    fn test_particle_lifetime() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut particle = Particle::burst(Vec2::new(10.0, 10.0), "#fff", &mut rng);
        assert!(particle.size >= 2.0 && particle.size < 7.0);
        let start_size = particle.size;
        let start_vy = particle.vel.y;

        let mut ticks = 0;
        while particle.advance() {
            ticks += 1;
        }
        assert_eq!(ticks, PARTICLE_LIFE_TICKS - 1);
        assert!(particle.size < start_size);
        assert!(particle.vel.y > start_vy);
    }

    proptest! {
        #[test]
        fn prop_player_always_clamped(moves in proptest::collection::vec((any::<bool>(), any::<bool>()), 0..400)) {
            let mut player = Player::new(ARENA, &Tuning::default());
            for (left, right) in moves {
                player.advance(&held(left, right), 0.0, ARENA.x);
                prop_assert!(player.pos.x >= 0.0);
                prop_assert!(player.pos.x <= ARENA.x - PLAYER_WIDTH);
            }
        }
    }
}
