//! Entity sprites built from flat primitives

use glam::Vec2;

use super::{Surface, TextAlign};
use crate::consts::*;
use crate::sim::{Alien, Bounded, Bullet, Particle, Player, PowerUp};

pub const PLAYER_COLOR: &str = "#00f3ff";
pub const BULLET_COLOR: &str = "#00ffaa";
const SHIELD_COLOR: &str = "rgba(0, 243, 255, 0.5)";
const SHIELD_PADDING: f32 = 10.0;
const COCKPIT_COLOR: &str = "#0080ff";
const COCKPIT_RADIUS: f32 = 10.0;
const ENGINE_COLOR: &str = "#ff0000";
const ENGINE_RAPID_COLOR: &str = "#ffaa00";
const ENGINE_FLAME_LENGTH: f32 = 20.0;
const ALIEN_DETAIL_COLOR: &str = "#000";
const HEALTH_BAR_BACK: &str = "#333";
const HEALTH_BAR_FILL: &str = "#00ff00";
const HEALTH_BAR_HEIGHT: f32 = 5.0;
const HEALTH_BAR_GAP: f32 = 10.0;
const POWER_UP_CORNER: f32 = 5.0;
const POWER_UP_GLYPH_FONT: &str = "20px Arial";
const BULLET_GLOW: f32 = 10.0;

/// Something that knows how to paint itself
pub trait Sprite {
    fn draw(&self, surface: &mut dyn Surface);
}

impl Sprite for Player {
    fn draw(&self, surface: &mut dyn Surface) {
        let Vec2 { x, y } = self.pos;
        let (w, h) = (PLAYER_WIDTH, PLAYER_HEIGHT);

        if self.shield {
            surface.stroke_circle(self.center(), w / 2.0 + SHIELD_PADDING, 3.0, SHIELD_COLOR);
        }

        // Hull
        surface.fill_triangle(
            [
                Vec2::new(x + w / 2.0, y),
                Vec2::new(x + w, y + h),
                Vec2::new(x, y + h),
            ],
            PLAYER_COLOR,
        );

        surface.fill_circle(Vec2::new(x + w / 2.0, y + h / 3.0), COCKPIT_RADIUS, COCKPIT_COLOR);

        let engine = if self.rapid_fire {
            ENGINE_RAPID_COLOR
        } else {
            ENGINE_COLOR
        };
        surface.fill_triangle(
            [
                Vec2::new(x + w / 3.0, y + h),
                Vec2::new(x + w / 2.0, y + h + ENGINE_FLAME_LENGTH),
                Vec2::new(x + 2.0 * w / 3.0, y + h),
            ],
            engine,
        );
    }
}

impl Sprite for Bullet {
    fn draw(&self, surface: &mut dyn Surface) {
        let bounds = self.bounds();
        surface.fill_rect(bounds, BULLET_COLOR);
        // Second pass with glow
        surface.set_shadow(BULLET_COLOR, BULLET_GLOW);
        surface.fill_rect(bounds, BULLET_COLOR);
        surface.set_shadow(BULLET_COLOR, 0.0);
    }
}

impl Sprite for Alien {
    fn draw(&self, surface: &mut dyn Surface) {
        let stats = self.stats();
        let size = stats.size;
        let Vec2 { x, y } = self.pos;

        surface.fill_circle(self.center(), size / 2.0, stats.color);

        let eye = size / 8.0;
        surface.fill_circle(Vec2::new(x + size / 3.0, y + size / 3.0), eye, ALIEN_DETAIL_COLOR);
        surface.fill_circle(
            Vec2::new(x + 2.0 * size / 3.0, y + size / 3.0),
            eye,
            ALIEN_DETAIL_COLOR,
        );

        if self.health > 1 {
            let bar = crate::sim::Rect::new(x, y - HEALTH_BAR_GAP, size, HEALTH_BAR_HEIGHT);
            surface.fill_rect(bar, HEALTH_BAR_BACK);
            let fraction = self.health as f32 / stats.health as f32;
            let mut fill = bar;
            fill.size.x = size * fraction;
            surface.fill_rect(fill, HEALTH_BAR_FILL);
        }
    }
}

impl Sprite for PowerUp {
    fn draw(&self, surface: &mut dyn Surface) {
        let bounds = self.bounds();
        surface.fill_round_rect(bounds, POWER_UP_CORNER, self.kind.color());
        surface.fill_text(
            self.kind.glyph(),
            bounds.center(),
            POWER_UP_GLYPH_FONT,
            TextAlign::Center,
            ALIEN_DETAIL_COLOR,
        );
    }
}

impl Sprite for Particle {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_circle(self.pos, self.size, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::super::recording::{DrawCall, RecordingSurface};
    use super::*;
    use crate::sim::{AlienKind, PowerUpKind, Rect};
    use crate::tuning::Tuning;

    fn player() -> Player {
        Player::new(
            Vec2::new(DEFAULT_ARENA_WIDTH, DEFAULT_ARENA_HEIGHT),
            &Tuning::default(),
        )
    }

    fn engine_color(surface: &RecordingSurface) -> String {
        surface
            .calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Triangle(_, color) => Some(color.clone()),
                _ => None,
            })
            .last()
            .unwrap()
    }

    #[test]
    fn test_player_engine_reflects_rapid_fire() {
        let mut player = player();
        let mut surface = RecordingSurface::default();
        player.draw(&mut surface);
        assert_eq!(engine_color(&surface), ENGINE_COLOR);

        player.activate_rapid_fire(0.0, 8000.0, 100.0);
        let mut surface = RecordingSurface::default();
        player.draw(&mut surface);
        assert_eq!(engine_color(&surface), ENGINE_RAPID_COLOR);
    }

    #[test]
    fn test_shield_ring_only_when_shielded() {
        let mut player = player();
        let mut surface = RecordingSurface::default();
        player.draw(&mut surface);
        assert!(surface.first(|c| matches!(c, DrawCall::Ring(..))).is_none());

        player.activate_shield(0.0, 10_000.0);
        let mut surface = RecordingSurface::default();
        player.draw(&mut surface);
        assert_eq!(
            surface.calls[0],
            DrawCall::Ring(player.center(), 35.0, SHIELD_COLOR.to_string())
        );
    }

    #[test]
    fn test_health_bar_for_tough_aliens() {
        let small = Alien::new(AlienKind::Small, 0.0, 0.0, 0.0, 0.0);
        let mut surface = RecordingSurface::default();
        small.draw(&mut surface);
        assert!(surface.first(|c| matches!(c, DrawCall::Rect(..))).is_none());

        let mut large = Alien::new(AlienKind::Large, 100.0, 50.0, 0.0, 0.0);
        large.hit();
        let mut surface = RecordingSurface::default();
        large.draw(&mut surface);
        let bars: Vec<&Rect> = surface
            .calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Rect(rect, _) => Some(rect),
                _ => None,
            })
            .collect();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].pos, Vec2::new(100.0, 40.0));
        assert!((bars[1].size.x - 70.0 * 2.0 / 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_power_up_glyph_centered() {
        let power_up = PowerUp::new(PowerUpKind::Shield, Vec2::new(10.0, 20.0));
        let mut surface = RecordingSurface::default();
        power_up.draw(&mut surface);
        assert_eq!(
            surface.calls[1],
            DrawCall::Text("🛡️".to_string(), Vec2::new(25.0, 35.0))
        );
    }
}
