//! 2D canvas rendering
//!
//! The simulation never draws. Each frame is painted from the session state
//! onto a `Surface`, in a fixed back-to-front order:
//! background, player, bullets, aliens, power-ups, particles, HUD text.

pub mod sprites;
pub mod starfield;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use sprites::Sprite;
pub use starfield::{Star, Starfield};

use glam::Vec2;

use crate::hud::{format_level, format_lives, format_score};
use crate::settings::Settings;
use crate::sim::{GameState, Rect};

const BACKGROUND: &str = "#000";
const HUD_COLOR: &str = "#fff";
const HUD_FONT: &str = "20px Orbitron";
const LIVES_FONT: &str = "24px Arial";
const HUD_MARGIN: f32 = 20.0;
/// Hearts are drawn this far in from the right edge
const LIVES_INSET: f32 = 100.0;

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Left edge at the anchor, alphabetic baseline
    Left,
    /// Centered on the anchor both ways
    Center,
}

/// Minimal immediate-mode 2D drawing target
///
/// Colors are CSS color strings.
pub trait Surface {
    fn clear(&mut self, color: &str);
    fn fill_rect(&mut self, rect: Rect, color: &str);
    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: &str);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: &str);
    fn fill_triangle(&mut self, points: [Vec2; 3], color: &str);
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, align: TextAlign, color: &str);
    /// Glow applied to following fills; `blur == 0` turns it off
    fn set_shadow(&mut self, color: &str, blur: f32);
}

/// Optional visual layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub particles: bool,
    pub starfield: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            particles: true,
            starfield: true,
        }
    }
}

impl From<&Settings> for RenderOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            particles: settings.particles,
            starfield: settings.starfield,
        }
    }
}

/// Paint one frame
pub fn draw_frame(
    state: &GameState,
    starfield: &Starfield,
    options: RenderOptions,
    surface: &mut dyn Surface,
) {
    surface.clear(BACKGROUND);
    if options.starfield {
        starfield.draw(surface);
    }

    state.player.draw(surface);
    for bullet in &state.bullets {
        bullet.draw(surface);
    }
    for alien in &state.aliens {
        alien.draw(surface);
    }
    for power_up in &state.power_ups {
        power_up.draw(surface);
    }
    if options.particles {
        for particle in &state.particles {
            particle.draw(surface);
        }
    }

    draw_hud(state, surface);
}

/// In-canvas score, level and lives
fn draw_hud(state: &GameState, surface: &mut dyn Surface) {
    surface.fill_text(
        &format!("SCORE: {}", format_score(state.score)),
        Vec2::new(HUD_MARGIN, 30.0),
        HUD_FONT,
        TextAlign::Left,
        HUD_COLOR,
    );
    surface.fill_text(
        &format!("LEVEL: {}", format_level(state.level)),
        Vec2::new(HUD_MARGIN, 60.0),
        HUD_FONT,
        TextAlign::Left,
        HUD_COLOR,
    );
    surface.fill_text(
        &format_lives(state.lives),
        Vec2::new(state.arena.x - LIVES_INSET, 30.0),
        LIVES_FONT,
        TextAlign::Left,
        HUD_COLOR,
    );
}


#[cfg(test)]
mod tests {
    use super::recording::{DrawCall, RecordingSurface};
    use super::*;
    use crate::consts::*;
    use crate::sim::{Alien, AlienKind, Bullet, Particle, PowerUp, PowerUpKind};
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn state() -> GameState {
        let mut state = GameState::new(
            3,
            Vec2::new(DEFAULT_ARENA_WIDTH, DEFAULT_ARENA_HEIGHT),
            Tuning::without_spawns(),
            0,
        );
        state.start();
        state
    }

    #[test]
    fn test_hud_text() {
        let mut state = state();
        state.score = 250;
        state.level = 4;
        let mut surface = RecordingSurface::default();
        draw_frame(&state, &Starfield::default(), RenderOptions::default(), &mut surface);
        let texts = surface.texts();
        assert!(texts.contains(&"SCORE: 00250"));
        assert!(texts.contains(&"LEVEL: 04"));
        assert!(texts.contains(&format_lives(3).as_str()));
    }

    #[test]
    fn test_layer_order() {
        let mut state = state();
        state.bullets.push(Bullet::centered(100.0, 300.0));
        state
            .aliens
            .push(Alien::new(AlienKind::Small, 200.0, 100.0, 0.0, 0.0));
        state
            .power_ups
            .push(PowerUp::new(PowerUpKind::Bomb, Vec2::new(400.0, 200.0)));
        let mut rng = Pcg32::seed_from_u64(1);
        state
            .particles
            .push(Particle::burst(Vec2::new(10.0, 10.0), "#abcdef", &mut rng));

        let mut surface = RecordingSurface::default();
        draw_frame(&state, &Starfield::default(), RenderOptions::default(), &mut surface);

        let clear = surface
            .first(|c| matches!(c, DrawCall::Clear(_)))
            .unwrap();
        let hull = surface
            .first(|c| matches!(c, DrawCall::Triangle(_, color) if color == sprites::PLAYER_COLOR))
            .unwrap();
        let bullet = surface
            .first(|c| matches!(c, DrawCall::Rect(_, color) if color == sprites::BULLET_COLOR))
            .unwrap();
        let alien = surface
            .first(|c| matches!(c, DrawCall::Circle(_, _, color) if color == AlienKind::Small.stats().color))
            .unwrap();
        let power_up = surface
            .first(|c| matches!(c, DrawCall::RoundRect(..)))
            .unwrap();
        let particle = surface
            .first(|c| matches!(c, DrawCall::Circle(_, _, color) if color == "#abcdef"))
            .unwrap();
        let hud = surface
            .first(|c| matches!(c, DrawCall::Text(text, _) if text.starts_with("SCORE")))
            .unwrap();

        assert_eq!(clear, 0);
        assert!(clear < hull);
        assert!(hull < bullet);
        assert!(bullet < alien);
        assert!(alien < power_up);
        assert!(power_up < particle);
        assert!(particle < hud);
    }

    #[test]
    fn test_optional_layers() {
        let mut state = state();
        let mut rng = Pcg32::seed_from_u64(2);
        state
            .particles
            .push(Particle::burst(Vec2::new(10.0, 10.0), "#abcdef", &mut rng));
        let starfield = Starfield::generate(Vec2::new(800.0, 600.0), 5, &mut rng);

        let options = RenderOptions {
            particles: false,
            starfield: false,
        };
        let mut surface = RecordingSurface::default();
        draw_frame(&state, &starfield, options, &mut surface);

        assert!(
            surface
                .first(|c| matches!(c, DrawCall::Circle(_, _, color) if color == "#abcdef"))
                .is_none()
        );
        assert!(
            surface
                .first(|c| matches!(c, DrawCall::Rect(_, color) if color.starts_with("rgba(255, 255, 255")))
                .is_none()
        );
    }

    #[test]
    fn test_options_follow_settings() {
        let settings = Settings {
            particles: false,
            ..Settings::default()
        };
        let options = RenderOptions::from(&settings);
        assert!(!options.particles);
        assert!(options.starfield);
    }
}
