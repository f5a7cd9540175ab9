//! Static background stars
//!
//! Generated once per arena size, then redrawn unchanged every frame.

use glam::Vec2;
use rand::Rng;

use super::Surface;
use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    /// Side length of the square dot (1..3)
    pub size: f32,
    /// Alpha (0.5..1)
    pub brightness: f32,
}

#[derive(Debug, Clone, Default)]
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Starfield {
    pub fn generate(arena: Vec2, count: usize, rng: &mut impl Rng) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                pos: Vec2::new(rng.random::<f32>() * arena.x, rng.random::<f32>() * arena.y),
                size: rng.random::<f32>() * 2.0 + 1.0,
                brightness: rng.random::<f32>() * 0.5 + 0.5,
            })
            .collect();
        Self { stars }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        for star in &self.stars {
            let color = format!("rgba(255, 255, 255, {:.2})", star.brightness);
            surface.fill_rect(
                Rect::new(star.pos.x, star.pos.y, star.size, star.size),
                &color,
            );
        }
    }
}
