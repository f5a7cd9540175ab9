//! `Surface` backed by a browser 2D canvas context

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Surface, TextAlign};
use crate::error::PlatformError;
use crate::sim::Rect;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, PlatformError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(PlatformError::SurfaceUnavailable)?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Current drawing buffer size
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    pub fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        // arc only fails on a negative radius
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: &str) {
        let (x, y) = (rect.pos.x as f64, rect.pos.y as f64);
        let (r, b) = (rect.right() as f64, rect.bottom() as f64);
        let radius = radius.max(0.0) as f64;

        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx.move_to(x + radius, y);
        let _ = self.ctx.arc_to(r, y, r, b, radius);
        let _ = self.ctx.arc_to(r, b, x, b, radius);
        let _ = self.ctx.arc_to(x, b, x, y, radius);
        let _ = self.ctx.arc_to(x, y, r, y, radius);
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.circle_path(center, radius);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: &str) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
        self.circle_path(center, radius);
        self.ctx.stroke();
    }

    fn fill_triangle(&mut self, points: [Vec2; 3], color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx.move_to(points[0].x as f64, points[0].y as f64);
        self.ctx.line_to(points[1].x as f64, points[1].y as f64);
        self.ctx.line_to(points[2].x as f64, points[2].y as f64);
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, align: TextAlign, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        match align {
            TextAlign::Left => {
                self.ctx.set_text_align("left");
                self.ctx.set_text_baseline("alphabetic");
            }
            TextAlign::Center => {
                self.ctx.set_text_align("center");
                self.ctx.set_text_baseline("middle");
            }
        }
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }

    fn set_shadow(&mut self, color: &str, blur: f32) {
        self.ctx.set_shadow_color(color);
        self.ctx.set_shadow_blur(blur.max(0.0) as f64);
    }
}
