//! Canvas2D renderer for the journey scene.
//!
//! Chambers are drawn as rings projected through the rig's camera; the one
//! matching the published progress is filled. The glow disc sits behind them.

use crate::constants::*;
use crate::layout::{chamber_sprites, glow_world_position, ndc_to_px, projected_radius_px};
use anyhow::anyhow;
use rig_core::{section_index, Camera, SceneFrame, SECTION_COUNT};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CanvasRenderer {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }

    pub fn draw(&self, frame: &SceneFrame, width: u32, height: u32) {
        let w = width.max(1) as f64;
        let h = height.max(1) as f64;
        let camera = Camera::from_pose(&frame.camera, (w / h) as f32);

        self.clear(w, h);
        self.draw_glow(&camera, frame, w, h);

        let active = section_index(frame.published, SECTION_COUNT);
        for sprite in chamber_sprites(&camera, frame, SECTION_COUNT, w, h) {
            let color = CHAMBER_COLORS[sprite.index % CHAMBER_COLORS.len()];
            let radius = sprite.radius.max(CHAMBER_MIN_RADIUS_PX);
            self.ctx.begin_path();
            _ = self.ctx.arc(sprite.x, sprite.y, radius, 0.0, TAU);
            if sprite.index == active {
                self.ctx.set_global_alpha(1.0);
                self.ctx.set_fill_style_str(color);
                self.ctx.fill();
            } else {
                self.ctx.set_global_alpha(CHAMBER_INACTIVE_ALPHA);
            }
            self.ctx.set_line_width(CHAMBER_RING_WIDTH_PX);
            self.ctx.set_stroke_style_str(color);
            self.ctx.stroke();
        }
        self.ctx.set_global_alpha(1.0);
    }

    fn clear(&self, w: f64, h: f64) {
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
        _ = gradient.add_color_stop(0.0, BACKGROUND_TOP);
        _ = gradient.add_color_stop(1.0, BACKGROUND_BOTTOM);
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }

    fn draw_glow(&self, camera: &Camera, frame: &SceneFrame, w: f64, h: f64) {
        let Some((ndc, depth)) = camera.project(glow_world_position(frame)) else {
            return;
        };
        let (x, y) = ndc_to_px(ndc, w, h);
        let radius = projected_radius_px(camera, GLOW_RADIUS * frame.glow.scale, depth, h);
        self.ctx.set_global_alpha(frame.glow.opacity as f64);
        self.ctx.set_fill_style_str(GLOW_COLOR);
        self.ctx.begin_path();
        _ = self.ctx.arc(x, y, radius.max(0.0), 0.0, TAU);
        self.ctx.fill();
    }
}
