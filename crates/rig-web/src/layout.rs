//! Pure screen-space helpers shared by the renderer and the scroll source.

use crate::constants::CHAMBER_RADIUS;
use glam::{Vec2, Vec3};
use rig_core::{Camera, SceneFrame, CHAMBER_SPACING};

/// Scroll fraction of a page: `scroll_y / (content - viewport)`.
///
/// Not clamped, so elastic overscroll reaches the rig. Pages that do not
/// scroll report 0.
pub fn scroll_fraction(scroll_y: f64, content_height: f64, viewport_height: f64) -> f32 {
    let range = content_height - viewport_height;
    if range.is_nan() || range < 1.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / range) as f32
}

/// World position of chamber `index` once the content group is lifted.
#[inline]
pub fn chamber_world_position(index: usize, content_offset_y: f32) -> Vec3 {
    Vec3::new(0.0, content_offset_y - index as f32 * CHAMBER_SPACING, 0.0)
}

/// Glow centre in world space (its height is stored in content-group space).
#[inline]
pub fn glow_world_position(frame: &SceneFrame) -> Vec3 {
    Vec3::new(0.0, frame.glow.y + frame.content_offset_y, -0.5)
}

/// NDC (-1..1, y up) to canvas pixels (y down).
#[inline]
pub fn ndc_to_px(ndc: Vec2, width: f64, height: f64) -> (f64, f64) {
    (
        (ndc.x as f64 + 1.0) * 0.5 * width,
        (1.0 - ndc.y as f64) * 0.5 * height,
    )
}

/// On-screen radius of a sphere of `world_radius` at view depth `w`.
#[inline]
pub fn projected_radius_px(camera: &Camera, world_radius: f32, w: f32, height: f64) -> f64 {
    let focal = 0.5 * height / (camera.fovy_radians as f64 * 0.5).tan();
    focal * world_radius as f64 / w.max(camera.znear) as f64
}

/// One thing to draw, already projected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub depth: f32,
}

/// Project every chamber, dropping those behind the camera, far ones first.
pub fn chamber_sprites(
    camera: &Camera,
    frame: &SceneFrame,
    count: usize,
    width: f64,
    height: f64,
) -> Vec<Sprite> {
    let mut sprites: Vec<Sprite> = (0..count)
        .filter_map(|i| {
            let (ndc, w) = camera.project(chamber_world_position(i, frame.content_offset_y))?;
            let (x, y) = ndc_to_px(ndc, width, height);
            Some(Sprite {
                index: i,
                x,
                y,
                radius: projected_radius_px(camera, CHAMBER_RADIUS, w, height),
                depth: w,
            })
        })
        .collect();
    sprites.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    sprites
}
