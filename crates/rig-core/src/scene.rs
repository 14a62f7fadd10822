//! Progress to scene mapping.
//!
//! Everything here is a pure function of the smoothed progress and a
//! [`RigConfig`]; the renderer consumes the result and throws it away.

use crate::config::RigConfig;
use crate::constants::{CAMERA_FOVY_DEGREES, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec2, Vec3, Vec4};
use std::f32::consts::TAU;

/// Where the camera sits and what it looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    /// Move both points toward `target` by `factor` (0 = stay, 1 = snap).
    pub fn approach(&mut self, target: &CameraPose, factor: f32) {
        let t = factor.clamp(0.0, 1.0);
        self.position = self.position.lerp(target.position, t);
        self.look_at = self.look_at.lerp(target.look_at, t);
    }
}

/// Decorative glow plane under the content group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowState {
    /// Height in content-group space: trails just below the current depth.
    pub y: f32,
    pub scale: f32,
    pub opacity: f32,
}

/// Ideal scene for one progress value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneTargets {
    /// Vertical offset applied to the content group.
    pub content_offset_y: f32,
    /// Pose the camera is pulled toward (not where it is).
    pub camera: CameraPose,
    pub glow: GlowState,
}

/// Map smoothed progress to scene targets.
///
/// `smoothed` is used as-is, so overscroll outside [0, 1] keeps swaying the
/// camera; clamping belongs to the publish step.
pub fn map_progress(config: &RigConfig, smoothed: f32) -> SceneTargets {
    let depth = smoothed * config.journey_depth;
    let lateral = (smoothed * TAU).sin() * config.lateral_amplitude;
    let camera = CameraPose {
        position: Vec3::new(
            lateral,
            config.camera_base_height - smoothed * config.camera_height_drop,
            config.camera_base_depth - smoothed * config.camera_depth_pull_in,
        ),
        look_at: Vec3::new(
            0.0,
            config.look_at_base_height - smoothed * config.look_at_drop,
            0.0,
        ),
    };
    let glow = GlowState {
        y: -(depth + config.glow_trail),
        scale: (config.glow_base_scale + smoothed * config.glow_scale_gain).max(0.0),
        opacity: (config.glow_base_opacity + smoothed * config.glow_opacity_gain).clamp(0.0, 1.0),
    };
    SceneTargets {
        content_offset_y: depth,
        camera,
        glow,
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn from_pose(pose: &CameraPose, aspect: f32) -> Self {
        Self {
            eye: pose.position,
            target: pose.look_at,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world point to normalized device coordinates.
    ///
    /// Returns the NDC xy and the clip-space `w` (view depth), or `None` when
    /// the point is behind the near plane.
    pub fn project(&self, world: Vec3) -> Option<(Vec2, f32)> {
        let clip = self.view_projection() * Vec4::new(world.x, world.y, world.z, 1.0);
        if clip.w <= self.znear {
            return None;
        }
        Some((Vec2::new(clip.x / clip.w, clip.y / clip.w), clip.w))
    }
}
