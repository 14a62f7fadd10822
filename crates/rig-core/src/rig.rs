//! The scroll rig: one `update` per rendered frame.
//!
//! ```text
//! raw offset -> SmoothingFilter -> map_progress -> camera follow -> SceneFrame
//!                                \-> ProgressPublisher -> listener
//! ```

use crate::config::{ConfigError, RigConfig};
use crate::filter::{follow_factor, SmoothingFilter};
use crate::publisher::{publish_value, ProgressHandler, ProgressPublisher};
use crate::scene::{map_progress, CameraPose, GlowState};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Output of one frame, handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneFrame {
    /// Filter output; may sit outside [0, 1] during overscroll.
    pub smoothed: f32,
    /// Value delivered to the listener, always in [0, PUBLISH_MAX].
    pub published: f32,
    pub content_offset_y: f32,
    /// Current (trailing) camera pose.
    pub camera: CameraPose,
    pub glow: GlowState,
}

#[derive(Debug)]
pub struct ScrollRig {
    config: RigConfig,
    filter: SmoothingFilter,
    camera: CameraPose,
    frame: SceneFrame,
    publisher: ProgressPublisher,
}

impl Default for ScrollRig {
    fn default() -> Self {
        Self::build(RigConfig::default())
    }
}

impl ScrollRig {
    pub fn try_new(config: RigConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: RigConfig) -> Self {
        let filter = SmoothingFilter::new(0.0);
        let frame = snapped_frame(&config, filter.value());
        Self {
            camera: frame.camera,
            config,
            filter,
            frame,
            publisher: ProgressPublisher::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    #[inline]
    pub fn smoothed(&self) -> f32 {
        self.filter.value()
    }

    #[inline]
    pub fn camera(&self) -> &CameraPose {
        &self.camera
    }

    #[inline]
    pub fn frame(&self) -> &SceneFrame {
        &self.frame
    }

    pub fn register(&mut self, handler: Option<ProgressHandler>) {
        self.publisher.register(handler);
    }

    pub fn has_listener(&self) -> bool {
        self.publisher.is_attached()
    }

    /// See [`ProgressPublisher::last_published`].
    pub fn last_published(&self) -> Rc<Cell<f32>> {
        self.publisher.last_published()
    }

    /// Snap filter and camera to `raw` without animating. Nothing is published.
    pub fn reset(&mut self, raw: f32) {
        let raw = if raw.is_finite() { raw } else { 0.0 };
        log::debug!("[rig] reset to {:.4}", raw);
        self.filter.reset(raw);
        self.frame = snapped_frame(&self.config, raw);
        self.camera = self.frame.camera;
    }

    /// Advance one frame.
    ///
    /// With `dt_sec <= 0` (or non-finite input) nothing moves, but the current
    /// progress is still published so the listener sees exactly one call per frame.
    pub fn update(&mut self, raw: f32, dt_sec: f32) -> &SceneFrame {
        if raw.is_finite() && dt_sec.is_finite() && dt_sec > 0.0 {
            let smoothed = self
                .filter
                .step(raw, self.config.damping_rate, dt_sec);
            let targets = map_progress(&self.config, smoothed);
            self.camera.approach(
                &targets.camera,
                follow_factor(self.config.camera_follow_rate, dt_sec),
            );
            self.frame = SceneFrame {
                smoothed,
                published: publish_value(smoothed),
                content_offset_y: targets.content_offset_y,
                camera: self.camera,
                glow: targets.glow,
            };
        }
        self.publisher.publish(self.frame.smoothed);
        &self.frame
    }
}

fn snapped_frame(config: &RigConfig, smoothed: f32) -> SceneFrame {
    let targets = map_progress(config, smoothed);
    SceneFrame {
        smoothed,
        published: publish_value(smoothed),
        content_offset_y: targets.content_offset_y,
        camera: targets.camera,
        glow: targets.glow,
    }
}

/// Keeps a progress handler registered on a shared rig for as long as it
/// lives; dropping it detaches the handler.
///
/// A handler registered later by someone else is detached too, since the
/// rig has only one slot.
pub struct ListenerGuard {
    rig: Rc<RefCell<ScrollRig>>,
}

impl ListenerGuard {
    pub fn attach(rig: &Rc<RefCell<ScrollRig>>, handler: ProgressHandler) -> Self {
        rig.borrow_mut().register(Some(handler));
        Self { rig: rig.clone() }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        match self.rig.try_borrow_mut() {
            Ok(mut rig) => rig.register(None),
            Err(_) => log::error!("[rig] busy during listener detach; listener left attached"),
        }
    }
}
