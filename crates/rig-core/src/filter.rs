//! Exponential low-pass filter for the raw scroll offset.
//!
//! The blend factor is `min(1, dt * rate)`: the linear approximation of
//! `1 - exp(-rate * dt)`, capped so a long frame (tab resumed after being in
//! the background) lands on the target instead of overshooting it.

use crate::constants::SETTLE_EPSILON;

/// Per-frame blend factor in `[0, 1]`. Zero for non-positive or non-finite `dt`.
#[inline]
pub fn blend_factor(rate: f32, dt_sec: f32) -> f32 {
    if !dt_sec.is_finite() || dt_sec <= 0.0 {
        return 0.0;
    }
    (dt_sec * rate).clamp(0.0, 1.0)
}

/// Same approximation, used by the camera to trail its ideal pose.
#[inline]
pub fn follow_factor(rate: f32, dt_sec: f32) -> f32 {
    blend_factor(rate, dt_sec)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SmoothingFilter {
    value: f32,
}

impl SmoothingFilter {
    pub fn new(initial: f32) -> Self {
        Self { value: initial }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn reset(&mut self, value: f32) {
        self.value = value;
    }

    /// Move toward `raw` by one frame. `raw` is not clamped, so
    /// overscroll past [0, 1] still reaches the camera sway. Non-finite
    /// `raw` is ignored.
    pub fn step(&mut self, raw: f32, rate: f32, dt_sec: f32) -> f32 {
        if !raw.is_finite() {
            return self.value;
        }
        let alpha = blend_factor(rate, dt_sec);
        if alpha >= 1.0 || (alpha > 0.0 && (raw - self.value).abs() <= SETTLE_EPSILON) {
            self.value = raw;
        } else if alpha > 0.0 {
            let prev = self.value;
            // rounding must not carry the result past either end
            self.value = (prev + (raw - prev) * alpha).clamp(prev.min(raw), prev.max(raw));
        }
        self.value
    }
}
