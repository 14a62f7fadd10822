// Journey tuning constants. `RigConfig::default()` is built from these.

// Smoothing filter rate (1/s); time constant is roughly 1 / rate
pub const DAMPING_RATE: f32 = 5.0;

// Below this distance the filter lands exactly on its target
pub const SETTLE_EPSILON: f32 = 1e-5;

// Total vertical travel of the content group across the whole scroll
pub const JOURNEY_DEPTH: f32 = 14.5;

// Side-to-side camera sway, one full period over the journey
pub const LATERAL_AMPLITUDE: f32 = 0.6;

// Camera path: target = (sway, BASE_HEIGHT - s * HEIGHT_DROP, BASE_DEPTH - s * DEPTH_PULL_IN)
pub const CAMERA_BASE_HEIGHT: f32 = 1.2;
pub const CAMERA_HEIGHT_DROP: f32 = 1.5;
pub const CAMERA_BASE_DEPTH: f32 = 8.0;
pub const CAMERA_DEPTH_PULL_IN: f32 = 2.5;
pub const CAMERA_FOLLOW_RATE: f32 = 4.0; // 1/s

// Look-at target descends with progress
pub const LOOK_AT_BASE_HEIGHT: f32 = 0.0;
pub const LOOK_AT_DROP: f32 = 1.0;

// Glow plane trails below the content group and grows/brightens with progress
pub const GLOW_TRAIL: f32 = 1.2;
pub const GLOW_BASE_SCALE: f32 = 1.0;
pub const GLOW_SCALE_GAIN: f32 = 1.5;
pub const GLOW_BASE_OPACITY: f32 = 0.25;
pub const GLOW_OPACITY_GAIN: f32 = 0.55;

// Largest value handed to a progress listener; keeps floor(v * n) < n
pub const PUBLISH_MAX: f32 = 0.9999;

// Sections along the journey, one chamber each
pub const SECTION_COUNT: usize = 5;
pub const CHAMBER_SPACING: f32 = JOURNEY_DEPTH / (SECTION_COUNT as f32 - 1.0);

// Projection
pub const CAMERA_FOVY_DEGREES: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
