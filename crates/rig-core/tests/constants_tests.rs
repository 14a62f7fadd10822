// Host-side tests for tuning constants and their relationships.

use rig_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn rates_and_sizes_are_positive() {
    assert!(DAMPING_RATE > 0.0);
    assert!(CAMERA_FOLLOW_RATE > 0.0);
    assert!(JOURNEY_DEPTH > 0.0);
    assert!(CHAMBER_SPACING > 0.0);
    assert!(GLOW_BASE_SCALE > 0.0);
    assert!(SETTLE_EPSILON > 0.0 && SETTLE_EPSILON < 1e-3);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn publish_ceiling_keeps_last_section_reachable() {
    assert!(PUBLISH_MAX < 1.0);
    assert_eq!(
        (PUBLISH_MAX * SECTION_COUNT as f32).floor() as usize,
        SECTION_COUNT - 1
    );
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_path_stays_in_front_of_content() {
    // camera never pulls in past the origin or drops below the look-at
    assert!(CAMERA_BASE_DEPTH - CAMERA_DEPTH_PULL_IN > CAMERA_ZNEAR);
    assert!(CAMERA_BASE_HEIGHT - CAMERA_HEIGHT_DROP > LOOK_AT_BASE_HEIGHT - LOOK_AT_DROP);
    assert!(CAMERA_ZFAR > CAMERA_BASE_DEPTH + JOURNEY_DEPTH);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glow_opacity_fits_unit_range() {
    assert!(GLOW_BASE_OPACITY >= 0.0);
    assert!(GLOW_BASE_OPACITY + GLOW_OPACITY_GAIN <= 1.0);
}

#[test]
fn last_chamber_sits_at_journey_depth() {
    let last = CHAMBER_SPACING * (SECTION_COUNT as f32 - 1.0);
    assert!((last - JOURNEY_DEPTH).abs() < 1e-4);
}
