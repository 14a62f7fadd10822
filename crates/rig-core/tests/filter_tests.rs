// Host-side tests for the scroll smoothing filter.

use rig_core::*;

const DT_60FPS: f32 = 1.0 / 60.0;

fn between(v: f32, a: f32, b: f32) -> bool {
    v >= a.min(b) && v <= a.max(b)
}

#[test]
fn blend_factor_is_zero_for_non_positive_dt() {
    assert_eq!(blend_factor(DAMPING_RATE, 0.0), 0.0);
    assert_eq!(blend_factor(DAMPING_RATE, -0.5), 0.0);
    assert_eq!(blend_factor(DAMPING_RATE, f32::NAN), 0.0);
    assert_eq!(blend_factor(DAMPING_RATE, f32::INFINITY), 0.0);
}

#[test]
fn blend_factor_caps_at_one_on_long_frames() {
    // 3 seconds in a background tab
    assert_eq!(blend_factor(DAMPING_RATE, 3.0), 1.0);
    let small = blend_factor(DAMPING_RATE, DT_60FPS);
    assert!(small > 0.0 && small < 0.1);
}

#[test]
fn step_never_overshoots() {
    let starts = [0.0_f32, 0.25, 0.5, 0.9, 1.0];
    let raws = [0.0_f32, 0.1, 0.33, 0.75, 1.0];
    let dts = [0.0_f32, 0.001, DT_60FPS, 0.05, 0.19, 0.2, 0.5, 4.0];
    for &start in &starts {
        for &raw in &raws {
            for &dt in &dts {
                let mut f = SmoothingFilter::new(start);
                let v = f.step(raw, DAMPING_RATE, dt);
                assert!(
                    between(v, start, raw),
                    "start={start} raw={raw} dt={dt} -> {v}"
                );
            }
        }
    }
}

#[test]
fn zero_dt_is_a_no_op() {
    let mut f = SmoothingFilter::new(0.42);
    for _ in 0..1000 {
        assert_eq!(f.step(1.0, DAMPING_RATE, 0.0), 0.42);
    }
    assert_eq!(f.step(0.0, DAMPING_RATE, -1.0), 0.42);
}

#[test]
fn converges_to_constant_input() {
    let mut f = SmoothingFilter::new(0.0);
    let target = 0.73;
    let mut steps = 0;
    while (f.value() - target).abs() > 1e-6 {
        f.step(target, DAMPING_RATE, DT_60FPS);
        steps += 1;
        assert!(steps < 2_000, "did not converge, value={}", f.value());
    }
    // ~12 frames per e-fold at 60fps
    assert!(steps > 60);
}

#[test]
fn settles_exactly_on_target() {
    let mut f = SmoothingFilter::new(0.0);
    for _ in 0..2_000 {
        f.step(0.6, DAMPING_RATE, DT_60FPS);
    }
    assert_eq!(f.value(), 0.6);
}

#[test]
fn overscroll_passes_through_unclamped() {
    let mut f = SmoothingFilter::new(1.0);
    let v = f.step(1.2, DAMPING_RATE, 0.5);
    assert!(v > 1.0);
    let v = f.step(-0.3, DAMPING_RATE, 1.0);
    assert_eq!(v, -0.3);
}

#[test]
fn follow_factor_matches_blend_factor() {
    for dt in [0.0_f32, DT_60FPS, 0.1, 1.0] {
        assert_eq!(
            follow_factor(CAMERA_FOLLOW_RATE, dt),
            blend_factor(CAMERA_FOLLOW_RATE, dt)
        );
    }
}

#[test]
fn non_finite_raw_is_ignored() {
    let mut f = SmoothingFilter::new(0.3);
    assert_eq!(f.step(f32::NAN, DAMPING_RATE, DT_60FPS), 0.3);
    assert_eq!(f.step(f32::INFINITY, DAMPING_RATE, DT_60FPS), 0.3);
    // still tracks real input afterwards
    let v = f.step(0.5, DAMPING_RATE, DT_60FPS);
    assert!(v > 0.3 && v < 0.5);
}
