// Host-side tests for section descriptors and overlay highlight state.

use rig_core::*;

#[test]
fn five_sections_with_copy() {
    assert_eq!(SECTIONS.len(), 5);
    for s in SECTIONS.iter() {
        assert!(!s.title.is_empty());
        assert!(!s.description.is_empty());
    }
}

#[test]
fn section_index_boundaries() {
    assert_eq!(section_index(0.0, 5), 0);
    assert_eq!(section_index(0.199, 5), 0);
    assert_eq!(section_index(0.2, 5), 1);
    assert_eq!(section_index(0.9999, 5), 4);
    // un-clamped 1.0 must not index past the end
    assert_eq!(section_index(1.0, 5), 4);
    assert_eq!(section_index(7.0, 5), 4);
}

#[test]
fn section_index_degenerate_inputs() {
    assert_eq!(section_index(-0.5, 5), 0);
    assert_eq!(section_index(f32::NAN, 5), 0);
    assert_eq!(section_index(0.5, 0), 0);
    assert_eq!(section_index(0.5, 1), 0);
}

#[test]
fn listener_progress_excludes_one() {
    assert_eq!(listener_progress(1.0), PUBLISH_MAX);
    assert_eq!(listener_progress(-1.0), 0.0);
    assert_eq!(listener_progress(f32::NAN), 0.0);
    assert_eq!(listener_progress(0.42), 0.42);
}

#[test]
fn apply_reports_only_changes() {
    let mut overlay = OverlayState::default();
    assert_eq!(overlay.apply(0.05), None);
    assert_eq!(overlay.fill(), 0.05);
    assert_eq!(overlay.apply(0.25), Some(1));
    assert_eq!(overlay.apply(0.3), None);
    assert_eq!(overlay.apply(1.0), Some(4));
    assert_eq!(overlay.fill(), PUBLISH_MAX);
    assert_eq!(overlay.active_section().map(|s| s.title), Some(SECTIONS[4].title));
}

#[test]
fn exactly_one_section_is_active() {
    let mut overlay = OverlayState::default();
    for v in [0.0_f32, 0.3, 0.55, 0.61, 0.99, 0.1] {
        overlay.apply(v);
        let lit = (0..SECTIONS.len()).filter(|i| overlay.is_active(*i)).count();
        assert_eq!(lit, 1, "progress {v}");
    }
}

#[test]
fn jitter_at_boundary_flips_without_hysteresis() {
    let mut overlay = OverlayState::default();
    let mut changes = 0;
    for v in [0.399_f32, 0.401, 0.399, 0.401] {
        if overlay.apply(v).is_some() {
            changes += 1;
        }
    }
    // 0 -> 1, 1 -> 2, 2 -> 1, 1 -> 2
    assert_eq!(changes, 4);
    assert_eq!(overlay.active(), 2);
}

#[test]
fn sections_follow_page_nav_order() {
    let titles: Vec<&str> = SECTIONS.iter().map(|s| s.title).collect();
    assert_eq!(titles, ["Home", "Features", "Dashboard", "Shop", "Contact"]);
}
