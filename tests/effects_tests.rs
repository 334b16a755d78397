// Host-side tests for pointer effects and page chrome math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod effects {
    include!("../src/core/effects.rs");
}
mod page {
    include!("../src/core/page.rs");
}

use effects::*;
use page::*;

fn card() -> Bounds {
    Bounds {
        left: 0.0,
        top: 0.0,
        width: 200.0,
        height: 100.0,
    }
}

#[test]
fn cursor_is_centred_on_pointer() {
    assert_eq!(cursor_transform(100.0, 50.0), "translate3d(84px, 34px, 0)");
}

#[test]
fn magnetic_pull_is_a_fraction_of_offset() {
    let b = Bounds {
        left: 100.0,
        top: 100.0,
        width: 200.0,
        height: 100.0,
    };
    assert_eq!(b.offset_from_center(250.0, 150.0), (50.0, 0.0));
    assert_eq!(
        magnetic_transform(&b, 250.0, 150.0),
        "translate3d(10.00px, 0.00px, 0) scale(1.05)"
    );
}

#[test]
fn magnetic_rests_on_empty_bounds() {
    assert_eq!(
        magnetic_transform(&Bounds::default(), 10.0, 10.0),
        MAGNETIC_REST
    );
}

#[test]
fn tilt_reaches_full_angle_at_corner() {
    let (rx, ry) = tilt_angles(&card(), 200.0, 0.0);
    assert!((rx - 10.0).abs() < 1e-9);
    assert!((ry - 10.0).abs() < 1e-9);
    assert_eq!(
        tilt_transform(&card(), 200.0, 0.0),
        "perspective(1000px) rotateX(10.00deg) rotateY(10.00deg) scale(1.02)"
    );
}

#[test]
fn tilt_is_flat_at_centre_and_on_empty_bounds() {
    let (rx, ry) = tilt_angles(&card(), 100.0, 50.0);
    assert_eq!(rx.abs(), 0.0);
    assert_eq!(ry, 0.0);
    assert_eq!(tilt_angles(&Bounds::default(), 5.0, 5.0), (0.0, 0.0));
    assert_eq!(
        tilt_rest(),
        "perspective(1000px) rotateX(0) rotateY(0) scale(1)"
    );
}

#[test]
fn viewport_unit_is_one_percent_of_height() {
    assert_eq!(viewport_unit(800.0), "8px");
    assert_eq!(viewport_unit(900.0), "9px");
}

#[test]
fn scroll_progress_is_clamped() {
    assert_eq!(scroll_progress_pct(0.0, 1000.0, 800.0), 0.0);
    assert_eq!(scroll_progress_pct(50.0, 1000.0, 800.0), 25.0);
    assert_eq!(scroll_progress_pct(400.0, 1000.0, 800.0), 100.0);
    // page shorter than viewport
    assert_eq!(scroll_progress_pct(10.0, 600.0, 800.0), 0.0);
}

#[test]
fn reveal_stagger_only_applies_to_grid_children() {
    assert_eq!(reveal_delay_ms(3, true), Some(300));
    assert_eq!(reveal_delay_ms(0, true), Some(0));
    assert_eq!(reveal_delay_ms(3, false), None);
}

#[test]
fn parallax_only_within_hero() {
    assert_eq!(parallax_offset(0.0, 0.0, 800.0), None);
    assert_eq!(parallax_offset(200.0, 0.0, 800.0), Some(100.0));
    assert_eq!(parallax_offset(800.0, 0.0, 800.0), Some(400.0));
    assert_eq!(parallax_offset(801.0, 0.0, 800.0), None);
}

#[test]
fn control_index_parses_attribute_or_handler() {
    assert_eq!(control_target_index("3"), Some(3));
    assert_eq!(control_target_index("scrollToSection(12)"), Some(12));
    assert_eq!(control_target_index("scrollToSection()"), None);
    assert_eq!(control_target_index(""), None);
}

#[test]
fn popup_presentation_by_state() {
    assert_eq!(PopupState::default(), PopupState::Closed);
    assert!(PopupState::Open.is_open());
    assert!(!PopupState::Closed.is_open());
    assert_eq!(
        PopupState::Open.content_transform(),
        "perspective(1000px) rotateX(0deg) scale(1)"
    );
    assert!(PopupState::Closed.content_transform().contains("rotateX(20deg)"));
}

#[test]
fn inline_handler_controls_are_not_wired_twice() {
    let global = "scrollToSection";
    assert_eq!(direct_control_index("2", None, global), Some(2));
    assert_eq!(
        direct_control_index("2", Some("scrollToSection(2)"), global),
        None
    );
    assert_eq!(
        direct_control_index("2", Some("closeMobileMenu()"), global),
        Some(2)
    );
    assert_eq!(direct_control_index("x", None, global), None);
}
