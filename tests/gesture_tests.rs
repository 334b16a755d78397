// Host-side tests for wheel, touch and key intent translation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod navigator {
    include!("../src/core/navigator.rs");
}
mod gesture {
    include!("../src/core/gesture.rs");
}

use gesture::*;
use navigator::{Direction, NavigatorConfig};

fn cfg() -> NavigatorConfig {
    NavigatorConfig::default()
}

fn region(offset: f64) -> ScrollMetrics {
    ScrollMetrics {
        offset,
        extent: 1000.0,
        viewport: 400.0,
    }
}

#[test]
fn wheel_jitter_below_threshold_is_swallowed() {
    assert_eq!(
        wheel_intent(14.9, None, false, &cfg()),
        WheelOutcome::Captured(None)
    );
    assert_eq!(
        wheel_intent(-14.9, None, false, &cfg()),
        WheelOutcome::Captured(None)
    );
}

#[test]
fn wheel_threshold_is_inclusive() {
    assert_eq!(
        wheel_intent(15.0, None, false, &cfg()),
        WheelOutcome::Captured(Some(Direction::Forward))
    );
    assert_eq!(
        wheel_intent(-15.0, None, false, &cfg()),
        WheelOutcome::Captured(Some(Direction::Backward))
    );
}

#[test]
fn wheel_during_transition_is_captured_without_step() {
    assert_eq!(
        wheel_intent(120.0, None, true, &cfg()),
        WheelOutcome::Captured(None)
    );
}

#[test]
fn nested_region_keeps_wheel_until_its_edge() {
    // mid-scroll: both directions belong to the region
    assert_eq!(
        wheel_intent(100.0, Some(region(200.0)), false, &cfg()),
        WheelOutcome::Native
    );
    assert_eq!(
        wheel_intent(-100.0, Some(region(200.0)), false, &cfg()),
        WheelOutcome::Native
    );
    // at the bottom, scrolling down moves to the next panel
    assert_eq!(
        wheel_intent(100.0, Some(region(600.0)), false, &cfg()),
        WheelOutcome::Captured(Some(Direction::Forward))
    );
    // at the top, scrolling up moves to the previous panel
    assert_eq!(
        wheel_intent(-100.0, Some(region(0.0)), false, &cfg()),
        WheelOutcome::Captured(Some(Direction::Backward))
    );
}

#[test]
fn nested_region_holds_even_while_transitioning() {
    assert_eq!(
        wheel_intent(100.0, Some(region(10.0)), true, &cfg()),
        WheelOutcome::Native
    );
}

#[test]
fn bottom_edge_has_slack() {
    let eps = cfg().edge_epsilon;
    assert!(region(598.0).at_bottom(eps));
    assert!(!region(597.0).at_bottom(eps));
    assert!(region(0.0).at_top());
    assert!(!region(0.5).at_top());
    assert!(region(0.0).overflows());
    assert!(!ScrollMetrics {
        offset: 0.0,
        extent: 400.0,
        viewport: 400.0
    }
    .overflows());
}

#[test]
fn touch_fires_only_past_threshold() {
    let mut t = TouchTracker::default();
    t.begin(500.0);
    assert_eq!(t.sample(460.0, None, false, &cfg()), None);
    assert_eq!(t.anchor(), 500.0);
    assert_eq!(
        t.sample(459.0, None, false, &cfg()),
        Some(Direction::Forward)
    );
    assert_eq!(t.anchor(), 459.0);
}

#[test]
fn touch_reanchors_so_one_long_swipe_steps_per_threshold() {
    let mut t = TouchTracker::default();
    t.begin(100.0);
    assert_eq!(
        t.sample(150.0, None, false, &cfg()),
        Some(Direction::Backward)
    );
    // only 20px past the new anchor
    assert_eq!(t.sample(170.0, None, false, &cfg()), None);
    assert_eq!(
        t.sample(191.0, None, false, &cfg()),
        Some(Direction::Backward)
    );
}

#[test]
fn touch_is_ignored_while_transitioning() {
    let mut t = TouchTracker::default();
    t.begin(500.0);
    assert_eq!(t.sample(300.0, None, true, &cfg()), None);
    assert_eq!(t.anchor(), 500.0);
}

#[test]
fn touch_defers_to_nested_region() {
    let mut t = TouchTracker::default();
    t.begin(500.0);
    assert_eq!(t.sample(300.0, Some(region(200.0)), false, &cfg()), None);
    assert_eq!(
        t.sample(300.0, Some(region(600.0)), false, &cfg()),
        Some(Direction::Forward)
    );
}

#[test]
fn arrow_keys_map_to_directions() {
    assert_eq!(key_intent("ArrowDown"), Some(Direction::Forward));
    assert_eq!(key_intent("ArrowUp"), Some(Direction::Backward));
    assert_eq!(key_intent("PageDown"), None);
    assert_eq!(key_intent("Escape"), None);
}
