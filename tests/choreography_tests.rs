// Host-side tests for the panel choreography projection.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod navigator {
    include!("../src/core/navigator.rs");
}
mod choreography {
    include!("../src/core/choreography.rs");
}

use choreography::*;
use navigator::{Direction, NavigatorConfig, SectionChange, SlideNavigator, Transition};
use std::collections::HashMap;
use std::time::Duration;

const SLIDE: &str = "transform 0.8s cubic-bezier(0.645, 0.045, 0.355, 1)";

/// Last value written to `prop` on `panel`.
fn last_value(steps: &[Step], panel: usize, prop: StyleProp) -> Option<String> {
    steps.iter().rev().find_map(|s| match s {
        Step::Set {
            panel: p,
            prop: q,
            value,
        } if *p == panel && *q == prop => Some(value.clone()),
        _ => None,
    })
}

/// Final style of every panel after applying `steps` in order.
fn apply(styles: &mut HashMap<(usize, &'static str), String>, steps: &[Step]) {
    for step in steps {
        if let Step::Set { panel, prop, value } = step {
            styles.insert((*panel, prop.css_name()), value.clone());
        }
    }
}

fn position(steps: &[Step], wanted: &Step) -> usize {
    steps
        .iter()
        .position(|s| s == wanted)
        .unwrap_or_else(|| panic!("missing step {:?}", wanted))
}

fn set(panel: usize, prop: StyleProp, value: &str) -> Step {
    Step::Set {
        panel,
        prop,
        value: value.to_string(),
    }
}

#[test]
fn poses_render_expected_transforms() {
    assert_eq!(Pose::Shown.css(), "translateY(0%) scale(1)");
    assert_eq!(Pose::Below.css(), "translateY(100%)");
    assert_eq!(Pose::Receded.css(), "translateY(-20%) scale(0.9)");
    assert_eq!(transform_transition(800), SLIDE);
}

#[test]
fn initial_layout_shows_first_panel_only() {
    let steps = initial(3);
    assert_eq!(
        last_value(&steps, 0, StyleProp::Transform).as_deref(),
        Some("translateY(0%) scale(1)")
    );
    assert_eq!(last_value(&steps, 0, StyleProp::ZIndex).as_deref(), Some("20"));
    for panel in 1..3 {
        assert_eq!(
            last_value(&steps, panel, StyleProp::Transform).as_deref(),
            Some("translateY(100%)")
        );
        assert_eq!(
            last_value(&steps, panel, StyleProp::ZIndex).as_deref(),
            Some("0")
        );
        assert_eq!(
            last_value(&steps, panel, StyleProp::Display).as_deref(),
            Some("block")
        );
    }
    assert!(steps.iter().all(|s| !matches!(s, Step::Reflow { .. })));
}

#[test]
fn forward_slides_incoming_panel_up_over_outgoing() {
    let t = Transition {
        from: 0,
        to: 1,
        direction: Direction::Forward,
    };
    let steps = transition(&t, 3, 800);

    // incoming starts parked below, reflows, then animates to shown
    let below = position(&steps, &set(1, StyleProp::Transform, "translateY(100%)"));
    let reflow = below + 1;
    assert_eq!(steps[reflow], Step::Reflow { panel: 1 });
    let slide = position(&steps, &set(1, StyleProp::Transition, SLIDE));
    assert!(slide > reflow);
    assert_eq!(
        last_value(&steps, 1, StyleProp::Transform).as_deref(),
        Some("translateY(0%) scale(1)")
    );
    assert_eq!(last_value(&steps, 1, StyleProp::ZIndex).as_deref(), Some("20"));

    // outgoing recedes and fades behind
    assert_eq!(
        last_value(&steps, 0, StyleProp::Transform).as_deref(),
        Some("translateY(-20%) scale(0.9)")
    );
    assert_eq!(last_value(&steps, 0, StyleProp::ZIndex).as_deref(), Some("10"));
    assert_eq!(
        last_value(&steps, 0, StyleProp::Filter).as_deref(),
        Some("blur(40px)")
    );
    assert_eq!(last_value(&steps, 0, StyleProp::Opacity).as_deref(), Some("0.5"));
    assert_eq!(
        last_value(&steps, 0, StyleProp::Transition).as_deref(),
        Some("transform 0.8s cubic-bezier(0.645, 0.045, 0.355, 1), filter 0.8s ease, opacity 0.8s ease")
    );

    // bystanders are parked
    assert_eq!(last_value(&steps, 2, StyleProp::ZIndex).as_deref(), Some("0"));
    assert_eq!(
        last_value(&steps, 2, StyleProp::Transform).as_deref(),
        Some("translateY(100%)")
    );
}

#[test]
fn backward_uncovers_incoming_by_sliding_outgoing_down() {
    let t = Transition {
        from: 2,
        to: 1,
        direction: Direction::Backward,
    };
    let steps = transition(&t, 4, 800);

    // outgoing stays on top and leaves downward
    assert_eq!(last_value(&steps, 2, StyleProp::ZIndex).as_deref(), Some("20"));
    assert_eq!(
        last_value(&steps, 2, StyleProp::Transform).as_deref(),
        Some("translateY(100%)")
    );
    // incoming starts receded underneath and comes forward
    let receded = position(
        &steps,
        &set(1, StyleProp::Transform, "translateY(-20%) scale(0.9)"),
    );
    assert_eq!(steps[receded + 1], Step::Reflow { panel: 1 });
    assert_eq!(last_value(&steps, 1, StyleProp::ZIndex).as_deref(), Some("10"));
    assert_eq!(
        last_value(&steps, 1, StyleProp::Transform).as_deref(),
        Some("translateY(0%) scale(1)")
    );
    assert_eq!(last_value(&steps, 1, StyleProp::Filter).as_deref(), Some("blur(0)"));
    assert_eq!(last_value(&steps, 1, StyleProp::Opacity).as_deref(), Some("1"));
}

#[test]
fn directions_are_not_mirrors() {
    let fwd = transition(
        &Transition {
            from: 0,
            to: 1,
            direction: Direction::Forward,
        },
        2,
        800,
    );
    let back = transition(
        &Transition {
            from: 1,
            to: 0,
            direction: Direction::Backward,
        },
        2,
        800,
    );
    // the outgoing panel recedes going forward but drops below going back
    assert_eq!(
        last_value(&fwd, 0, StyleProp::Transform).as_deref(),
        Some("translateY(-20%) scale(0.9)")
    );
    assert_eq!(
        last_value(&back, 1, StyleProp::Transform).as_deref(),
        Some("translateY(100%)")
    );
}

#[test]
fn transition_duration_flows_into_css() {
    let t = Transition {
        from: 0,
        to: 1,
        direction: Direction::Forward,
    };
    let steps = transition(&t, 2, 500);
    assert_eq!(
        last_value(&steps, 1, StyleProp::Transition).as_deref(),
        Some("transform 0.5s cubic-bezier(0.645, 0.045, 0.355, 1)")
    );
}

#[test]
fn settle_clears_filters_on_hidden_panels() {
    let steps = settle(1, 3);
    assert_eq!(steps.len(), 2);
    assert_eq!(last_value(&steps, 0, StyleProp::Filter).as_deref(), Some("none"));
    assert_eq!(last_value(&steps, 2, StyleProp::Filter).as_deref(), Some("none"));
    assert_eq!(last_value(&steps, 1, StyleProp::Filter), None);
}

#[test]
fn entering_first_panel_replays_hero_entrance() {
    let cues = entrance_cues(0);
    assert_eq!(cues.len(), 4);
    assert!(cues[..2].iter().all(|c| c.delay_ms.is_none()));
    assert_eq!(cues[2].part, HeroPart::Primary);
    assert_eq!(cues[2].delay_ms, Some(100));
    assert_eq!(cues[3].part, HeroPart::Secondary);
    assert_eq!(cues[3].delay_ms, Some(400));
    assert!(cues[0]
        .styles
        .contains(&(StyleProp::Transform, "translateY(30px)".to_string())));
    assert!(cues[3]
        .styles
        .contains(&(StyleProp::Filter, "brightness(1.2)".to_string())));
}

#[test]
fn leaving_first_panel_hides_hero() {
    let cues = entrance_cues(3);
    assert_eq!(cues.len(), 2);
    for cue in &cues {
        assert_eq!(cue.delay_ms, None);
        assert_eq!(cue.styles.as_slice(), &[(StyleProp::Opacity, "0".to_string())]);
    }
}

#[test]
fn nav_controls_highlight_current_panel() {
    let active = nav_class_patch(2, 2);
    assert_eq!(active.add, &[NAV_ACTIVE_CLASS]);
    assert!(active.remove.contains(&NAV_IDLE_CLASS));
    assert!(active.remove.contains(&NAV_PLAIN_CLASS));
    let idle = nav_class_patch(1, 2);
    assert_eq!(idle.add, &[NAV_IDLE_CLASS]);
    assert_eq!(idle.remove, &[NAV_ACTIVE_CLASS]);
}

#[test]
fn progress_bar_width_follows_changes_but_not_initial_layout() {
    let change = SectionChange {
        from: Some(1),
        to: 2,
        total: 5,
        direction: Some(Direction::Forward),
    };
    assert_eq!(progress_width(&change).as_deref(), Some("50%"));
    let initial = SectionChange {
        from: None,
        to: 0,
        total: 5,
        direction: None,
    };
    assert_eq!(progress_width(&initial), None);
}

#[test]
fn late_settle_keeps_blur_on_newer_outgoing_panel() {
    let mut nav = SlideNavigator::new(3, NavigatorConfig::default()).expect("non-empty");
    let ms = nav.config().transition_ms();
    let mut styles = HashMap::new();
    apply(&mut styles, &initial(3));

    let t0 = instant::Instant::now();
    let first = nav.go_to(1, t0).expect("accepted");
    apply(&mut styles, &transition(&first, 3, ms));

    // the lock has lapsed but the first settle timer has not fired yet
    let second = nav
        .go_to(2, t0 + Duration::from_millis(801))
        .expect("accepted");
    apply(&mut styles, &transition(&second, 3, ms));
    assert_eq!(styles[&(1, "filter")], "blur(40px)");

    apply(&mut styles, &settle(first.to, 3));
    assert_eq!(styles[&(1, "filter")], "blur(40px)");
    assert_eq!(styles[&(0, "filter")], "none");

    apply(&mut styles, &settle(second.to, 3));
    assert_eq!(styles[&(1, "filter")], "none");
}
