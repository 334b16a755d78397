// Pure projection of navigator events into ordered style instructions.
//
// The web layer applies each `Step` in order; `Reflow` forces layout on a
// panel so the following transition starts from the pose set before it.

use super::constants::*;
use super::navigator::{Direction, SectionChange, Transition};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleProp {
    Display,
    WillChange,
    Transition,
    Transform,
    ZIndex,
    Opacity,
    Filter,
}

impl StyleProp {
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProp::Display => "display",
            StyleProp::WillChange => "will-change",
            StyleProp::Transition => "transition",
            StyleProp::Transform => "transform",
            StyleProp::ZIndex => "z-index",
            StyleProp::Opacity => "opacity",
            StyleProp::Filter => "filter",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    Set {
        panel: usize,
        prop: StyleProp,
        value: String,
    },
    Reflow {
        panel: usize,
    },
}

pub type Choreography = SmallVec<[Step; 32]>;

/// Resting positions a panel can be placed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pose {
    Shown,
    Below,
    Receded,
}

impl Pose {
    pub fn css(self) -> String {
        match self {
            Pose::Shown => "translateY(0%) scale(1)".to_string(),
            Pose::Below => "translateY(100%)".to_string(),
            Pose::Receded => format!(
                "translateY({}%) scale({})",
                RECEDED_TRANSLATE_PCT, RECEDED_SCALE
            ),
        }
    }
}

#[inline]
fn set(panel: usize, prop: StyleProp, value: impl Into<String>) -> Step {
    Step::Set {
        panel,
        prop,
        value: value.into(),
    }
}

#[inline]
fn seconds(duration_ms: u32) -> f32 {
    duration_ms as f32 / 1000.0
}

pub fn transform_transition(duration_ms: u32) -> String {
    format!("transform {}s {}", seconds(duration_ms), PANEL_EASE)
}

fn fade_transition(duration_ms: u32) -> String {
    let s = seconds(duration_ms);
    format!(
        "{}, filter {}s ease, opacity {}s ease",
        transform_transition(duration_ms),
        s,
        s
    )
}

/// Layout applied once at startup: panel 0 shown, the rest parked below.
pub fn initial(total: usize) -> Choreography {
    let mut steps = Choreography::new();
    for panel in 0..total {
        steps.push(set(panel, StyleProp::Transition, "none"));
        steps.push(set(panel, StyleProp::Display, "block"));
        steps.push(set(panel, StyleProp::WillChange, "transform, opacity, filter"));
        if panel == 0 {
            steps.push(set(panel, StyleProp::Transform, Pose::Shown.css()));
            steps.push(set(panel, StyleProp::ZIndex, Z_FRONT.to_string()));
        } else {
            steps.push(set(panel, StyleProp::Transform, Pose::Below.css()));
            steps.push(set(panel, StyleProp::ZIndex, Z_PARKED.to_string()));
        }
        steps.push(set(panel, StyleProp::Opacity, "1"));
    }
    steps
}

/// Forward stacks the incoming panel up over the outgoing one; backward slides
/// the outgoing panel down to uncover the incoming one. The two are not mirrors.
pub fn transition(t: &Transition, total: usize, duration_ms: u32) -> Choreography {
    let (prev, next) = (t.from, t.to);
    let mut steps = Choreography::new();

    steps.push(set(next, StyleProp::Transition, "none"));
    steps.push(set(next, StyleProp::ZIndex, Z_FRONT.to_string()));
    steps.push(set(next, StyleProp::Opacity, "1"));
    steps.push(set(prev, StyleProp::ZIndex, Z_BEHIND.to_string()));

    for other in (0..total).filter(|&i| i != prev && i != next) {
        steps.push(set(other, StyleProp::ZIndex, Z_PARKED.to_string()));
        steps.push(set(other, StyleProp::Transform, Pose::Below.css()));
    }
    steps.push(Step::Reflow { panel: next });

    let slide = transform_transition(duration_ms);
    match t.direction {
        Direction::Forward => {
            steps.push(set(next, StyleProp::Transform, Pose::Below.css()));
            steps.push(Step::Reflow { panel: next });
            steps.push(set(next, StyleProp::Transition, slide.clone()));
            steps.push(set(next, StyleProp::Transform, Pose::Shown.css()));
            steps.push(set(prev, StyleProp::Transition, fade_transition(duration_ms)));
            steps.push(set(prev, StyleProp::Transform, Pose::Receded.css()));
        }
        Direction::Backward => {
            steps.push(set(prev, StyleProp::ZIndex, Z_FRONT.to_string()));
            steps.push(set(next, StyleProp::ZIndex, Z_BEHIND.to_string()));
            steps.push(set(next, StyleProp::Transform, Pose::Receded.css()));
            steps.push(Step::Reflow { panel: next });
            steps.push(set(prev, StyleProp::Transition, fade_transition(duration_ms)));
            steps.push(set(prev, StyleProp::Transform, Pose::Below.css()));
            steps.push(set(next, StyleProp::Transition, slide));
            steps.push(set(next, StyleProp::Transform, Pose::Shown.css()));
        }
    }

    steps.push(set(prev, StyleProp::Filter, format!("blur({}px)", OUTGOING_BLUR_PX)));
    steps.push(set(prev, StyleProp::Opacity, OUTGOING_OPACITY.to_string()));
    steps.push(set(next, StyleProp::Filter, "blur(0)"));
    steps.push(set(next, StyleProp::Opacity, "1"));
    steps
}

/// Cleanup once the transition window has closed.
pub fn settle(current: usize, total: usize) -> Choreography {
    (0..total)
        .filter(|&i| i != current)
        .map(|i| set(i, StyleProp::Filter, "none"))
        .collect()
}

// ---------------- Hero entrance ----------------

/// The two staggered headline elements on the first panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroPart {
    Primary,
    Secondary,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cue {
    /// `None` applies immediately, otherwise after this many milliseconds.
    pub delay_ms: Option<u32>,
    pub part: HeroPart,
    pub styles: SmallVec<[(StyleProp, String); 4]>,
}

fn hidden_hero(part: HeroPart) -> Cue {
    Cue {
        delay_ms: None,
        part,
        styles: SmallVec::from_vec(vec![
            (StyleProp::Transition, "none".to_string()),
            (StyleProp::Transform, format!("translateY({}px)", HERO_OFFSET_PX)),
            (StyleProp::Opacity, "0".to_string()),
            (StyleProp::Filter, "brightness(1)".to_string()),
        ]),
    }
}

fn revealed_hero(part: HeroPart, delay_ms: u32) -> Cue {
    Cue {
        delay_ms: Some(delay_ms),
        part,
        styles: SmallVec::from_vec(vec![
            (
                StyleProp::Transition,
                format!("all {}s {}", seconds(TRANSITION_MS), HERO_EASE),
            ),
            (StyleProp::Transform, "translateY(0)".to_string()),
            (StyleProp::Opacity, "1".to_string()),
            (StyleProp::Filter, format!("brightness({})", HERO_BRIGHTNESS)),
        ]),
    }
}

/// Entering panel 0 replays the headline entrance; entering any other panel hides it.
pub fn entrance_cues(index: usize) -> Vec<Cue> {
    if index == 0 {
        vec![
            hidden_hero(HeroPart::Primary),
            hidden_hero(HeroPart::Secondary),
            revealed_hero(HeroPart::Primary, HERO_FIRST_DELAY_MS),
            revealed_hero(HeroPart::Secondary, HERO_SECOND_DELAY_MS),
        ]
    } else {
        [HeroPart::Primary, HeroPart::Secondary]
            .into_iter()
            .map(|part| Cue {
                delay_ms: None,
                part,
                styles: SmallVec::from_vec(vec![(StyleProp::Opacity, "0".to_string())]),
            })
            .collect()
    }
}

// ---------------- Index controls ----------------

pub const NAV_ACTIVE_CLASS: &str = "text-neon-blue";
pub const NAV_IDLE_CLASS: &str = "text-gray-300";
pub const NAV_PLAIN_CLASS: &str = "text-white";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassPatch {
    pub add: &'static [&'static str],
    pub remove: &'static [&'static str],
}

/// Classes for a control pointing at `target` while `current` is shown.
pub fn nav_class_patch(target: usize, current: usize) -> ClassPatch {
    if target == current {
        ClassPatch {
            add: &[NAV_ACTIVE_CLASS],
            remove: &[NAV_IDLE_CLASS, NAV_PLAIN_CLASS],
        }
    } else {
        ClassPatch {
            add: &[NAV_IDLE_CLASS],
            remove: &[NAV_ACTIVE_CLASS],
        }
    }
}

/// CSS width of the progress indicator after a change; the initial layout
/// leaves the bar alone.
pub fn progress_width(change: &SectionChange) -> Option<String> {
    if change.is_initial() {
        return None;
    }
    Some(format!("{}%", change.progress() * 100.0))
}
