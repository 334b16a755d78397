// Full-page slide navigator: one cursor over a fixed list of panels plus a
// transition window during which further navigation is dropped.
//
// Time is passed in by the caller so the window can be exercised without a
// real clock; the web layer feeds `Instant::now()`.

use super::constants::{SCROLL_EDGE_EPSILON, TOUCH_THRESHOLD, TRANSITION_MS, WHEEL_THRESHOLD};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[inline]
    pub fn between(from: usize, to: usize) -> Self {
        if to > from {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// Neighbouring index in this direction; `None` below zero.
    #[inline]
    pub fn neighbour(self, index: usize) -> Option<usize> {
        match self {
            Direction::Forward => index.checked_add(1),
            Direction::Backward => index.checked_sub(1),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavigatorConfig {
    pub transition: Duration,
    /// Wheel deltas with a magnitude strictly below this are jitter.
    pub wheel_threshold: f64,
    /// A swipe fires once its distance strictly exceeds this.
    pub touch_threshold: f64,
    pub edge_epsilon: f64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            transition: Duration::from_millis(TRANSITION_MS as u64),
            wheel_threshold: WHEEL_THRESHOLD,
            touch_threshold: TOUCH_THRESHOLD,
            edge_epsilon: SCROLL_EDGE_EPSILON,
        }
    }
}

impl NavigatorConfig {
    #[inline]
    pub fn transition_ms(&self) -> u32 {
        self.transition.as_millis() as u32
    }
}

/// An accepted panel change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
}

/// What hooks are told, both for real transitions and for the initial layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionChange {
    pub from: Option<usize>,
    pub to: usize,
    pub total: usize,
    pub direction: Option<Direction>,
}

impl SectionChange {
    #[inline]
    pub fn is_initial(&self) -> bool {
        self.from.is_none()
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        progress_fraction(self.to, self.total)
    }
}

/// Fill fraction of the progress indicator; a single panel reads as empty.
#[inline]
pub fn progress_fraction(index: usize, total: usize) -> f64 {
    if total <= 1 {
        return 0.0;
    }
    index as f64 / (total - 1) as f64
}

/// Collaborator notified synchronously whenever the current panel changes.
pub trait SectionHook {
    fn on_section_change(&mut self, change: &SectionChange);
}

impl<T: SectionHook> SectionHook for Rc<RefCell<T>> {
    fn on_section_change(&mut self, change: &SectionChange) {
        self.borrow_mut().on_section_change(change);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavState {
    Idle,
    Transitioning,
}

pub struct SlideNavigator {
    total: usize,
    current: usize,
    transition_started: Option<Instant>,
    config: NavigatorConfig,
    hooks: Vec<Box<dyn SectionHook>>,
}

impl SlideNavigator {
    /// Returns `None` when there are no panels to navigate.
    pub fn new(total: usize, config: NavigatorConfig) -> Option<Self> {
        if total == 0 {
            return None;
        }
        Some(Self {
            total,
            current: 0,
            transition_started: None,
            config,
            hooks: Vec::new(),
        })
    }

    pub fn add_hook(&mut self, hook: Box<dyn SectionHook>) {
        self.hooks.push(hook);
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn is_transitioning(&self, now: Instant) -> bool {
        match self.transition_started {
            Some(started) => now < started || now - started < self.config.transition,
            None => false,
        }
    }

    #[inline]
    pub fn state(&self, now: Instant) -> NavState {
        if self.is_transitioning(now) {
            NavState::Transitioning
        } else {
            NavState::Idle
        }
    }

    #[inline]
    pub fn progress_fraction(&self) -> f64 {
        progress_fraction(self.current, self.total)
    }

    /// Move to `target`. Rejected silently while a transition is in flight,
    /// when out of range, or when already there.
    pub fn go_to(&mut self, target: usize, now: Instant) -> Option<Transition> {
        if self.is_transitioning(now) || target >= self.total || target == self.current {
            return None;
        }
        let from = self.current;
        let direction = Direction::between(from, target);
        self.transition_started = Some(now);
        self.current = target;

        let change = SectionChange {
            from: Some(from),
            to: target,
            total: self.total,
            direction: Some(direction),
        };
        self.notify(&change);
        log::debug!("[slides] {} -> {} ({:?})", from, target, direction);

        Some(Transition {
            from,
            to: target,
            direction,
        })
    }

    #[inline]
    pub fn step(&mut self, direction: Direction, now: Instant) -> Option<Transition> {
        let target = direction.neighbour(self.current)?;
        self.go_to(target, now)
    }

    /// Announce the initial layout (panel 0) to every hook without a transition.
    pub fn reset(&mut self) {
        self.current = 0;
        self.transition_started = None;
        let change = SectionChange {
            from: None,
            to: 0,
            total: self.total,
            direction: None,
        };
        self.notify(&change);
    }

    fn notify(&mut self, change: &SectionChange) {
        for hook in self.hooks.iter_mut() {
            hook.on_section_change(change);
        }
    }
}
