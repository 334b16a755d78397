// Translation of raw wheel / touch / key input into navigation intents.

use super::navigator::{Direction, NavigatorConfig};

/// Scroll geometry of a nested scrollable region along the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub extent: f64,
    pub viewport: f64,
}

impl ScrollMetrics {
    #[inline]
    pub fn overflows(&self) -> bool {
        self.extent > self.viewport
    }

    #[inline]
    pub fn at_top(&self) -> bool {
        self.offset <= 0.0
    }

    #[inline]
    pub fn at_bottom(&self, epsilon: f64) -> bool {
        self.extent - self.offset <= self.viewport + epsilon
    }

    /// True while the region can still scroll in `direction` and so keeps the gesture.
    #[inline]
    pub fn holds(&self, direction: Direction, epsilon: f64) -> bool {
        match direction {
            Direction::Forward => !self.at_bottom(epsilon),
            Direction::Backward => !self.at_top(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Leave the event alone so the nested region scrolls natively.
    Native,
    /// Prevent the default scroll; step if a direction is present.
    Captured(Option<Direction>),
}

pub fn wheel_intent(
    delta_y: f64,
    nested: Option<ScrollMetrics>,
    transitioning: bool,
    config: &NavigatorConfig,
) -> WheelOutcome {
    let direction = if delta_y > 0.0 {
        Direction::Forward
    } else {
        Direction::Backward
    };
    if let Some(region) = nested {
        if region.holds(direction, config.edge_epsilon) {
            return WheelOutcome::Native;
        }
    }
    if transitioning || delta_y.abs() < config.wheel_threshold {
        return WheelOutcome::Captured(None);
    }
    WheelOutcome::Captured(Some(direction))
}

/// Per-gesture touch state: the reference Y a swipe is measured from.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchTracker {
    anchor_y: f64,
}

impl TouchTracker {
    #[inline]
    pub fn begin(&mut self, y: f64) {
        self.anchor_y = y;
    }

    #[inline]
    pub fn anchor(&self) -> f64 {
        self.anchor_y
    }

    /// Feed a move sample. Fires at most once per threshold crossing and
    /// re-anchors at the sample that fired.
    pub fn sample(
        &mut self,
        y: f64,
        nested: Option<ScrollMetrics>,
        transitioning: bool,
        config: &NavigatorConfig,
    ) -> Option<Direction> {
        if transitioning {
            return None;
        }
        let diff = self.anchor_y - y;
        let direction = if diff > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        };
        if let Some(region) = nested {
            if region.holds(direction, config.edge_epsilon) {
                return None;
            }
        }
        if diff.abs() > config.touch_threshold {
            self.anchor_y = y;
            return Some(direction);
        }
        None
    }
}

#[inline]
pub fn key_intent(key: &str) -> Option<Direction> {
    match key {
        "ArrowDown" => Some(Direction::Forward),
        "ArrowUp" => Some(Direction::Backward),
        _ => None,
    }
}
