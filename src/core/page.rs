// Page chrome outside the slide navigator: viewport unit fix, document scroll
// progress, reveal stagger, hero parallax and the contact popup presentation.

use super::constants::{PARALLAX_FACTOR, REVEAL_STAGGER_MS};

/// Value for the `--vh` custom property: one percent of the inner height.
#[inline]
pub fn viewport_unit(inner_height: f64) -> String {
    format!("{}px", inner_height * 0.01)
}

/// Document scroll progress in percent; a page that cannot scroll reads 0.
pub fn scroll_progress_pct(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_top / range * 100.0).clamp(0.0, 100.0)
}

/// Transition delay for the `index`-th revealed element; only grid children stagger.
#[inline]
pub fn reveal_delay_ms(index: usize, in_grid: bool) -> Option<u32> {
    in_grid.then(|| index as u32 * REVEAL_STAGGER_MS)
}

/// Background offset for the hero while the scroll position is within it.
pub fn parallax_offset(scroll_y: f64, section_top: f64, section_height: f64) -> Option<f64> {
    let limit = section_top + section_height;
    (scroll_y > section_top && scroll_y <= limit).then(|| scroll_y * PARALLAX_FACTOR)
}

/// Panel index carried by a navigation control, read from either a
/// `data-section="N"` value or an inline `scrollToSection(N)` handler.
pub fn control_target_index(attr: &str) -> Option<usize> {
    let digits: String = attr
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Index a `data-section` control navigates to when clicked. Controls whose
/// inline `onclick` already calls `global_fn` are left to that handler.
pub fn direct_control_index(data_section: &str, onclick: Option<&str>, global_fn: &str) -> Option<usize> {
    if onclick.is_some_and(|handler| handler.contains(global_fn)) {
        return None;
    }
    control_target_index(data_section)
}

pub const REVEAL_HIDDEN: [&str; 3] = ["opacity-0", "translate-y-10", "scale-95"];
pub const REVEAL_SHOWN: [&str; 3] = ["opacity-100", "translate-y-0", "scale-100"];
pub const REVEAL_BASE: [&str; 3] = ["transition-all", "duration-700", "ease-out"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PopupState {
    Open,
    #[default]
    Closed,
}

impl PopupState {
    /// Backdrop classes present only while closed.
    pub const CLOSED_CLASSES: [&'static str; 2] = ["opacity-0", "pointer-events-none"];

    #[inline]
    pub fn content_transform(self) -> &'static str {
        match self {
            PopupState::Open => "perspective(1000px) rotateX(0deg) scale(1)",
            PopupState::Closed => "perspective(1000px) rotateX(20deg) scale(0.9)",
        }
    }

    #[inline]
    pub fn is_open(self) -> bool {
        self == PopupState::Open
    }
}
