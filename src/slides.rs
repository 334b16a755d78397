use crate::constants::*;
use crate::core::choreography::{self, HeroPart, Step};
use crate::core::page::{control_target_index, direct_control_index};
use crate::core::{
    BackgroundScene, Direction, NavigatorConfig, SectionChange, SectionHook, SlideNavigator,
};
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

pub type SharedSlides = Rc<RefCell<SlideController>>;

/// Owns the navigator and the panel elements it projects onto.
pub struct SlideController {
    navigator: SlideNavigator,
    panels: Vec<web::HtmlElement>,
}

impl SlideController {
    /// Build the controller from `.fp-section` panels. With no panels there is
    /// nothing to navigate and `None` is returned.
    pub fn install(
        document: &web::Document,
        background: Option<Rc<RefCell<BackgroundScene>>>,
    ) -> Option<SharedSlides> {
        let panels = dom::query_html_elements(document, PANEL_SELECTOR);
        let Some(mut navigator) = SlideNavigator::new(panels.len(), NavigatorConfig::default())
        else {
            log::warn!("[slides] no {} panels found; navigator disabled", PANEL_SELECTOR);
            return None;
        };

        if let Some(scene) = background {
            navigator.add_hook(Box::new(scene));
        }
        navigator.add_hook(Box::new(NavControls::collect(document)));
        navigator.add_hook(Box::new(ProgressBar {
            bar: dom::html_element_by_id(document, PROGRESS_BAR_ID),
        }));
        navigator.add_hook(Box::new(HeroEntrance {
            primary: dom::html_element_by_id(document, HERO_PRIMARY_ID),
            secondary: dom::html_element_by_id(document, HERO_SECONDARY_ID),
        }));

        let mut controller = SlideController { navigator, panels };
        controller.apply(&choreography::initial(controller.panels.len()));
        controller.navigator.reset();
        log::info!("[slides] {} panels", controller.panels.len());
        Some(Rc::new(RefCell::new(controller)))
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.navigator.current()
    }

    #[inline]
    pub fn config(&self) -> &NavigatorConfig {
        self.navigator.config()
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.navigator.is_transitioning(Instant::now())
    }

    /// Navigate to `index`; rejected requests do nothing.
    pub fn go_to(this: &SharedSlides, index: usize) {
        let mut ctl = this.borrow_mut();
        let Some(t) = ctl.navigator.go_to(index, Instant::now()) else {
            return;
        };
        let total = ctl.panels.len();
        let duration_ms = ctl.navigator.config().transition_ms();
        ctl.apply(&choreography::transition(&t, total, duration_ms));
        drop(ctl);

        // settle the panel this transition landed on, even if a newer one has started
        let settled = t.to;
        let slides = this.clone();
        dom::set_timeout(duration_ms, move || {
            let ctl = slides.borrow();
            ctl.apply(&choreography::settle(settled, total));
        });
    }

    #[inline]
    pub fn step(this: &SharedSlides, direction: Direction) {
        let target = {
            let ctl = this.borrow();
            direction.neighbour(ctl.current())
        };
        if let Some(target) = target {
            Self::go_to(this, target);
        }
    }

    fn apply(&self, steps: &[Step]) {
        for step in steps {
            match step {
                Step::Set { panel, prop, value } => {
                    if let Some(el) = self.panels.get(*panel) {
                        dom::set_style(el, prop.css_name(), value);
                    }
                }
                Step::Reflow { panel } => {
                    if let Some(el) = self.panels.get(*panel) {
                        _ = el.offset_width();
                    }
                }
            }
        }
    }
}

/// Expose `window.scrollToSection(n)` for inline handlers in the markup.
pub fn install_global_entry(window: &web::Window, slides: &SharedSlides) {
    let slides = slides.clone();
    dom::expose_global(window, GLOBAL_NAVIGATE_FN, move |arg: JsValue| {
        let index = arg
            .as_f64()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(|v| v as usize)
            .or_else(|| arg.as_string().and_then(|s| control_target_index(&s)));
        if let Some(index) = index {
            SlideController::go_to(&slides, index);
        }
    });
}

/// Controls carrying `data-section="N"` navigate directly on click, unless
/// their inline handler already calls the global entry.
pub fn wire_nav_controls(document: &web::Document, slides: &SharedSlides) {
    for el in dom::query_html_elements(document, "[data-section]") {
        let onclick = el.get_attribute("onclick");
        let Some(index) = el.get_attribute("data-section").and_then(|v| {
            direct_control_index(&v, onclick.as_deref(), GLOBAL_NAVIGATE_FN)
        }) else {
            continue;
        };
        let slides = slides.clone();
        dom::add_listener(&el, "click", move |_: web::MouseEvent| {
            SlideController::go_to(&slides, index);
        });
    }
}

// ---------------- Section hooks ----------------

struct NavControls {
    controls: Vec<(web::Element, usize)>,
}

impl NavControls {
    fn collect(document: &web::Document) -> Self {
        let controls = dom::query_html_elements(document, NAV_CONTROL_SELECTOR)
            .into_iter()
            .filter_map(|el| {
                let attr = el
                    .get_attribute("data-section")
                    .or_else(|| el.get_attribute("onclick"))?;
                let index = control_target_index(&attr)?;
                Some((web::Element::from(el), index))
            })
            .collect();
        Self { controls }
    }
}

impl SectionHook for NavControls {
    fn on_section_change(&mut self, change: &SectionChange) {
        for (el, target) in &self.controls {
            let patch = choreography::nav_class_patch(*target, change.to);
            let cl = el.class_list();
            for class in patch.remove {
                _ = cl.remove_1(class);
            }
            for class in patch.add {
                _ = cl.add_1(class);
            }
        }
    }
}

struct ProgressBar {
    bar: Option<web::HtmlElement>,
}

impl SectionHook for ProgressBar {
    fn on_section_change(&mut self, change: &SectionChange) {
        if let (Some(bar), Some(width)) = (&self.bar, choreography::progress_width(change)) {
            dom::set_style(bar, "width", &width);
        }
    }
}

struct HeroEntrance {
    primary: Option<web::HtmlElement>,
    secondary: Option<web::HtmlElement>,
}

impl HeroEntrance {
    fn element(&self, part: HeroPart) -> Option<&web::HtmlElement> {
        match part {
            HeroPart::Primary => self.primary.as_ref(),
            HeroPart::Secondary => self.secondary.as_ref(),
        }
    }
}

impl SectionHook for HeroEntrance {
    fn on_section_change(&mut self, change: &SectionChange) {
        if change.is_initial() {
            return;
        }
        // the entrance needs both headline parts; hiding works with either
        if change.to == 0 && (self.primary.is_none() || self.secondary.is_none()) {
            return;
        }
        for cue in choreography::entrance_cues(change.to) {
            let Some(el) = self.element(cue.part).cloned() else {
                continue;
            };
            match cue.delay_ms {
                None => {
                    for (prop, value) in &cue.styles {
                        dom::set_style(&el, prop.css_name(), value);
                    }
                }
                Some(delay) => dom::set_timeout(delay, move || {
                    for (prop, value) in &cue.styles {
                        dom::set_style(&el, prop.css_name(), value);
                    }
                }),
            }
        }
    }
}
