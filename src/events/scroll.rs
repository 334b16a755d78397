use crate::constants::SPA_MODE_CLASS;
use crate::core::gesture::{wheel_intent, TouchTracker, WheelOutcome};
use crate::dom;
use crate::slides::{SharedSlides, SlideController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn slide_mode_active() -> bool {
    dom::window_document()
        .map(|d| dom::body_has_class(&d, SPA_MODE_CLASS))
        .unwrap_or(false)
}

pub fn handle_wheel(ev: &web::WheelEvent, slides: &SharedSlides) {
    if !slide_mode_active() {
        return;
    }
    let nested = dom::nested_scroll_metrics(ev.target());
    let outcome = {
        let ctl = slides.borrow();
        wheel_intent(ev.delta_y(), nested, ctl.is_transitioning(), ctl.config())
    };
    match outcome {
        WheelOutcome::Native => {}
        WheelOutcome::Captured(direction) => {
            ev.prevent_default();
            if let Some(direction) = direction {
                SlideController::step(slides, direction);
            }
        }
    }
}

#[inline]
fn first_touch_y(ev: &web::TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|t| t.client_y() as f64)
}

pub fn handle_touch_move(
    ev: &web::TouchEvent,
    tracker: &Rc<RefCell<TouchTracker>>,
    slides: &SharedSlides,
) {
    if !slide_mode_active() {
        return;
    }
    let Some(y) = first_touch_y(ev) else {
        return;
    };
    let nested = dom::nested_scroll_metrics(ev.target());
    let direction = {
        let ctl = slides.borrow();
        tracker
            .borrow_mut()
            .sample(y, nested, ctl.is_transitioning(), ctl.config())
    };
    if let Some(direction) = direction {
        SlideController::step(slides, direction);
    }
}

/// Wheel needs a non-passive listener so it can cancel the native scroll.
pub fn wire_wheel(slides: &SharedSlides) {
    let Some(window) = web::window() else {
        return;
    };
    let slides = slides.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        handle_wheel(&ev, &slides);
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

pub fn wire_touch(slides: &SharedSlides) {
    let Some(window) = web::window() else {
        return;
    };
    let tracker = Rc::new(RefCell::new(TouchTracker::default()));

    let tracker_start = tracker.clone();
    dom::add_listener(&window, "touchstart", move |ev: web::TouchEvent| {
        if !slide_mode_active() {
            return;
        }
        if let Some(y) = first_touch_y(&ev) {
            tracker_start.borrow_mut().begin(y);
        }
    });

    let slides = slides.clone();
    dom::add_listener(&window, "touchmove", move |ev: web::TouchEvent| {
        handle_touch_move(&ev, &tracker, &slides);
    });
}
