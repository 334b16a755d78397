use crate::core::gesture::key_intent;
use crate::dom;
use crate::slides::{SharedSlides, SlideController};
use web_sys as web;

/// Arrow keys step through the panels regardless of nested scroll regions.
pub fn handle_slide_keydown(ev: &web::KeyboardEvent, slides: &SharedSlides) {
    if let Some(direction) = key_intent(&ev.key()) {
        SlideController::step(slides, direction);
    }
}

pub fn wire_slide_keys(slides: &SharedSlides) {
    if let Some(window) = web::window() {
        let slides = slides.clone();
        dom::add_listener(&window, "keydown", move |ev: web::KeyboardEvent| {
            handle_slide_keydown(&ev, &slides);
        });
    }
}

// Escape closes the popup without touching slide state
pub fn wire_popup_escape(popup: &crate::overlay::Popup) {
    if let Some(window) = web::window() {
        let popup = popup.clone();
        dom::add_listener(&window, "keydown", move |ev: web::KeyboardEvent| {
            if ev.key() == "Escape" {
                popup.hide();
            }
        });
    }
}
