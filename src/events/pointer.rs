use crate::constants::*;
use crate::core::effects::{cursor_transform, magnetic_transform, tilt_rest, tilt_transform, MAGNETIC_REST};
use crate::core::BackgroundScene;
use crate::dom;
use crate::frame::FrameSlot;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Append the cursor ring and hook the hover effects onto interactive elements.
pub fn wire_cursor_effects(document: &web::Document) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    let cursor: web::HtmlElement = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    cursor.set_id(CURSOR_ID);
    cursor.set_class_name(CURSOR_CLASSES);
    body.append_child(&cursor)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let slot = FrameSlot::default();
    let cursor_follow = cursor.clone();
    dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
        let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
        let el = cursor_follow.clone();
        slot.replace(move || dom::set_style(&el, "transform", &cursor_transform(x, y)));
    });

    let interactive = dom::query_html_elements(document, INTERACTIVE_SELECTOR);
    for el in &interactive {
        wire_magnetic(el, &cursor);
    }
    log::info!("[cursor] {} interactive elements", interactive.len());
    Ok(())
}

fn wire_magnetic(el: &web::HtmlElement, cursor: &web::HtmlElement) {
    let slot = FrameSlot::default();

    let cursor_enter = cursor.clone();
    dom::add_listener(el, "mouseenter", move |_: web::MouseEvent| {
        let cl = cursor_enter.class_list();
        for class in CURSOR_HOVER_CLASSES {
            _ = cl.add_1(class);
        }
        dom::set_style(&cursor_enter, "mix-blend-mode", "difference");
    });

    let cursor_leave = cursor.clone();
    let el_leave = el.clone();
    let slot_leave = slot.clone();
    dom::add_listener(el, "mouseleave", move |_: web::MouseEvent| {
        let cl = cursor_leave.class_list();
        for class in CURSOR_HOVER_CLASSES {
            _ = cl.remove_1(class);
        }
        dom::set_style(&cursor_leave, "mix-blend-mode", "difference");
        slot_leave.cancel();
        dom::set_style(&el_leave, "transform", MAGNETIC_REST);
    });

    let el_move = el.clone();
    dom::add_listener(el, "mousemove", move |ev: web::MouseEvent| {
        let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
        let target = el_move.clone();
        slot.replace(move || {
            let bounds = dom::bounds_of(&target);
            dom::set_style(&target, "transform", &magnetic_transform(&bounds, x, y));
        });
    });
}

/// Perspective tilt for `.card-3d` elements, reset when the pointer leaves.
pub fn wire_tilt_cards(document: &web::Document) {
    for card in dom::query_html_elements(document, TILT_CARD_SELECTOR) {
        let slot = FrameSlot::default();

        let card_move = card.clone();
        let slot_move = slot.clone();
        dom::add_listener(&card, "mousemove", move |ev: web::MouseEvent| {
            let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
            let target = card_move.clone();
            slot_move.replace(move || {
                let bounds = dom::bounds_of(&target);
                dom::set_style(&target, "transform", &tilt_transform(&bounds, x, y));
            });
        });

        let card_leave = card.clone();
        dom::add_listener(&card, "mouseleave", move |_: web::MouseEvent| {
            slot.cancel();
            dom::set_style(&card_leave, "transform", &tilt_rest());
        });
    }
}

/// Feed the background camera a pointer position normalised to -0.5..0.5.
pub fn wire_background_pointer(scene: &Rc<RefCell<BackgroundScene>>) {
    let Some(window) = web::window() else {
        return;
    };
    let scene = scene.clone();
    let win = window.clone();
    dom::add_listener(&window, "mousemove", move |ev: web::MouseEvent| {
        let (w, h) = dom::inner_size(&win);
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let x = (ev.client_x() as f64 / w - 0.5) as f32;
        let y = (ev.client_y() as f64 / h - 0.5) as f32;
        scene.borrow_mut().set_pointer(x, y);
    });
}
