use crate::core::gesture::ScrollMetrics;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn body_has_class(document: &web::Document, class: &str) -> bool {
    document
        .body()
        .map(|b| b.class_list().contains(class))
        .unwrap_or(false)
}

/// All elements matching `selector` that are `HTMLElement`s, in document order.
pub fn query_html_elements(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list
                .item(i)
                .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
            {
                out.push(el);
            }
        }
    }
    out
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    _ = el.style().set_property(prop, value);
}

#[inline]
pub fn add_listener<E>(target: &web::EventTarget, kind: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_listener(&el, "click", move |_: web::MouseEvent| handler());
    }
}

/// Run `f` once after `delay_ms` on the event loop.
pub fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            delay_ms as i32,
        );
    }
}

/// Install `f` as `window[name]` so inline markup handlers can call it.
pub fn expose_global<A>(window: &web::Window, name: &str, f: impl FnMut(A) + 'static)
where
    A: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(A)>);
    if js_sys::Reflect::set(window, &JsValue::from_str(name), closure.as_ref()).is_err() {
        log::warn!("[page] could not install window.{}", name);
    }
    closure.forget();
}

#[inline]
pub fn bounds_of(el: &web::Element) -> crate::core::effects::Bounds {
    let rect = el.get_bounding_client_rect();
    crate::core::effects::Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// Closest ancestor of the event target (up to, not including, `<body>`) that
/// scrolls vertically and actually overflows.
pub fn nested_scroll_metrics(target: Option<web::EventTarget>) -> Option<ScrollMetrics> {
    let window = web::window()?;
    let body = window.document()?.body()?;
    let mut node = target.and_then(|t| t.dyn_into::<web::Element>().ok());
    while let Some(el) = node {
        let as_node: &web::Node = &el;
        if body.is_same_node(Some(as_node)) {
            break;
        }
        let scrolls = window
            .get_computed_style(&el)
            .ok()
            .flatten()
            .and_then(|s| s.get_property_value("overflow-y").ok())
            .map(|v| v == "auto" || v == "scroll")
            .unwrap_or(false);
        if scrolls {
            let metrics = ScrollMetrics {
                offset: el.scroll_top() as f64,
                extent: el.scroll_height() as f64,
                viewport: el.client_height() as f64,
            };
            if metrics.overflows() {
                return Some(metrics);
            }
        }
        node = el.parent_element();
    }
    None
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, max_dpr: f64) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(max_dpr);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn inner_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}
