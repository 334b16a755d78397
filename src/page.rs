use crate::constants::*;
use crate::core::page::{
    parallax_offset, reveal_delay_ms, scroll_progress_pct, viewport_unit, REVEAL_BASE,
    REVEAL_HIDDEN, REVEAL_SHOWN,
};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn set_viewport_unit(window: &web::Window) {
    let (_, h) = dom::inner_size(window);
    let Some(root) = window
        .document()
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    dom::set_style(&root, "--vh", &viewport_unit(h));
}

/// Keep `--vh` in sync with the real inner height (mobile browser chrome).
pub fn wire_viewport_unit(window: &web::Window) {
    set_viewport_unit(window);
    let win = window.clone();
    dom::add_listener(window, "resize", move |_: web::Event| set_viewport_unit(&win));
}

/// Document scroll progress for the multi-page layout; slide mode drives the
/// same bar from the navigator instead.
pub fn wire_scroll_progress(window: &web::Window) {
    let win = window.clone();
    dom::add_listener(window, "scroll", move |_: web::Event| {
        let Some(document) = win.document() else {
            return;
        };
        if dom::body_has_class(&document, SPA_MODE_CLASS) {
            return;
        }
        let (Some(bar), Some(root)) = (
            dom::html_element_by_id(&document, PROGRESS_BAR_ID),
            document.document_element(),
        ) else {
            return;
        };
        let scroll_top = document
            .body()
            .map(|b| b.scroll_top())
            .filter(|t| *t > 0)
            .unwrap_or_else(|| root.scroll_top()) as f64;
        let pct = scroll_progress_pct(
            scroll_top,
            root.scroll_height() as f64,
            root.client_height() as f64,
        );
        dom::set_style(&bar, "width", &format!("{}%", pct));
    });
}

/// Hero background parallax while the first section is in view.
pub fn wire_hero_parallax(window: &web::Window) {
    let win = window.clone();
    dom::add_listener(window, "scroll", move |_: web::Event| {
        let Some(hero) = win
            .document()
            .and_then(|d| d.query_selector("section").ok().flatten())
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        else {
            return;
        };
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        if let Some(offset) = parallax_offset(
            scroll_y,
            hero.offset_top() as f64,
            hero.offset_height() as f64,
        ) {
            dom::set_style(&hero, "background-position-y", &format!("{}px", offset));
        }
    });
}

/// Fade/slide `.animate-on-scroll` elements in the first time they intersect.
pub fn wire_reveal_on_scroll(document: &web::Document) -> anyhow::Result<()> {
    let elements = dom::query_html_elements(document, REVEAL_SELECTOR);
    if elements.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let cl = target.class_list();
                for class in REVEAL_SHOWN {
                    _ = cl.add_1(class);
                }
                for class in REVEAL_HIDDEN {
                    _ = cl.remove_1(class);
                }
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();

    for (index, el) in elements.iter().enumerate() {
        let cl = el.class_list();
        for class in REVEAL_HIDDEN.iter().chain(REVEAL_BASE.iter()) {
            _ = cl.add_1(class);
        }
        let in_grid = el
            .parent_element()
            .map(|p| p.class_list().contains(GRID_CLASS))
            .unwrap_or(false);
        if let Some(delay) = reveal_delay_ms(index, in_grid) {
            dom::set_style(el, "transition-delay", &format!("{}ms", delay));
        }
        observer.observe(el);
    }
    log::info!("[page] reveal observer on {} elements", elements.len());
    Ok(())
}
