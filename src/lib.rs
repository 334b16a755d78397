#![cfg(target_arch = "wasm32")]
use crate::core::{BackgroundParams, BackgroundScene};
use constants::{BG_CANVAS_ID, MAX_DEVICE_PIXEL_RATIO};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod page;
mod render;
mod slides;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas, MAX_DEVICE_PIXEL_RATIO);
    let canvas_resize = canvas.clone();
    if let Some(window) = web::window() {
        dom::add_listener(&window, "resize", move |_: web::Event| {
            dom::sync_canvas_backing_size(&canvas_resize, MAX_DEVICE_PIXEL_RATIO);
        });
    }
}

/// Background state exists as soon as the canvas does; the GPU side attaches later.
fn build_background(
    window: &web::Window,
    document: &web::Document,
) -> Option<(web::HtmlCanvasElement, Rc<RefCell<BackgroundScene>>)> {
    let canvas = document
        .get_element_by_id(BG_CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    let (width, _) = dom::inner_size(window);
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let scene = BackgroundScene::new(BackgroundParams::for_viewport(width), seed);
    log::info!("[bg] {:?}", scene.params());
    Some((canvas, Rc::new(RefCell::new(scene))))
}

fn start_background(canvas: web::HtmlCanvasElement, scene: Rc<RefCell<BackgroundScene>>) {
    wire_canvas_resize(&canvas);
    events::wire_background_pointer(&scene);
    spawn_local(async move {
        let (particles, orbs) = {
            let s = scene.borrow();
            (s.particles.len(), s.orbs.len())
        };
        let (canvas, backdrop) = match frame::init_gpu(&canvas, particles, orbs).await {
            Some(gpu) => (canvas, frame::Backdrop::Gpu(gpu)),
            None => {
                let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
                let Some(fallback) = frame::init_canvas(&canvas, seed) else {
                    log::warn!("[bg] background disabled");
                    return;
                };
                log::warn!("[bg] WebGPU unavailable, drawing the 2D field");
                if fallback.replaced {
                    wire_canvas_resize(&fallback.canvas);
                }
                (fallback.canvas, frame::Backdrop::Canvas(fallback.backdrop))
            }
        };
        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            scene,
            backdrop,
            canvas,
            started: Instant::now(),
        }));
        frame::start_loop(frame_ctx);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    page::wire_viewport_unit(&window);
    page::wire_scroll_progress(&window);
    page::wire_hero_parallax(&window);
    page::wire_reveal_on_scroll(&document)?;
    overlay::wire_mobile_menu(&document);

    let popup = overlay::install_popup(&document)?;
    events::wire_popup_escape(&popup);

    events::wire_cursor_effects(&document)?;
    events::wire_tilt_cards(&document);

    let background = build_background(&window, &document);
    if background.is_none() {
        log::info!("[bg] no #{} canvas", BG_CANVAS_ID);
    }

    // One controller, handed to every input registration that needs it
    if let Some(slides) =
        slides::SlideController::install(&document, background.as_ref().map(|(_, s)| s.clone()))
    {
        slides::install_global_entry(&window, &slides);
        slides::wire_nav_controls(&document, &slides);
        events::wire_slide_keys(&slides);
        events::wire_wheel(&slides);
        events::wire_touch(&slides);
    }

    if let Some((canvas, scene)) = background {
        start_background(canvas, scene);
    }
    Ok(())
}
