use crate::core::BackgroundScene;
use crate::render;
use crate::render::canvas::CanvasBackdrop;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// At most one pending animation-frame callback. Scheduling a new one cancels
/// the previous request, so only the latest pointer sample is applied.
#[derive(Clone, Default)]
pub struct FrameSlot {
    pending: Rc<RefCell<Option<(i32, Closure<dyn FnMut()>)>>>,
}

impl FrameSlot {
    pub fn replace(&self, f: impl FnOnce() + 'static) {
        self.cancel();
        let Some(window) = web::window() else {
            return;
        };
        let mut f = Some(f);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(f) = f.take() {
                f();
            }
        }) as Box<dyn FnMut()>);
        if let Ok(id) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            *self.pending.borrow_mut() = Some((id, closure));
        }
    }

    pub fn cancel(&self) {
        if let Some((id, _closure)) = self.pending.borrow_mut().take() {
            if let Some(window) = web::window() {
                _ = window.cancel_animation_frame(id);
            }
        }
    }
}

/// What draws the background: WebGPU when available, else the 2D link field.
pub enum Backdrop<'a> {
    Gpu(render::GpuState<'a>),
    Canvas(CanvasBackdrop),
}

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<BackgroundScene>>,
    pub backdrop: Backdrop<'a>,
    pub canvas: web::HtmlCanvasElement,
    pub started: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        match &mut self.backdrop {
            Backdrop::Gpu(g) => {
                let time_ms = self.started.elapsed().as_secs_f64() * 1000.0;
                let mut scene = self.scene.borrow_mut();
                scene.step();
                g.resize_if_needed(self.canvas.width(), self.canvas.height());
                match g.render(&mut scene, time_ms) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                    Err(e) => log::error!("render error: {:?}", e),
                }
            }
            Backdrop::Canvas(c) => {
                c.resize_if_needed(&self.canvas);
                c.render(&self.canvas);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    particle_count: usize,
    orb_count: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, particle_count, orb_count).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[bg] WebGPU init error: {:?}", e);
            None
        }
    }
}

/// 2D fallback. A canvas that already handed out a WebGPU context cannot give
/// a 2D one, so it is swapped for a fresh copy; `replaced` reports that.
pub struct CanvasFallback {
    pub canvas: web::HtmlCanvasElement,
    pub backdrop: CanvasBackdrop,
    pub replaced: bool,
}

pub fn init_canvas(canvas: &web::HtmlCanvasElement, seed: u64) -> Option<CanvasFallback> {
    if let Some(backdrop) = CanvasBackdrop::new(canvas, seed) {
        return Some(CanvasFallback {
            canvas: canvas.clone(),
            backdrop,
            replaced: false,
        });
    }
    let fresh = canvas
        .clone_node()
        .ok()?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    canvas.replace_with_with_node_1(&fresh).ok()?;
    let backdrop = CanvasBackdrop::new(&fresh, seed)?;
    Some(CanvasFallback {
        canvas: fresh,
        backdrop,
        replaced: true,
    })
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
