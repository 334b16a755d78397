use crate::core::field::LinkField;
use crate::core::{FIELD_DOT_ALPHA, FIELD_LINK_RGB};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D-canvas renderer for the link field, used when WebGPU is unavailable.
pub struct CanvasBackdrop {
    ctx: web::CanvasRenderingContext2d,
    field: LinkField,
}

impl CanvasBackdrop {
    /// `None` when the canvas cannot hand out a 2D context, e.g. because a
    /// WebGPU context was already requested on it.
    pub fn new(canvas: &web::HtmlCanvasElement, seed: u64) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        let (w, h) = css_size(canvas);
        let field = LinkField::new(w, h, seed);
        log::info!(
            "[bg] 2D canvas {}x{} dots={}",
            w,
            h,
            field.dots().len()
        );
        Some(Self { ctx, field })
    }

    pub fn resize_if_needed(&mut self, canvas: &web::HtmlCanvasElement) {
        let (w, h) = css_size(canvas);
        if w <= 0.0 || h <= 0.0 || (w, h) == self.field.size() {
            return;
        }
        self.field.resize(w, h);
        log::debug!("[bg] 2D field {}x{} dots={}", w, h, self.field.dots().len());
    }

    pub fn render(&mut self, canvas: &web::HtmlCanvasElement) {
        self.field.step();

        let (w, h) = self.field.size();
        let scale = canvas.width() as f64 / w.max(1.0);
        _ = self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
        self.ctx.clear_rect(0.0, 0.0, w, h);

        // dots and links share one global alpha
        self.ctx.set_global_alpha(FIELD_DOT_ALPHA);
        for dot in self.field.dots() {
            self.ctx.begin_path();
            _ = self.ctx.arc(dot.x, dot.y, dot.radius, 0.0, TAU);
            self.ctx.set_fill_style_str(dot.color());
            self.ctx.fill();
        }

        let ctx = &self.ctx;
        ctx.set_line_width(1.0);
        self.field.for_each_link(|a, b, alpha| {
            ctx.set_stroke_style_str(&format!("rgba({}, {})", FIELD_LINK_RGB, alpha));
            ctx.begin_path();
            ctx.move_to(a.x, a.y);
            ctx.line_to(b.x, b.y);
            ctx.stroke();
        });
    }
}

#[inline]
fn css_size(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    (canvas.client_width() as f64, canvas.client_height() as f64)
}
