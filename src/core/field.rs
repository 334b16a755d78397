// Flat fallback background: dots drifting inside the viewport, bouncing off
// its edges, with a faint line between any two that come close.
//
// Units are CSS pixels. The renderer scales to the canvas backing store.

use super::constants::*;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldParams {
    pub dot_count: usize,
    /// Squared distance under which two dots are linked.
    pub link_range_sq: f64,
    /// Squared distance at which a link's opacity reaches zero.
    pub fade_span_sq: f64,
}

impl FieldParams {
    pub fn for_viewport(width: f64, height: f64) -> Self {
        let area = width.max(0.0) * height.max(0.0);
        if width < MOBILE_BREAKPOINT_PX {
            Self {
                dot_count: (area / FIELD_AREA_PER_DOT_MOBILE).ceil() as usize,
                link_range_sq: FIELD_LINK_RANGE_SQ_MOBILE,
                fade_span_sq: FIELD_FADE_SPAN_SQ_MOBILE,
            }
        } else {
            Self {
                dot_count: (area / FIELD_AREA_PER_DOT).ceil() as usize,
                link_range_sq: (width / FIELD_LINK_DIVISOR) * (height / FIELD_LINK_DIVISOR),
                fade_span_sq: FIELD_FADE_SPAN_SQ,
            }
        }
    }

    /// Opacity of a link between dots `dist_sq` apart, `None` when not drawn.
    #[inline]
    pub fn link_alpha(&self, dist_sq: f64) -> Option<f64> {
        if dist_sq >= self.link_range_sq {
            return None;
        }
        let alpha = (1.0 - dist_sq / self.fade_span_sq) * FIELD_LINK_ALPHA;
        (alpha > 0.0).then_some(alpha)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    /// Index into `FIELD_DOT_COLORS`.
    pub hue: usize,
}

impl Dot {
    #[inline]
    pub fn color(&self) -> &'static str {
        FIELD_DOT_COLORS[self.hue % FIELD_DOT_COLORS.len()]
    }
}

pub struct LinkField {
    params: FieldParams,
    width: f64,
    height: f64,
    dots: Vec<Dot>,
    rng: StdRng,
}

impl LinkField {
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        let mut field = Self {
            params: FieldParams::for_viewport(width, height),
            width,
            height,
            dots: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        field.scatter();
        field
    }

    fn scatter(&mut self) {
        let (w, h) = (self.width.max(0.0), self.height.max(0.0));
        let rng = &mut self.rng;
        self.dots = (0..self.params.dot_count)
            .map(|_| Dot {
                x: rng.gen::<f64>() * w,
                y: rng.gen::<f64>() * h,
                vx: rng.gen_range(-FIELD_MAX_SPEED..FIELD_MAX_SPEED),
                vy: rng.gen_range(-FIELD_MAX_SPEED..FIELD_MAX_SPEED),
                radius: rng.gen::<f64>() * FIELD_MAX_RADIUS,
                hue: rng.gen_range(0..FIELD_DOT_COLORS.len()),
            })
            .collect();
    }

    /// New viewport size: parameters are recomputed and the dots re-scattered.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.params = FieldParams::for_viewport(width, height);
        self.scatter();
    }

    #[inline]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    #[inline]
    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    #[inline]
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// One frame of drift. A dot past an edge reverses that axis before moving.
    pub fn step(&mut self) {
        for dot in self.dots.iter_mut() {
            if dot.x > self.width || dot.x < 0.0 {
                dot.vx = -dot.vx;
            }
            if dot.y > self.height || dot.y < 0.0 {
                dot.vy = -dot.vy;
            }
            dot.x += dot.vx;
            dot.y += dot.vy;
        }
    }

    /// Visit every linked pair once with its opacity.
    pub fn for_each_link(&self, mut f: impl FnMut(&Dot, &Dot, f64)) {
        for (i, a) in self.dots.iter().enumerate() {
            for b in &self.dots[i + 1..] {
                let (dx, dy) = (a.x - b.x, a.y - b.y);
                if let Some(alpha) = self.params.link_alpha(dx * dx + dy * dy) {
                    f(a, b, alpha);
                }
            }
        }
    }
}
