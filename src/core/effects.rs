// Pointer-driven decoration: cursor ring, magnetic hover and card tilt.
// All functions map a pointer sample plus element bounds to a CSS transform.

use super::constants::{
    CURSOR_HALF_SIZE_PX, MAGNETIC_SCALE, MAGNETIC_STRENGTH, TILT_MAX_DEG, TILT_PERSPECTIVE_PX,
    TILT_SCALE,
};

/// Client-space bounds of an element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Pointer offset from the centre of the bounds.
    #[inline]
    pub fn offset_from_center(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x - self.left - self.width / 2.0,
            y - self.top - self.height / 2.0,
        )
    }
}

pub const MAGNETIC_REST: &str = "translate3d(0, 0, 0) scale(1)";

#[inline]
pub fn cursor_transform(client_x: f64, client_y: f64) -> String {
    format!(
        "translate3d({}px, {}px, 0)",
        client_x - CURSOR_HALF_SIZE_PX,
        client_y - CURSOR_HALF_SIZE_PX
    )
}

pub fn magnetic_transform(bounds: &Bounds, x: f64, y: f64) -> String {
    if bounds.is_empty() {
        return MAGNETIC_REST.to_string();
    }
    let (dx, dy) = bounds.offset_from_center(x, y);
    format!(
        "translate3d({:.2}px, {:.2}px, 0) scale({})",
        dx * MAGNETIC_STRENGTH,
        dy * MAGNETIC_STRENGTH,
        MAGNETIC_SCALE
    )
}

/// Rotation in degrees around X and Y; a pointer at an edge reaches the
/// full tilt and the top edge tips the card toward the viewer.
pub fn tilt_angles(bounds: &Bounds, x: f64, y: f64) -> (f64, f64) {
    if bounds.is_empty() {
        return (0.0, 0.0);
    }
    let (dx, dy) = bounds.offset_from_center(x, y);
    let half_w = bounds.width / 2.0;
    let half_h = bounds.height / 2.0;
    let rotate_x = (dy / half_h) * -TILT_MAX_DEG;
    let rotate_y = (dx / half_w) * TILT_MAX_DEG;
    (rotate_x, rotate_y)
}

pub fn tilt_transform(bounds: &Bounds, x: f64, y: f64) -> String {
    let (rx, ry) = tilt_angles(bounds, x, y);
    format!(
        "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) scale({})",
        TILT_PERSPECTIVE_PX, rx, ry, TILT_SCALE
    )
}

pub fn tilt_rest() -> String {
    format!(
        "perspective({}px) rotateX(0) rotateY(0) scale(1)",
        TILT_PERSPECTIVE_PX
    )
}
