// Tuning constants for the slide navigator, pointer effects and background.
//
// Shared by the web frontend and the host-side tests; no platform APIs here.

// Slide transitions
pub const TRANSITION_MS: u32 = 800; // navigation is locked for this long after a change
pub const PANEL_EASE: &str = "cubic-bezier(0.645, 0.045, 0.355, 1)";
pub const RECEDED_TRANSLATE_PCT: f32 = -20.0; // outgoing panel parallax offset
pub const RECEDED_SCALE: f32 = 0.9;
pub const OUTGOING_BLUR_PX: f32 = 40.0;
pub const OUTGOING_OPACITY: f32 = 0.5;

// Stacking order used by the choreography
pub const Z_FRONT: i32 = 20;
pub const Z_BEHIND: i32 = 10;
pub const Z_PARKED: i32 = 0;

// Gesture thresholds
pub const WHEEL_THRESHOLD: f64 = 15.0; // |deltaY| below this is jitter
pub const TOUCH_THRESHOLD: f64 = 40.0; // swipe distance before a step fires
pub const SCROLL_EDGE_EPSILON: f64 = 2.0; // slack for "at bottom" in nested scrollers

// Hero entrance on panel 0
pub const HERO_FIRST_DELAY_MS: u32 = 100;
pub const HERO_SECOND_DELAY_MS: u32 = 400;
pub const HERO_EASE: &str = "cubic-bezier(0.2, 0.8, 0.2, 1)";
pub const HERO_OFFSET_PX: f32 = 30.0;
pub const HERO_BRIGHTNESS: f32 = 1.2;

// Pointer effects
pub const CURSOR_HALF_SIZE_PX: f64 = 16.0;
pub const MAGNETIC_STRENGTH: f64 = 0.2;
pub const MAGNETIC_SCALE: f64 = 1.05;
pub const TILT_MAX_DEG: f64 = 10.0;
pub const TILT_SCALE: f64 = 1.02;
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;

// Page chrome
pub const REVEAL_STAGGER_MS: u32 = 100;
pub const PARALLAX_FACTOR: f64 = 0.5;

// Background
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const PARTICLES_DESKTOP: usize = 8000;
pub const PARTICLES_MOBILE: usize = 2000;
pub const PARTICLE_SPREAD: f32 = 30.0; // edge of the cube particles are scattered in
pub const PARTICLE_SIZE: f32 = 0.12;
pub const PARTICLE_OPACITY: f32 = 0.8;
pub const ORB_COUNT: usize = 15;
pub const ORB_OPACITY: f32 = 0.1;
pub const POINTER_EASE: f32 = 0.05;
pub const CAMERA_EASE: f32 = 0.05;
pub const CAMERA_FOLLOW: f32 = 3.0;
pub const CAMERA_Z: f32 = 8.0;
pub const CAMERA_FOVY_DEG: f32 = 70.0;
pub const ROTATION_EASE: f32 = 0.03;
pub const SPIN_SPEED_DESKTOP: f32 = 0.000_05; // radians per ms
pub const SPIN_SPEED_MOBILE: f32 = 0.000_03;

// Monochrome palette, one per section; sections past the end fall back to white
pub const SECTION_COLORS: [[f32; 3]; 5] = [
    [1.0, 1.0, 1.0],
    [0.8, 0.8, 0.8],
    [0.533, 0.533, 0.533],
    [0.933, 0.933, 0.933],
    [0.4, 0.4, 0.4],
];

// Flat 2D fallback background (no WebGPU)
pub const FIELD_AREA_PER_DOT: f64 = 15_000.0; // px² of viewport per dot
pub const FIELD_AREA_PER_DOT_MOBILE: f64 = 8_000.0; // denser on small screens
pub const FIELD_LINK_DIVISOR: f64 = 7.0; // link range² = (w/7)·(h/7)
pub const FIELD_LINK_RANGE_SQ_MOBILE: f64 = 4_000.0;
pub const FIELD_FADE_SPAN_SQ: f64 = 20_000.0; // link fully faded at this distance²
pub const FIELD_FADE_SPAN_SQ_MOBILE: f64 = 5_000.0;
pub const FIELD_MAX_SPEED: f64 = 0.25; // px per frame on each axis
pub const FIELD_MAX_RADIUS: f64 = 2.0;
pub const FIELD_DOT_ALPHA: f64 = 0.5;
pub const FIELD_LINK_ALPHA: f64 = 0.2;
pub const FIELD_DOT_COLORS: [&str; 2] = ["#00f3ff", "#bc13fe"];
pub const FIELD_LINK_RGB: &str = "188, 19, 254";
