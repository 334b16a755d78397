// Decorative particle background state: a slowly spinning particle cloud,
// drifting bokeh orbs and a camera that eases toward the pointer.
//
// Platform independent; the renderer reads it once per frame.

use super::constants::*;
use super::navigator::{SectionChange, SectionHook};
use glam::{EulerRot, Mat4, Vec2, Vec3};
use rand::prelude::*;
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundParams {
    pub particle_count: usize,
    pub orb_count: usize,
    /// Idle spin of the particle cloud in radians per millisecond.
    pub spin_speed: f32,
}

impl Default for BackgroundParams {
    fn default() -> Self {
        Self {
            particle_count: PARTICLES_DESKTOP,
            orb_count: ORB_COUNT,
            spin_speed: SPIN_SPEED_DESKTOP,
        }
    }
}

impl BackgroundParams {
    /// Lighter variant for narrow (mobile) viewports.
    pub fn for_viewport(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            Self {
                particle_count: PARTICLES_MOBILE,
                spin_speed: SPIN_SPEED_MOBILE,
                ..Self::default()
            }
        } else {
            Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub color: Vec3,
}

#[derive(Clone, Copy, Debug)]
pub struct Orb {
    pub position: Vec3,
    pub radius: f32,
    pub drift: Vec2,
    /// Pulse frequency in radians per millisecond.
    pub pulse: f32,
}

impl Orb {
    #[inline]
    pub fn scale_at(&self, time_ms: f64) -> f32 {
        ((time_ms * self.pulse as f64).sin() as f32) * 0.2 + 1.0
    }
}

pub struct BackgroundScene {
    params: BackgroundParams,
    pub particles: Vec<Particle>,
    pub orbs: Vec<Orb>,
    mouse: Vec2,
    target_mouse: Vec2,
    camera_eye: Vec3,
    rotation_y: f32,
    target_rotation_y: f32,
    colors_dirty: bool,
    rng: StdRng,
}

/// Palette entry for a section; indices past the palette fall back to white.
#[inline]
pub fn section_color(index: usize) -> Vec3 {
    SECTION_COLORS
        .get(index)
        .map(|c| Vec3::from_array(*c))
        .unwrap_or(Vec3::ONE)
}

impl BackgroundScene {
    pub fn new(params: BackgroundParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let half = PARTICLE_SPREAD / 2.0;
        let particles = (0..params.particle_count)
            .map(|_| Particle {
                position: Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                ),
                color: Vec3::ONE,
            })
            .collect();
        let orbs = (0..params.orb_count)
            .map(|_| Orb {
                position: Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half / 2.0..half / 2.0),
                ),
                radius: rng.gen_range(0.2..1.0),
                drift: Vec2::new(rng.gen_range(-0.005..0.005), rng.gen_range(-0.005..0.005)),
                pulse: rng.gen_range(0.0..0.005),
            })
            .collect();
        Self {
            params,
            particles,
            orbs,
            mouse: Vec2::ZERO,
            target_mouse: Vec2::ZERO,
            camera_eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            rotation_y: 0.0,
            target_rotation_y: 0.0,
            colors_dirty: true,
            rng,
        }
    }

    #[inline]
    pub fn params(&self) -> &BackgroundParams {
        &self.params
    }

    /// Pointer position normalised to -0.5..0.5 on both axes.
    #[inline]
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.target_mouse = Vec2::new(x, y);
    }

    /// Recolor the cloud with the section tint (random per-particle brightness)
    /// and turn it a quarter revolution per section.
    pub fn set_section(&mut self, index: usize) {
        let tint = section_color(index);
        for p in self.particles.iter_mut() {
            let brightness: f32 = self.rng.gen_range(0.5..1.0);
            p.color = tint * brightness;
        }
        self.colors_dirty = true;
        self.target_rotation_y = index as f32 * FRAC_PI_2;
    }

    /// Advance one display frame of easing and drift.
    pub fn step(&mut self) {
        self.mouse += (self.target_mouse - self.mouse) * POINTER_EASE;
        self.camera_eye.x += (self.mouse.x * CAMERA_FOLLOW - self.camera_eye.x) * CAMERA_EASE;
        self.camera_eye.y += (-self.mouse.y * CAMERA_FOLLOW - self.camera_eye.y) * CAMERA_EASE;
        self.rotation_y += (self.target_rotation_y - self.rotation_y) * ROTATION_EASE;
        for orb in self.orbs.iter_mut() {
            orb.position.x += orb.drift.x;
            orb.position.y += orb.drift.y;
        }
    }

    #[inline]
    pub fn camera_eye(&self) -> Vec3 {
        self.camera_eye
    }

    #[inline]
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    #[inline]
    pub fn target_rotation_y(&self) -> f32 {
        self.target_rotation_y
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.camera_eye, Vec3::ZERO, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(CAMERA_FOVY_DEG.to_radians(), aspect.max(1e-3), 0.1, 1000.0)
    }

    /// Orientation of the particle cloud: eased section rotation plus idle spin,
    /// with a slow wobble around X.
    pub fn particle_model(&self, time_ms: f64) -> Mat4 {
        let ry = self.rotation_y + (time_ms as f32) * self.params.spin_speed;
        let rx = ((time_ms * 0.0001).sin() as f32) * 0.1;
        Mat4::from_euler(EulerRot::XYZ, rx, ry, 0.0)
    }

    /// True once after each recolor, so the renderer re-uploads colors lazily.
    #[inline]
    pub fn take_colors_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.colors_dirty, false)
    }
}

impl SectionHook for BackgroundScene {
    fn on_section_change(&mut self, change: &SectionChange) {
        self.set_section(change.to);
    }
}
