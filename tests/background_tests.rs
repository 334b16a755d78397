// Host-side tests for the particle background state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod navigator {
    include!("../src/core/navigator.rs");
}
mod background {
    include!("../src/core/background.rs");
}

use background::*;
use constants::*;
use glam::Vec3;
use navigator::{Direction, NavigatorConfig, SectionChange, SectionHook, SlideNavigator};
use std::cell::RefCell;
use std::rc::Rc;

fn small_scene() -> BackgroundScene {
    BackgroundScene::new(
        BackgroundParams {
            particle_count: 64,
            orb_count: 4,
            spin_speed: SPIN_SPEED_DESKTOP,
        },
        7,
    )
}

#[test]
fn params_follow_viewport_width() {
    let desktop = BackgroundParams::for_viewport(1280.0);
    assert_eq!(desktop.particle_count, PARTICLES_DESKTOP);
    assert_eq!(desktop, BackgroundParams::default());
    let mobile = BackgroundParams::for_viewport(767.0);
    assert_eq!(mobile.particle_count, PARTICLES_MOBILE);
    assert_eq!(mobile.spin_speed, SPIN_SPEED_MOBILE);
    assert_eq!(mobile.orb_count, ORB_COUNT);
    assert_eq!(
        BackgroundParams::for_viewport(768.0).particle_count,
        PARTICLES_DESKTOP
    );
}

#[test]
fn scene_is_deterministic_per_seed_and_within_bounds() {
    let a = small_scene();
    let b = small_scene();
    assert_eq!(a.particles.len(), 64);
    assert_eq!(a.orbs.len(), 4);
    let half = PARTICLE_SPREAD / 2.0;
    for (p, q) in a.particles.iter().zip(b.particles.iter()) {
        assert_eq!(p.position, q.position);
        assert!(p.position.abs().max_element() <= half);
        assert_eq!(p.color, Vec3::ONE);
    }
    for orb in &a.orbs {
        assert!(orb.radius >= 0.2 && orb.radius < 1.0);
        assert!(orb.position.z.abs() <= half / 2.0);
    }
}

#[test]
fn section_change_recolors_and_turns_cloud() {
    let mut scene = small_scene();
    assert!(scene.take_colors_dirty());
    assert!(!scene.take_colors_dirty());

    scene.set_section(4);
    assert!(scene.take_colors_dirty());
    let tint = section_color(4);
    for p in &scene.particles {
        // brightness is scaled by 0.5..1 of the tint
        assert!(p.color.x <= tint.x + 1e-6 && p.color.x >= tint.x * 0.5 - 1e-6);
    }
    assert!((scene.target_rotation_y() - 2.0 * std::f32::consts::PI).abs() < 1e-5);
}

#[test]
fn palette_falls_back_to_white() {
    assert_eq!(section_color(0), Vec3::ONE);
    assert_eq!(section_color(99), Vec3::ONE);
    assert!((section_color(4).x - 0.4).abs() < 1e-6);
}

#[test]
fn step_eases_toward_targets() {
    let mut scene = small_scene();
    scene.set_section(1);
    scene.set_pointer(0.5, 0.0);
    let start = scene.camera_eye();
    for _ in 0..400 {
        scene.step();
    }
    let eye = scene.camera_eye();
    assert!(eye.x > start.x);
    assert!((eye.x - 0.5 * CAMERA_FOLLOW).abs() < 0.05);
    assert!((scene.rotation_y() - std::f32::consts::FRAC_PI_2).abs() < 1e-3);
    assert_eq!(eye.z, CAMERA_Z);
}

#[test]
fn orbs_drift_and_pulse() {
    let mut scene = small_scene();
    let before: Vec<Vec3> = scene.orbs.iter().map(|o| o.position).collect();
    scene.step();
    for (orb, prev) in scene.orbs.iter().zip(before.iter()) {
        assert!((orb.position.x - (prev.x + orb.drift.x)).abs() < 1e-6);
        let s = orb.scale_at(12_345.0);
        assert!((0.8..=1.2).contains(&s));
    }
}

#[test]
fn matrices_are_finite() {
    let scene = small_scene();
    assert!(scene.view_matrix().is_finite());
    assert!(scene.projection_matrix(16.0 / 9.0).is_finite());
    assert!(scene.projection_matrix(0.0).is_finite());
    assert!(scene.particle_model(5_000.0).is_finite());
}

#[test]
fn scene_follows_navigator_as_hook() {
    let scene = Rc::new(RefCell::new(small_scene()));
    let mut nav = SlideNavigator::new(3, NavigatorConfig::default()).expect("non-empty");
    nav.add_hook(Box::new(scene.clone()));
    nav.step(Direction::Forward, instant::Instant::now());
    assert!((scene.borrow().target_rotation_y() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);

    scene.borrow_mut().on_section_change(&SectionChange {
        from: None,
        to: 0,
        total: 3,
        direction: None,
    });
    assert_eq!(scene.borrow().target_rotation_y(), 0.0);
}
