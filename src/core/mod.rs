pub mod background;
pub mod choreography;
pub mod constants;
pub mod effects;
pub mod field;
pub mod gesture;
pub mod navigator;
pub mod page;

pub use background::{BackgroundParams, BackgroundScene};
pub use constants::*;
pub use navigator::{
    Direction, NavigatorConfig, SectionChange, SectionHook, SlideNavigator, Transition,
};

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
