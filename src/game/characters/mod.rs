// Hero character
//
// This module contains everything related to the playable Hero:
// - Tuning constants
// - Sensor rectangles and what they touch
// - Gravity, collision response and stair stepping
// - State machine and the Hero aggregate
// - Animation clip selection

pub mod animation;
pub mod config;
pub mod hero;
pub mod physics;
pub mod sensors;
pub mod state;

// Re-export commonly used types
pub use animation::{FrameSelection, HeroAnimations};
pub use config::HeroConfig;
pub use hero::Hero;
