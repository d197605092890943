// Hero tuning constants
//
// One immutable struct handed to the Hero at construction. Units are pixels
// and seconds; y grows downward.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    // Movement
    /// Horizontal speed while walking or jumping (px/s)
    pub move_speed: f32,
    /// Upward speed applied when a jump starts (px/s)
    pub jump_height: f32,
    /// Downward acceleration while airborne (px/s²)
    pub gravity: f32,
    /// Minimum time between two jumps (s)
    pub jump_delay: f32,

    // Stairs
    /// Seconds per discrete stair step
    pub climbing_rate: f32,
    /// Time on the stairs before the first step (s)
    pub climbing_delay: f32,
    /// Distance covered by one stair step on each active axis (px)
    pub stair_step: f32,

    // Dimensions
    /// Horizontal inset of the collision box inside the sprite (px)
    pub collision_box_offset: f32,
    pub sprite_width: f32,
    pub sprite_height: f32,

    // Animation speed constants (frames per second)
    pub standing_fps: f32,
    pub walking_fps: f32,
    pub climbing_fps: f32,
}

pub const BASE_CONFIG: HeroConfig = HeroConfig {
    move_speed: 200.0,
    jump_height: 180.0,
    gravity: 1000.0,
    jump_delay: 0.3,

    climbing_rate: 0.1,
    climbing_delay: 0.15,
    stair_step: 4.0,

    collision_box_offset: 8.0,
    sprite_width: 32.0,
    sprite_height: 32.0,

    standing_fps: 4.0,
    walking_fps: 12.0,
    climbing_fps: 8.0,
};

impl Default for HeroConfig {
    fn default() -> Self {
        BASE_CONFIG
    }
}

impl HeroConfig {
    /// Width of the Hero bounding box (sprite minus the collision inset)
    pub fn bounds_width(&self) -> f32 {
        self.sprite_width - self.collision_box_offset
    }

    /// Width of the body sensor, inset on both sides of the sprite
    pub fn body_width(&self) -> f32 {
        self.sprite_width - 2.0 * self.collision_box_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HeroConfig::default();
        assert_eq!(config.move_speed, 200.0);
        assert_eq!(config.jump_height, 180.0);
        assert_eq!(config.gravity, 1000.0);
        assert!(config.walking_fps > config.standing_fps);
    }

    #[test]
    fn test_derived_widths() {
        let config = HeroConfig::default();
        assert_eq!(config.bounds_width(), 24.0);
        assert_eq!(config.body_width(), 16.0);
    }

    #[test]
    fn test_partial_override_from_json() {
        let config: HeroConfig =
            serde_json::from_str(r#"{ "gravity": 500.0, "jump_delay": 0.5 }"#).unwrap();
        assert_eq!(config.gravity, 500.0);
        assert_eq!(config.jump_delay, 0.5);
        assert_eq!(config.move_speed, BASE_CONFIG.move_speed);
    }
}
