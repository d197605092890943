// Sensor rectangles derived from the Hero position
//
// Every rectangle here is a pure function of (position, config). Nothing is
// stored; callers recompute them each time they need to query the level.

use glam::Vec2;

use super::config::HeroConfig;
use crate::core::Rect;
use crate::game::level::StaticGeometry;

/// Hero bounding box: the sprite minus the collision inset on one side
pub fn bounds(position: Vec2, config: &HeroConfig) -> Rect {
    Rect::new(
        position.x,
        position.y,
        config.bounds_width(),
        config.sprite_height,
    )
}

/// Rectangle the sprite is drawn into, snapped to whole pixels
pub fn display_rect(position: Vec2, config: &HeroConfig) -> Rect {
    Rect::from_min_size(position, Vec2::new(config.sprite_width, config.sprite_height)).snapped()
}

/// Collision box used for wall response
pub fn body_sensor(position: Vec2, config: &HeroConfig) -> Rect {
    Rect::new(
        position.x + config.collision_box_offset,
        position.y,
        config.body_width(),
        config.sprite_height,
    )
}

/// Body box pushed 2px down; overlaps a wall when standing on it
pub fn floor_sensor(position: Vec2, config: &HeroConfig) -> Rect {
    body_sensor(position, config).translate(Vec2::new(0.0, 2.0))
}

/// 2px band one Hero height above the position
pub fn ceiling_sensor(position: Vec2, config: &HeroConfig) -> Rect {
    Rect::new(
        position.x + config.collision_box_offset,
        position.y - config.sprite_height,
        config.bounds_width(),
        2.0,
    )
}

/// 4px band straddling the feet
pub fn stair_sensor(position: Vec2, config: &HeroConfig) -> Rect {
    Rect::new(
        position.x + config.collision_box_offset,
        position.y + config.sprite_height - 2.0,
        config.body_width(),
        4.0,
    )
}

/// All four sensors at one position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sensors {
    pub floor: Rect,
    pub ceiling: Rect,
    pub body: Rect,
    pub stair: Rect,
}

impl Sensors {
    pub fn at(position: Vec2, config: &HeroConfig) -> Self {
        Self {
            floor: floor_sensor(position, config),
            ceiling: ceiling_sensor(position, config),
            body: body_sensor(position, config),
            stair: stair_sensor(position, config),
        }
    }

    /// Query the level with these sensors
    pub fn sense(&self, geometry: &StaticGeometry) -> Contacts {
        Contacts {
            grounded: geometry.touches_wall(&self.floor),
            touches_ceiling: geometry.touches_wall(&self.ceiling),
            stair: geometry.stair_under(&self.stair).copied(),
        }
    }
}

/// What the sensors found this frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Contacts {
    /// Floor sensor overlaps a wall
    pub grounded: bool,
    pub touches_ceiling: bool,
    /// Stair overlapped by the stair sensor
    pub stair: Option<Rect>,
}

impl Contacts {
    pub fn airborne(&self) -> bool {
        !self.grounded
    }
}
