// Hero physics: gravity, axis-separated movement, stair stepping
//
// Movement resolves x before y. Each axis moves the full delta, then every
// wall overlapping the body sensor snaps the matching bounding-box edge
// against it. When several walls overlap in one frame the last one in level
// order wins.

use glam::Vec2;

use super::config::HeroConfig;
use super::sensors;
use crate::game::level::StaticGeometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    fn unit(self) -> Vec2 {
        match self {
            Axis::X => Vec2::X,
            Axis::Y => Vec2::Y,
        }
    }
}

/// Accumulate gravity into the vertical velocity. Only call while airborne.
///
/// There is no terminal velocity.
pub fn apply_gravity(velocity: &mut Vec2, config: &HeroConfig, dt: f32) {
    velocity.y += config.gravity * dt;
}

/// Outcome of a move along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub position: Vec2,
    /// A wall stopped the move
    pub blocked: bool,
}

/// Move `delta` pixels along one axis and resolve wall overlaps
pub fn move_axis(
    position: Vec2,
    axis: Axis,
    delta: f32,
    geometry: &StaticGeometry,
    config: &HeroConfig,
) -> Motion {
    let moved = position + axis.unit() * delta;
    let body = sensors::body_sensor(moved, config);
    let mut bounds = sensors::bounds(moved, config);
    let mut blocked = false;

    for wall in geometry.walls_overlapping(&body) {
        blocked = true;
        match axis {
            // Moving right: hit the left side of the wall
            Axis::X if delta > 0.0 => bounds.set_right(wall.left()),
            // Moving left: hit the right side of the wall
            Axis::X if delta < 0.0 => {
                bounds.set_left(wall.right() - config.collision_box_offset)
            }
            // Moving down: land on the top of the wall
            Axis::Y if delta > 0.0 => bounds.set_bottom(wall.top()),
            // Moving up: bump the bottom of the wall
            Axis::Y if delta < 0.0 => bounds.set_top(wall.bottom()),
            _ => {}
        }
    }

    Motion {
        position: bounds.min(),
        blocked,
    }
}

/// Where a free move ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeMove {
    pub position: Vec2,
    /// The downward part of the move came to rest on top of a wall
    pub landed: bool,
}

/// Free movement for one frame: `velocity * dt`, x axis first.
///
/// Velocity is not touched here; the caller decides what a landing does to it.
pub fn move_free(
    position: Vec2,
    velocity: Vec2,
    dt: f32,
    geometry: &StaticGeometry,
    config: &HeroConfig,
) -> FreeMove {
    let mut position = position;
    let mut landed = false;
    if velocity.x != 0.0 {
        position = move_axis(position, Axis::X, velocity.x * dt, geometry, config).position;
    }
    if velocity.y != 0.0 {
        let motion = move_axis(position, Axis::Y, velocity.y * dt, geometry, config);
        position = motion.position;
        landed = motion.blocked && velocity.y > 0.0;
    }
    FreeMove { position, landed }
}

/// Move `steps` discrete stair steps in `direction` (components in {-1, 0, 1})
pub fn climb(
    position: Vec2,
    direction: Vec2,
    steps: u32,
    geometry: &StaticGeometry,
    config: &HeroConfig,
) -> Vec2 {
    let delta = direction * config.stair_step * steps as f32;
    let mut position = position;
    if delta.x != 0.0 {
        position = move_axis(position, Axis::X, delta.x, geometry, config).position;
    }
    if delta.y != 0.0 {
        position = move_axis(position, Axis::Y, delta.y, geometry, config).position;
    }
    position
}

/// Time budget for stepped stair movement
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClimbAccumulator {
    elapsed: f32,
}

impl ClimbAccumulator {
    /// Add `dt` and return how many whole steps of `rate` seconds are due.
    ///
    /// The time of the returned steps is consumed; the remainder is kept.
    pub fn feed(&mut self, dt: f32, rate: f32) -> u32 {
        debug_assert!(rate > 0.0, "climbing rate must be positive");
        if rate <= 0.0 {
            return 0;
        }

        self.elapsed += dt;
        if self.elapsed < rate {
            return 0;
        }

        let steps = (self.elapsed / rate).floor();
        self.elapsed -= steps * rate;
        steps as u32
    }

    pub fn clear(&mut self) {
        self.elapsed = 0.0;
    }
}
