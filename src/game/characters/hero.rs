// The player-controlled Hero
//
// Per frame the driver calls `handle_input` (state transitions from input and
// sensed world) and then `update` (gravity, movement, timers). Position is
// the only stored geometry; every rectangle is derived from it on demand.

use glam::Vec2;

use super::config::HeroConfig;
use super::physics::{self, ClimbAccumulator};
use super::sensors::{self, Contacts, Sensors};
use super::state::{Facing, HeroState, HeroStateMachine};
use crate::core::Rect;
use crate::engine::input::InputSnapshot;
use crate::game::level::StaticGeometry;

#[derive(Debug, Clone)]
pub struct Hero {
    config: HeroConfig,

    /// Top-left of the bounding box, sub-pixel precise
    position: Vec2,
    /// px/s, y grows downward
    velocity: Vec2,
    facing: Facing,
    state_machine: HeroStateMachine,

    /// Seconds since the last jump started
    time_since_last_jump: f32,
    /// Held stair direction, components in {-1, 0, 1}
    climb_direction: Vec2,
    climb: ClimbAccumulator,
}

impl Hero {
    /// Create the Hero at a map-authored spawn point
    pub fn new(spawn: Vec2, config: HeroConfig) -> Self {
        Self {
            position: spawn,
            velocity: Vec2::ZERO,
            facing: Facing::Right,
            state_machine: HeroStateMachine::new(),
            // First jump is allowed right away
            time_since_last_jump: config.jump_delay,
            climb_direction: Vec2::ZERO,
            climb: ClimbAccumulator::default(),
            config,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn state(&self) -> HeroState {
        self.state_machine.state()
    }

    pub fn time_in_state(&self) -> f32 {
        self.state_machine.time_in_state()
    }

    pub fn time_since_last_jump(&self) -> f32 {
        self.time_since_last_jump
    }

    /// Bounding box used for collision response and camera centering
    pub fn bounds(&self) -> Rect {
        sensors::bounds(self.position, &self.config)
    }

    /// Whole-pixel rectangle the sprite is drawn into
    pub fn display_rect(&self) -> Rect {
        sensors::display_rect(self.position, &self.config)
    }

    pub fn sensors(&self) -> Sensors {
        Sensors::at(self.position, &self.config)
    }

    pub fn contacts(&self, geometry: &StaticGeometry) -> Contacts {
        self.sensors().sense(geometry)
    }

    /// Evaluate state transitions for this frame's input
    pub fn handle_input(&mut self, input: &InputSnapshot, geometry: &StaticGeometry) {
        let contacts = self.contacts(geometry);

        if self.state().is_climbing() {
            if contacts.stair.is_some() {
                self.steer_on_stairs(input);
            } else {
                self.leave_stairs();
            }
            return;
        }

        if let Some(stair) = contacts.stair {
            if input.up || input.down {
                self.enter_stairs(&stair, input);
                return;
            }
        }

        // Airborne: keep the current velocity and state
        if contacts.airborne() {
            return;
        }

        if input.jump && self.time_since_last_jump >= self.config.jump_delay {
            self.jump(input);
        } else if let Some(direction) = input.horizontal() {
            self.state_machine.transition(HeroState::Walking);
            self.facing = Facing::from_direction(direction);
            self.velocity.x = direction * self.config.move_speed;
        } else {
            self.state_machine.transition(HeroState::Standing);
            self.velocity.x = 0.0;
        }
    }

    /// Integrate one frame of `dt` seconds
    pub fn update(&mut self, dt: f32, geometry: &StaticGeometry) {
        if self.state().is_climbing() {
            self.step_on_stairs(dt, geometry);
        } else {
            if self.contacts(geometry).airborne() {
                physics::apply_gravity(&mut self.velocity, &self.config, dt);
            }
            let moved =
                physics::move_free(self.position, self.velocity, dt, geometry, &self.config);
            self.position = moved.position;
            // Coming to rest on a wall ends the fall; horizontal speed is kept
            if moved.landed {
                self.velocity.y = 0.0;
            }
        }

        self.state_machine.tick(dt);
        self.time_since_last_jump += dt;
    }

    fn jump(&mut self, input: &InputSnapshot) {
        self.state_machine.transition(HeroState::Jumping);
        if let Some(direction) = input.horizontal() {
            self.facing = Facing::from_direction(direction);
            self.velocity.x = direction * self.config.move_speed;
        }
        self.velocity.y = -self.config.jump_height;
        self.time_since_last_jump = 0.0;
        log::debug!("Hero jumped at {:?}", self.position);
    }

    fn enter_stairs(&mut self, stair: &Rect, input: &InputSnapshot) {
        self.state_machine.transition(HeroState::OnStairs);
        let mut bounds = self.bounds();
        bounds.set_bottom(stair.top());
        self.position = bounds.min();
        self.climb.clear();
        self.steer_on_stairs(input);
    }

    fn leave_stairs(&mut self) {
        self.state_machine.transition(HeroState::Standing);
        self.velocity = Vec2::ZERO;
        self.climb_direction = Vec2::ZERO;
        self.climb.clear();
    }

    fn steer_on_stairs(&mut self, input: &InputSnapshot) {
        let direction = Vec2::new(
            input.horizontal().unwrap_or(0.0),
            input.vertical().unwrap_or(0.0),
        );
        if direction.x != 0.0 {
            self.facing = Facing::from_direction(direction.x);
        }
        if direction == Vec2::ZERO {
            self.climb.clear();
        }
        self.climb_direction = direction;
        self.velocity = direction * self.config.move_speed;
    }

    fn step_on_stairs(&mut self, dt: f32, geometry: &StaticGeometry) {
        if self.climb_direction == Vec2::ZERO
            || self.time_in_state() < self.config.climbing_delay
        {
            return;
        }

        let steps = self.climb.feed(dt, self.config.climbing_rate);
        if steps > 0 {
            self.position = physics::climb(
                self.position,
                self.climb_direction,
                steps,
                geometry,
                &self.config,
            );
        }
    }
}
