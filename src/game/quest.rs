// Quest: one level with one Hero
//
// The frame driver calls `handle_input`, then `update`, then renders the
// `view`. The view is a read-only snapshot; the renderer never mutates game
// state.

use glam::Vec2;
use log::info;

use super::characters::{FrameSelection, Hero, HeroAnimations, HeroConfig};
use super::level::Level;
use crate::core::Rect;
use crate::engine::input::InputSnapshot;

pub struct Quest<F> {
    level: Level,
    hero: Hero,
    animations: HeroAnimations<F>,
    debug: bool,
}

/// Everything the renderer draws for one frame
#[derive(Debug, Clone)]
pub struct FrameView<'a, F> {
    /// Point the camera centers on
    pub camera_target: Vec2,
    pub map_size: Vec2,
    pub walls: &'a [Rect],
    pub stairs: &'a [Rect],
    pub hero_rect: Rect,
    pub hero_frame: FrameSelection<'a, F>,
    /// Floor sensor overlay, only in debug mode
    pub debug_rect: Option<Rect>,
}

impl<F> Quest<F> {
    pub fn new(level: Level, config: HeroConfig, animations: HeroAnimations<F>, debug: bool) -> Self {
        let hero = Hero::new(level.spawn, config);
        Self {
            level,
            hero,
            animations,
            debug,
        }
    }

    pub fn handle_input(&mut self, input: &InputSnapshot) {
        self.hero.handle_input(input, &self.level.geometry);
    }

    pub fn update(&mut self, dt: f32) {
        self.hero.update(dt, &self.level.geometry);
    }

    pub fn view(&self) -> FrameView<'_, F> {
        let sensors = self.hero.sensors();
        FrameView {
            camera_target: self.hero.bounds().center(),
            map_size: self.level.size,
            walls: self.level.geometry.walls(),
            stairs: self.level.geometry.stairs(),
            hero_rect: self.hero.display_rect(),
            hero_frame: self.animations.select_for(&self.hero),
            debug_rect: self.debug.then_some(sensors.floor),
        }
    }

    /// Dump the sensor readings to the log
    pub fn log_debug_report(&self) {
        let contacts = self.hero.contacts(&self.level.geometry);
        info!("airborne: {}", contacts.airborne());
        info!("hero position: {:?}", self.hero.position());
        info!("touches ceiling: {}", contacts.touches_ceiling);
        info!(
            "state: {:?} for {:.2}s",
            self.hero.state(),
            self.hero.time_in_state()
        );
        info!("since last jump: {:.2}s", self.hero.time_since_last_jump());

        let frame = self.animations.select_for(&self.hero);
        info!("frame: {} #{}", frame.clip, frame.index);
    }
}
