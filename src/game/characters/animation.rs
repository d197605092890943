// Hero animation selection
//
// Frame index = floor(time_in_state * fps) mod frame_count. The selector
// is pure: it reads the Hero state and never advances any timer itself.

use super::config::HeroConfig;
use super::hero::Hero;
use super::state::{Facing, HeroState};
use crate::engine::assets::{AssetError, AtlasRegion, SpriteSheet};

#[derive(Debug, thiserror::Error)]
pub enum AnimationError {
    #[error("Animation clip '{0}' has no frames")]
    EmptyClip(&'static str),

    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// A fixed, ordered, non-empty list of frames played at a constant rate
#[derive(Debug, Clone)]
pub struct AnimationClip<F> {
    name: &'static str,
    frames: Vec<F>,
    fps: f32,
}

impl<F> AnimationClip<F> {
    pub fn new(name: &'static str, frames: Vec<F>, fps: f32) -> Result<Self, AnimationError> {
        if frames.is_empty() {
            return Err(AnimationError::EmptyClip(name));
        }
        Ok(Self { name, frames, fps })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Index of the frame shown after `time` seconds, always in `[0, frame_count)`
    pub fn frame_index(&self, time: f32) -> usize {
        debug_assert!(!self.frames.is_empty(), "clip '{}' lost its frames", self.name);
        let count = self.frames.len().max(1);
        if time.is_nan() || time <= 0.0 || self.fps <= 0.0 {
            return 0;
        }
        ((time * self.fps).floor() as usize) % count
    }

    pub fn frame_at(&self, time: f32) -> (usize, &F) {
        let index = self.frame_index(time);
        (index, &self.frames[index])
    }
}

/// Frame picked for this render, plus whether to mirror it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSelection<'a, F> {
    pub clip: &'static str,
    pub index: usize,
    pub frame: &'a F,
    pub flip_horizontal: bool,
}

/// One clip per Hero state; climbing has separate up and down clips
#[derive(Debug, Clone)]
pub struct HeroAnimations<F> {
    pub standing: AnimationClip<F>,
    pub walking: AnimationClip<F>,
    pub jumping: AnimationClip<F>,
    pub climbing_up: AnimationClip<F>,
    pub climbing_down: AnimationClip<F>,
}

impl<F> HeroAnimations<F> {
    /// Clip for a state; on stairs a positive vertical velocity (moving
    /// down the screen) plays the descending clip
    pub fn clip_for(&self, state: HeroState, velocity_y: f32) -> &AnimationClip<F> {
        match state {
            HeroState::Standing => &self.standing,
            HeroState::Walking => &self.walking,
            HeroState::Jumping => &self.jumping,
            HeroState::OnStairs if velocity_y > 0.0 => &self.climbing_down,
            HeroState::OnStairs => &self.climbing_up,
        }
    }

    pub fn select(
        &self,
        state: HeroState,
        time_in_state: f32,
        velocity_y: f32,
        facing: Facing,
    ) -> FrameSelection<'_, F> {
        let clip = self.clip_for(state, velocity_y);
        let (index, frame) = clip.frame_at(time_in_state);
        FrameSelection {
            clip: clip.name(),
            index,
            frame,
            flip_horizontal: facing == Facing::Left,
        }
    }

    pub fn select_for(&self, hero: &Hero) -> FrameSelection<'_, F> {
        self.select(
            hero.state(),
            hero.time_in_state(),
            hero.velocity().y,
            hero.facing(),
        )
    }
}

// Demo spritesheet layout, 32x32 frames
const STANDING_FRAMES: [(u32, u32); 4] = [(0, 0), (32, 0), (64, 0), (96, 0)];
const WALKING_FRAMES: [(u32, u32); 8] = [
    (128, 0),
    (160, 0),
    (192, 0),
    (224, 0),
    (0, 0),
    (32, 0),
    (64, 0),
    (96, 0),
];
const JUMPING_FRAME: (u32, u32) = (160, 160);
const CLIMBING_UP_ORIGIN: (u32, u32) = (0, 32);
const CLIMBING_DOWN_ORIGIN: (u32, u32) = (128, 32);
const CLIMBING_FRAME_COUNT: u32 = 4;

impl HeroAnimations<AtlasRegion> {
    /// Slice the Hero frames out of the demo spritesheet
    pub fn from_sheet(sheet: &SpriteSheet, config: &HeroConfig) -> Result<Self, AnimationError> {
        let w = config.sprite_width as u32;
        let h = config.sprite_height as u32;
        let rects = |origins: &[(u32, u32)]| -> Vec<(u32, u32, u32, u32)> {
            origins.iter().map(|&(x, y)| (x, y, w, h)).collect()
        };

        let standing = sheet.regions(&rects(&STANDING_FRAMES))?;
        let walking = sheet.regions(&rects(&WALKING_FRAMES))?;
        let jumping = sheet.region(JUMPING_FRAME.0, JUMPING_FRAME.1, w, h)?;
        let (ux, uy) = CLIMBING_UP_ORIGIN;
        let climbing_up = sheet.strip(ux, uy, w, h, CLIMBING_FRAME_COUNT)?;
        let (dx, dy) = CLIMBING_DOWN_ORIGIN;
        let climbing_down = sheet.strip(dx, dy, w, h, CLIMBING_FRAME_COUNT)?;

        Ok(Self {
            standing: AnimationClip::new("standing", standing, config.standing_fps)?,
            walking: AnimationClip::new("walking", walking, config.walking_fps)?,
            jumping: AnimationClip::new("jumping", vec![jumping], 0.0)?,
            climbing_up: AnimationClip::new("climbing_up", climbing_up, config.climbing_fps)?,
            climbing_down: AnimationClip::new(
                "climbing_down",
                climbing_down,
                config.climbing_fps,
            )?,
        })
    }
}
