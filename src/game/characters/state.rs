// Hero state machine

/// Exactly one of these is active at any time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeroState {
    /// On the ground, no direction held
    #[default]
    Standing,
    /// On the ground, one horizontal direction held
    Walking,
    /// Jump started; kept until the next grounded transition
    Jumping,
    /// Attached to a staircase, moving in discrete steps
    OnStairs,
}

impl HeroState {
    pub fn is_climbing(&self) -> bool {
        matches!(self, Self::OnStairs)
    }
}

/// Which way the Hero looks; only affects how the sprite is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Facing for a horizontal direction sign
    pub fn from_direction(direction: f32) -> Self {
        if direction < 0.0 {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// Tracks the current state and how long it has been active
#[derive(Debug, Clone)]
pub struct HeroStateMachine {
    current_state: HeroState,
    time_in_state: f32,
}

impl Default for HeroStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl HeroStateMachine {
    pub fn new() -> Self {
        Self {
            current_state: HeroState::Standing,
            time_in_state: 0.0,
        }
    }

    pub fn state(&self) -> HeroState {
        self.current_state
    }

    /// Seconds since the last state change
    pub fn time_in_state(&self) -> f32 {
        self.time_in_state
    }

    /// Switch to `new_state`.
    ///
    /// Re-entering the current state does nothing, so the timer keeps
    /// running and animations progress monotonically. Returns whether the
    /// state changed.
    pub fn transition(&mut self, new_state: HeroState) -> bool {
        if self.current_state == new_state {
            return false;
        }
        log::debug!("Hero state {:?} -> {:?}", self.current_state, new_state);
        self.current_state = new_state;
        self.time_in_state = 0.0;
        true
    }

    /// Advance the state timer (called every frame)
    pub fn tick(&mut self, dt: f32) {
        self.time_in_state += dt;
    }
}
