/// Frame timing for the input -> update -> render loop
///
/// The game is integrated with a variable timestep: every frame measures the
/// wall-clock time since the previous one and hands it to the update as `dt`.
/// Presentation is capped at 60 frames per second and `dt` is clamped so a
/// stalled window (dragging, debugger) cannot push the Hero through a floor.
use std::collections::VecDeque;
use std::time::{Duration, Instant};

const TARGET_FRAME_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Largest `dt` ever handed to the simulation (seconds)
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 30;

/// Game loop timing state
pub struct GameLoop {
    /// Time of last frame
    last_frame_time: Instant,

    /// Whether the game is paused
    paused: bool,

    /// Frame timing history for FPS calculation
    frame_times: VecDeque<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl GameLoop {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a loop whose first frame is measured from `start`
    pub fn starting_at(start: Instant) -> Self {
        Self {
            last_frame_time: start,
            paused: false,
            frame_times: VecDeque::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame, returns the simulation delta in seconds
    pub fn begin_frame(&mut self) -> f32 {
        self.begin_frame_at(Instant::now())
    }

    /// Begin a new frame observed at `now`
    pub fn begin_frame_at(&mut self, now: Instant) -> f32 {
        let frame_time = now.saturating_duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.pop_front();
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        if self.paused {
            return 0.0;
        }

        frame_time.as_secs_f32().min(MAX_FRAME_DELTA)
    }

    /// Earliest instant the next frame should be presented
    pub fn next_frame_deadline(&self) -> Instant {
        self.last_frame_time + TARGET_FRAME_DURATION
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            log::info!("Game resumed");
        }
    }

    /// Update FPS calculation
    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
