// Game modules: the Hero, the level and the per-frame quest loop

pub mod characters;
pub mod level;
pub mod quest;

pub use quest::{FrameView, Quest};
