// Engine modules: frame clock, input, assets, renderer

pub mod assets;
pub mod game_loop;
pub mod input;
pub mod renderer;
