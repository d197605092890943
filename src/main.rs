use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;
mod settings;

use engine::assets::{
    check_extension, AssetError, AssetLoader, AssetType, SpriteSheet, DEMO_COLORKEY,
};
use engine::game_loop::GameLoop;
use engine::input::{Action, InputManager};
use engine::renderer::Renderer;
use game::characters::HeroAnimations;
use game::level::Level;
use game::Quest;
use settings::Settings;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Map to play, a path or a name under the resources maps directory
    #[arg(short, long)]
    map: Option<String>,

    /// Draw the Hero floor sensor
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(Args::parse()) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    info!("Starting Quest...");

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(map) = args.map {
        settings.map = map;
    }
    settings.debug |= args.debug;

    let loader = AssetLoader::new(&settings.resources_dir);
    let level = Level::load(locate_map(&loader, &settings.map)?)?;
    let sheet = SpriteSheet::load(
        loader.locate(AssetType::Art, &settings.spritesheet)?,
        Some(DEMO_COLORKEY),
    )?;
    let animations = HeroAnimations::from_sheet(&sheet, &settings.hero)?;
    let mut quest = Quest::new(level, settings.hero.clone(), animations, settings.debug);

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Quest")
            .with_inner_size(winit::dpi::LogicalSize::new(
                settings.window_width,
                settings.window_height,
            ))
            .with_resizable(true)
            .build(&event_loop)?,
    );
    info!("Window created successfully");

    let mut renderer = pollster::block_on(Renderer::new(window.clone(), &sheet, settings.zoom))
        .context("Failed to initialize renderer")?;
    let mut input = InputManager::default();
    let mut game_loop = GameLoop::new();

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => renderer.resize(physical_size),
                WindowEvent::Focused(focused) => {
                    if focused {
                        game_loop.resume();
                    } else {
                        // Key releases are lost while unfocused
                        input.reset();
                        game_loop.pause();
                    }
                }
                WindowEvent::KeyboardInput { event, .. } => input.process_keyboard_event(&event),
                WindowEvent::RedrawRequested => {
                    if input.is_pressed(Action::Quit) {
                        info!("Quit pressed, shutting down...");
                        elwt.exit();
                        return;
                    }

                    let dt = game_loop.begin_frame();
                    if input.just_pressed(Action::DebugDump) {
                        quest.log_debug_report();
                        info!("fps: {:.1}", game_loop.fps());
                    }

                    quest.handle_input(&input.snapshot());
                    quest.update(dt);
                    input.update();

                    if let Err(err) = renderer.render(&quest.view()) {
                        error!("Render failed: {err:#}");
                        elwt.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                let deadline = game_loop.next_frame_deadline();
                if Instant::now() >= deadline {
                    window.request_redraw();
                }
                elwt.set_control_flow(ControlFlow::WaitUntil(deadline));
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// A map given as an existing path is used as is; anything else is looked up
/// under the resources directory
fn locate_map(loader: &AssetLoader, map: &str) -> Result<PathBuf, AssetError> {
    let direct = Path::new(map);
    if direct.is_file() {
        check_extension(AssetType::Map, direct)?;
        Ok(direct.to_path_buf())
    } else {
        loader.locate(AssetType::Map, map)
    }
}
