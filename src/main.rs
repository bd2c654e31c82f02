//! Endless Maze entry point
//!
//! Runs the game headless: the autopilot or a player typing key commands on
//! stdin drives it, and frames go to stdout as text or JSON lines for an
//! external renderer. Usage:
//!
//! ```text
//! endless-maze [settings.json]
//! ```

use std::io;
use std::process::ExitCode;

use endless_maze::platform::{
    Clock, FixedStepClock, FramePacer, InputSource, KeyboardInput, SystemClock, spawn_stdin_feed,
};
use endless_maze::renderer::{AsciiRenderer, JsonLinesRenderer, NullRenderer, Renderer};
use endless_maze::sim::{Autopilot, GameState};
use endless_maze::{App, InputMode, RendererKind, Result, RunSummary, Settings};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Endless Maze (headless) starting...");

    match run() {
        Ok(summary) => {
            log::info!("Best level reached: {}", summary.best_level);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<RunSummary> {
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => {
            log::info!("No settings file given, using defaults");
            Settings::default()
        }
    };

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!(
        "Seed {} | viewport {}x{} @ {} FPS | renderer {} | input {}",
        seed,
        settings.viewport_width,
        settings.viewport_height,
        settings.target_fps,
        settings.renderer.as_str(),
        settings.input.as_str()
    );

    let stdout = io::stdout().lock();
    match settings.renderer {
        RendererKind::Ascii => drive(
            &settings,
            seed,
            AsciiRenderer::new(stdout, settings.ascii_interval),
        ),
        RendererKind::Json => drive(&settings, seed, JsonLinesRenderer::new(stdout)),
        RendererKind::None => drive(&settings, seed, NullRenderer),
    }
}

/// Pick the input source for the settings
fn drive<R: Renderer>(settings: &Settings, seed: u64, renderer: R) -> Result<RunSummary> {
    match settings.input {
        InputMode::Autopilot => run_clocked(settings, seed, Autopilot, renderer),
        InputMode::Keyboard => {
            log::info!("Keys on stdin: left/right/up/down or wasd (-key releases), r, quit");
            let input = KeyboardInput::with_feed(spawn_stdin_feed()?);
            run_clocked(settings, seed, input, renderer)
        }
    }
}

/// Pick the clock for the settings and run the loop
fn run_clocked<I: InputSource, R: Renderer>(
    settings: &Settings,
    seed: u64,
    input: I,
    renderer: R,
) -> Result<RunSummary> {
    let viewport = settings.viewport();
    if settings.realtime {
        let mut clock = SystemClock::new();
        let game = GameState::new(seed, viewport, clock.now());
        App::new(
            game,
            input,
            renderer,
            clock,
            FramePacer::new(settings.target_fps),
        )
        .with_frame_limit(settings.max_frames)
        .run()
    } else {
        let game = GameState::new(seed, viewport, 0.0);
        App::new(
            game,
            input,
            renderer,
            FixedStepClock::new(settings.target_fps),
            FramePacer::unpaced(),
        )
        .with_frame_limit(settings.max_frames)
        .run()
    }
}
