//! Flappy entry point
//!
//! Loads settings, sets up the terminal and runs the game loop.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use flappy::Settings;
use flappy::platform::{self, FrameClock, TerminalInput, TerminalPresenter, TerminalSession};
use flappy::sim::GameState;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Flappy starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("flappy: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Bad configuration is fatal before the terminal is touched
    let settings = Settings::from_env()?;
    let seed = settings.seed.unwrap_or_else(clock_seed);
    let mut state = GameState::new(seed, settings.tuning.clone())?;
    log::info!(
        "Seed {}, {} FPS, field {}x{}",
        seed,
        settings.target_fps,
        settings.tuning.field_width,
        settings.tuning.field_height
    );

    let _session = TerminalSession::start()?;
    let mut input = TerminalInput;
    let mut presenter = TerminalPresenter::stdout(&settings);
    let mut clock = FrameClock::new(settings.frame_budget());

    platform::run(&mut state, &mut input, &mut presenter, &mut clock)?;
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
