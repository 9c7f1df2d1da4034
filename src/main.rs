use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::Parser;
use tile_snake::clock::{Clock, FrameTimer};
use tile_snake::config::{self, GameConfig, FRAME_INTERVAL_MS};
use tile_snake::error::{ConfigError, Result};
use tile_snake::game::GameState;
use tile_snake::input::InputHandler;
use tile_snake::logging::init_file_logging;
use tile_snake::terminal_runtime::{install_panic_hook, TerminalSession};
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "tile-snake", version, about = "Grid snake in the terminal")]
struct Cli {
    /// JSON tuning file; defaults to the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells, walls included.
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells, walls included.
    #[arg(long)]
    height: Option<u16>,

    /// Seed for pickup placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_deref() {
        if let Err(error) = init_file_logging(path) {
            eprintln!("error: failed to start logging to {}: {error}", path.display());
            return ExitCode::FAILURE;
        }
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "fatal error");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> std::result::Result<GameConfig, ConfigError> {
    let mut config = config::load(cli.config.as_deref())?;

    if let Some(width) = cli.width {
        config.grid.width = width;
    }
    if let Some(height) = cli.height {
        config.grid.height = height;
    }

    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    info!(
        width = config.grid.width,
        height = config.grid.height,
        initial_speed_ms = config.speed.initial_ms,
        floor_ms = config.speed.floor_ms,
        seed = ?cli.seed,
        "starting session"
    );

    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(config, seed),
        None => GameState::new(config),
    };

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let clock = Clock::start();
    let mut timer = FrameTimer::new(clock.now_ms());

    loop {
        for game_input in input.poll_inputs()? {
            state.apply_input(game_input);
        }
        if state.quit_requested() {
            break;
        }

        state.update(timer.delta(clock.now_ms()));
        session.draw(&state)?;

        thread::sleep(Duration::from_millis(FRAME_INTERVAL_MS));
    }

    info!(
        ticks = state.tick_count,
        length = state.body.len(),
        "session ended"
    );
    Ok(())
}
