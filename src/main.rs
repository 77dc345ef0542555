use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use block_snake::config::{
    CELL_SIZE, GameConfig, SWIPE_THRESHOLD, TICK_INTERVAL_MS, default_log_path,
    default_scores_path,
};
use block_snake::error::GameError;
use block_snake::food::FoodPlacement;
use block_snake::grid::GridModel;
use block_snake::logging::init_file_logging;
use block_snake::renderer::{TerminalPresenter, board_viewport};
use block_snake::score::JsonScoreStore;
use block_snake::session::{GameSession, Phase};
use block_snake::terminal_runtime::{
    Command, TerminalSession, cleanup_terminal_best_effort, poll_command,
};
use clap::Parser;
use tracing::{error, info};

/// Upper bound on how long one loop iteration waits for input.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Milliseconds between snake moves.
    #[arg(long = "tick-ms", default_value_t = TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Minimum swipe length, in board units (one cell is 30).
    #[arg(
        long = "swipe-threshold",
        default_value_t = SWIPE_THRESHOLD,
        value_parser = clap::value_parser!(i32).range(1..)
    )]
    swipe_threshold: i32,

    /// Never place food on a cell the snake occupies.
    #[arg(long = "food-avoids-snake")]
    food_avoids_snake: bool,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Disable mouse capture (and with it, swipe steering).
    #[arg(long = "no-mouse")]
    no_mouse: bool,

    /// High score file.
    #[arg(long = "scores-file")]
    scores_file: Option<PathBuf>,

    /// Log file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> GameConfig {
        GameConfig {
            tick_interval: Duration::from_millis(self.tick_ms),
            swipe_threshold: self.swipe_threshold,
            food_placement: if self.food_avoids_snake {
                FoodPlacement::AvoidSnake
            } else {
                FoodPlacement::SingleDraw
            },
            seed: self.seed,
            mouse: !self.no_mouse,
            scores_path: self.scores_file.unwrap_or_else(default_scores_path),
            log_path: self.log_file.unwrap_or_else(default_log_path),
            ..GameConfig::default()
        }
    }
}

fn main() -> ExitCode {
    let config = Cli::parse().into_config();

    if let Err(error) = init_file_logging(&config.log_path) {
        eprintln!(
            "Logging disabled ({}): {error}",
            config.log_path.display()
        );
    }

    install_panic_hook();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "session aborted");
            eprintln!("block-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &GameConfig) -> Result<(), GameError> {
    let mut session_terminal = TerminalSession::enter(config.mouse)?;
    let terminal = session_terminal.terminal_mut();

    let grid = GridModel::from_viewport(board_viewport(terminal.size()?), CELL_SIZE);
    info!(rows = grid.rows, cols = grid.cols, "board sized from terminal");

    let store = JsonScoreStore::new(&config.scores_path);
    let mut game = GameSession::new(config, grid, store)?;
    let mut presenter = TerminalPresenter::default();
    game.open(&mut presenter);

    loop {
        terminal.draw(|frame| presenter.draw(frame))?;

        if let Some(command) = poll_command(FRAME_INTERVAL)? {
            let now = Instant::now();
            match command {
                Command::Quit => break,
                Command::Steer(direction) => game.on_direction(direction),
                Command::SwipeStart(point) => game.on_swipe_start(point),
                Command::SwipeMove(point) => game.on_swipe_move(point),
                Command::SwipeEnd => game.on_swipe_end(),
                Command::Start if game.phase() == Phase::Ready => {
                    game.start(now, &mut presenter);
                }
                Command::Start | Command::Restart => {
                    if matches!(game.phase(), Phase::GameOver(_))
                        || command == Command::Restart
                    {
                        game.restart(now, &mut presenter)?;
                    }
                }
            }
        }

        game.update(Instant::now(), &mut presenter);
    }

    info!(high_score = game.high_score(), "quit");
    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort();
        default_hook(panic_info);
    }));
}
