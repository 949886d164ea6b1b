use std::env;
use std::io::{self, Write};
use crossterm::{
    terminal::{enable_raw_mode, disable_raw_mode, size, supports_keyboard_enhancement},
    cursor::{Hide, Show},
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
};
use log::{info, error};

use asteroid_rain::config::LaunchOptions;
use asteroid_rain::game::Game;
use asteroid_rain::highscore::HighScoreStore;
use asteroid_rain::rendering::{GameGrid, OutputTarget, ScreenBuffer};
use asteroid_rain::terminal_io::SimulatedInput;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let options = LaunchOptions::from_args(&args);

    simple_logging::log_to_file(&options.log_file, log::LevelFilter::Info)?;
    info!("Starting asteroid-rain with {:?}", options);

    let mut stdout_target;
    let mut simulated_input: Option<SimulatedInput> = None;
    let mut keyboard_enhanced = false;
    let terminal_width: u16;
    let terminal_height: u16;

    if options.debug_mode {
        terminal_width = options.debug_width;
        terminal_height = options.debug_height;
        info!("Debug mode enabled. Resolution {}x{}", terminal_width, terminal_height);
        stdout_target = OutputTarget::ScreenBuffer(ScreenBuffer::new(terminal_width, terminal_height));
        let quit_frame = options.max_frames.unwrap_or(1).saturating_sub(1);
        simulated_input = Some(SimulatedInput::demo_script(quit_frame));
    } else {
        info!("Attempting to enable raw mode.");
        enable_raw_mode().map_err(|e| { error!("Failed to enable raw mode: {}", e); e })?;
        let (width, height) = size().map_err(|e| { error!("Failed to get terminal size: {}", e); e })?;
        terminal_width = width;
        terminal_height = height;
        stdout_target = OutputTarget::Stdout(io::stdout());
        info!("Terminal size: {}x{}", terminal_width, terminal_height);

        let game_grid_dummy = GameGrid::new(terminal_width, terminal_height);
        game_grid_dummy
            .clear_screen_manual(&mut stdout_target, terminal_width, terminal_height)
            .map_err(|e| { error!("Failed to clear screen manually: {}", e); e })?;
        stdout_target.execute_other_command(Hide).map_err(|e| { error!("Failed to hide cursor: {}", e); e })?;

        // Without release events KeyTracker falls back to its hold window.
        if supports_keyboard_enhancement().unwrap_or(false) {
            keyboard_enhanced = stdout_target
                .execute_other_command(PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES))
                .is_ok();
        }
        info!("Key release reporting: {}", keyboard_enhanced);
        stdout_target.flush()?;
    }

    let high_scores = HighScoreStore::file(&options.high_score_path);
    let mut game = Game::new(
        terminal_width,
        terminal_height,
        stdout_target,
        high_scores,
        simulated_input,
        options.debug_mode,
        options.max_frames,
    );
    let mut rng = rand::thread_rng();
    let result = game.run(&mut rng);

    if !options.debug_mode {
        let (width, height) = (game.terminal_width, game.terminal_height);
        if keyboard_enhanced {
            let _ = game.stdout_target.execute_other_command(PopKeyboardEnhancementFlags);
        }
        let _ = GameGrid::new(width, height).clear_screen_manual(&mut game.stdout_target, width, height);
        game.stdout_target.execute_other_command(Show).map_err(|e| { error!("Failed to show cursor on exit: {}", e); e })?;
        disable_raw_mode().map_err(|e| { error!("Failed to disable raw mode on exit: {}", e); e })?;
    }

    let state = result?;
    println!(
        "Final score: {}  Level: {}  Highscore: {}",
        state.score(),
        state.level,
        state.scoreboard.final_high_score()
    );
    info!("Exiting application.");
    Ok(())
}
