use std::io::{self, Write};
use std::time::{Duration, Instant};
use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode},
};
use rand::Rng;
use log::{error, info};

use crate::constants::*;
use crate::highscore::HighScoreStore;
use crate::rendering::{draw_state, GameGrid, OutputTarget};
use crate::state::{Command, FrameReport, GameState};
use crate::terminal_io::{KeyTracker, SimulatedInput};

pub struct Game {
    pub terminal_width: u16,
    pub terminal_height: u16,
    pub stdout_target: OutputTarget,
    pub high_scores: HighScoreStore,
    simulated_input: Option<SimulatedInput>,
    debug_mode_active: bool,
    max_frames: Option<u64>,
    keys: KeyTracker,
}

impl Game {
    pub fn new(
        terminal_width: u16,
        terminal_height: u16,
        stdout_target: OutputTarget,
        high_scores: HighScoreStore,
        simulated_input: Option<SimulatedInput>,
        debug_mode_active: bool,
        max_frames: Option<u64>,
    ) -> Self {
        Game {
            terminal_width,
            terminal_height,
            stdout_target,
            high_scores,
            simulated_input,
            debug_mode_active,
            max_frames,
            keys: KeyTracker::new(),
        }
    }

    /// Plays one round until the player quits or the frame limit runs out.
    pub fn run(&mut self, rng: &mut impl Rng) -> io::Result<GameState> {
        if !self.debug_mode_active {
            self.show_title_screen()?;
        }

        let high_score = self.high_scores.load_or_reset();
        let mut state = GameState::new(high_score, rng);
        let mut game_grid = GameGrid::new(self.terminal_width, self.terminal_height);
        let frame_duration = Duration::from_millis(FRAME_POLL_MS);
        let mut frame_count: u64 = 0;

        while state.running && self.max_frames.map_or(true, |max| frame_count < max) {
            let frame_start = Instant::now();
            let commands = self.collect_commands(frame_count, &mut game_grid)?;

            for step in 0..SIM_STEPS_PER_FRAME {
                let step_commands: &[Command] = if step == 0 { &commands } else { &[] };
                let report = state.step(step_commands, rng);
                self.persist(&report);
                if !state.running {
                    break;
                }
            }

            draw_state(&state, &mut game_grid);
            self.render(&game_grid)?;

            frame_count += 1;
            if !self.debug_mode_active {
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    std::thread::sleep(frame_duration - elapsed);
                }
            }
        }

        info!(
            "Round finished after {} frames. Score: {}, level: {}, game over: {}",
            frame_count,
            state.score(),
            state.level,
            state.game_over
        );
        Ok(state)
    }

    fn collect_commands(&mut self, frame_count: u64, game_grid: &mut GameGrid) -> io::Result<Vec<Command>> {
        let mut events: Vec<Event> = Vec::new();
        if self.debug_mode_active {
            if let Some(sim_input) = &mut self.simulated_input {
                if sim_input.poll(frame_count)? {
                    events.push(sim_input.read()?);
                }
            }
        } else {
            while event::poll(Duration::ZERO).map_err(|e| { error!("Failed to poll event: {}", e); e })? {
                events.push(event::read().map_err(|e| { error!("Failed to read event: {}", e); e })?);
            }
        }

        let mut commands = Vec::new();
        for event in events {
            match event {
                Event::Key(key_event) => {
                    if let Some(command) = self.keys.translate(&key_event, frame_count) {
                        commands.push(command);
                    }
                }
                Event::Resize(new_width, new_height) => {
                    self.terminal_width = new_width;
                    self.terminal_height = new_height;
                    *game_grid = GameGrid::new(new_width, new_height);
                    info!("Terminal resized to {}x{}", new_width, new_height);
                }
                _ => {}
            }
        }
        commands.extend(self.keys.expire(frame_count));
        Ok(commands)
    }

    fn persist(&mut self, report: &FrameReport) {
        if report.game_over_entered {
            info!("Saving high score after game over.");
        }
        if let Some(high_score) = report.persist_high_score {
            if let Err(e) = self.high_scores.save(high_score) {
                error!("Failed to save high score {}: {}", high_score, e);
            }
        }
    }

    fn render(&mut self, game_grid: &GameGrid) -> io::Result<()> {
        if !self.debug_mode_active {
            game_grid.render(&mut self.stdout_target).map_err(|e| { error!("Failed to render game grid: {}", e); e })?;
            self.stdout_target.flush().map_err(|e| { error!("Failed to flush stdout after rendering: {}", e); e })?;
        } else if let OutputTarget::ScreenBuffer(ref mut sb) = self.stdout_target {
            sb.clear();
            for y in 0..game_grid.height.min(sb.height) {
                for x in 0..game_grid.width.min(sb.width) {
                    sb.set_char(x, y, game_grid.grid[y as usize][x as usize]);
                }
            }
            sb.print_to_log();
        }
        Ok(())
    }

    fn show_title_screen(&mut self) -> io::Result<()> {
        let title_art = [
            r"*   .      *       .     *   .",
            r"   A S T E R O I D   R A I N   ",
            r".     *   .     *        .    *",
        ];

        let title_start_y = (self.terminal_height / 2).saturating_sub(title_art.len() as u16 / 2);
        for (i, line) in title_art.iter().enumerate() {
            let x = (self.terminal_width / 2).saturating_sub(line.len() as u16 / 2);
            self.stdout_target.execute_move_to(MoveTo(x, title_start_y + i as u16))?;
            write!(self.stdout_target, "{}", line)?;
        }

        let controls = "Left/Right: move   Space: fire   S: drop power   Q: quit";
        let press_any_key_msg = "Press any key to start...";
        for (offset, msg) in [(7u16, controls), (5, press_any_key_msg)] {
            let msg_x = (self.terminal_width / 2).saturating_sub(msg.len() as u16 / 2);
            self.stdout_target.execute_move_to(MoveTo(msg_x, self.terminal_height.saturating_sub(offset)))?;
            write!(self.stdout_target, "{}", msg)?;
        }
        self.stdout_target.flush()?;
        info!("Title screen displayed. Waiting for key press.");

        loop {
            if let Event::Key(key_event) = event::read()? {
                if key_event.code != KeyCode::Null {
                    break;
                }
            }
        }

        let game_grid_dummy = GameGrid::new(self.terminal_width, self.terminal_height);
        game_grid_dummy.clear_screen_manual(&mut self.stdout_target, self.terminal_width, self.terminal_height)?;
        self.stdout_target.flush()?;
        Ok(())
    }
}
