use std::io::{self, Write};
use log::info;
use crossterm::{
    cursor::MoveTo,
    execute,
};

use crate::constants::*;
use crate::state::GameState;
use crate::types::Vector2D;

// --- ScreenBuffer for simulated rendering ---
pub struct ScreenBuffer {
    pub buffer: Vec<Vec<char>>,
    pub width: u16,
    pub height: u16,
    pub cursor_x: u16,
    pub cursor_y: u16,
}

impl ScreenBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        ScreenBuffer {
            buffer: vec![vec![' '; width as usize]; height as usize],
            width,
            height,
            cursor_x: 0,
            cursor_y: 0,
        }
    }

    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    pub fn write_str(&mut self, s: &str) {
        for c in s.chars() {
            self.set_char(self.cursor_x, self.cursor_y, c);
            self.cursor_x = self.cursor_x.saturating_add(1);
        }
    }

    pub fn set_char(&mut self, x: u16, y: u16, c: char) {
        if y < self.height && x < self.width {
            self.buffer[y as usize][x as usize] = c;
        }
    }

    pub fn clear(&mut self) {
        self.buffer = vec![vec![' '; self.width as usize]; self.height as usize];
        self.cursor_x = 0;
        self.cursor_y = 0;
    }

    pub fn row(&self, y: u16) -> String {
        self.buffer[y as usize].iter().collect()
    }

    pub fn print_to_log(&self) {
        info!("--- Screen Buffer ---");
        for row in &self.buffer {
            info!("{}", row.iter().collect::<String>());
        }
        info!("---------------------");
    }
}

// --- OutputTarget enum to handle stdout or ScreenBuffer ---
pub enum OutputTarget {
    Stdout(io::Stdout),
    ScreenBuffer(ScreenBuffer),
}

impl OutputTarget {
    pub fn execute_move_to(&mut self, command: MoveTo) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => execute!(s, command),
            OutputTarget::ScreenBuffer(sb) => {
                sb.move_to(command.0, command.1);
                Ok(())
            }
        }
    }

    pub fn execute_other_command(&mut self, command: impl crossterm::Command) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => execute!(s, command),
            OutputTarget::ScreenBuffer(_) => Ok(()), // Ignore in debug mode
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputTarget::Stdout(s) => s.write(buf),
            OutputTarget::ScreenBuffer(sb) => {
                let s = String::from_utf8_lossy(buf);
                sb.write_str(&s);
                Ok(buf.len())
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => s.flush(),
            OutputTarget::ScreenBuffer(_) => Ok(()),
        }
    }
}

// --- GameGrid: the 800x600 canvas projected onto terminal cells ---
pub struct GameGrid {
    pub grid: Vec<Vec<char>>,
    pub width: u16,
    pub height: u16,
}

impl GameGrid {
    pub fn new(width: u16, height: u16) -> Self {
        GameGrid {
            grid: vec![vec![' '; width as usize]; height as usize],
            width,
            height,
        }
    }

    /// Maps a canvas position to a cell, or `None` when it lies off the canvas.
    pub fn project(&self, position: Vector2D) -> Option<(u16, u16)> {
        if position.x < 0.0 || position.y < 0.0 || position.x >= CANVAS_WIDTH || position.y >= CANVAS_HEIGHT {
            return None;
        }
        let x = (position.x / CANVAS_WIDTH * self.width as f64).floor() as u16;
        let y = (position.y / CANVAS_HEIGHT * self.height as f64).floor() as u16;
        Some((x, y))
    }

    pub fn set_char(&mut self, x: u16, y: u16, c: char) {
        if y < self.height && x < self.width {
            self.grid[y as usize][x as usize] = c;
        }
    }

    pub fn plot(&mut self, position: Vector2D, c: char) {
        if let Some((x, y)) = self.project(position) {
            self.set_char(x, y, c);
        }
    }

    pub fn write_text(&mut self, position: Vector2D, text: &str) {
        if let Some((x, y)) = self.project(position) {
            for (i, c) in text.chars().enumerate() {
                self.set_char(x.saturating_add(i as u16), y, c);
            }
        }
    }

    pub fn clear(&mut self) {
        self.grid = vec![vec![' '; self.width as usize]; self.height as usize];
    }

    pub fn row(&self, y: u16) -> String {
        self.grid[y as usize].iter().collect()
    }

    pub fn render(&self, stdout: &mut OutputTarget) -> io::Result<()> {
        for y in 0..self.height {
            stdout.execute_move_to(MoveTo(0, y))?;
            write!(stdout, "{}", self.grid[y as usize].iter().collect::<String>())?;
        }
        Ok(())
    }

    pub fn clear_screen_manual(
        &self,
        stdout: &mut OutputTarget,
        terminal_width: u16,
        terminal_height: u16,
    ) -> io::Result<()> {
        for y in 0..terminal_height {
            stdout.execute_move_to(MoveTo(0, y))?;
            write!(stdout, "{}", " ".repeat(terminal_width as usize))?;
        }
        stdout.execute_move_to(MoveTo(0, 0))?;
        Ok(())
    }
}

fn at(pos: (f64, f64)) -> Vector2D {
    Vector2D::new(pos.0, pos.1)
}

/// Paints one frame of `state` onto `game_grid`, back to front.
pub fn draw_state(state: &GameState, game_grid: &mut GameGrid) {
    game_grid.clear();

    if state.bonus_round {
        game_grid.write_text(at(BONUS_BANNER_POS), "BONUS ROUND");
    }

    if !state.game_over {
        if !state.bonus_round {
            for asteroid in &state.asteroids {
                asteroid.draw(game_grid);
            }
        }
        for coin in &state.coins {
            coin.draw(game_grid);
        }
    }

    if state.ship.safety {
        state.ship.draw_safety_bubble(game_grid);
    }

    if !state.game_over {
        state.power_up.draw(game_grid);
        state.life.draw(game_grid);
        state.shield.draw(game_grid);
    } else {
        game_grid.write_text(at(GAME_OVER_POS), "Game Over");
    }

    state.ship.power_weapon.draw(game_grid);
    state.ship.bullet.draw(game_grid);

    let score_line = format!("Score : {} Highscore : {}", state.scoreboard.score, state.scoreboard.high_score);
    game_grid.write_text(at(HUD_SCORE_POS), &score_line);
    game_grid.write_text(at(HUD_LEVEL_POS), &format!("Level : {}", state.level));
    state.ship.draw(game_grid);
    for i in 0..state.ship.lives {
        let icon = Vector2D::new(HUD_LIVES_POS.0 + HUD_LIFE_SPACING * i as f64, HUD_LIVES_POS.1);
        game_grid.plot(icon, '♥');
    }
}
