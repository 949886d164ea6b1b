pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod game;
pub mod highscore;
pub mod pickups;
pub mod population;
pub mod rendering;
pub mod scoring;
pub mod state;
pub mod terminal_io;
pub mod types;

pub use error::GameError;
pub use state::{Command, FrameReport, GameState};
