use std::path::PathBuf;

use log::warn;

use crate::constants::DEFAULT_HIGH_SCORE_PATH;

pub const DEFAULT_LOG_FILE: &str = "asteroid-rain.log";
pub const DEFAULT_DEBUG_WIDTH: u16 = 80;
pub const DEFAULT_DEBUG_HEIGHT: u16 = 24;
pub const DEFAULT_DEBUG_FRAMES: u64 = 30;

/// Runtime settings. The only recognised argument is
/// `--debug [width height [frames]]`, which plays a scripted session into an
/// in-memory screen that is dumped to the log. Anything else starts a normal game.
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchOptions {
    pub debug_mode: bool,
    pub debug_width: u16,
    pub debug_height: u16,
    pub max_frames: Option<u64>,
    pub high_score_path: PathBuf,
    pub log_file: PathBuf,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        LaunchOptions {
            debug_mode: false,
            debug_width: DEFAULT_DEBUG_WIDTH,
            debug_height: DEFAULT_DEBUG_HEIGHT,
            max_frames: None,
            high_score_path: PathBuf::from(DEFAULT_HIGH_SCORE_PATH),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl LaunchOptions {
    /// `args` includes the program name, as `std::env::args` yields it.
    pub fn from_args(args: &[String]) -> Self {
        let mut options = LaunchOptions::default();
        if args.get(1).map(String::as_str) != Some("--debug") {
            return options;
        }

        options.debug_mode = true;
        if let [width, height, tail @ ..] = &args[2..] {
            options.debug_width = parse_or_warn(width, "width").unwrap_or(DEFAULT_DEBUG_WIDTH);
            options.debug_height = parse_or_warn(height, "height").unwrap_or(DEFAULT_DEBUG_HEIGHT);
            options.max_frames = tail.first().and_then(|frames| parse_or_warn(frames, "frames"));
        }
        if options.max_frames.is_none() {
            options.max_frames = Some(DEFAULT_DEBUG_FRAMES);
        }
        options
    }
}

fn parse_or_warn<T: std::str::FromStr>(value: &str, what: &str) -> Option<T> {
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("Ignoring unparsable {} value {:?}", what, value);
            None
        }
    }
}
