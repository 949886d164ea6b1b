use std::collections::HashMap;
use std::io;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::constants::HOLD_WINDOW_FRAMES;
use crate::state::Command;

// --- SimulatedInput for debugging ---
pub struct SimulatedInput {
    events: HashMap<u64, Event>,
    current_frame: u64,
}

impl SimulatedInput {
    pub fn new(events: HashMap<u64, Event>) -> Self {
        SimulatedInput { events, current_frame: 0 }
    }

    /// A short scripted session: move, fire, grab nothing, quit.
    pub fn demo_script(quit_frame: u64) -> Self {
        let mut events = HashMap::new();
        events.insert(1, Event::Key(KeyCode::Left.into()));
        events.insert(3, Event::Key(KeyCode::Char(' ').into()));
        events.insert(6, Event::Key(KeyCode::Right.into()));
        events.insert(8, Event::Key(KeyCode::Char('s').into()));
        events.insert(quit_frame, Event::Key(KeyCode::Char('q').into()));
        SimulatedInput::new(events)
    }

    pub fn poll(&mut self, frame_count: u64) -> io::Result<bool> {
        self.current_frame = frame_count;
        Ok(self.events.contains_key(&frame_count))
    }

    pub fn read(&mut self) -> io::Result<Event> {
        if let Some(event) = self.events.remove(&self.current_frame) {
            Ok(event)
        } else {
            Ok(Event::Key(KeyCode::Null.into()))
        }
    }
}

/// Turns raw key events into edge-triggered [`Command`]s.
///
/// Terminals with keyboard enhancement report releases directly. Classic terminals
/// only repeat presses, so a direction key that stops repeating for
/// `HOLD_WINDOW_FRAMES` is treated as released.
#[derive(Default)]
pub struct KeyTracker {
    last_seen: HashMap<KeyCode, u64>,
}

impl KeyTracker {
    pub fn new() -> Self {
        KeyTracker::default()
    }

    pub fn is_held(&self, code: KeyCode, frame: u64) -> bool {
        self.last_seen
            .get(&code)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW_FRAMES)
            .unwrap_or(false)
    }

    pub fn translate(&mut self, event: &KeyEvent, frame: u64) -> Option<Command> {
        match event.kind {
            KeyEventKind::Press => match event.code {
                KeyCode::Left | KeyCode::Right => {
                    let was_held = self.is_held(event.code, frame);
                    self.last_seen.insert(event.code, frame);
                    if was_held { None } else { direction_command(event.code, true) }
                }
                KeyCode::Char(' ') => Some(Command::Fire),
                KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::CancelPower),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
                _ => None,
            },
            KeyEventKind::Repeat => {
                if self.last_seen.contains_key(&event.code) {
                    self.last_seen.insert(event.code, frame);
                }
                None
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&event.code).and_then(|_| direction_command(event.code, false))
            }
        }
    }

    /// Releases direction keys that have gone quiet.
    pub fn expire(&mut self, frame: u64) -> Vec<Command> {
        let expired: Vec<KeyCode> = self
            .last_seen
            .iter()
            .filter(|&(_, &last)| frame.saturating_sub(last) > HOLD_WINDOW_FRAMES)
            .map(|(&code, _)| code)
            .collect();
        expired
            .into_iter()
            .filter_map(|code| {
                self.last_seen.remove(&code);
                direction_command(code, false)
            })
            .collect()
    }
}

fn direction_command(code: KeyCode, down: bool) -> Option<Command> {
    match (code, down) {
        (KeyCode::Left, true) => Some(Command::LeftDown),
        (KeyCode::Left, false) => Some(Command::LeftUp),
        (KeyCode::Right, true) => Some(Command::RightDown),
        (KeyCode::Right, false) => Some(Command::RightUp),
        _ => None,
    }
}
