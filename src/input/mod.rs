use std::collections::VecDeque;

use macroquad::prelude::*;

/// Keys the game reacts to. Everything else is ignored at the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    Up,
    Down,
    Left,
    Right,
    Space,
    Enter,
    Escape,
}

impl GameKey {
    fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Up => Some(Self::Up),
            KeyCode::Down => Some(Self::Down),
            KeyCode::Left => Some(Self::Left),
            KeyCode::Right => Some(Self::Right),
            KeyCode::Space => Some(Self::Space),
            KeyCode::Enter => Some(Self::Enter),
            KeyCode::Escape => Some(Self::Escape),
            _ => None,
        }
    }
}

/// A single key edge: pressed = true for key-down, false for key-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: GameKey,
    pub pressed: bool,
}

impl KeyEvent {
    pub fn down(key: GameKey) -> Self {
        Self { key, pressed: true }
    }

    pub fn up(key: GameKey) -> Self {
        Self { key, pressed: false }
    }
}

/// Abstraction over input sources.
/// Implementations: MacroquadInput (production), ScriptedInput (testing).
pub trait InputProvider {
    /// Key edges since the last call, in order.
    fn poll_events(&mut self) -> Vec<KeyEvent>;

    /// Whether the window manager asked us to close.
    fn quit_requested(&self) -> bool;
}

/// Synthesizes discrete edge events from macroquad's per-frame keyboard
/// state. Window-close requests are intercepted so the state machine can
/// observe them as a quit flag.
pub struct MacroquadInput;

impl MacroquadInput {
    pub fn new() -> Self {
        prevent_quit();
        Self
    }
}

impl InputProvider for MacroquadInput {
    fn poll_events(&mut self) -> Vec<KeyEvent> {
        let mut events = Vec::new();
        for code in get_keys_pressed() {
            if let Some(key) = GameKey::from_key_code(code) {
                events.push(KeyEvent::down(key));
            }
        }
        for code in get_keys_released() {
            if let Some(key) = GameKey::from_key_code(code) {
                events.push(KeyEvent::up(key));
            }
        }
        events
    }

    fn quit_requested(&self) -> bool {
        is_quit_requested()
    }
}

impl Default for MacroquadInput {
    fn default() -> Self {
        Self::new()
    }
}

/// Replays a pre-recorded stream of event batches, one batch per poll.
/// Used by tests.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<KeyEvent>>,
    quit: bool,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a batch of events to be returned by the next poll.
    pub fn push_frame(&mut self, events: Vec<KeyEvent>) {
        self.frames.push_back(events);
    }

    /// Simulate a window-close request.
    pub fn request_quit(&mut self) {
        self.quit = true;
    }
}

impl InputProvider for ScriptedInput {
    fn poll_events(&mut self) -> Vec<KeyEvent> {
        self.frames.pop_front().unwrap_or_default()
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }
}
