//! Keyboard sampling
//!
//! Backends report key presses, releases and discrete events; this module
//! folds them into the `TickInput` snapshot the simulation consumes once per
//! tick. The terminal backend reads key commands from stdin on a reader
//! thread.

use std::collections::HashSet;
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::sim::{Autopilot, GameState, TickInput};

/// Keys the game reacts to; everything else maps to `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    A,
    D,
    W,
    S,
    R,
    Escape,
    Other,
}

impl Key {
    /// Map a key name as reported by a backend (case-insensitive)
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "left" | "arrowleft" => Key::ArrowLeft,
            "right" | "arrowright" => Key::ArrowRight,
            "up" | "arrowup" => Key::ArrowUp,
            "down" | "arrowdown" => Key::ArrowDown,
            "a" => Key::A,
            "d" => Key::D,
            "w" => Key::W,
            "s" => Key::S,
            "r" => Key::R,
            "escape" | "esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// Discrete events collected since the previous tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window close or equivalent
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Keys currently held down
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        if key != Key::Other {
            self.pressed.insert(key);
        }
    }

    pub fn release(&mut self, key: Key) {
        self.pressed.remove(&key);
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    fn any(&self, keys: [Key; 2]) -> bool {
        keys.iter().any(|k| self.is_pressed(*k))
    }
}

/// Build the tick input from held keys and this tick's events.
///
/// Arrows and WASD both steer; Escape or a window quit ends the game and R
/// requests a restart. Unknown keys are ignored.
pub fn sample(keys: &KeyboardState, events: &[InputEvent]) -> TickInput {
    let mut input = TickInput {
        left: keys.any([Key::ArrowLeft, Key::A]),
        right: keys.any([Key::ArrowRight, Key::D]),
        up: keys.any([Key::ArrowUp, Key::W]),
        down: keys.any([Key::ArrowDown, Key::S]),
        ..Default::default()
    };

    for event in events {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => input.quit = true,
            InputEvent::KeyDown(Key::R) => input.restart = true,
            InputEvent::KeyDown(_) | InputEvent::KeyUp(_) => {}
        }
    }
    input
}

/// Anything that can produce one input snapshot per tick
pub trait InputSource {
    fn poll(&mut self, state: &GameState) -> TickInput;
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> TickInput {
        self.steer(state)
    }
}

/// A human at the keyboard: held keys plus the events queued since the last
/// poll, optionally fed by a backend channel
#[derive(Debug, Default)]
pub struct KeyboardInput {
    keys: KeyboardState,
    pending: Vec<InputEvent>,
    feed: Option<Receiver<InputEvent>>,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take events from a backend; a closed channel counts as a quit
    pub fn with_feed(feed: Receiver<InputEvent>) -> Self {
        Self {
            feed: Some(feed),
            ..Self::default()
        }
    }

    /// Record one backend event
    pub fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => self.keys.press(key),
            InputEvent::KeyUp(key) => self.keys.release(key),
            InputEvent::Quit => {}
        }
        self.pending.push(event);
    }

    fn drain_feed(&mut self) {
        let Some(feed) = &self.feed else {
            return;
        };

        let mut received = Vec::new();
        let mut closed = false;
        loop {
            match feed.try_recv() {
                Ok(event) => received.push(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    closed = true;
                    break;
                }
            }
        }

        for event in received {
            self.push(event);
        }
        if closed {
            log::info!("Input feed closed, quitting");
            self.feed = None;
            self.push(InputEvent::Quit);
        }
    }
}

impl InputSource for KeyboardInput {
    fn poll(&mut self, _state: &GameState) -> TickInput {
        self.drain_feed();
        let input = sample(&self.keys, &self.pending);
        self.pending.clear();
        input
    }
}

/// Parse one line of terminal key commands.
///
/// Whitespace-separated tokens: `key` or `+key` presses a key, `-key`
/// releases it and `quit` closes the game. Key names go through
/// `Key::from_name`.
pub fn parse_commands(line: &str) -> Vec<InputEvent> {
    line.split_whitespace()
        .map(|token| {
            if token.eq_ignore_ascii_case("quit") {
                InputEvent::Quit
            } else if let Some(name) = token.strip_prefix('-') {
                InputEvent::KeyUp(Key::from_name(name))
            } else {
                InputEvent::KeyDown(Key::from_name(token.trim_start_matches('+')))
            }
        })
        .collect()
}

/// Start a thread that turns stdin lines into input events. The channel
/// closes at end of input.
pub fn spawn_stdin_feed() -> Result<Receiver<InputEvent>> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("stdin-input".into())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        log::warn!("Failed to read stdin: {e}");
                        break;
                    }
                };
                for event in parse_commands(&line) {
                    if tx.send(event).is_err() {
                        return;
                    }
                }
            }
            log::debug!("stdin closed");
        })?;
    Ok(rx)
}

/// Replays a fixed list of inputs, then requests quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    inputs: Vec<TickInput>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(inputs: Vec<TickInput>) -> Self {
        Self { inputs, cursor: 0 }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _state: &GameState) -> TickInput {
        let input = self.inputs.get(self.cursor).copied().unwrap_or(TickInput {
            quit: true,
            ..Default::default()
        });
        self.cursor += 1;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_wasd_steer() {
        let mut keys = KeyboardState::new();
        keys.press(Key::ArrowLeft);
        keys.press(Key::S);
        let input = sample(&keys, &[]);
        assert!(input.left && input.down);
        assert!(!input.right && !input.up);

        keys.release(Key::ArrowLeft);
        keys.press(Key::D);
        let input = sample(&keys, &[]);
        assert!(input.right && !input.left);
    }

    #[test]
    fn test_events() {
        let keys = KeyboardState::new();
        let input = sample(&keys, &[InputEvent::KeyDown(Key::R)]);
        assert!(input.restart && !input.quit);

        let input = sample(&keys, &[InputEvent::KeyDown(Key::Escape)]);
        assert!(input.quit);

        let input = sample(&keys, &[InputEvent::Quit]);
        assert!(input.quit);

        let input = sample(&keys, &[InputEvent::KeyDown(Key::Other)]);
        assert_eq!(input, TickInput::default());
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowUp"), Key::ArrowUp);
        assert_eq!(Key::from_name("w"), Key::W);
        assert_eq!(Key::from_name("ESC"), Key::Escape);
        assert_eq!(Key::from_name("F12"), Key::Other);

        let mut keys = KeyboardState::new();
        keys.press(Key::Other);
        assert!(!keys.is_pressed(Key::Other));
    }

    #[test]
    fn test_key_up_is_not_an_action() {
        let input = sample(&KeyboardState::new(), &[InputEvent::KeyUp(Key::R)]);
        assert_eq!(input, TickInput::default());
    }

    #[test]
    fn test_keyboard_input_holds_keys_between_polls() {
        let state = GameState::new(1, glam::IVec2::new(640, 480), 0.0);
        let mut keyboard = KeyboardInput::new();

        keyboard.push(InputEvent::KeyDown(Key::W));
        keyboard.push(InputEvent::KeyDown(Key::R));
        let input = keyboard.poll(&state);
        assert!(input.up && input.restart);

        // Held key persists, one-shot restart does not
        let input = keyboard.poll(&state);
        assert!(input.up && !input.restart);

        keyboard.push(InputEvent::KeyUp(Key::W));
        assert_eq!(keyboard.poll(&state), TickInput::default());
    }

    #[test]
    fn test_keyboard_feed() {
        let state = GameState::new(1, glam::IVec2::new(640, 480), 0.0);
        let (tx, rx) = mpsc::channel();
        let mut keyboard = KeyboardInput::with_feed(rx);

        assert_eq!(keyboard.poll(&state), TickInput::default());

        for event in parse_commands("left +down") {
            tx.send(event).unwrap();
        }
        let input = keyboard.poll(&state);
        assert!(input.left && input.down && !input.quit);

        tx.send(InputEvent::KeyUp(Key::ArrowLeft)).unwrap();
        drop(tx);
        let input = keyboard.poll(&state);
        assert!(!input.left && input.down);
        assert!(input.quit);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_commands("  +Right -a r QUIT esc "),
            vec![
                InputEvent::KeyDown(Key::ArrowRight),
                InputEvent::KeyUp(Key::A),
                InputEvent::KeyDown(Key::R),
                InputEvent::Quit,
                InputEvent::KeyDown(Key::Escape),
            ]
        );
        assert!(parse_commands("").is_empty());
    }

    #[test]
    fn test_scripted_input_ends_with_quit() {
        let state = GameState::new(1, glam::IVec2::new(640, 480), 0.0);
        let step = TickInput {
            up: true,
            ..Default::default()
        };
        let mut script = ScriptedInput::new(vec![step]);
        assert_eq!(script.poll(&state), step);
        assert!(script.poll(&state).quit);
        assert!(script.poll(&state).quit);
    }
}
