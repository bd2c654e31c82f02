//! Platform abstraction layer
//!
//! Handles the host-facing side of the loop:
//! - Input events and held keys, including a stdin key feed
//! - Time readings and frame pacing

pub mod input;
pub mod time;

pub use input::{
    InputEvent, InputSource, Key, KeyboardInput, KeyboardState, ScriptedInput, parse_commands,
    sample, spawn_stdin_feed,
};
pub use time::{Clock, FixedStepClock, FramePacer, SystemClock};
