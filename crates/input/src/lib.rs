//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Command`] values. Key repeat is
//! left to the terminal: every press or auto-repeat maps to one command.

pub mod map;

pub use simple_tetris_types as types;

pub use map::{handle_key_event, is_restart, should_quit};
