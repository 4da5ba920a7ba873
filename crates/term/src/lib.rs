//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders a
//! [`core::GameSnapshot`] into a simple framebuffer that is then flushed to the
//! terminal, instead of going through a widget toolkit.
//!
//! - `game_view` is pure and unit-tested
//! - `renderer` owns the terminal and does the I/O
//! - Board cells are 2 characters wide to compensate for glyph aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use simple_tetris_core as core;
pub use simple_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
