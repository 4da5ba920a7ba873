//! Simple Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof (`simple_tetris::{core, input,
//! term, types}`) and holds the driver configuration used by the terminal binary.

pub mod config;

pub use simple_tetris_core as core;
pub use simple_tetris_input as input;
pub use simple_tetris_term as term;
pub use simple_tetris_types as types;

pub use config::DriverConfig;
