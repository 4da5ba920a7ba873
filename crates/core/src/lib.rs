//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, input devices, timers or I/O, making it:
//!
//! - **Deterministic**: Same seed (or scripted shape source) produces identical games
//! - **Testable**: Collision, rotation and row clearing are plain functions over values
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: Fixed-size grid with collision detection and row clearing
//! - [`config`]: Session parameters and their validation
//! - [`game_state`]: The game session: active piece, commands, locking, scoring
//! - [`pieces`]: Shape matrices, the five-shape catalog and wall-kick rotation
//! - [`rng`]: Shape sources (seeded uniform choice, scripted sequences)
//! - [`snapshot`]: Owned read-only view for renderers
//!
//! # Game Rules
//!
//! - **Catalog**: square, T, Z, S and I shapes, drawn uniformly at random
//! - **Spawn**: row 0, column 4; a blocked spawn ends the game
//! - **Rotation**: clockwise transpose-and-reverse, kicked one column left or right if needed
//! - **Drops**: soft drop and tick move one row or lock; hard drop falls and locks at once
//! - **Scoring**: 10 points per cleared row, all full rows clear in one step
//!
//! # Example
//!
//! ```
//! use simple_tetris_core::{GameConfig, GameSession, SequenceSource};
//! use simple_tetris_types::{Command, ShapeKind};
//!
//! let source = SequenceSource::repeat(ShapeKind::Square);
//! let mut game = GameSession::new(GameConfig::default(), source).unwrap();
//!
//! game.apply_command(Command::MoveRight);
//! game.apply_command(Command::Rotate);
//! game.apply_command(Command::HardDrop);
//!
//! assert_eq!(game.board().filled_count(), 4);
//! assert_eq!(game.score(), 0);
//! assert!(!game.game_over());
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use simple_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError};
pub use config::{ConfigError, GameConfig};
pub use game_state::{ActiveCells, ActivePiece, GameSession, LockEvent, PieceCells};
pub use pieces::{get_shape, try_rotate, Shape};
pub use rng::{SequenceSource, ShapeSource, SimpleRng, UniformSource};
pub use snapshot::GameSnapshot;
