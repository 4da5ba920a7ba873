//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, scripted drivers).
//!
//! # Board Dimensions
//!
//! The reference playfield is 10 columns by 20 rows, but sessions can be
//! created with any positive size:
//!
//! - **Width**: [`DEFAULT_WIDTH`] columns (indexed 0-9)
//! - **Height**: [`DEFAULT_HEIGHT`] rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: row 0, column [`DEFAULT_SPAWN_COLUMN`]
//!
//! # Timing
//!
//! The engine has no clock. A driver issues [`Command::Tick`] on a cadence of
//! its choosing; [`DEFAULT_TICK_MS`] is the reference cadence.
//!
//! # Examples
//!
//! ```
//! use simple_tetris_types::{Command, ShapeKind, DEFAULT_HEIGHT, DEFAULT_WIDTH};
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//!
//! // Parse a command
//! let command = Command::from_str("hardDrop").unwrap();
//! assert_eq!(command, Command::HardDrop);
//!
//! // Board dimensions
//! assert_eq!(DEFAULT_WIDTH, 10);
//! assert_eq!(DEFAULT_HEIGHT, 20);
//! ```

/// Default board width in cells (10 columns)
pub const DEFAULT_WIDTH: usize = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_HEIGHT: usize = 20;

/// Column of the shape matrix's top-left cell when a piece spawns
pub const DEFAULT_SPAWN_COLUMN: i32 = 4;

/// Points awarded per cleared row
pub const DEFAULT_ROW_BONUS: u32 = 10;

/// Reference interval between gravity ticks (500ms)
pub const DEFAULT_TICK_MS: u64 = 500;


/// The five shape variants of the catalog
///
/// Each shape has a distinct matrix and color:
/// - **Square**: Yellow, 2x2 block
/// - **T**: Purple, T-shaped
/// - **Z**: Red, Z-shaped
/// - **S**: Green, S-shaped (mirror of Z)
/// - **I**: Cyan, vertical bar of four
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    T,
    Z,
    S,
    I,
}

impl ShapeKind {
    /// Number of variants in the catalog
    pub const COUNT: usize = 5;

    /// Every variant, in catalog order
    pub const ALL: [ShapeKind; Self::COUNT] = [
        ShapeKind::Square,
        ShapeKind::T,
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::I,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_tetris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("o"), Some(ShapeKind::Square));
    /// assert_eq!(ShapeKind::from_str("I"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "o" | "square" => Some(ShapeKind::Square),
            "t" => Some(ShapeKind::T),
            "z" => Some(ShapeKind::Z),
            "s" => Some(ShapeKind::S),
            "i" => Some(ShapeKind::I),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Square => "o",
            ShapeKind::T => "t",
            ShapeKind::Z => "z",
            ShapeKind::S => "s",
            ShapeKind::I => "i",
        }
    }

    /// Color identity of the shape
    pub fn color(&self) -> Color {
        match self {
            ShapeKind::Square => Color::Yellow,
            ShapeKind::T => Color::Purple,
            ShapeKind::Z => Color::Red,
            ShapeKind::S => Color::Green,
            ShapeKind::I => Color::Cyan,
        }
    }
}

/// Color tag attached to each shape variant.
///
/// Renderers decide what a color looks like; the engine only carries the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Yellow,
    Purple,
    Red,
    Green,
    Cyan,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Red => "red",
            Color::Green => "green",
            Color::Cyan => "cyan",
        }
    }
}

/// Commands a driver applies to a game session
///
/// Human input and the gravity timer both go through this type. Restarting is
/// not a command; drivers call the session's `reset` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, locking it if it cannot move
    SoftDrop,
    /// Drop piece to the lowest free row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise with a one-column wall kick
    Rotate,
    /// Periodic gravity step, same effect as `SoftDrop`
    Tick,
}

impl Command {
    /// Parse command from string
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_tetris_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("rotate"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "harddrop" => Some(Command::HardDrop),
            "rotate" => Some(Command::Rotate),
            "tick" => Some(Command::Tick),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::HardDrop => "hardDrop",
            Command::Rotate => "rotate",
            Command::Tick => "tick",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(ShapeKind)`: Filled cell, remembering which shape locked there
///
/// Used internally by the board as a flat array of cells.
pub type Cell = Option<ShapeKind>;
