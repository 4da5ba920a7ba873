//! Session configuration and its validation.

use thiserror::Error;

use crate::types::{DEFAULT_HEIGHT, DEFAULT_ROW_BONUS, DEFAULT_SPAWN_COLUMN, DEFAULT_WIDTH};

/// Rejected session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board height must be positive")]
    ZeroHeight,
    #[error("board width must be positive")]
    ZeroWidth,
    #[error("spawn column {column} is outside a board {width} columns wide")]
    SpawnColumnOutOfRange { column: i32, width: usize },
}

/// Parameters fixed for the lifetime of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    /// Column of a freshly spawned shape's top-left cell
    pub spawn_column: i32,
    /// Points per cleared row
    pub row_bonus: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            spawn_column: DEFAULT_SPAWN_COLUMN,
            row_bonus: DEFAULT_ROW_BONUS,
        }
    }
}

impl GameConfig {
    /// Default configuration with custom board dimensions
    ///
    /// The spawn column stays at its default of 4, so boards narrower than
    /// five columns also need a custom `spawn_column` to validate.
    pub fn with_size(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.spawn_column < 0 || self.spawn_column as usize >= self.width {
            return Err(ConfigError::SpawnColumnOutOfRange {
                column: self.spawn_column,
                width: self.width,
            });
        }
        Ok(())
    }
}
