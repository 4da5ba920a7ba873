//! Read-only game snapshots handed to renderers.

use crate::game_state::{ActiveCells, PieceCells};
use crate::Board;

/// Owned, read-only copy of everything a renderer needs from a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub active: Option<ActiveCells>,
    /// Row a hard drop would lock the active piece at
    pub drop_row: Option<i32>,
    /// Cells the active piece would occupy after a hard drop
    pub landing: PieceCells,
    pub score: u32,
    pub game_over: bool,
    pub pieces: u32,
    pub rows: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && self.active.is_some()
    }
}
