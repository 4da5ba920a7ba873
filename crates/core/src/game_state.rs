//! Game state module - manages a complete game session
//!
//! This module ties together the board, the shape catalog and the shape source.
//! It handles piece movement, rotation, locking, row clears, scoring and the
//! game-over lifecycle. There is no clock here: the driver applies
//! [`Command::Tick`] at whatever cadence it likes.

use arrayvec::ArrayVec;
use log::{debug, info, trace};

use crate::config::{ConfigError, GameConfig};
use crate::pieces::{get_shape, try_rotate, Shape, MAX_SHAPE_SIZE};
use crate::rng::{ShapeSource, UniformSource};
use crate::snapshot::GameSnapshot;
use crate::types::{Color, Command, ShapeKind};
use crate::Board;

/// Absolute board cells of a piece, as (row, col)
pub type PieceCells = ArrayVec<(i32, i32), { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: ShapeKind,
    /// Current matrix, possibly rotated away from the template
    pub shape: Shape,
    /// Board row of the matrix's top-left cell
    pub row: i32,
    /// Board column of the matrix's top-left cell
    pub col: i32,
}

impl ActivePiece {
    /// Create a new piece from its template at row 0
    pub fn new(kind: ShapeKind, col: i32) -> Self {
        Self {
            kind,
            shape: get_shape(kind),
            row: 0,
            col,
        }
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Occupied cells in board coordinates
    pub fn cells(&self) -> PieceCells {
        self.shape
            .cells()
            .map(|(dr, dc)| (self.row + dr, self.col + dc))
            .collect()
    }

    /// Check if the piece overlaps a wall, the floor or a filled cell
    pub fn collides(&self, board: &Board) -> bool {
        board.collides(&self.shape, self.row, self.col)
    }
}

/// Read-only view of the active piece for callers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveCells {
    pub kind: ShapeKind,
    pub color: Color,
    pub cells: PieceCells,
}

impl From<ActivePiece> for ActiveCells {
    fn from(piece: ActivePiece) -> Self {
        Self {
            kind: piece.kind,
            color: piece.color(),
            cells: piece.cells(),
        }
    }
}

/// Outcome of the most recent lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub rows_cleared: u32,
    pub score_gained: u32,
    /// The piece spawned after this lock had no room
    pub game_over: bool,
}

/// Complete game session
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    active: Option<ActivePiece>,
    source: Box<dyn ShapeSource>,
    score: u32,
    game_over: bool,
    /// Pieces spawned since the last reset
    pieces: u32,
    /// Rows cleared since the last reset
    rows: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameSession {
    /// Create a session and spawn its first piece
    pub fn new(
        config: GameConfig,
        source: impl ShapeSource + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut session = Self {
            config,
            board: Board::new(config.height, config.width),
            active: None,
            source: Box::new(source),
            score: 0,
            game_over: false,
            pieces: 0,
            rows: 0,
            last_event: None,
        };
        session.spawn_next();
        Ok(session)
    }

    /// Create a session drawing shapes uniformly with the given seed
    pub fn with_seed(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        Self::new(config, UniformSource::new(seed))
    }

    /// Start over: empty board, zero score, fresh piece
    ///
    /// The shape source keeps its position, so a restarted game continues the
    /// same random stream.
    pub fn reset(&mut self) {
        info!(
            "reset after {} pieces, {} rows, score {}",
            self.pieces, self.rows, self.score
        );
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.game_over = false;
        self.pieces = 0;
        self.rows = 0;
        self.last_event = None;
        self.spawn_next();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    /// Cells and color of the active piece, `None` once the game is over
    pub fn active_cells(&self) -> Option<ActiveCells> {
        self.active.map(ActiveCells::from)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let drop_row = self.drop_row();
        let landing = match (self.active, drop_row) {
            (Some(active), Some(row)) => ActivePiece { row, ..active }.cells(),
            _ => PieceCells::new(),
        };

        GameSnapshot {
            board: self.board.clone(),
            active: self.active_cells(),
            drop_row,
            landing,
            score: self.score,
            game_over: self.game_over,
            pieces: self.pieces,
            rows: self.rows,
        }
    }

    /// Spawn a new piece at the spawn origin
    ///
    /// Returns false and ends the game when the origin is blocked; the board is
    /// left untouched in that case. A finished game never spawns again.
    fn spawn_next(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let kind = self.source.next_kind();
        let piece = ActivePiece::new(kind, self.config.spawn_column);

        if piece.collides(&self.board) {
            info!(
                "game over: {:?} blocked at spawn, final score {}",
                kind, self.score
            );
            self.active = None;
            self.game_over = true;
            return false;
        }

        self.pieces = self.pieces.saturating_add(1);
        debug!("spawned {:?} (piece {})", kind, self.pieces);
        self.active = Some(piece);
        true
    }

    /// Apply a command, returning whether the session changed
    ///
    /// Every command is a no-op once the game is over.
    pub fn apply_command(&mut self, command: Command) -> bool {
        if self.game_over {
            return false;
        }

        match command {
            Command::MoveLeft => self.try_move(0, -1),
            Command::MoveRight => self.try_move(0, 1),
            Command::SoftDrop | Command::Tick => self.soft_drop(),
            Command::HardDrop => self.hard_drop(),
            Command::Rotate => self.try_rotate(),
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Row the active piece would come to rest on if hard-dropped
    pub fn drop_row(&self) -> Option<i32> {
        let active = self.active?;

        let mut row = active.row;
        while !self.board.collides(&active.shape, row + 1, active.col) {
            row += 1;
        }
        Some(row)
    }

    /// Try to move the active piece
    fn try_move(&mut self, drow: i32, dcol: i32) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let row = active.row + drow;
        let col = active.col + dcol;
        if self.board.collides(&active.shape, row, col) {
            return false;
        }

        self.active = Some(ActivePiece { row, col, ..active });
        true
    }

    /// Move down one row, or lock in place when blocked
    fn soft_drop(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        if !self.try_move(1, 0) {
            self.lock_piece();
        }
        true
    }

    /// Drop to the lowest free row and lock
    fn hard_drop(&mut self) -> bool {
        let (Some(active), Some(row)) = (self.active, self.drop_row()) else {
            return false;
        };

        self.active = Some(ActivePiece { row, ..active });
        self.lock_piece();
        true
    }

    /// Rotate clockwise, kicking one column left or right if needed
    fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let board = &self.board;
        match try_rotate(&active.shape, active.row, active.col, |shape, row, col| {
            board.collides(shape, row, col)
        }) {
            Some((shape, col)) => {
                self.active = Some(ActivePiece {
                    shape,
                    col,
                    ..active
                });
                true
            }
            None => {
                trace!(
                    "rotation of {:?} at ({}, {}) rejected",
                    active.kind,
                    active.row,
                    active.col
                );
                false
            }
        }
    }

    /// Lock the active piece onto the board, clear rows, score and spawn
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board
            .lock_piece(&active.shape, active.row, active.col, active.kind);

        let cleared = self.board.clear_full_rows() as u32;
        let gained = cleared.saturating_mul(self.config.row_bonus);
        self.score = self.score.saturating_add(gained);
        self.rows = self.rows.saturating_add(cleared);

        debug!(
            "locked {:?} at ({}, {}), cleared {} rows",
            active.kind, active.row, active.col, cleared
        );

        let spawned = self.spawn_next();
        self.last_event = Some(LockEvent {
            rows_cleared: cleared,
            score_gained: gained,
            game_over: !spawned,
        });
    }
}
