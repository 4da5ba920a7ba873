//! Property tests for session invariants over generated command streams.
//!
//! Invariants covered:
//! - The active piece stays inside the walls and above the floor, never
//!   overlapping a locked cell.
//! - No full row survives a command.
//! - Score only grows, in whole row bonuses, and tracks the cleared row count.
//! - Once the game is over, no command changes anything.
//! - Four clockwise rotations give back the original shape.

use proptest::prelude::*;
use simple_tetris::core::pieces::get_shape;
use simple_tetris::core::{GameConfig, GameSession};
use simple_tetris::types::{Command, ShapeKind};

const COMMANDS: [Command; 6] = [
    Command::MoveLeft,
    Command::MoveRight,
    Command::SoftDrop,
    Command::HardDrop,
    Command::Rotate,
    Command::Tick,
];

fn command() -> impl Strategy<Value = Command> {
    prop::sample::select(COMMANDS.to_vec())
}

fn assert_active_in_bounds(session: &GameSession) {
    let board = session.board();
    if let Some(active) = session.active_cells() {
        assert_eq!(active.cells.len(), 4);
        for &(r, c) in active.cells.iter() {
            assert!(c >= 0 && (c as usize) < board.width(), "column {} off board", c);
            assert!(r >= 0 && (r as usize) < board.height(), "row {} off board", r);
            assert_eq!(board.is_occupied(r, c), Ok(false), "overlap at ({}, {})", r, c);
        }
    }
}

proptest! {
    #[test]
    fn generated_commands_respect_invariants(
        seed in any::<u32>(),
        commands in prop::collection::vec(command(), 1..300),
    ) {
        let config = GameConfig::default();
        let mut session = GameSession::with_seed(config, seed).unwrap();
        let mut last_score = 0;

        for command in commands {
            let was_over = session.game_over();
            let before = session.snapshot();

            let changed = session.apply_command(command);

            if was_over {
                prop_assert!(!changed);
                prop_assert_eq!(session.snapshot(), before);
                continue;
            }

            assert_active_in_bounds(&session);
            prop_assert!((0..session.board().height()).all(|r| !session.board().is_row_full(r)));

            prop_assert!(session.score() >= last_score);
            prop_assert_eq!(session.score() % config.row_bonus, 0);
            prop_assert_eq!(session.score(), session.rows() * config.row_bonus);
            last_score = session.score();

            prop_assert_eq!(session.game_over(), session.active().is_none());
        }
    }

    #[test]
    fn small_boards_stay_consistent(
        seed in any::<u32>(),
        height in 4usize..12,
        width in 4usize..8,
        commands in prop::collection::vec(command(), 1..200),
    ) {
        let config = GameConfig {
            spawn_column: (width / 2) as i32 - 1,
            ..GameConfig::with_size(height, width)
        };
        let mut session = GameSession::with_seed(config, seed).unwrap();

        for command in commands {
            session.apply_command(command);
            assert_active_in_bounds(&session);
        }
        prop_assert!(session.board().filled_count() <= height * width);
    }

    #[test]
    fn four_rotations_are_identity(idx in 0usize..ShapeKind::COUNT, turns in 0usize..8) {
        let shape = get_shape(ShapeKind::ALL[idx]);
        let mut rotated = shape;
        for _ in 0..turns * 4 {
            rotated = rotated.rotate();
        }
        prop_assert_eq!(rotated, shape);
    }
}
