//! Terminal Tetris runner (default binary).
//!
//! Reads its configuration from `SIMPLE_TETRIS_*` environment variables, then
//! drives one game session from keyboard input and a fixed gravity tick.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use simple_tetris::core::GameSession;
use simple_tetris::input::{handle_key_event, is_restart, should_quit};
use simple_tetris::term::{GameView, TerminalRenderer, Viewport};
use simple_tetris::types::Command;
use simple_tetris::DriverConfig;

fn main() -> Result<()> {
    let config = DriverConfig::from_env();
    init_logging(&config)?;

    let session = GameSession::with_seed(config.game, config.seed)
        .context("invalid game configuration")?;
    info!(
        "starting {}x{} game, seed {}, tick {}ms",
        config.game.height, config.game.width, config.seed, config.tick_ms
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session, Duration::from_millis(config.tick_ms));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// The terminal is in raw mode while playing, so logs only go to a file.
fn init_logging(config: &DriverConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("cannot create log file {path}"))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut session: GameSession, tick: Duration) -> Result<()> {
    let view = GameView::default();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&session.snapshot(), Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!("quit with score {}", session.score());
                        return Ok(());
                    }
                    if is_restart(key) {
                        session.reset();
                        last_tick = Instant::now();
                        continue;
                    }
                    if let Some(command) = handle_key_event(key) {
                        session.apply_command(command);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            session.apply_command(Command::Tick);
        }

        if let Some(event) = session.take_last_event() {
            if event.game_over {
                info!(
                    "game over: score {}, {} rows, {} pieces",
                    session.score(),
                    session.rows(),
                    session.pieces()
                );
            }
        }
    }
}
