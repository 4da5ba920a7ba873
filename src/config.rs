//! Driver configuration read from the environment.

use std::env;
use std::str::FromStr;

use crate::core::GameConfig;
use crate::types::DEFAULT_TICK_MS;

/// Everything the terminal driver needs to start a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub game: GameConfig,
    /// Interval between gravity ticks
    pub tick_ms: u64,
    pub seed: u32,
    /// Log file; logging is disabled when unset
    pub log_path: Option<String>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            tick_ms: DEFAULT_TICK_MS,
            seed: 1,
            log_path: None,
        }
    }
}

impl DriverConfig {
    /// Create from `SIMPLE_TETRIS_*` environment variables
    ///
    /// Missing or unparsable values fall back to the defaults. A missing seed
    /// is derived from the clock so each run plays differently.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`DriverConfig::from_env`] with a custom variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let lookup = &lookup;

        let game = GameConfig {
            height: parse(lookup, "SIMPLE_TETRIS_HEIGHT").unwrap_or(defaults.game.height),
            width: parse(lookup, "SIMPLE_TETRIS_WIDTH").unwrap_or(defaults.game.width),
            spawn_column: parse(lookup, "SIMPLE_TETRIS_SPAWN_COLUMN")
                .unwrap_or(defaults.game.spawn_column),
            row_bonus: parse(lookup, "SIMPLE_TETRIS_ROW_BONUS").unwrap_or(defaults.game.row_bonus),
        };

        let tick_ms = parse(lookup, "SIMPLE_TETRIS_TICK_MS")
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(defaults.tick_ms);

        let seed = parse(lookup, "SIMPLE_TETRIS_SEED").unwrap_or_else(clock_seed);

        let log_path = lookup("SIMPLE_TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            game,
            tick_ms,
            seed,
            log_path,
        }
    }
}

fn parse<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

fn clock_seed() -> u32 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = DriverConfig::from_lookup(lookup(&[("SIMPLE_TETRIS_SEED", "7")]));
        assert_eq!(config.game, GameConfig::default());
        assert_eq!(config.tick_ms, 500);
        assert_eq!(config.seed, 7);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = DriverConfig::from_lookup(lookup(&[
            ("SIMPLE_TETRIS_HEIGHT", "30"),
            ("SIMPLE_TETRIS_WIDTH", " 12 "),
            ("SIMPLE_TETRIS_SPAWN_COLUMN", "5"),
            ("SIMPLE_TETRIS_ROW_BONUS", "100"),
            ("SIMPLE_TETRIS_TICK_MS", "250"),
            ("SIMPLE_TETRIS_LOG_PATH", "/tmp/tetris.log"),
        ]));
        assert_eq!(config.game.height, 30);
        assert_eq!(config.game.width, 12);
        assert_eq!(config.game.spawn_column, 5);
        assert_eq!(config.game.row_bonus, 100);
        assert_eq!(config.tick_ms, 250);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/tetris.log"));
    }

    #[test]
    fn garbage_falls_back() {
        let config = DriverConfig::from_lookup(lookup(&[
            ("SIMPLE_TETRIS_HEIGHT", "tall"),
            ("SIMPLE_TETRIS_TICK_MS", "0"),
            ("SIMPLE_TETRIS_LOG_PATH", "  "),
        ]));
        assert_eq!(config.game.height, 20);
        assert_eq!(config.tick_ms, 500);
        assert_eq!(config.log_path, None);
    }
}
