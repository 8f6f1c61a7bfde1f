//! Runtime configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `SNAKE_TICK_MS` | 1000 | Sleep between cycles (minimum 1) |
//! | `SNAKE_LOG_PATH` | unset | Write logs to this file |
//! | `SNAKE_LOG` | `info` | `tracing` filter directive |
//!
//! The grid size is not configurable.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: u16,
    pub height: u16,
    pub tick_ms: u32,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            tick_ms: TICK_MS,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (used by `from_env` and tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let tick_ms = lookup("SNAKE_TICK_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(|ms| ms.max(1))
            .unwrap_or(defaults.tick_ms);

        let log_path = lookup("SNAKE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let log_filter = lookup("SNAKE_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            width: defaults.width,
            height: defaults.height,
            tick_ms,
            log_path,
            log_filter,
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_the_fixed_grid() {
        let cfg = from_pairs(&[]);
        assert_eq!(cfg, Config::default());
        assert_eq!((cfg.width, cfg.height), (150, 40));
        assert_eq!(cfg.tick(), Duration::from_millis(1000));
    }

    #[test]
    fn tick_override_is_clamped() {
        assert_eq!(from_pairs(&[("SNAKE_TICK_MS", "250")]).tick_ms, 250);
        assert_eq!(from_pairs(&[("SNAKE_TICK_MS", "0")]).tick_ms, 1);
        assert_eq!(from_pairs(&[("SNAKE_TICK_MS", "fast")]).tick_ms, TICK_MS);
    }

    #[test]
    fn blank_log_settings_fall_back() {
        let cfg = from_pairs(&[("SNAKE_LOG_PATH", "  "), ("SNAKE_LOG", "")]);
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.log_filter, "info");

        let cfg = from_pairs(&[("SNAKE_LOG_PATH", "/tmp/snake.log"), ("SNAKE_LOG", "debug")]);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/snake.log")));
        assert_eq!(cfg.log_filter, "debug");
    }
}
