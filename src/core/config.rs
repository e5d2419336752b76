//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.drift48/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::board::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use crate::core::session::DEFAULT_TARGET;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Drift48Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GameConfig {
    pub board_size: Option<usize>,
    pub win_target: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InputConfig {
    pub swipe_enabled: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SWIPE_ENABLED: bool = true;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub board_size: usize,
    pub win_target: u32,
    pub swipe_enabled: bool,
    /// Spawner seed from the CLI; `None` means seed from entropy.
    pub seed: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.drift48/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".drift48").join("config.toml"))
}

/// Load config from `~/.drift48/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `Drift48Config::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<Drift48Config, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(Drift48Config::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(Drift48Config::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: Drift48Config = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# drift48 Configuration
# All settings are optional - defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [game]
# board_size = 4          # Board edge length, 2-8
# win_target = 2048       # Tile value that counts as a win

# [input]
# swipe_enabled = true    # Mouse drag acts as a swipe; a short drag is a tap
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_size` and `cli_seed` are from CLI flags (None = not specified). A
/// board size outside 2-8, from any source, falls back to the default with a
/// logged warning; the runtime resize control is the strict boundary.
pub fn resolve(config: &Drift48Config, cli_size: Option<usize>, cli_seed: Option<u64>) -> ResolvedConfig {
    // Board size: CLI → env → config → default
    let requested = cli_size
        .or_else(|| {
            std::env::var("DRIFT48_BOARD_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
        })
        .or(config.game.board_size);

    let board_size = match requested {
        Some(n) if (MIN_SIZE..=MAX_SIZE).contains(&n) => n,
        Some(n) => {
            warn!(
                "Requested board size {} is outside {}-{}, using {}",
                n, MIN_SIZE, MAX_SIZE, DEFAULT_SIZE
            );
            DEFAULT_SIZE
        }
        None => DEFAULT_SIZE,
    };

    // Swipe: env → config → default
    let swipe_enabled = std::env::var("DRIFT48_SWIPE")
        .ok()
        .and_then(|s| s.parse().ok())
        .or(config.input.swipe_enabled)
        .unwrap_or(DEFAULT_SWIPE_ENABLED);

    ResolvedConfig {
        board_size,
        win_target: config.game.win_target.unwrap_or(DEFAULT_TARGET),
        swipe_enabled,
        seed: cli_seed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = Drift48Config::default();
        assert!(config.game.board_size.is_none());
        assert!(config.game.win_target.is_none());
        assert!(config.input.swipe_enabled.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = Drift48Config::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.board_size, DEFAULT_SIZE);
        assert_eq!(resolved.win_target, DEFAULT_TARGET);
        assert_eq!(resolved.swipe_enabled, DEFAULT_SWIPE_ENABLED);
        assert_eq!(resolved.seed, None);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = Drift48Config {
            game: GameConfig {
                board_size: Some(6),
                win_target: Some(512),
            },
            input: InputConfig {
                swipe_enabled: Some(false),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.board_size, 6);
        assert_eq!(resolved.win_target, 512);
        assert!(!resolved.swipe_enabled);
    }

    #[test]
    fn test_resolve_cli_size_wins() {
        let config = Drift48Config {
            game: GameConfig {
                board_size: Some(6),
                win_target: None,
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(3), Some(42));
        assert_eq!(resolved.board_size, 3);
        assert_eq!(resolved.seed, Some(42));
    }

    #[test]
    fn test_resolve_out_of_range_size_falls_back() {
        let config = Drift48Config::default();
        for bad in [0, 1, 9, 100] {
            let resolved = resolve(&config, Some(bad), None);
            assert_eq!(resolved.board_size, DEFAULT_SIZE);
        }
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[game]
board_size = 5
win_target = 1024

[input]
swipe_enabled = false
"#;
        let config: Drift48Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.board_size, Some(5));
        assert_eq!(config.game.win_target, Some(1024));
        assert_eq!(config.input.swipe_enabled, Some(false));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing - everything else stays default
        let toml_str = r#"
[game]
board_size = 8
"#;
        let config: Drift48Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.board_size, Some(8));
        assert!(config.game.win_target.is_none());
        assert!(config.input.swipe_enabled.is_none());
    }
}
