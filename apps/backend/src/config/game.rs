//! Game server configuration loaded from environment variables.
//!
//! | Variable                   | Default     |
//! |----------------------------|-------------|
//! | `SCRABBLE_TURN_SECONDS`    | 300         |
//! | `SCRABBLE_BLOCK_PENALTY_MS`| 3000        |
//! | `SCRABBLE_TICK_MS`         | 1000        |
//! | `SCRABBLE_RNG_SEED`        | unset (OS)  |
//! | `SCRABBLE_DICTIONARY`      | unset       |

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::timer::DEFAULT_TURN_DURATION;
use crate::error::AppError;

pub const DEFAULT_BLOCK_PENALTY: Duration = Duration::from_secs(3);
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Timing rules applied to every turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnPolicy {
    /// Time a player has to act before the turn is forfeited.
    pub turn_duration: Duration,
    /// How long a player stays blocked after placing invalid words before the
    /// placement is taken back.
    pub block_penalty: Duration,
}

impl Default for TurnPolicy {
    fn default() -> Self {
        Self {
            turn_duration: DEFAULT_TURN_DURATION,
            block_penalty: DEFAULT_BLOCK_PENALTY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub turn_policy: TurnPolicy,
    /// Period of the turn clock.
    pub tick_interval: Duration,
    /// Base seed for room RNGs. `None` seeds from the OS.
    pub rng_seed: Option<u64>,
    /// Word list file. `None` means the caller supplies a lexicon.
    pub dictionary_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            turn_policy: TurnPolicy::default(),
            tick_interval: DEFAULT_TICK_INTERVAL,
            rng_seed: None,
            dictionary_path: None,
        }
    }
}

impl GameConfig {
    /// Load configuration, falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let turn_duration = optional_var::<u64>("SCRABBLE_TURN_SECONDS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.turn_policy.turn_duration);
        if turn_duration.is_zero() {
            return Err(AppError::config("SCRABBLE_TURN_SECONDS must be positive"));
        }

        let block_penalty = optional_var::<u64>("SCRABBLE_BLOCK_PENALTY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.turn_policy.block_penalty);

        let tick_interval = optional_var::<u64>("SCRABBLE_TICK_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick_interval);
        if tick_interval.is_zero() {
            return Err(AppError::config("SCRABBLE_TICK_MS must be positive"));
        }

        let rng_seed = optional_var::<u64>("SCRABBLE_RNG_SEED")?;
        let dictionary_path = env::var("SCRABBLE_DICTIONARY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            turn_policy: TurnPolicy {
                turn_duration,
                block_penalty,
            },
            tick_interval,
            rng_seed,
            dictionary_path,
        })
    }
}

/// Parse a variable if it is set and non-empty.
fn optional_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::config(format!("{name} must be a number, got '{raw}'"))),
        _ => Ok(None),
    }
}
