//! # Escrow Configuration
//!
//! Request limits. Defaults match the fixed account layout; the
//! environment can only tighten them.
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `CUBE_MAX_SPONSOR_NAME_LEN` | `max_sponsor_name_len` | 30 |
//! | `CUBE_MAX_SPONSOR_DESC_LEN` | `max_sponsor_desc_len` | 70 |
//! | `CUBE_MAX_WINNER_NAME_LEN` | `max_winner_name_len` | 30 |
//! | `CUBE_MAX_SOLUTION_MOVES` | `max_solution_moves` | 512 |

use super::layout::{SPONSOR_DESC_CAPACITY, SPONSOR_NAME_CAPACITY, WINNER_NAME_CAPACITY};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Default solution length limit.
pub const DEFAULT_MAX_SOLUTION_MOVES: usize = 512;

/// Configuration rejected by [`EscrowConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A length limit exceeds what the account layout can store.
    #[error("{field} = {value} exceeds layout capacity {capacity}")]
    ExceedsCapacity {
        /// Field name.
        field: &'static str,
        /// Configured value.
        value: usize,
        /// Layout capacity.
        capacity: usize,
    },

    /// A limit that must be positive is zero.
    #[error("{field} must be greater than zero")]
    Zero {
        /// Field name.
        field: &'static str,
    },
}

/// Escrow request limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowConfig {
    /// Maximum sponsor name length in bytes.
    pub max_sponsor_name_len: usize,
    /// Maximum sponsor description length in bytes.
    pub max_sponsor_desc_len: usize,
    /// Maximum winner name length in bytes.
    pub max_winner_name_len: usize,
    /// Maximum number of moves in a submitted solution or peek.
    pub max_solution_moves: usize,
}

impl Default for EscrowConfig {
    fn default() -> Self {
        Self {
            max_sponsor_name_len: SPONSOR_NAME_CAPACITY,
            max_sponsor_desc_len: SPONSOR_DESC_CAPACITY,
            max_winner_name_len: WINNER_NAME_CAPACITY,
            max_solution_moves: DEFAULT_MAX_SOLUTION_MOVES,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl EscrowConfig {
    /// Load from environment variables, falling back to defaults for
    /// absent or unparsable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_sponsor_name_len: env_or("CUBE_MAX_SPONSOR_NAME_LEN", defaults.max_sponsor_name_len),
            max_sponsor_desc_len: env_or("CUBE_MAX_SPONSOR_DESC_LEN", defaults.max_sponsor_desc_len),
            max_winner_name_len: env_or("CUBE_MAX_WINNER_NAME_LEN", defaults.max_winner_name_len),
            max_solution_moves: env_or("CUBE_MAX_SOLUTION_MOVES", defaults.max_solution_moves),
        }
    }

    /// Check the limits fit the account layout.
    ///
    /// Layout capacities are below the 32-byte seed limit, so any valid
    /// name also derives an address.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let capacities = [
            ("max_sponsor_name_len", self.max_sponsor_name_len, SPONSOR_NAME_CAPACITY),
            ("max_sponsor_desc_len", self.max_sponsor_desc_len, SPONSOR_DESC_CAPACITY),
            ("max_winner_name_len", self.max_winner_name_len, WINNER_NAME_CAPACITY),
        ];
        for (field, value, capacity) in capacities {
            if value > capacity {
                return Err(ConfigError::ExceedsCapacity {
                    field,
                    value,
                    capacity,
                });
            }
        }
        if self.max_solution_moves == 0 {
            return Err(ConfigError::Zero {
                field: "max_solution_moves",
            });
        }
        Ok(())
    }
}
