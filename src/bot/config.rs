#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default fixed search depth in plies.
pub const DEFAULT_DEPTH: u32 = 5;

/// Default exclusive upper bound of the random priority given to quiet moves.
pub const DEFAULT_QUIET_JITTER: i32 = 5;

/// Tunable settings of the bot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BotConfig {
    /// Plies searched from the root
    pub depth: u32,
    /// Quiet moves draw their ordering priority from `0..quiet_jitter`.
    /// Zero keeps them in generation order.
    pub quiet_jitter: i32,
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            depth: DEFAULT_DEPTH,
            quiet_jitter: DEFAULT_QUIET_JITTER,
        }
    }
}

impl BotConfig {
    /// Settings with a deterministic move order, for reproducible searches.
    #[must_use]
    pub fn deterministic(depth: u32) -> Self {
        BotConfig {
            depth,
            quiet_jitter: 0,
        }
    }
}
