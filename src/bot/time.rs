//! Clock information handed to the bot with each move request.
//!
//! The search runs to its fixed depth; the budget is recorded and logged
//! but never used to cut a search short.

use std::fmt;
use std::time::Duration;

/// Time available to the side to move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeBudget {
    /// Time left on the mover's clock, if the GUI sent one
    pub remaining: Option<Duration>,
    /// Increment added after each move
    pub increment: Duration,
    /// Fixed time for this move, if requested
    pub move_time: Option<Duration>,
}

impl TimeBudget {
    /// No clock at all.
    #[must_use]
    pub fn unlimited() -> Self {
        TimeBudget::default()
    }

    #[must_use]
    pub fn from_clock(remaining: Duration, increment: Duration) -> Self {
        TimeBudget {
            remaining: Some(remaining),
            increment,
            move_time: None,
        }
    }

    #[must_use]
    pub fn fixed(move_time: Duration) -> Self {
        TimeBudget {
            remaining: None,
            increment: Duration::ZERO,
            move_time: Some(move_time),
        }
    }

    #[must_use]
    pub fn is_unlimited(&self) -> bool {
        self.remaining.is_none() && self.move_time.is_none()
    }
}

impl fmt::Display for TimeBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(move_time) = self.move_time {
            return write!(f, "movetime {}ms", move_time.as_millis());
        }
        match self.remaining {
            Some(remaining) => write!(
                f,
                "{}ms + {}ms",
                remaining.as_millis(),
                self.increment.as_millis()
            ),
            None => write!(f, "unlimited"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms() {
        assert_eq!(TimeBudget::unlimited().to_string(), "unlimited");
        assert_eq!(
            TimeBudget::from_clock(Duration::from_secs(60), Duration::from_millis(500)).to_string(),
            "60000ms + 500ms"
        );
        assert_eq!(
            TimeBudget::fixed(Duration::from_millis(250)).to_string(),
            "movetime 250ms"
        );
    }

    #[test]
    fn unlimited_only_without_clock() {
        assert!(TimeBudget::unlimited().is_unlimited());
        assert!(!TimeBudget::fixed(Duration::from_millis(1)).is_unlimited());
    }
}
