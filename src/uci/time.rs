//! Parsing of the `go` command.

use std::time::Duration;

use log::warn;

use crate::board::Color;
use crate::bot::TimeBudget;

/// Limits requested by one `go` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GoParams {
    /// Depth override for this search only
    pub depth: Option<u32>,
    pub budget: TimeBudget,
}

fn parse_value<T: std::str::FromStr>(parts: &[&str], i: usize) -> Option<T> {
    let raw = parts.get(i + 1)?;
    let parsed = raw.parse().ok();
    if parsed.is_none() {
        warn!("ignoring invalid value '{raw}' for go {}", parts[i]);
    }
    parsed
}

/// Parse `go [depth N] [wtime T] [btime T] [winc T] [binc T] [movetime T]`.
///
/// Only the clock and increment of `side` are kept. Unknown tokens are skipped.
#[must_use]
pub fn parse_go(parts: &[&str], side: Color) -> GoParams {
    let mut params = GoParams::default();
    let mut i = 1;
    while i < parts.len() {
        let ours = match parts[i] {
            "wtime" | "winc" => side == Color::White,
            "btime" | "binc" => side == Color::Black,
            _ => true,
        };
        match parts[i] {
            "depth" => {
                params.depth = parse_value(parts, i);
                i += 2;
            }
            "wtime" | "btime" => {
                if ours {
                    params.budget.remaining = parse_value(parts, i).map(Duration::from_millis);
                }
                i += 2;
            }
            "winc" | "binc" => {
                if ours {
                    params.budget.increment = parse_value(parts, i)
                        .map(Duration::from_millis)
                        .unwrap_or(Duration::ZERO);
                }
                i += 2;
            }
            "movetime" => {
                params.budget.move_time = parse_value(parts, i).map(Duration::from_millis);
                i += 2;
            }
            _ => i += 1,
        }
    }
    params
}
