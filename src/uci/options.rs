use crate::bot::BotConfig;

use super::UciError;

/// Largest depth accepted through `setoption`
pub const MAX_DEPTH: u32 = 8;
/// Largest quiet-move jitter accepted through `setoption`
pub const MAX_QUIET_JITTER: i32 = 100;

/// Bring a requested search depth into `1..=MAX_DEPTH`.
#[must_use]
pub fn clamp_depth(depth: u32) -> u32 {
    depth.clamp(1, MAX_DEPTH)
}

pub fn print_options(config: &BotConfig) {
    println!("id name minimax_bot");
    println!("id author minimax_bot developers");
    println!(
        "option name Depth type spin default {} min 1 max {}",
        config.depth, MAX_DEPTH
    );
    println!(
        "option name QuietJitter type spin default {} min 0 max {}",
        config.quiet_jitter, MAX_QUIET_JITTER
    );
    println!("uciok");
}

/// Split `setoption name <name...> [value <value...>]` into name and value.
fn split_setoption(parts: &[&str]) -> Result<(String, Option<String>), UciError> {
    let name_at = parts
        .iter()
        .position(|p| *p == "name")
        .ok_or(UciError::MissingParts)?;
    let value_at = parts.iter().position(|p| *p == "value");

    let name_end = value_at.unwrap_or(parts.len());
    if name_end <= name_at + 1 {
        return Err(UciError::MissingParts);
    }
    let name = parts[name_at + 1..name_end].join(" ");
    let value = value_at.map(|v| parts[v + 1..].join(" "));
    Ok((name, value))
}

/// Apply a `setoption` command to the bot settings.
pub fn apply_setoption(config: &mut BotConfig, parts: &[&str]) -> Result<(), UciError> {
    let (name, value) = split_setoption(parts)?;
    let invalid = || UciError::InvalidOptionValue {
        name: name.clone(),
        value: value.clone().unwrap_or_default(),
    };

    match name.trim().to_ascii_lowercase().as_str() {
        "depth" => {
            let depth = value
                .as_deref()
                .and_then(|v| v.parse::<u32>().ok())
                .ok_or_else(invalid)?;
            config.depth = clamp_depth(depth);
        }
        "quietjitter" | "quiet jitter" => {
            let jitter = value
                .as_deref()
                .and_then(|v| v.parse::<i32>().ok())
                .ok_or_else(invalid)?;
            config.quiet_jitter = jitter.clamp(0, MAX_QUIET_JITTER);
        }
        _ => return Err(UciError::UnknownOption(name)),
    }
    Ok(())
}
