/// Number of characters of a player name shown on the scoreboard.
pub const SHORT_NAME_LEN: usize = 6;

/// Kill/death ratio as displayed on the scoreboard.
///
/// Players without deaths (or without kills) show their kill count instead
/// of a ratio, so a 10/0 player displays `10` and never an infinite value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KillDeathRatio {
    Ratio(f64),
    Kills(i32),
}

impl KillDeathRatio {
    pub fn new(kills: i32, deaths: i32) -> Self {
        if kills != 0 && deaths > 0 {
            let ratio = kills as f64 / deaths as f64;
            Self::Ratio((ratio * 100.0).round() / 100.0)
        } else {
            Self::Kills(kills)
        }
    }
}

impl core::fmt::Display for KillDeathRatio {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Ratio(r) => write!(f, "{:.2}", r),
            Self::Kills(k) => write!(f, "{}", k),
        }
    }
}

/// Truncates a display name to its first [`SHORT_NAME_LEN`] characters.
pub fn short_name(name: &str) -> String {
    name.chars().take(SHORT_NAME_LEN).collect()
}
