pub mod icon;
pub use icon::MatchIcon;

pub mod scoreboard;
pub use scoreboard::Scoreboard;

pub mod stats;
pub use stats::{short_name, KillDeathRatio};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub match_id: i32,
    pub map: String,
    pub team_2: i32,
    pub team_3: i32,
    pub timestamp: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub match_id: i32,
    pub steamid64: String,
    pub name: String,
    pub team: i32,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
}

/// The two playing sides stored in the `team` column.
///
/// Team `2` is shown as the counter-terrorist side and team `3` as the
/// terrorist side, matching the score columns of the match summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    CounterTerrorist,
    Terrorist,
}

impl Side {
    pub fn from_team(team: i32) -> Option<Self> {
        match team {
            2 => Some(Self::CounterTerrorist),
            3 => Some(Self::Terrorist),
            _ => None,
        }
    }

    pub fn team(&self) -> i32 {
        match self {
            Self::CounterTerrorist => 2,
            Self::Terrorist => 3,
        }
    }
}
