/// Icon shown on a match card in the match listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchIcon {
    CounterTerroristWin,
    Tie,
    TerroristWin,
}

/// Rounds needed to win a regulation match.
const WINNING_SCORE: i32 = 16;

impl MatchIcon {
    /// Picks the icon for a final score of `team_2:team_3`.
    ///
    /// Regulation results (one side past 15, or 15:15) are decided first.
    /// Anything else, like a match that ended early at 15:10, falls back to
    /// comparing the two scores.
    pub fn for_score(team_2: i32, team_3: i32) -> Self {
        if team_2 >= WINNING_SCORE {
            Self::CounterTerroristWin
        } else if team_2 == WINNING_SCORE - 1 && team_3 == WINNING_SCORE - 1 {
            Self::Tie
        } else if team_3 >= WINNING_SCORE {
            Self::TerroristWin
        } else {
            match team_2.cmp(&team_3) {
                core::cmp::Ordering::Greater => Self::CounterTerroristWin,
                core::cmp::Ordering::Less => Self::TerroristWin,
                core::cmp::Ordering::Equal => Self::Tie,
            }
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::CounterTerroristWin => "ct_icon.png",
            Self::Tie => "tie_icon.png",
            Self::TerroristWin => "t_icon.png",
        }
    }
}
