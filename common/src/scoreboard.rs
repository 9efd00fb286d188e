use crate::{MatchSummary, PlayerRecord, Side};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub summary: MatchSummary,
    pub counter_terrorists: Vec<PlayerRecord>,
    pub terrorists: Vec<PlayerRecord>,
}

impl Scoreboard {
    /// Builds the scoreboard from the joined rows of a single match.
    ///
    /// The header comes from the first row. Players keep the order of the
    /// rows, players on neither side are dropped. Returns `None` if there
    /// are no rows at all.
    pub fn from_rows<I>(rows: I) -> Option<Self>
    where
        I: IntoIterator<Item = (MatchSummary, PlayerRecord)>,
    {
        let mut rows = rows.into_iter();
        let (summary, first) = rows.next()?;

        let mut counter_terrorists = Vec::new();
        let mut terrorists = Vec::new();
        for player in core::iter::once(first).chain(rows.map(|(_, p)| p)) {
            match Side::from_team(player.team) {
                Some(Side::CounterTerrorist) => counter_terrorists.push(player),
                Some(Side::Terrorist) => terrorists.push(player),
                None => continue,
            }
        }

        Some(Self {
            summary,
            counter_terrorists,
            terrorists,
        })
    }

    pub fn side(&self, side: Side) -> &[PlayerRecord] {
        match side {
            Side::CounterTerrorist => &self.counter_terrorists,
            Side::Terrorist => &self.terrorists,
        }
    }

    /// SteamIDs of every listed player, without duplicates, in roster order.
    pub fn steam_ids(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.counter_terrorists
            .iter()
            .chain(self.terrorists.iter())
            .filter(|p| seen.insert(p.steamid64.as_str()))
            .map(|p| p.steamid64.clone())
            .collect()
    }
}
