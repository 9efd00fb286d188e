use super::{MatchStore, SearchFilter};
use common::{MatchSummary, PlayerRecord};

/// Store keeping both tables in memory.
///
/// Answers the same queries as [`super::DieselStore`] without a database.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    matches: Vec<MatchSummary>,
    players: Vec<PlayerRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_match(mut self, summary: MatchSummary) -> Self {
        self.matches.push(summary);
        self
    }

    pub fn with_player(mut self, player: PlayerRecord) -> Self {
        self.players.push(player);
        self
    }

    fn newest_first(&self) -> Vec<&MatchSummary> {
        let mut matches: Vec<_> = self.matches.iter().collect();
        matches.sort_by(|m1, m2| m2.match_id.cmp(&m1.match_id));
        matches
    }
}

#[async_trait::async_trait]
impl MatchStore for MemoryStore {
    async fn latest_matches(&self, limit: i64) -> Result<Vec<MatchSummary>, crate::Error> {
        let limit = usize::try_from(limit).unwrap_or(0);

        Ok(self
            .newest_first()
            .into_iter()
            .take(limit)
            .cloned()
            .collect())
    }

    async fn search_matches(
        &self,
        filter: &SearchFilter,
    ) -> Result<Vec<MatchSummary>, crate::Error> {
        Ok(self
            .newest_first()
            .into_iter()
            .filter(|summary| {
                self.players
                    .iter()
                    .filter(|p| p.match_id == summary.match_id)
                    .any(|p| filter.matches(p))
            })
            .cloned()
            .collect())
    }

    async fn scoreboard_rows(
        &self,
        match_id: i32,
    ) -> Result<Vec<(MatchSummary, PlayerRecord)>, crate::Error> {
        let summary = match self.matches.iter().find(|m| m.match_id == match_id) {
            Some(s) => s,
            None => return Ok(Vec::new()),
        };

        let mut players: Vec<_> = self
            .players
            .iter()
            .filter(|p| p.match_id == match_id)
            .cloned()
            .collect();
        players.sort_by(|p1, p2| p2.kills.cmp(&p1.kills));

        Ok(players
            .into_iter()
            .map(|p| (summary.clone(), p))
            .collect())
    }
}
