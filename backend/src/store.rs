use common::{MatchSummary, PlayerRecord};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

mod memory;
pub use memory::MemoryStore;

/// Number of matches shown on the listing page when nothing was searched.
pub const LATEST_MATCHES: i64 = 5;

/// Read access to the match tables.
#[async_trait::async_trait]
pub trait MatchStore: Send + Sync {
    /// The `limit` most recent matches, newest first.
    async fn latest_matches(&self, limit: i64) -> Result<Vec<MatchSummary>, crate::Error>;

    /// Every match with at least one player matching the filter, newest
    /// first and each match only once.
    async fn search_matches(&self, filter: &SearchFilter)
        -> Result<Vec<MatchSummary>, crate::Error>;

    /// All players of a match together with the match summary, most kills
    /// first.
    async fn scoreboard_rows(
        &self,
        match_id: i32,
    ) -> Result<Vec<(MatchSummary, PlayerRecord)>, crate::Error>;
}

/// Search entered on the listing page.
///
/// A player matches if their name contains the term, their SteamID64 is
/// the term or the match id is the term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    term: String,
    match_id: Option<i32>,
}

impl SearchFilter {
    pub fn new<IS>(term: IS) -> Self
    where
        IS: Into<String>,
    {
        let term = term.into();
        let match_id = term.trim().parse().ok();

        Self { term, match_id }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn match_id(&self) -> Option<i32> {
        self.match_id
    }

    /// `LIKE` pattern for a literal substring search on the name.
    pub fn name_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.term.len() + 2);
        pattern.push('%');
        for c in self.term.chars() {
            if matches!(c, '\\' | '%' | '_') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }

    pub fn matches(&self, player: &PlayerRecord) -> bool {
        player
            .name
            .to_lowercase()
            .contains(&self.term.to_lowercase())
            || player.steamid64 == self.term
            || self.match_id == Some(player.match_id)
    }
}

/// MySQL backed store, opening one connection per call.
#[derive(Clone)]
pub struct DieselStore {
    database_url: String,
}

impl DieselStore {
    pub fn new<IS>(database_url: IS) -> Self
    where
        IS: Into<String>,
    {
        Self {
            database_url: database_url.into(),
        }
    }

    async fn connection(&self) -> Result<diesel_async::AsyncMysqlConnection, crate::Error> {
        use diesel_async::AsyncConnection;

        diesel_async::AsyncMysqlConnection::establish(&self.database_url)
            .await
            .map_err(|e| {
                tracing::error!("Connecting to database: {:?}", e);
                crate::Error::from(e)
            })
    }
}

/// Newest `limit` matches.
pub fn latest_query(
    limit: i64,
) -> impl diesel_async::methods::LoadQuery<
    'static,
    diesel_async::AsyncMysqlConnection,
    crate::models::ScoreTotal,
> + diesel::query_builder::QueryFragment<diesel::mysql::Mysql>
       + Send {
    use crate::schema::sql_matches_scoretotal::dsl;

    dsl::sql_matches_scoretotal
        .order(dsl::match_id.desc())
        .limit(limit)
        .select(crate::models::ScoreTotal::as_select())
}

/// Distinct matches with a player matching the filter, newest first.
pub fn search_query(
    filter: &SearchFilter,
) -> impl diesel_async::methods::LoadQuery<
    'static,
    diesel_async::AsyncMysqlConnection,
    crate::models::ScoreTotal,
> + diesel::query_builder::QueryFragment<diesel::mysql::Mysql>
       + Send {
    use crate::schema::{sql_matches, sql_matches_scoretotal};

    let mut query = sql_matches_scoretotal::dsl::sql_matches_scoretotal
        .inner_join(sql_matches::dsl::sql_matches)
        .select(crate::models::ScoreTotal::as_select())
        .distinct()
        .filter(
            sql_matches::dsl::name
                .like(filter.name_pattern())
                .escape('\\'),
        )
        .or_filter(sql_matches::dsl::steamid64.eq(filter.term().to_owned()))
        .order(sql_matches_scoretotal::dsl::match_id.desc())
        .into_boxed::<diesel::mysql::Mysql>();
    if let Some(match_id) = filter.match_id() {
        query = query.or_filter(sql_matches_scoretotal::dsl::match_id.eq(match_id));
    }
    query
}

/// Summary and players of one match, most kills first.
pub fn scoreboard_query(
    match_id: i32,
) -> impl diesel_async::methods::LoadQuery<
    'static,
    diesel_async::AsyncMysqlConnection,
    (crate::models::ScoreTotal, crate::models::MatchPlayer),
> + diesel::query_builder::QueryFragment<diesel::mysql::Mysql>
       + Send {
    use crate::schema::{sql_matches, sql_matches_scoretotal};

    sql_matches_scoretotal::dsl::sql_matches_scoretotal
        .inner_join(sql_matches::dsl::sql_matches)
        .filter(sql_matches_scoretotal::dsl::match_id.eq(match_id))
        .order(sql_matches::dsl::kills.desc())
        .select((
            crate::models::ScoreTotal::as_select(),
            crate::models::MatchPlayer::as_select(),
        ))
}

#[async_trait::async_trait]
impl MatchStore for DieselStore {
    #[tracing::instrument(skip(self))]
    async fn latest_matches(&self, limit: i64) -> Result<Vec<MatchSummary>, crate::Error> {
        let query = latest_query(limit);
        tracing::trace!(
            query = %diesel::debug_query::<diesel::mysql::Mysql, _>(&query),
            "Latest matches query"
        );

        let mut db_con = self.connection().await?;
        let results: Vec<crate::models::ScoreTotal> = query.load(&mut db_con).await?;

        Ok(results.into_iter().map(MatchSummary::from).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn search_matches(
        &self,
        filter: &SearchFilter,
    ) -> Result<Vec<MatchSummary>, crate::Error> {
        let query = search_query(filter);
        tracing::trace!(
            query = %diesel::debug_query::<diesel::mysql::Mysql, _>(&query),
            "Search matches query"
        );

        let mut db_con = self.connection().await?;
        let results: Vec<crate::models::ScoreTotal> = query.load(&mut db_con).await?;

        Ok(results.into_iter().map(MatchSummary::from).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn scoreboard_rows(
        &self,
        match_id: i32,
    ) -> Result<Vec<(MatchSummary, PlayerRecord)>, crate::Error> {
        let query = scoreboard_query(match_id);
        tracing::trace!(
            query = %diesel::debug_query::<diesel::mysql::Mysql, _>(&query),
            "Scoreboard query"
        );

        let mut db_con = self.connection().await?;
        let results: Vec<(crate::models::ScoreTotal, crate::models::MatchPlayer)> =
            query.load(&mut db_con).await?;

        Ok(results
            .into_iter()
            .map(|(summary, player)| (summary.into(), player.into()))
            .collect())
    }
}
