use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::sql_matches_scoretotal)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct ScoreTotal {
    pub match_id: i32,
    pub timestamp: chrono::NaiveDateTime,
    pub map: String,
    pub team_2: i32,
    pub team_3: i32,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::sql_matches)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct MatchPlayer {
    pub match_id: i32,
    pub steamid64: String,
    pub name: String,
    pub team: i32,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
}

impl From<ScoreTotal> for common::MatchSummary {
    fn from(value: ScoreTotal) -> Self {
        Self {
            match_id: value.match_id,
            map: value.map,
            team_2: value.team_2,
            team_3: value.team_3,
            timestamp: value.timestamp,
        }
    }
}

impl From<MatchPlayer> for common::PlayerRecord {
    fn from(value: MatchPlayer) -> Self {
        Self {
            match_id: value.match_id,
            steamid64: value.steamid64,
            name: value.name,
            team: value.team,
            kills: value.kills,
            deaths: value.deaths,
            assists: value.assists,
        }
    }
}
