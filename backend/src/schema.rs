// Tables written by the SQLMatches game server plugin.

diesel::table! {
    sql_matches (match_id, steamid64) {
        match_id -> Integer,
        steamid64 -> Varchar,
        name -> Varchar,
        team -> Integer,
        kills -> Integer,
        deaths -> Integer,
        assists -> Integer,
    }
}

diesel::table! {
    sql_matches_scoretotal (match_id) {
        match_id -> Integer,
        timestamp -> Timestamp,
        map -> Varchar,
        team_2 -> Integer,
        team_3 -> Integer,
    }
}

diesel::joinable!(sql_matches -> sql_matches_scoretotal (match_id));

diesel::allow_tables_to_appear_in_same_query!(
    sql_matches,
    sql_matches_scoretotal,
);
