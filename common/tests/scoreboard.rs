use common::{MatchSummary, PlayerRecord, Scoreboard, Side};
use pretty_assertions::assert_eq;

fn summary() -> MatchSummary {
    MatchSummary {
        match_id: 7,
        map: "de_nuke".to_owned(),
        team_2: 16,
        team_3: 12,
        timestamp: chrono::NaiveDate::from_ymd_opt(2020, 5, 1)
            .unwrap()
            .and_hms_opt(20, 15, 0)
            .unwrap(),
    }
}

fn player(steamid64: &str, team: i32, kills: i32) -> PlayerRecord {
    PlayerRecord {
        match_id: 7,
        steamid64: steamid64.to_owned(),
        name: format!("player-{}", steamid64),
        team,
        kills,
        deaths: 10,
        assists: 2,
    }
}

#[test]
fn empty() {
    assert_eq!(Scoreboard::from_rows(Vec::new()), None);
}

#[test]
fn partitions_by_side() {
    let rows = vec![
        (summary(), player("1", 2, 28)),
        (summary(), player("2", 3, 21)),
        (summary(), player("3", 2, 15)),
        (summary(), player("4", 1, 12)),
        (summary(), player("5", 3, 11)),
    ];

    let scoreboard = Scoreboard::from_rows(rows).unwrap();

    let expected = Scoreboard {
        summary: summary(),
        counter_terrorists: vec![player("1", 2, 28), player("3", 2, 15)],
        terrorists: vec![player("2", 3, 21), player("5", 3, 11)],
    };
    assert_eq!(scoreboard, expected);

    assert_eq!(scoreboard.side(Side::Terrorist), &expected.terrorists[..]);
    assert_eq!(
        scoreboard.steam_ids(),
        vec!["1".to_owned(), "3".to_owned(), "2".to_owned(), "5".to_owned()]
    );
}

#[test]
fn steam_ids_are_unique() {
    let rows = vec![
        (summary(), player("1", 2, 28)),
        (summary(), player("1", 3, 3)),
        (summary(), player("2", 3, 1)),
    ];

    let scoreboard = Scoreboard::from_rows(rows).unwrap();
    assert_eq!(scoreboard.steam_ids(), vec!["1".to_owned(), "2".to_owned()]);
}

#[test]
fn sides() {
    assert_eq!(Side::from_team(2), Some(Side::CounterTerrorist));
    assert_eq!(Side::from_team(3), Some(Side::Terrorist));
    assert_eq!(Side::from_team(1), None);
    assert_eq!(Side::CounterTerrorist.team(), 2);
    assert_eq!(Side::Terrorist.team(), 3);
}
