#![allow(dead_code)]

use common::{MatchSummary, PlayerRecord};
use sqlmatches_web::steam_api::{PlayerProfile, ProfileLookup};
use sqlmatches_web::store::{MatchStore, SearchFilter};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub fn summary(match_id: i32, map: &str, team_2: i32, team_3: i32) -> MatchSummary {
    MatchSummary {
        match_id,
        map: map.to_owned(),
        team_2,
        team_3,
        timestamp: chrono::NaiveDate::from_ymd_opt(2020, 5, 1)
            .unwrap()
            .and_hms_opt(20, match_id as u32 % 60, 0)
            .unwrap(),
    }
}

pub fn player(
    match_id: i32,
    steamid64: &str,
    name: &str,
    team: i32,
    kills: i32,
    deaths: i32,
) -> PlayerRecord {
    PlayerRecord {
        match_id,
        steamid64: steamid64.to_owned(),
        name: name.to_owned(),
        team,
        kills,
        deaths,
        assists: 1,
    }
}

/// Profile lookup answering from a fixed set of profiles and recording every
/// call it gets.
#[derive(Default)]
pub struct FakeProfiles {
    pub known: HashMap<String, PlayerProfile>,
    pub calls: Mutex<Vec<Vec<String>>>,
    pub fail: bool,
}

impl FakeProfiles {
    pub fn with_profile(mut self, steamid: &str, name: &str) -> Self {
        self.known.insert(
            steamid.to_owned(),
            PlayerProfile {
                steamid: steamid.to_owned(),
                personaname: name.to_owned(),
                avatarmedium: format!("https://avatars.example/{}_medium.jpg", steamid),
                profileurl: format!("https://steamcommunity.com/profiles/{}/", steamid),
            },
        );
        self
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ProfileLookup for FakeProfiles {
    async fn profiles(
        &self,
        steam_ids: &[String],
    ) -> Result<HashMap<String, PlayerProfile>, sqlmatches_web::Error> {
        self.calls.lock().unwrap().push(steam_ids.to_vec());

        if self.fail {
            return Err(sqlmatches_web::Error::SteamStatus {
                url: "https://api.steampowered.com/ISteamUser/GetPlayerSummaries/v2/".to_owned(),
                status: reqwest::StatusCode::FORBIDDEN,
            });
        }

        Ok(steam_ids
            .iter()
            .filter_map(|id| self.known.get(id).map(|p| (id.clone(), p.clone())))
            .collect())
    }
}

/// Store whose every query fails.
pub struct FailingStore;

#[async_trait::async_trait]
impl MatchStore for FailingStore {
    async fn latest_matches(&self, _: i64) -> Result<Vec<MatchSummary>, sqlmatches_web::Error> {
        Err(diesel::result::Error::NotFound.into())
    }

    async fn search_matches(
        &self,
        _: &SearchFilter,
    ) -> Result<Vec<MatchSummary>, sqlmatches_web::Error> {
        Err(diesel::result::Error::NotFound.into())
    }

    async fn scoreboard_rows(
        &self,
        _: i32,
    ) -> Result<Vec<(MatchSummary, PlayerRecord)>, sqlmatches_web::Error> {
        Err(diesel::result::Error::NotFound.into())
    }
}

pub fn router(
    store: impl MatchStore + 'static,
    profiles: Arc<FakeProfiles>,
) -> axum::Router {
    sqlmatches_web::api::router(sqlmatches_web::api::AppState {
        store: Arc::new(store),
        profiles,
        site_name: "Test Matches".to_owned(),
    })
}

pub async fn get(router: axum::Router, uri: &str) -> (axum::http::StatusCode, String) {
    let request = axum::http::Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();

    send(router, request).await
}

pub async fn post_form(
    router: axum::Router,
    uri: &str,
    body: &str,
) -> (axum::http::StatusCode, String) {
    let request = axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(axum::body::Body::from(body.to_owned()))
        .unwrap();

    send(router, request).await
}

async fn send(
    router: axum::Router,
    request: axum::http::Request<axum::body::Body>,
) -> (axum::http::StatusCode, String) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// Match ids of the match cards on a listing page, in page order.
pub fn listed_matches(page: &str) -> Vec<i32> {
    page.match_indices("href=\"/scoreboard?id=")
        .map(|(idx, pattern)| {
            page[idx + pattern.len()..]
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect::<String>()
                .parse()
                .unwrap()
        })
        .collect()
}
