use serde::Deserialize;
use std::collections::HashMap;

/// Most SteamIDs a single `GetPlayerSummaries` call accepts.
pub const MAX_IDS_PER_REQUEST: usize = 100;

const PLAYER_SUMMARIES: &str = "ISteamUser/GetPlayerSummaries/v2/";

pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct Response<T> {
    response: T,
}

#[derive(Debug, Deserialize)]
struct PlayerSummaries {
    #[serde(default)]
    players: Vec<PlayerProfile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayerProfile {
    pub steamid: String,
    pub personaname: String,
    #[serde(default)]
    pub avatarmedium: String,
    #[serde(default)]
    pub profileurl: String,
}

/// Looks up Steam profiles for the players on a scoreboard.
#[async_trait::async_trait]
pub trait ProfileLookup: Send + Sync {
    /// Profiles keyed by SteamID64. Accounts Steam does not return are
    /// missing from the map.
    async fn profiles(
        &self,
        steam_ids: &[String],
    ) -> Result<HashMap<String, PlayerProfile>, crate::Error>;
}

impl Client {
    pub fn new<IS, IU>(api_key: IS, base_url: IU) -> Self
    where
        IS: Into<String>,
        IU: Into<String>,
    {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T>(&self, path: &str, args: &[(&str, &str)]) -> Result<T, crate::Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.url(path);

        let response = self
            .http
            .get(&url)
            .query(&[("key", &self.api_key)])
            .query(args)
            .send()
            .await
            .map_err(|e| crate::Error::SteamRequest {
                url: url.clone(),
                source: e.without_url(),
            })?;
        if !response.status().is_success() {
            return Err(crate::Error::SteamStatus {
                url,
                status: response.status(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| crate::Error::SteamRequest {
                url: url.clone(),
                source: e.without_url(),
            })?;

        parse_response(&body).map_err(|e| crate::Error::SteamResponse { url, source: e })
    }
}

fn parse_response<T>(body: &[u8]) -> Result<T, serde_json::Error>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_slice::<Response<T>>(body).map(|r| r.response)
}

#[async_trait::async_trait]
impl ProfileLookup for Client {
    #[tracing::instrument(skip(self))]
    async fn profiles(
        &self,
        steam_ids: &[String],
    ) -> Result<HashMap<String, PlayerProfile>, crate::Error> {
        let mut profiles = HashMap::with_capacity(steam_ids.len());

        for chunk in steam_ids.chunks(MAX_IDS_PER_REQUEST) {
            let ids = chunk.join(",");
            tracing::debug!("Loading {} steam profiles", chunk.len());

            let summaries: PlayerSummaries =
                self.get(PLAYER_SUMMARIES, &[("steamids", ids.as_str())]).await?;
            profiles.extend(
                summaries
                    .players
                    .into_iter()
                    .map(|p| (p.steamid.clone(), p)),
            );
        }

        Ok(profiles)
    }
}
