use axum::extract::{Query, State};
use common::{short_name, KillDeathRatio, PlayerRecord, Scoreboard, Side};
use maud::{html, Markup};
use std::collections::HashMap;
use std::sync::Arc;

use super::AppState;
use crate::steam_api::PlayerProfile;

const STEAM_PROFILE_URL: &str = "https://steamcommunity.com/profiles/";

#[derive(Debug, Default, serde::Deserialize)]
pub struct ScoreboardParams {
    pub id: Option<String>,
}

impl ScoreboardParams {
    /// The requested match, `0` when missing or not a number.
    pub fn match_id(&self) -> i32 {
        self.id
            .as_deref()
            .and_then(|id| id.trim().parse().ok())
            .unwrap_or(0)
    }
}

#[tracing::instrument(skip(state))]
pub async fn scoreboard(
    State(state): State<Arc<AppState>>,
    params: Option<Query<ScoreboardParams>>,
) -> Result<Markup, crate::Error> {
    let match_id = params.map(|Query(p)| p.match_id()).unwrap_or(0);

    let rows = state.store.scoreboard_rows(match_id).await?;
    let scoreboard = match Scoreboard::from_rows(rows) {
        Some(s) => s,
        None => {
            tracing::info!("No match found with id {}", match_id);
            return Ok(render_missing(&state.site_name));
        }
    };

    let profiles = state.profiles.profiles(&scoreboard.steam_ids()).await?;

    Ok(render(&state.site_name, &scoreboard, &profiles))
}

pub fn render_missing(site_name: &str) -> Markup {
    crate::page::layout(
        site_name,
        html! {
            h4 style="margin-top:40px;text-align:center;" { "No Match with that ID!" }
        },
    )
}

pub fn render(
    site_name: &str,
    scoreboard: &Scoreboard,
    profiles: &HashMap<String, PlayerProfile>,
) -> Markup {
    let summary = &scoreboard.summary;

    crate::page::layout(
        site_name,
        html! {
            div class="card pulse animated" style="width:1180px;margin-right:auto;margin-left:auto;background-color:#f1f1f1;margin-top:25px;" {
                div class="card-body" {
                    img class="float-left" src="/assets/img/ct_icon.png" style="width:125px;margin-left:172px;";
                    h1 class="float-left text-center" style="font-size:50px;margin-bottom:0px;margin-top:25px;width:540px;" {
                        strong style="color:rgb(91,118,141);" { (summary.team_2) }
                        ":"
                        strong style="color:rgb(172,155,102);" { (summary.team_3) }
                    }
                    img class="float-right" src="/assets/img/t_icon.png" style="width:125px;margin-bottom:5px;margin-right:172px;";
                    div class="clear" {}
                    div style="margin-top:20px;height:69px;" {
                        h1 class="text-center" style="font-size:20px;" { "Map: " (summary.map) }
                        h1 class="text-center" style="font-size:20px;" {
                            "Ended: " (summary.timestamp.format("%Y-%m-%d %H:%M:%S"))
                        }
                    }
                    (column_headings("float-left"))
                    (column_headings("float-right"))
                    div class="clear" {}
                    div class="float-left" style="margin-top:0px;" {
                        (roster(scoreboard, Side::CounterTerrorist, profiles))
                        (roster(scoreboard, Side::Terrorist, profiles))
                    }
                    div class="clear" {}
                }
            }
        },
    )
}

fn column_headings(float: &str) -> Markup {
    html! {
        div class=(float) style="margin-top:20px;width:500px;" {
            p class="float-right" style="margin-bottom:0px;width:64px;" { "Assists" }
            p class="float-right" style="margin-bottom:0px;width:60px;" { "Deaths" }
            p class="float-right" style="margin-bottom:0px;width:47px;" { "Kills" }
            p class="float-right" style="margin-bottom:0px;width:60px;" { "KDR" }
            p class="float-right" style="margin-bottom:0px;width:200px;" { "Player" }
        }
    }
}

fn roster(
    scoreboard: &Scoreboard,
    side: Side,
    profiles: &HashMap<String, PlayerProfile>,
) -> Markup {
    let style = match side {
        Side::CounterTerrorist => "width:500px;",
        Side::Terrorist => "width:500px;margin-left:138px;",
    };

    html! {
        ul class="list-group float-left" data-team=(side.team()) style=(style) {
            @for player in scoreboard.side(side) {
                (player_row(player, profiles.get(&player.steamid64)))
            }
        }
    }
}

fn player_row(player: &PlayerRecord, profile: Option<&PlayerProfile>) -> Markup {
    let kdr = KillDeathRatio::new(player.kills, player.deaths);

    html! {
        li class="list-group-item" style="margin-top:10px;text-align:center;" {
            span class="float-right" style="margin-top:10px;width:39px;" { (player.assists) }
            span class="float-right" style="margin-top:10px;width:39px;margin-right:20px;" { (player.deaths) }
            span class="float-right" style="margin-top:10px;width:39px;margin-right:20px;" { (player.kills) }
            span class="float-right kdr" style="margin-top:10px;width:35px;margin-right:20px;" { (kdr) }
            a href={ (STEAM_PROFILE_URL) (player.steamid64) } target="_blank" {
                @if let Some(profile) = profile {
                    img class="rounded-circle float-left" src=(profile.avatarmedium) alt=(profile.personaname) style="width:45px;";
                }
                span class="float-left player-name" style="margin-top:10px;margin-left:5px;color:#000000;" {
                    (short_name(&player.name))
                }
            }
        }
    }
}
