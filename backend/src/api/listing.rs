use axum::extract::{Form, Query, State};
use common::{MatchIcon, MatchSummary};
use maud::{html, Markup};
use std::sync::Arc;

use super::AppState;
use crate::store::SearchFilter;

#[derive(Debug, Default, serde::Deserialize)]
pub struct SearchForm {
    #[serde(rename = "search-bar")]
    pub search: Option<String>,
    #[serde(rename = "Submit")]
    pub submit: Option<String>,
}

impl SearchForm {
    /// The search to run, `None` if the form was never submitted.
    pub fn filter(self) -> Option<SearchFilter> {
        match (self.search, self.submit) {
            (None, None) => None,
            (search, _) => Some(SearchFilter::new(search.unwrap_or_default())),
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn index(
    State(state): State<Arc<AppState>>,
    form: Option<Query<SearchForm>>,
) -> Result<Markup, crate::Error> {
    listing(&state, form.map(|Query(f)| f).unwrap_or_default()).await
}

#[tracing::instrument(skip(state))]
pub async fn search(
    State(state): State<Arc<AppState>>,
    form: Option<Form<SearchForm>>,
) -> Result<Markup, crate::Error> {
    listing(&state, form.map(|Form(f)| f).unwrap_or_default()).await
}

async fn listing(state: &AppState, form: SearchForm) -> Result<Markup, crate::Error> {
    let matches = match form.filter() {
        Some(filter) => {
            tracing::info!("Searching for {:?}", filter.term());
            state.store.search_matches(&filter).await?
        }
        None => {
            state
                .store
                .latest_matches(crate::store::LATEST_MATCHES)
                .await?
        }
    };
    tracing::debug!("Listing {} matches", matches.len());

    Ok(render(&state.site_name, &matches))
}

pub fn render(site_name: &str, matches: &[MatchSummary]) -> Markup {
    crate::page::layout(
        site_name,
        html! {
            form method="post" {
                div class="search-container" style="width:600px;margin-left:auto;margin-right:auto;" {
                    input type="text" name="search-bar" placeholder="Search MatchID, Player Name or SteamID64" class="search-input";
                    button class="btn btn-light search-btn" style="color:#f1f1f1;" type="submit" name="Submit" {
                        " "
                        i class="fa fa-search" style="color:rgb(0,0,0);" {}
                    }
                }
            }
            div style="width:700px;margin-left:auto;margin-right:auto;margin-bottom:25px;" {
                @if matches.is_empty() {
                    h3 class="text-center" style="font-size:30px;margin-top:10px;" { "No Matches Found." }
                } @else {
                    @for summary in matches {
                        (match_card(summary))
                    }
                }
            }
        },
    )
}

fn match_card(summary: &MatchSummary) -> Markup {
    let icon = MatchIcon::for_score(summary.team_2, summary.team_3);
    let background = format!(
        "background-image:url('/assets/img/maps/{}.png');background-position:center;background-size:cover;background-repeat:no-repeat;background-color:#F1F1F1;height:115px;margin-top:25px;",
        map_asset(&summary.map)
    );

    html! {
        a class="text-white" href={ "/scoreboard?id=" (summary.match_id) } {
            div data-bs-hover-animate="pulse" class="match-box" style=(background) {
                img class="float-left" src={ "/assets/img/" (icon.file_name()) } style="width:95px;margin-top:10px;margin-left:20px;";
                h1 class="float-right" style="color:rgb(255,255,255);font-size:85px;margin-right:20px;" {
                    (summary.team_2) ":" (summary.team_3)
                }
                div class="clear" {}
            }
        }
    }
}

/// Map name as used inside the quoted CSS `url('...')` of a match card.
///
/// Quotes, parentheses and backslashes are escaped and newlines written as
/// CSS escapes, so the name cannot end the string or the declaration. HTML
/// escaping of the attribute is left to `maud`.
fn map_asset(map: &str) -> String {
    let mut escaped = String::with_capacity(map.len());
    for c in map.chars() {
        match c {
            '\'' | '"' | '\\' | '(' | ')' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' => escaped.push_str("\\a "),
            '\r' => escaped.push_str("\\d "),
            c => escaped.push(c),
        }
    }
    escaped
}
