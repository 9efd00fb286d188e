use std::sync::Arc;

pub mod listing;
pub mod scoreboard;

/// Everything a request handler needs, built once at startup.
pub struct AppState {
    pub store: Arc<dyn crate::store::MatchStore>,
    pub profiles: Arc<dyn crate::steam_api::ProfileLookup>,
    pub site_name: String,
}

pub fn router(state: AppState) -> axum::Router {
    axum::Router::new()
        .route(
            "/",
            axum::routing::get(listing::index).post(listing::search),
        )
        .route(
            "/index.php",
            axum::routing::get(listing::index).post(listing::search),
        )
        .route("/scoreboard", axum::routing::get(scoreboard::scoreboard))
        .route("/scoreboard.php", axum::routing::get(scoreboard::scoreboard))
        .with_state(Arc::new(state))
}
