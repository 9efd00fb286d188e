use axum::response::{IntoResponse, Response};

/// Failures that abort a request and end up as the generic error page.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("connecting to database: {0}")]
    Connect(#[from] diesel::ConnectionError),

    #[error("querying database: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("steam request to {url} failed: {source}")]
    SteamRequest { url: String, source: reqwest::Error },

    #[error("unexpected status {status} from {url}")]
    SteamStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("malformed steam response from {url}: {source}")]
    SteamResponse {
        url: String,
        source: serde_json::Error,
    },
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("Handling request: {}", self);

        (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            crate::page::error_page(),
        )
            .into_response()
    }
}
