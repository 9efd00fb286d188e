use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target().contains("sqlmatches_web")
        }));
    tracing::subscriber::set_global_default(registry)?;

    let config = sqlmatches_web::Config::parse();
    tracing::info!(?config, "Starting...");

    let state = sqlmatches_web::api::AppState {
        store: Arc::new(sqlmatches_web::store::DieselStore::new(
            config.database_url.clone(),
        )),
        profiles: Arc::new(sqlmatches_web::steam_api::Client::new(
            config.steam_api_key.clone(),
            config.steam_api_url.clone(),
        )),
        site_name: config.site_name.clone(),
    };

    let router = sqlmatches_web::api::router(state).nest_service(
        "/assets",
        tower_http::services::ServeDir::new(&config.assets),
    );

    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    tracing::info!("Listening on {}", config.listen);
    axum::serve(listener, router).await?;

    Ok(())
}
