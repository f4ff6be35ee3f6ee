mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;
mod validation;

use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_doc::ApiDoc;
use config::Config;
use state::AppState;
use store::FileStore;

fn app(state: AppState) -> Router {
    Router::new()
        .route(
            routes::RECORDS,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(
            routes::RECORD_ITEM,
            put(handlers::update_handler).delete(handlers::delete_handler),
        )
        .route(routes::HEALTH, get(handlers::health_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Per-request access log: method, path, status, latency
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    tracing::info!("todo-file-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = FileStore::from_config(&config);
    // The backing file must exist before any handler is reachable
    store.ensure_exists().await?;

    let state = AppState {
        store,
        config: Arc::new(config),
    };

    let addr = format!(
        "{}:{}",
        state.config.service_host, state.config.service_port
    );
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
