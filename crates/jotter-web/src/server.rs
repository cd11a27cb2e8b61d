use crate::assets::static_routes;
use crate::routes::{health_routes, notes_routes};
use crate::{Result, WebError};
use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::Router;
use jotter_core::AppConfig;
use jotter_surrealdb::{connection, NoteStore};
use std::net::SocketAddr;
use tower_http::cors::{AllowOrigin, CorsLayer};

const MAX_BODY_SIZE_1MB: usize = 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub store: NoteStore,
}

/// Build the application router over the given store.
///
/// Exposed separately from [`start_server`] so tests can drive the router
/// directly without binding a socket.
pub fn app(store: NoteStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([
            "http://localhost:3000".parse().unwrap(),
            "http://localhost:5173".parse().unwrap(),
            "http://127.0.0.1:3000".parse().unwrap(),
            "http://127.0.0.1:5173".parse().unwrap(),
        ]))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(notes_routes())
        .with_state(AppState { store })
        .merge(health_routes())
        .merge(static_routes())
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE_1MB))
        .layer(cors)
}

pub async fn start_server(config: &AppConfig) -> Result<()> {
    let store = connection::get_connection(&config.store).await?.clone();
    let app = app(store);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| WebError::Config(format!("Invalid address: {e}")))?;

    tracing::info!("Starting notes server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(WebError::Io)?;

    axum::serve(listener, app).await.map_err(WebError::Io)?;

    Ok(())
}
