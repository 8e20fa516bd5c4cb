use anyhow::Context;
use axum::{Router, routing::get};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::users;
use crate::config::Config;
use crate::store::UserStore;

pub const WELCOME_MESSAGE: &str = "Welcome to the Game API!";

#[derive(Clone, Default)]
pub struct AppState {
    pub users: UserStore,
}

impl AppState {
    pub fn new(users: UserStore) -> Self {
        Self { users }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { WELCOME_MESSAGE }))
        .route("/health", get(|| async { "OK" }))
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route("/api/users/{id}", get(users::get_user).delete(users::delete_user))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the API on an already bound listener until the server stops.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = build_router(state);
    axum::serve(listener, app).await.context("server failed")
}

pub async fn start_server(config: &Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(UserStore::new()));

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind to {address}"))?;

    info!("Server is running on port {}", config.port);

    serve(listener, state).await
}
