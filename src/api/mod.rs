use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};

use crate::history::SearchHistory;
use crate::search::SearchProvider;

pub mod handlers;
pub mod models;

pub struct AppState<P> {
    pub provider: Arc<P>,
    pub history: Arc<Mutex<SearchHistory>>,
    /// Entity used when a request does not name one.
    pub entity: String,
}

impl<P> AppState<P> {
    pub fn new(provider: P, entity: impl Into<String>) -> Self {
        AppState {
            provider: Arc::new(provider),
            history: Arc::new(Mutex::new(SearchHistory::new())),
            entity: entity.into(),
        }
    }
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        AppState {
            provider: self.provider.clone(),
            history: self.history.clone(),
            entity: self.entity.clone(),
        }
    }
}

pub fn create_router<P: SearchProvider + 'static>(state: AppState<P>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/search", post(handlers::search_handler::<P>))
        .route("/api/history", get(handlers::history_handler::<P>))
        .with_state(state)
        .layer(cors)
}
