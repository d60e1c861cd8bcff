mod error;
mod extract;
mod handlers;

pub use error::ApiError;
pub use extract::Payload;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::store::IssueStore;

/// Router with permissive CORS, as used for local development and tests.
pub fn create_router(store: IssueStore) -> Router {
    create_router_with_config(store, &ServerConfig::local())
}

pub fn create_router_with_config(store: IssueStore, config: &ServerConfig) -> Router {
    Router::new()
        // Projects
        .route("/api/projects", get(handlers::list_projects))
        // Issues, scoped by project name
        .route("/api/issues/{project}", get(handlers::list_issues))
        .route("/api/issues/{project}", post(handlers::create_issue))
        .route("/api/issues/{project}", put(handlers::update_issue))
        .route("/api/issues/{project}", delete(handlers::delete_issue))
        // Health
        .route("/health", get(handlers::health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(config.cors_layer()),
        )
        .with_state(store)
}
