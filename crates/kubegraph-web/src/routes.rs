use axum::Router;
use axum::routing::get;

use crate::handlers;
use crate::state::DashboardState;

/// Build the dashboard router
pub fn router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/elements", get(handlers::elements))
        .route("/api/snapshot", get(handlers::snapshot))
        .route("/api/layout/{name}", get(handlers::layout))
        .route("/api/detail", get(handlers::detail))
        .with_state(state)
}
