use crate::handlers::{analytics, health, loads};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/loads", get(loads::find_best_load))
        .route("/loads/:load_id/book", post(loads::book_load))
        .route(
            "/analytics",
            post(analytics::record)
                .get(analytics::list)
                .delete(analytics::clear),
        )
        .route("/analytics/stats", get(analytics::stats));

    Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health))
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
