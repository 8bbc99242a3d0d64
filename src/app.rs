use crate::handlers::{self, categories, countdowns, habits, logs};
use crate::state::AppState;
use axum::{routing::{get, post}, Router};
use tower_http::cors::CorsLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api", get(handlers::api_root))
        .route("/api/stats", get(handlers::get_overview))
        .route("/api/notifications", get(countdowns::notifications))
        .route("/api/categories", get(categories::list).post(categories::create))
        .route("/api/categories/:id", get(categories::get).delete(categories::delete))
        .route("/api/countdowns", get(countdowns::list).post(countdowns::create))
        .route(
            "/api/countdowns/:id",
            get(countdowns::get).put(countdowns::update).delete(countdowns::delete),
        )
        .route("/api/countdowns/:id/complete", post(countdowns::complete))
        .route("/api/countdowns/:id/status", get(countdowns::status))
        .route("/api/habits", get(habits::list).post(habits::create))
        .route(
            "/api/habits/:id",
            get(habits::get).put(habits::update).delete(habits::delete),
        )
        .route("/api/habits/:id/stats", get(habits::stats))
        .route("/api/habits/:id/log", post(logs::create))
        .route("/api/habits/:id/logs", get(logs::list))
        .route("/api/habits/:id/logs/:log_id", axum::routing::delete(logs::delete))
        .with_state(state)
        .layer(CorsLayer::permissive())
}
