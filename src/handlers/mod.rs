pub mod categories;
pub mod countdowns;
pub mod habits;
pub mod logs;

use crate::errors::AppError;
use crate::models::{MessageResponse, OverviewResponse};
use crate::state::AppState;
use crate::stats::build_overview;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn api_root() -> Json<MessageResponse> {
    Json(MessageResponse::new("daymark api"))
}

pub async fn get_overview(State(state): State<AppState>) -> Result<Json<OverviewResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(build_overview(&data)))
}
