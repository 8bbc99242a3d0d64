use crate::countdown::{notifications_at, status_at};
use crate::errors::AppError;
use crate::models::{Countdown, CountdownInput, CountdownStatus, MessageResponse};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::Utc;
use tracing::info;

const NOT_FOUND: &str = "Countdown not found";

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CountdownInput>, JsonRejection>,
) -> Result<Json<Countdown>, AppError> {
    let Json(payload) = payload?;
    let countdown = payload.into_countdown(Utc::now())?;
    state
        .update(|data| {
            data.countdowns.push(countdown.clone());
            Ok(())
        })
        .await?;

    info!(countdown_id = %countdown.id, "countdown created");
    Ok(Json(countdown))
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<Countdown>> {
    let data = state.data.lock().await;
    Json(data.countdowns.clone())
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Countdown>, AppError> {
    let data = state.data.lock().await;
    data.countdown(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found(NOT_FOUND))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CountdownInput>, JsonRejection>,
) -> Result<Json<Countdown>, AppError> {
    let Json(payload) = payload?;
    let now = Utc::now();
    let updated = state
        .update(|data| {
            let countdown = data
                .countdown_mut(&id)
                .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
            payload.apply_to(countdown, now)?;
            Ok(countdown.clone())
        })
        .await?;

    info!(countdown_id = %id, "countdown updated");
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .update(|data| {
            let before = data.countdowns.len();
            data.countdowns.retain(|countdown| countdown.id != id);
            if data.countdowns.len() == before {
                return Err(AppError::not_found(NOT_FOUND));
            }
            Ok(())
        })
        .await?;

    info!(countdown_id = %id, "countdown deleted");
    Ok(Json(MessageResponse::new("Countdown deleted")))
}

pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Countdown>, AppError> {
    let updated = state
        .update(|data| {
            let countdown = data
                .countdown_mut(&id)
                .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
            countdown.is_completed = true;
            Ok(countdown.clone())
        })
        .await?;

    info!(countdown_id = %id, "countdown completed");
    Ok(Json(updated))
}

pub async fn status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CountdownStatus>, AppError> {
    let data = state.data.lock().await;
    let countdown = data
        .countdown(&id)
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
    Ok(Json(status_at(Utc::now(), countdown)))
}

pub async fn notifications(State(state): State<AppState>) -> Json<Vec<CountdownStatus>> {
    let data = state.data.lock().await;
    Json(notifications_at(Utc::now(), &data.countdowns))
}
