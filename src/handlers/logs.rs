use super::habits::NOT_FOUND;
use crate::dates::{day_bounds, parse_timestamp};
use crate::errors::AppError;
use crate::models::{new_id, HabitLog, LogQuery, LogRangeQuery, MessageResponse};
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use tracing::info;

pub async fn create(
    State(state): State<AppState>,
    Path(habit_id): Path<String>,
    query: Result<Query<LogQuery>, QueryRejection>,
) -> Result<Json<HabitLog>, AppError> {
    let Query(query) = query?;
    let requested = match query.date.as_deref().filter(|raw| !raw.trim().is_empty()) {
        Some(raw) => Some(parse_timestamp(raw).ok_or_else(|| AppError::bad_request("Invalid date format"))?),
        None => None,
    };

    let log = state
        .update(|data| {
            if data.habit(&habit_id).is_none() {
                return Err(AppError::not_found(NOT_FOUND));
            }

            let completed_at = requested.unwrap_or_else(Utc::now);
            let (start, end) = day_bounds(completed_at.date_naive());
            let already_logged = data
                .logs_for(&habit_id)
                .any(|log| log.completed_at >= start && log.completed_at < end);
            if already_logged {
                return Err(AppError::bad_request("Habit already logged for this date"));
            }

            let log = HabitLog {
                id: new_id(),
                habit_id: habit_id.clone(),
                completed_at,
            };
            data.habit_logs.push(log.clone());
            Ok(log)
        })
        .await?;

    info!(habit_id = %log.habit_id, log_id = %log.id, "habit logged");
    Ok(Json(log))
}

pub async fn list(
    State(state): State<AppState>,
    Path(habit_id): Path<String>,
    query: Result<Query<LogRangeQuery>, QueryRejection>,
) -> Result<Json<Vec<HabitLog>>, AppError> {
    let Query(query) = query?;
    let start = parse_bound(query.start_date.as_deref(), "Invalid start_date format")?;
    let end = parse_bound(query.end_date.as_deref(), "Invalid end_date format")?;

    let data = state.data.lock().await;
    if data.habit(&habit_id).is_none() {
        return Err(AppError::not_found(NOT_FOUND));
    }

    let mut logs: Vec<HabitLog> = data
        .logs_for(&habit_id)
        .filter(|log| start.is_none_or(|start| log.completed_at >= start))
        .filter(|log| end.is_none_or(|end| log.completed_at < end))
        .cloned()
        .collect();
    logs.sort_by_key(|log| log.completed_at);
    Ok(Json(logs))
}

pub async fn delete(
    State(state): State<AppState>,
    Path((habit_id, log_id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .update(|data| {
            if data.habit(&habit_id).is_none() {
                return Err(AppError::not_found(NOT_FOUND));
            }

            let before = data.habit_logs.len();
            data.habit_logs
                .retain(|log| !(log.id == log_id && log.habit_id == habit_id));
            if data.habit_logs.len() == before {
                return Err(AppError::not_found("Habit log not found"));
            }
            Ok(())
        })
        .await?;

    info!(habit_id = %habit_id, log_id = %log_id, "habit log deleted");
    Ok(Json(MessageResponse::new("Habit log deleted")))
}

fn parse_bound(raw: Option<&str>, message: &str) -> Result<Option<DateTime<Utc>>, AppError> {
    match raw.filter(|raw| !raw.trim().is_empty()) {
        Some(raw) => parse_timestamp(raw)
            .map(Some)
            .ok_or_else(|| AppError::bad_request(message)),
        None => Ok(None),
    }
}
