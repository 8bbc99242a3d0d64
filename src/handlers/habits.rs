use crate::errors::AppError;
use crate::models::{Habit, HabitFilter, HabitInput, HabitStats, MessageResponse};
use crate::state::AppState;
use crate::stats::{completions_for, habit_stats};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use chrono::Utc;
use tracing::info;

pub(crate) const NOT_FOUND: &str = "Habit not found";

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<HabitInput>, JsonRejection>,
) -> Result<Json<Habit>, AppError> {
    let Json(payload) = payload?;
    let now = Utc::now();
    let habit = state
        .update(|data| {
            let habit = payload.into_habit(data, now)?;
            data.habits.push(habit.clone());
            Ok(habit)
        })
        .await?;

    info!(habit_id = %habit.id, "habit created");
    Ok(Json(habit))
}

pub async fn list(
    State(state): State<AppState>,
    filter: Result<Query<HabitFilter>, QueryRejection>,
) -> Result<Json<Vec<Habit>>, AppError> {
    let Query(filter) = filter?;
    let data = state.data.lock().await;
    let category = filter.category_id.filter(|id| !id.is_empty());
    let habits = data
        .habits
        .iter()
        .filter(|habit| match category.as_deref() {
            Some(id) => habit.category_id.as_deref() == Some(id),
            None => true,
        })
        .cloned()
        .collect();
    Ok(Json(habits))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Habit>, AppError> {
    let data = state.data.lock().await;
    data.habit(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found(NOT_FOUND))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<HabitInput>, JsonRejection>,
) -> Result<Json<Habit>, AppError> {
    let Json(payload) = payload?;
    let habit = state
        .update(|data| {
            let index = data
                .habits
                .iter()
                .position(|habit| habit.id == id)
                .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

            let mut habit = data.habits[index].clone();
            payload.apply_to(&mut habit, data)?;
            data.habits[index] = habit.clone();
            Ok(habit)
        })
        .await?;

    info!(habit_id = %id, "habit updated");
    Ok(Json(habit))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .update(|data| match data.remove_habit(&id) {
            true => Ok(()),
            false => Err(AppError::not_found(NOT_FOUND)),
        })
        .await?;

    info!(habit_id = %id, "habit deleted");
    Ok(Json(MessageResponse::new("Habit deleted")))
}

pub async fn stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HabitStats>, AppError> {
    let data = state.data.lock().await;
    let habit = data.habit(&id).ok_or_else(|| AppError::not_found(NOT_FOUND))?;
    Ok(Json(habit_stats(habit, &completions_for(&data, &id))))
}
