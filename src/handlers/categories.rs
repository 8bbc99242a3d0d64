use crate::errors::AppError;
use crate::models::{Category, CategoryInput, MessageResponse};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::Utc;
use tracing::info;

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CategoryInput>, JsonRejection>,
) -> Result<Json<Category>, AppError> {
    let Json(payload) = payload?;
    let category = payload.into_category(Utc::now())?;
    state
        .update(|data| {
            data.categories.push(category.clone());
            Ok(())
        })
        .await?;

    info!(category_id = %category.id, "category created");
    Ok(Json(category))
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<Category>> {
    let data = state.data.lock().await;
    Json(data.categories.clone())
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Category>, AppError> {
    let data = state.data.lock().await;
    data.category(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found("Category not found"))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .update(|data| match data.remove_category(&id) {
            true => Ok(()),
            false => Err(AppError::not_found("Category not found")),
        })
        .await?;

    info!(category_id = %id, "category deleted");
    Ok(Json(MessageResponse::new("Category deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{new_id, Store};

    #[tokio::test]
    async fn create_rolls_back_when_store_cannot_be_written() {
        let mut path = std::env::temp_dir();
        path.push(format!("daymark_no_such_dir_{}", new_id()));
        path.push("store.json");
        let state = AppState::new(path, Store::default());

        let input = CategoryInput {
            name: "Health".into(),
            color: "#3f8f5a".into(),
        };
        let result = create(State(state.clone()), Ok(Json(input))).await;

        let err = result.unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        assert!(state.data.lock().await.categories.is_empty());
    }
}
