use crate::errors::AppError;
use crate::models::Store;
use crate::storage::persist_data;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Shared handle to the in-memory store and the file that backs it.
#[derive(Clone)]
pub struct AppState {
    pub data_path: Arc<PathBuf>,
    pub data: Arc<Mutex<Store>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: Store) -> Self {
        Self {
            data_path: Arc::new(data_path),
            data: Arc::new(Mutex::new(data)),
        }
    }

    /// Runs `change` against a copy of the store and swaps the copy in only
    /// once it is on disk. On any error the live store is left untouched.
    pub async fn update<T>(
        &self,
        change: impl FnOnce(&mut Store) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut data = self.data.lock().await;
        let mut next = data.clone();
        let output = change(&mut next)?;
        self.commit(&mut data, next).await?;
        Ok(output)
    }

    /// Persists `next` and, if that succeeds, replaces `live` with it.
    pub async fn commit(&self, live: &mut Store, next: Store) -> Result<(), AppError> {
        persist_data(&self.data_path, &next).await?;
        *live = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, new_id};
    use chrono::Utc;

    fn unwritable_state() -> AppState {
        let mut path = std::env::temp_dir();
        path.push(format!("daymark_missing_dir_{}", new_id()));
        path.push("store.json");
        AppState::new(path, Store::default())
    }

    fn category(name: &str) -> Category {
        Category {
            id: new_id(),
            name: name.into(),
            color: "#2f4858".into(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn failed_save_leaves_store_unchanged() {
        let state = unwritable_state();
        let result = state
            .update(|data| {
                data.categories.push(category("Health"));
                Ok(())
            })
            .await;

        assert!(result.is_err());
        assert!(state.data.lock().await.categories.is_empty());
    }

    #[tokio::test]
    async fn rejected_change_is_discarded() {
        let mut path = std::env::temp_dir();
        path.push(format!("daymark_state_{}.json", new_id()));
        let state = AppState::new(path.clone(), Store::default());

        let result: Result<(), AppError> = state
            .update(|data| {
                data.categories.push(category("Half-done"));
                Err(AppError::bad_request("nope"))
            })
            .await;
        assert!(result.is_err());
        assert!(state.data.lock().await.categories.is_empty());

        state
            .update(|data| {
                data.categories.push(category("Kept"));
                Ok(())
            })
            .await
            .unwrap();
        assert_eq!(state.data.lock().await.categories.len(), 1);
        let _ = tokio::fs::remove_file(&path).await;
    }
}
