use crate::errors::AppError;
use crate::models::Store;
use std::path::Path;
use tokio::fs;
use tracing::error;

pub async fn load_data(path: &Path) -> Store {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file {}: {err}", path.display());
                Store::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Store::default(),
        Err(err) => {
            error!("failed to read data file {}: {err}", path.display());
            Store::default()
        }
    }
}

/// Writes to a sibling temp file first so a crash never leaves half a document.
pub async fn persist_data(path: &Path, data: &Store) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, payload).await.inspect_err(|err| {
        error!("failed to write {}: {err}", tmp.display());
    })?;
    fs::rename(&tmp, path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, new_id};
    use chrono::Utc;

    fn temp_path(tag: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("daymark_storage_{tag}_{}_{}.json", std::process::id(), new_id()));
        path
    }

    #[tokio::test]
    async fn missing_file_loads_empty_store() {
        let data = load_data(&temp_path("missing")).await;
        assert!(data.categories.is_empty());
        assert!(data.habits.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty_store() {
        let path = temp_path("corrupt");
        fs::write(&path, b"{not json").await.unwrap();
        let data = load_data(&path).await;
        assert!(data.countdowns.is_empty());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persisted_store_reloads() {
        let path = temp_path("persist");
        let mut data = Store::default();
        data.categories.push(Category {
            id: new_id(),
            name: "Fitness".into(),
            color: "#2f4858".into(),
            created_at: Utc::now(),
        });

        persist_data(&path, &data).await.unwrap();
        let loaded = load_data(&path).await;
        assert_eq!(loaded.categories.len(), 1);
        assert_eq!(loaded.categories[0].name, "Fitness");
        let _ = fs::remove_file(&path).await;
    }
}
