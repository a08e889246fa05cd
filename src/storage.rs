use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

/// Flat string-keyed storage shared by both trackers.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// In-memory map that is mirrored to a JSON file after each mutation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(transparent)]
pub struct LocalStore {
    entries: BTreeMap<String, String>,
}

impl LocalStore {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }
}

pub fn general_balance_key(site: &str) -> String {
    format!("general_balance_{site}")
}

pub fn daily_goals_key(site: &str) -> String {
    format!("daily_goals_{site}")
}

pub fn daily_progress_key(site: &str) -> String {
    format!("daily_progress_{site}")
}

pub fn daily_last_update_key(site: &str) -> String {
    format!("daily_lastUpdate_{site}")
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/store.json"))
}

pub async fn load_data(path: &Path) -> LocalStore {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(store) => store,
            Err(err) => {
                error!("failed to parse store file {}: {err}", path.display());
                LocalStore::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => LocalStore::default(),
        Err(err) => {
            error!("failed to read store file {}: {err}", path.display());
            LocalStore::default()
        }
    }
}

pub async fn persist_data(path: &Path, store: &LocalStore) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(store).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("progress_widget_{tag}_{}_{nanos}.json", std::process::id()));
        path
    }

    #[test]
    fn keys_follow_category_field_site_layout() {
        assert_eq!(general_balance_key("unu"), "general_balance_unu");
        assert_eq!(daily_goals_key("aviso"), "daily_goals_aviso");
        assert_eq!(daily_progress_key("aviso"), "daily_progress_aviso");
        assert_eq!(daily_last_update_key("socpublic"), "daily_lastUpdate_socpublic");
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut store = LocalStore::default();
        assert!(store.get("k").is_none());
        store.set("k", "1".into());
        store.set("k", "2".into());
        assert_eq!(store.get("k").as_deref(), Some("2"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn persisted_store_loads_back() {
        let path = temp_store_path("persist");
        let mut store = LocalStore::default();
        store.set(&general_balance_key("unu"), "250".into());

        persist_data(&path, &store).await.unwrap();
        let loaded = load_data(&path).await;
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, store);
    }

    #[tokio::test]
    async fn missing_or_corrupt_file_yields_empty_store() {
        let path = temp_store_path("missing");
        assert!(load_data(&path).await.is_empty());

        std::fs::write(&path, b"{not json").unwrap();
        let loaded = load_data(&path).await;
        let _ = std::fs::remove_file(&path);
        assert!(loaded.is_empty());
    }
}
