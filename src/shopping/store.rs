//! File-backed item storage
//!
//! The list lives in a single JSON file and is re-read on every operation;
//! nothing is cached in memory. A mutex serializes each
//! load/mutate/persist cycle so that concurrent requests within this
//! process cannot lose updates. Writes go to a temporary sibling file that
//! is then renamed over the target.

use super::error::{Error, Result};
use super::helpers::{
    format_item_summary, highest_id, next_id, normalize_name, remove_from, toggle_in,
};
use super::models::Item;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Handle to the persisted shopping list
#[derive(Debug)]
pub struct ItemStore {
    /// Location of the JSON data file
    path: PathBuf,

    /// Highest id issued by this handle. Held for the whole cycle.
    last_issued: Mutex<u64>,
}

impl ItemStore {
    /// Creates a store backed by `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_issued: Mutex::new(0),
        }
    }

    /// Path of the backing data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the persisted list in storage order.
    pub async fn list_items(&self) -> Result<Vec<Item>> {
        let _guard = self.last_issued.lock().await;
        self.load().await
    }

    /// Appends a new unchecked item named `name` (trimmed).
    pub async fn add_item(&self, name: &str) -> Result<Item> {
        let name = normalize_name(name).ok_or(Error::EmptyName)?;

        let mut last_issued = self.last_issued.lock().await;
        let mut items = self.load().await?;

        let id = next_id(&items, *last_issued).ok_or(Error::IdExhausted)?;
        let item = Item::new(id, name);
        items.push(item.clone());
        self.save(&items).await?;
        *last_issued = item.id;

        tracing::info!(
            id = item.id,
            name = %item.name,
            summary = %format_item_summary(&items),
            "item added"
        );
        Ok(item)
    }

    /// Flips the `checked` flag of item `id` and returns the updated item.
    pub async fn toggle_item(&self, id: u64) -> Result<Item> {
        let _guard = self.last_issued.lock().await;
        let mut items = self.load().await?;

        let item = toggle_in(&mut items, id).ok_or(Error::NotFound(id))?;
        self.save(&items).await?;

        tracing::info!(id, checked = item.checked, "item toggled");
        Ok(item)
    }

    /// Removes item `id` from the list.
    pub async fn delete_item(&self, id: u64) -> Result<()> {
        let mut last_issued = self.last_issued.lock().await;
        let mut items = self.load().await?;
        *last_issued = (*last_issued).max(highest_id(&items));

        if !remove_from(&mut items, id) {
            return Err(Error::NotFound(id));
        }
        self.save(&items).await?;

        tracing::info!(id, summary = %format_item_summary(&items), "item deleted");
        Ok(())
    }

    /// Reads the data file. A missing file is an empty list.
    async fn load(&self) -> Result<Vec<Item>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrites the data file with `items` via write-temp-then-rename.
    async fn save(&self, items: &[Item]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let bytes = serde_json::to_vec(items)?;
        let tmp = self.temp_path();
        tokio::fs::write(&tmp, &bytes).await?;

        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(())
    }

    /// Unique sibling path used for an in-flight write
    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| super::models::DATA_FILE_NAME.to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4().simple()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ItemStore {
        ItemStore::new(dir.path().join("shopping_data.json"))
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_list() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.list_items().await.unwrap().is_empty());
        assert!(!store.path().exists(), "reading must not create the file");
    }

    #[tokio::test]
    async fn test_add_trims_and_persists() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let item = store.add_item("  Milk  ").await.unwrap();
        assert_eq!(item, Item::new(1, "Milk"));

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, r#"[{"id":1,"name":"Milk","checked":false}]"#);
    }

    #[tokio::test]
    async fn test_empty_name_does_not_touch_storage() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.add_item("Milk").await.unwrap();
        let before = std::fs::read(store.path()).unwrap();

        let err = store.add_item("   ").await.unwrap_err();
        assert!(matches!(err, Error::EmptyName));
        assert_eq!(std::fs::read(store.path()).unwrap(), before);
    }

    #[tokio::test]
    async fn test_ids_follow_existing_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            store.path(),
            r#"[{"id":3,"name":"Tea","checked":true},{"id":9,"name":"Rice","checked":false}]"#,
        )
        .unwrap();

        let item = store.add_item("Salt").await.unwrap();
        assert_eq!(item.id, 10);

        let items = store.list_items().await.unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Tea", "Rice", "Salt"]);
    }

    #[tokio::test]
    async fn test_deleted_highest_id_is_not_reused() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.add_item("Milk").await.unwrap();
        let bread = store.add_item("Bread").await.unwrap();

        store.delete_item(bread.id).await.unwrap();
        let eggs = store.add_item("Eggs").await.unwrap();
        assert_eq!(eggs.id, 3);
    }

    #[tokio::test]
    async fn test_deleting_preexisting_highest_id_is_not_reused() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), r#"[{"id":9,"name":"Rice","checked":false}]"#).unwrap();

        store.delete_item(9).await.unwrap();
        assert_eq!(store.add_item("Salt").await.unwrap().id, 10);
    }

    #[tokio::test]
    async fn test_add_after_max_id_fails_without_write() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let raw = r#"[{"id":18446744073709551615,"name":"Last","checked":false}]"#;
        std::fs::write(store.path(), raw).unwrap();

        let err = store.add_item("Y").await.unwrap_err();
        assert!(matches!(err, Error::IdExhausted));
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), raw);
    }

    #[tokio::test]
    async fn test_toggle_and_delete_unknown() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.add_item("Milk").await.unwrap();
        let before = std::fs::read(store.path()).unwrap();

        assert!(matches!(
            store.toggle_item(42).await.unwrap_err(),
            Error::NotFound(42)
        ));
        assert!(matches!(
            store.delete_item(42).await.unwrap_err(),
            Error::NotFound(42)
        ));
        assert_eq!(std::fs::read(store.path()).unwrap(), before);
    }

    #[tokio::test]
    async fn test_toggle_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.add_item("Milk").await.unwrap();

        assert!(store.toggle_item(1).await.unwrap().checked);
        assert!(!store.toggle_item(1).await.unwrap().checked);
        assert!(!store.list_items().await.unwrap()[0].checked);
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{not json").unwrap();

        assert!(matches!(
            store.list_items().await.unwrap_err(),
            Error::Json(_)
        ));
        assert!(store.add_item("Milk").await.is_err());
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "{not json");
    }

    #[tokio::test]
    async fn test_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store = ItemStore::new(dir.path().join("nested/deeper/list.json"));

        store.add_item("Milk").await.unwrap();
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_no_temp_files_left_behind() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        for name in ["Milk", "Bread", "Eggs"] {
            store.add_item(name).await.unwrap();
        }
        store.toggle_item(2).await.unwrap();
        store.delete_item(1).await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_adds_keep_every_item() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(store_in(&dir));

        let mut handles = Vec::new();
        for n in 0..16 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.add_item(&format!("item-{n}")).await.unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let items = store.list_items().await.unwrap();
        assert_eq!(items.len(), 16);
        let mut ids: Vec<u64> = items.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=16).collect::<Vec<u64>>());
    }
}
