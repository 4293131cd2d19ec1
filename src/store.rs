//! Favorites persistence behind a narrow read/write interface.
//!
//! The extraction pipeline takes no dependency on this module; it exists
//! for callers that keep favorited recipes (with their edits) around.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use log::warn;
use thiserror::Error;

use crate::model::Recipe;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Narrow persistence interface for saved recipes.
pub trait RecipeStore {
    fn get(&self, id: &str) -> Result<Option<Recipe>, StoreError>;
    fn put(&self, id: &str, recipe: &Recipe) -> Result<(), StoreError>;
    fn delete(&self, id: &str) -> Result<(), StoreError>;
    fn list(&self) -> Result<Vec<String>, StoreError>;
}

/// Flat JSON-object file, id -> recipe. An unreadable or corrupt file
/// reads as an empty store; writes rewrite the whole file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    fn read_all(&self) -> BTreeMap<String, Recipe> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(err) => {
                warn!("favorites file unreadable, starting empty: {err}");
                BTreeMap::new()
            }
        }
    }

    fn write_all(&self, map: &BTreeMap<String, Recipe>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl RecipeStore for JsonFileStore {
    fn get(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        Ok(self.read_all().remove(id))
    }

    fn put(&self, id: &str, recipe: &Recipe) -> Result<(), StoreError> {
        let mut map = self.read_all();
        map.insert(id.to_string(), recipe.clone());
        self.write_all(&map)
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut map = self.read_all();
        if map.remove(id).is_some() {
            self.write_all(&map)?;
        }
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.read_all().into_keys().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        let mut recipe = Recipe::new("https://example.com/cake");
        recipe.title = "Carrot Cake".to_string();
        recipe.ingredients = vec!["3 carrots".to_string()];
        recipe
    }

    #[test]
    fn test_put_get_delete_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("favorites.json"));
        let recipe = sample_recipe();
        let id = recipe.id();

        store.put(&id, &recipe).unwrap();
        assert_eq!(store.get(&id).unwrap(), Some(recipe));
        assert_eq!(store.list().unwrap(), vec![id.clone()]);

        store.delete(&id).unwrap();
        assert_eq!(store.get(&id).unwrap(), None);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nope.json"));
        assert_eq!(store.get("anything").unwrap(), None);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file_reads_empty_and_recovers_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        fs::write(&path, "{ this is not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert_eq!(store.get("x").unwrap(), None);

        let recipe = sample_recipe();
        store.put(&recipe.id(), &recipe).unwrap();
        assert_eq!(store.get(&recipe.id()).unwrap(), Some(recipe));
    }

    #[test]
    fn test_delete_missing_id_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("favorites.json"));
        store.delete("ghost").unwrap();
    }
}
