//! Testing utilities.
//!
//! Provides `MemoryRepository`, an in-memory [`CharacterRepository`] so
//! engine callers can be exercised without touching the filesystem.

use crate::character::{Character, CharacterId};
use crate::persist::{CharacterRepository, PersistError};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// In-memory character storage with the same contract as the file-backed
/// repository, including the `updated_at` refresh on save.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    characters: Mutex<HashMap<CharacterId, Character>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with existing records.
    pub fn with_characters(characters: impl IntoIterator<Item = Character>) -> Self {
        Self {
            characters: Mutex::new(characters.into_iter().map(|c| (c.id, c)).collect()),
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.characters.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.characters.lock().await.is_empty()
    }
}

#[async_trait]
impl CharacterRepository for MemoryRepository {
    async fn list(&self) -> Result<Vec<Character>, PersistError> {
        Ok(self.characters.lock().await.values().cloned().collect())
    }

    async fn get(&self, id: CharacterId) -> Result<Option<Character>, PersistError> {
        Ok(self.characters.lock().await.get(&id).cloned())
    }

    async fn save(&self, character: &Character) -> Result<Character, PersistError> {
        let mut stamped = character.clone();
        stamped.touch();
        self.characters
            .lock()
            .await
            .insert(stamped.id, stamped.clone());
        Ok(stamped)
    }

    async fn delete(&self, id: CharacterId) -> Result<(), PersistError> {
        self.characters.lock().await.remove(&id);
        Ok(())
    }
}
