//! Character persistence.
//!
//! The engine itself is storage-agnostic: callers hand records to a
//! [`CharacterRepository`] and the engine never waits on the result. The
//! bundled [`JsonFileRepository`] keeps one human-readable JSON file per
//! character. Corrupt files degrade to "absent" rather than failing a load.

use crate::character::{Character, CharacterId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Errors from persistence operations.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

/// Current store format version.
const STORE_VERSION: u32 = 1;

/// On-disk envelope around a character record.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredCharacter {
    version: u32,
    character: Character,
}

impl StoredCharacter {
    fn new(character: Character) -> Self {
        Self {
            version: STORE_VERSION,
            character,
        }
    }

    fn into_checked(self) -> Result<Character, PersistError> {
        if self.version != STORE_VERSION {
            return Err(PersistError::VersionMismatch {
                expected: STORE_VERSION,
                found: self.version,
            });
        }
        Ok(self.character)
    }
}

/// Storage contract for character records.
///
/// `save` is an upsert keyed by id and must refresh the record's
/// `updated_at` before writing; the stamped record is returned so the caller
/// can keep holding the persisted view.
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Every stored record, in no particular order.
    async fn list(&self) -> Result<Vec<Character>, PersistError>;

    /// Fetch one record. Absent or unreadable ids come back as `None`.
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, PersistError>;

    /// Insert or replace by id, stamping `updated_at`.
    async fn save(&self, character: &Character) -> Result<Character, PersistError>;

    /// Remove by id. Deleting an absent id is a no-op.
    async fn delete(&self, id: CharacterId) -> Result<(), PersistError>;
}

/// File-per-character JSON storage under a single directory.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    dir: PathBuf,
}

impl JsonFileRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn character_path(&self, id: CharacterId) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    async fn ensure_dir(&self) -> Result<(), PersistError> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).await?;
        }
        Ok(())
    }

    fn parse(content: &str) -> Result<Character, PersistError> {
        let stored: StoredCharacter = serde_json::from_str(content)?;
        stored.into_checked()
    }
}

#[async_trait]
impl CharacterRepository for JsonFileRepository {
    async fn list(&self) -> Result<Vec<Character>, PersistError> {
        self.ensure_dir().await?;

        let mut characters = Vec::new();
        let mut entries = fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if !path.extension().map(|e| e == "json").unwrap_or(false) {
                continue;
            }
            let content = fs::read_to_string(&path).await?;
            match Self::parse(&content) {
                Ok(character) => characters.push(character),
                Err(error) => {
                    // One bad file never takes the whole list down.
                    tracing::warn!(path = %path.display(), %error, "skipping unreadable character file");
                }
            }
        }
        Ok(characters)
    }

    async fn get(&self, id: CharacterId) -> Result<Option<Character>, PersistError> {
        let path = self.character_path(id);
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };
        match Self::parse(&content) {
            Ok(character) => Ok(Some(character)),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "stored character is unreadable");
                Ok(None)
            }
        }
    }

    async fn save(&self, character: &Character) -> Result<Character, PersistError> {
        self.ensure_dir().await?;

        let mut stamped = character.clone();
        stamped.touch();

        let stored = StoredCharacter::new(stamped.clone());
        let content = serde_json::to_string_pretty(&stored)?;
        fs::write(self.character_path(stamped.id), content).await?;

        tracing::debug!(id = %stamped.id, name = %stamped.name, "character saved");
        Ok(stamped)
    }

    async fn delete(&self, id: CharacterId) -> Result<(), PersistError> {
        match fs::remove_file(self.character_path(id)).await {
            Ok(()) => {
                tracing::debug!(%id, "character deleted");
                Ok(())
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}
