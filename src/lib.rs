//! Mage: The Ascension character engine.
//!
//! This crate provides:
//! - The canonical character record and its rule tables
//! - A headless, step-by-step creation wizard enforcing point-buy budgets
//! - Experience cost formulas and atomic spends for advancement
//! - A storage-agnostic character repository with a JSON-file implementation
//!
//! # Quick Start
//!
//! ```ignore
//! use mage_core::{CreationWizard, JsonFileRepository, CharacterRepository, Tradition};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut wizard = CreationWizard::new();
//!     wizard.set_name("Thessaly");
//!     wizard.set_tradition(Tradition::Verbena);
//!     // ... walk the wizard through its steps ...
//!
//!     let character = wizard.finish()?;
//!
//!     let repository = JsonFileRepository::new("characters");
//!     repository.save(&character).await?;
//!     Ok(())
//! }
//! ```

pub mod advancement;
pub mod character;
pub mod creation;
pub mod game_data;
pub mod persist;
pub mod testing;

// Primary public API
pub use advancement::{AdvanceTarget, AdvancementError, XpCost};
pub use character::{Character, CharacterId, Essence, Nature, Tradition};
pub use creation::{CreationError, CreationStep, CreationWizard, FreebieTarget, Priority};
pub use persist::{CharacterRepository, JsonFileRepository, PersistError};
pub use testing::MemoryRepository;
