//! Storage abstractions for per-user state
//!
//! The feed itself is computed from an immutable catalog. The only mutable
//! state is a user's saved library and their declared interests, and both
//! live behind these traits.

use crate::{error::AppResult, models::SavedItem};

pub mod memory;

pub use memory::MemoryStore;

/// Store for a user's saved videos
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SavedItemStore: Send + Sync {
    /// All saved items for the user, in the order they were saved
    async fn list(&self, user_id: &str) -> AppResult<Vec<SavedItem>>;

    async fn get(&self, user_id: &str, item_id: &str) -> AppResult<Option<SavedItem>>;

    /// Saves an item, replacing an earlier save of the same id
    async fn put(&self, user_id: &str, saved: SavedItem) -> AppResult<()>;

    /// Removes an item; returns whether anything was removed
    async fn delete(&self, user_id: &str, item_id: &str) -> AppResult<bool>;
}

/// Store for the categories a user selected during onboarding
#[async_trait::async_trait]
pub trait InterestStore: Send + Sync {
    async fn interests(&self, user_id: &str) -> AppResult<Option<Vec<String>>>;

    async fn set_interests(&self, user_id: &str, interests: Vec<String>) -> AppResult<()>;
}
