use std::collections::HashMap;

use tokio::sync::RwLock;

use super::{InterestStore, SavedItemStore};
use crate::{error::AppResult, models::SavedItem};

/// In-memory implementation of the user stores
#[derive(Default)]
pub struct MemoryStore {
    saved: RwLock<HashMap<String, Vec<SavedItem>>>,
    interests: RwLock<HashMap<String, Vec<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SavedItemStore for MemoryStore {
    async fn list(&self, user_id: &str) -> AppResult<Vec<SavedItem>> {
        let saved = self.saved.read().await;
        Ok(saved.get(user_id).cloned().unwrap_or_default())
    }

    async fn get(&self, user_id: &str, item_id: &str) -> AppResult<Option<SavedItem>> {
        let saved = self.saved.read().await;
        Ok(saved
            .get(user_id)
            .and_then(|items| items.iter().find(|s| s.item.id == item_id))
            .cloned())
    }

    async fn put(&self, user_id: &str, item: SavedItem) -> AppResult<()> {
        let mut saved = self.saved.write().await;
        let items = saved.entry(user_id.to_string()).or_default();

        // Re-saving moves the item to the end of the library
        items.retain(|s| s.item.id != item.item.id);
        items.push(item);

        tracing::debug!(user_id = %user_id, count = items.len(), "Saved item stored");
        Ok(())
    }

    async fn delete(&self, user_id: &str, item_id: &str) -> AppResult<bool> {
        let mut saved = self.saved.write().await;
        let Some(items) = saved.get_mut(user_id) else {
            return Ok(false);
        };

        let before = items.len();
        items.retain(|s| s.item.id != item_id);
        Ok(items.len() != before)
    }
}

#[async_trait::async_trait]
impl InterestStore for MemoryStore {
    async fn interests(&self, user_id: &str) -> AppResult<Option<Vec<String>>> {
        let interests = self.interests.read().await;
        Ok(interests.get(user_id).cloned())
    }

    async fn set_interests(&self, user_id: &str, interests: Vec<String>) -> AppResult<()> {
        let mut all = self.interests.write().await;
        all.insert(user_id.to_string(), interests);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentItem, Priority};
    use chrono::Utc;

    fn saved(id: &str) -> SavedItem {
        SavedItem::new(ContentItem::new(id, "tech", 0.5), Utc::now(), Priority::Medium)
    }

    #[tokio::test]
    async fn test_put_and_list_preserves_order() {
        let store = MemoryStore::new();
        store.put("alice", saved("1")).await.unwrap();
        store.put("alice", saved("2")).await.unwrap();

        let ids: Vec<String> = store
            .list("alice")
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.item.id)
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_put_replaces_existing_save() {
        let store = MemoryStore::new();
        store.put("alice", saved("1")).await.unwrap();
        store.put("alice", saved("2")).await.unwrap();
        store
            .put("alice", saved("1").with_nudge_message("again"))
            .await
            .unwrap();

        let items = store.list("alice").await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].item.id, "1");
        assert_eq!(items[1].nudge_message.as_deref(), Some("again"));
    }

    #[tokio::test]
    async fn test_users_are_isolated() {
        let store = MemoryStore::new();
        store.put("alice", saved("1")).await.unwrap();

        assert!(store.list("bob").await.unwrap().is_empty());
        assert!(store.get("bob", "1").await.unwrap().is_none());
        assert!(store.get("alice", "1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryStore::new();
        store.put("alice", saved("1")).await.unwrap();

        assert!(store.delete("alice", "1").await.unwrap());
        assert!(!store.delete("alice", "1").await.unwrap());
        assert!(!store.delete("nobody", "1").await.unwrap());
        assert!(store.list("alice").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_interests_round_trip() {
        let store = MemoryStore::new();
        assert!(store.interests("alice").await.unwrap().is_none());

        store
            .set_interests("alice", vec!["tech".to_string(), "finance".to_string()])
            .await
            .unwrap();

        assert_eq!(
            store.interests("alice").await.unwrap(),
            Some(vec!["tech".to_string(), "finance".to_string()])
        );
    }
}
