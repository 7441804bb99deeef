use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    config::FeedSettings,
    db::{InterestStore, MemoryStore, SavedItemStore},
    error::AppResult,
    services::{catalog::demo_saved_items, Catalog, FeedService, RevisitService, Scorer},
};

/// User the demo library is seeded for, and the default when requests omit `userId`
pub const DEFAULT_USER_ID: &str = "anonymous";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub saved_items: Arc<dyn SavedItemStore>,
    pub interests: Arc<dyn InterestStore>,
    pub revisit: RevisitService,
    pub feed: FeedService,
    pub settings: FeedSettings,
}

impl AppState {
    /// Creates state over the given catalog with empty in-memory stores
    pub fn new(catalog: Catalog, settings: FeedSettings) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::with_stores(catalog, settings, store.clone(), store)
    }

    pub fn with_stores(
        catalog: Catalog,
        settings: FeedSettings,
        saved_items: Arc<dyn SavedItemStore>,
        interests: Arc<dyn InterestStore>,
    ) -> Self {
        let catalog = Arc::new(catalog);
        let revisit = RevisitService::new(saved_items.clone(), settings.nudge_min_days);
        let feed = FeedService::new(
            catalog.clone(),
            revisit.clone(),
            Scorer::new(settings.weights),
            settings.nudges_per_page,
        );

        Self {
            catalog,
            saved_items,
            interests,
            revisit,
            feed,
            settings,
        }
    }

    /// Seeds the default user's saved library with the demo items
    pub async fn seed_demo_library(&self, now: DateTime<Utc>) -> AppResult<()> {
        let items = demo_saved_items(now);
        let count = items.len();

        for item in items {
            self.saved_items.put(DEFAULT_USER_ID, item).await?;
        }

        tracing::info!(user_id = DEFAULT_USER_ID, count, "Seeded demo saved library");
        Ok(())
    }
}
