use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::models::{FeedPage, RevisitNudge, UserContext};

use super::{catalog::Catalog, composer::FeedComposer, revisit::RevisitService, scoring::Scorer};

/// A validated feed request
#[derive(Debug, Clone)]
pub struct FeedRequest {
    pub user_id: String,
    /// 1-based page number
    pub page: usize,
    pub limit: usize,
    pub context: UserContext,
}

/// Builds personalized feed pages from the catalog and the user's saved library
#[derive(Clone)]
pub struct FeedService {
    catalog: Arc<Catalog>,
    revisit: RevisitService,
    scorer: Scorer,
    nudges_per_page: usize,
}

impl FeedService {
    pub fn new(
        catalog: Arc<Catalog>,
        revisit: RevisitService,
        scorer: Scorer,
        nudges_per_page: usize,
    ) -> Self {
        Self {
            catalog,
            revisit,
            scorer,
            nudges_per_page,
        }
    }

    /// Composes the full feed for the request and returns the requested page.
    ///
    /// Nudges are only fetched for the first page. A failed nudge lookup is
    /// logged and the feed is built without nudges.
    pub async fn build_feed(&self, request: &FeedRequest, now: DateTime<Utc>) -> FeedPage {
        let nudges = if request.page == 1 {
            self.first_page_nudges(&request.user_id, now).await
        } else {
            Vec::new()
        };

        let composed = FeedComposer::new(&self.scorer, &request.context)
            .compose(self.catalog.items(), &nudges);

        tracing::info!(
            user_id = %request.user_id,
            page = request.page,
            limit = request.limit,
            composed = composed.len(),
            nudges_offered = nudges.len(),
            "Feed built"
        );

        composed.into_page(request.page, request.limit)
    }

    async fn first_page_nudges(&self, user_id: &str, now: DateTime<Utc>) -> Vec<RevisitNudge> {
        match self.revisit.nudges(user_id, now).await {
            Ok(mut nudges) => {
                nudges.truncate(self.nudges_per_page);
                nudges
            }
            Err(e) => {
                tracing::warn!(user_id = %user_id, error = %e, "Failed to fetch revisit nudges");
                Vec::new()
            }
        }
    }
}
