use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    db::SavedItemStore,
    error::AppResult,
    models::{Priority, RevisitNudge, SavedItem},
};

/// Per-priority counts of a nudge list
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NudgeStats {
    pub high_priority: usize,
    pub medium_priority: usize,
    pub low_priority: usize,
}

impl NudgeStats {
    pub fn from_nudges(nudges: &[RevisitNudge]) -> Self {
        let count = |priority: Priority| nudges.iter().filter(|n| n.priority == priority).count();

        Self {
            high_priority: count(Priority::High),
            medium_priority: count(Priority::Medium),
            low_priority: count(Priority::Low),
        }
    }
}

/// Filters saved items to those at least `min_days` old and ranks them by
/// priority (high first), then engagement descending.
pub fn rank_nudges(saved: &[SavedItem], now: DateTime<Utc>, min_days: u32) -> Vec<RevisitNudge> {
    let mut nudges: Vec<RevisitNudge> = saved
        .iter()
        .filter(|item| item.days_since_saved(now) >= min_days)
        .map(|item| item.to_nudge(now))
        .collect();

    nudges.sort_by(|a, b| {
        b.priority
            .weight()
            .cmp(&a.priority.weight())
            .then_with(|| b.item.engagement_score.total_cmp(&a.item.engagement_score))
    });

    nudges
}

/// Resurfaces a user's saved videos as revisit nudges
#[derive(Clone)]
pub struct RevisitService {
    store: Arc<dyn SavedItemStore>,
    min_days: u32,
}

impl RevisitService {
    pub fn new(store: Arc<dyn SavedItemStore>, min_days: u32) -> Self {
        Self { store, min_days }
    }

    /// Eligible nudges for the user, best first
    pub async fn nudges(&self, user_id: &str, now: DateTime<Utc>) -> AppResult<Vec<RevisitNudge>> {
        let saved = self.store.list(user_id).await?;
        let nudges = rank_nudges(&saved, now, self.min_days);

        tracing::debug!(
            user_id = %user_id,
            saved = saved.len(),
            eligible = nudges.len(),
            min_days = self.min_days,
            "Revisit nudges ranked"
        );

        Ok(nudges)
    }

    /// Every saved item in save order, without filtering
    pub async fn all(&self, user_id: &str, now: DateTime<Utc>) -> AppResult<Vec<RevisitNudge>> {
        let saved = self.store.list(user_id).await?;
        Ok(saved.iter().map(|item| item.to_nudge(now)).collect())
    }
}
