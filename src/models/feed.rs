use serde::Serialize;

use super::FeedItem;

/// Aggregate counters over a full composed feed
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeedStats {
    pub total_videos: usize,
    /// Entries whose category is one of the user's interests
    pub interest_matches: usize,
    /// Non-nudge entries outside the user's interests
    pub mix_ins: usize,
    pub revisit_nudges: usize,
    /// Mean relevance score, injected nudges counting as zero
    pub avg_score: f64,
}

/// One page of the composed feed, as returned to clients
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage {
    pub items: Vec<FeedItem>,
    pub has_more: bool,
    /// Length of the full composed feed
    pub total: usize,
    pub stats: FeedStats,
}
