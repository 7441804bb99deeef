use std::collections::HashSet;

use crate::models::{ContentItem, FeedItem, FeedPage, FeedStats, RevisitNudge, UserContext};

use super::scoring::Scorer;

/// Walk positions (1-based) at which a revisit nudge may be injected
const NUDGE_INTERVAL: usize = 4;
/// Walk positions (1-based) at which a mix-in may be injected
const MIX_IN_INTERVAL: usize = 3;

/// A catalog item paired with its score for the current request
#[derive(Debug, Clone, Copy)]
struct ScoredItem<'a> {
    item: &'a ContentItem,
    score: f64,
}

/// One entry of the composed sequence. Nudges are never scored.
#[derive(Debug, Clone)]
struct ComposedEntry {
    item: FeedItem,
    score: Option<f64>,
}

impl ComposedEntry {
    fn scored(scored: &ScoredItem<'_>) -> Self {
        Self {
            item: FeedItem::Ordinary(scored.item.clone()),
            score: Some(scored.score),
        }
    }

    fn nudge(nudge: &RevisitNudge) -> Self {
        Self {
            item: FeedItem::RevisitNudge(nudge.clone()),
            score: None,
        }
    }
}

/// The fully sorted and interleaved feed, before pagination
#[derive(Debug, Clone)]
pub struct ComposedFeed {
    entries: Vec<ComposedEntry>,
    stats: FeedStats,
}

impl ComposedFeed {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stats over the whole composed sequence, not a single page
    pub fn stats(&self) -> &FeedStats {
        &self.stats
    }

    /// Ids in composed order
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.item.id()).collect()
    }

    /// Slices out 1-based `page` of `limit` entries and drops internal scores.
    ///
    /// Pages past the end are empty with `has_more == false`.
    pub fn into_page(self, page: usize, limit: usize) -> FeedPage {
        let total = self.entries.len();
        let start = page.saturating_sub(1).saturating_mul(limit);
        let end = page.saturating_mul(limit);

        let items = self
            .entries
            .into_iter()
            .skip(start)
            .take(limit)
            .map(|entry| entry.item)
            .collect();

        FeedPage {
            items,
            has_more: end < total,
            total,
            stats: self.stats,
        }
    }
}

/// Ranks a catalog for one user and interleaves diversity and revisit content
///
/// Composition happens in three passes:
/// 1. Every item is scored and the catalog is stably sorted by score, highest first.
/// 2. When the user has interests, the sorted items outside those interests form
///    the mix-in pool.
/// 3. The sorted list is walked by 1-based position. After each item, every 4th
///    position injects the next revisit nudge (while any remain), otherwise every
///    3rd position injects the next mix-in. Both cursors advance even when the
///    candidate is already in the feed, in which case it is skipped.
///
/// Only injections are checked against the feed built so far. A mix-in pulled
/// ahead of its ranked position still appears again when the walk reaches it.
///
/// A user without interests gets the sorted list unchanged, with no nudges.
pub struct FeedComposer<'a> {
    scorer: &'a Scorer,
    context: &'a UserContext,
}

impl<'a> FeedComposer<'a> {
    pub fn new(scorer: &'a Scorer, context: &'a UserContext) -> Self {
        Self { scorer, context }
    }

    /// Composes the full feed from a catalog snapshot and a ranked nudge list
    pub fn compose(&self, catalog: &[ContentItem], nudges: &[RevisitNudge]) -> ComposedFeed {
        let sorted = self.rank(catalog);

        let entries: Vec<ComposedEntry> = if self.context.interests.is_empty() {
            sorted.iter().map(ComposedEntry::scored).collect()
        } else {
            self.interleave(&sorted, nudges)
        };

        let stats = self.stats(&entries);

        tracing::debug!(
            catalog = catalog.len(),
            composed = entries.len(),
            nudges = stats.revisit_nudges,
            mix_ins = stats.mix_ins,
            "Feed composed"
        );

        ComposedFeed { entries, stats }
    }

    fn rank<'c>(&self, catalog: &'c [ContentItem]) -> Vec<ScoredItem<'c>> {
        let mut scored: Vec<ScoredItem<'c>> = catalog
            .iter()
            .map(|item| ScoredItem {
                item,
                score: self.scorer.score(item, self.context),
            })
            .collect();

        // sort_by is stable, so equal scores keep catalog order
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }

    fn interleave<'c>(
        &self,
        sorted: &[ScoredItem<'c>],
        nudges: &'c [RevisitNudge],
    ) -> Vec<ComposedEntry> {
        let mix_in_pool: Vec<&ScoredItem<'c>> = sorted
            .iter()
            .filter(|scored| !self.context.has_interest(&scored.item.category))
            .collect();

        let mut composed = Vec::with_capacity(sorted.len() + nudges.len());
        let mut emitted: HashSet<&'c str> = HashSet::with_capacity(composed.capacity());
        let mut nudge_cursor = 0;
        let mut mix_in_cursor = 0;

        for (index, scored) in sorted.iter().enumerate() {
            let position = index + 1;

            emitted.insert(scored.item.id.as_str());
            composed.push(ComposedEntry::scored(scored));

            if position % NUDGE_INTERVAL == 0 && nudge_cursor < nudges.len() {
                let nudge = &nudges[nudge_cursor];
                nudge_cursor += 1;

                if emitted.insert(nudge.item.id.as_str()) {
                    composed.push(ComposedEntry::nudge(nudge));
                }
            } else if position % MIX_IN_INTERVAL == 0 && mix_in_cursor < mix_in_pool.len() {
                let mix_in = mix_in_pool[mix_in_cursor];
                mix_in_cursor += 1;

                if emitted.insert(mix_in.item.id.as_str()) {
                    composed.push(ComposedEntry::scored(mix_in));
                }
            }
        }

        composed
    }

    fn stats(&self, entries: &[ComposedEntry]) -> FeedStats {
        let total_videos = entries.len();
        let interest_matches = entries
            .iter()
            .filter(|entry| self.context.has_interest(entry.item.category()))
            .count();
        let mix_ins = entries
            .iter()
            .filter(|entry| {
                !self.context.has_interest(entry.item.category()) && !entry.item.is_revisit()
            })
            .count();
        let revisit_nudges = entries.iter().filter(|entry| entry.item.is_revisit()).count();

        let avg_score = if total_videos == 0 {
            0.0
        } else {
            let sum: f64 = entries.iter().map(|entry| entry.score.unwrap_or(0.0)).sum();
            sum / total_videos as f64
        };

        FeedStats {
            total_videos,
            interest_matches,
            mix_ins,
            revisit_nudges,
            avg_score,
        }
    }
}
