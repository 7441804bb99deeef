use crate::models::{ContentItem, Difficulty, UserContext};

use super::categories::related_categories;

/// Tunable constants of the relevance score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Multiplier applied to the engagement signal
    pub engagement_scale: f64,
    /// Bonus when the item's category is one of the user's interests
    pub interest_match_bonus: f64,
    /// Bonus when an interest is related to the item's category
    pub related_interest_bonus: f64,
    /// Penalty for items already in the watch history
    pub rewatch_penalty: f64,
    pub beginner_bonus: f64,
    pub intermediate_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            engagement_scale: 100.0,
            interest_match_bonus: 50.0,
            related_interest_bonus: 20.0,
            rewatch_penalty: 30.0,
            beginner_bonus: 5.0,
            intermediate_bonus: 3.0,
        }
    }
}

/// Computes the relevance of one catalog item for one user
///
/// Scoring is pure: the same item and context always give the same score,
/// and the result is never negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, item: &ContentItem, context: &UserContext) -> f64 {
        let weights = &self.weights;
        let mut score = item.engagement_score * weights.engagement_scale;

        if context.has_interest(&item.category) {
            score += weights.interest_match_bonus;
        } else if related_categories(&item.category)
            .iter()
            .any(|related| context.has_interest(related))
        {
            score += weights.related_interest_bonus;
        }

        if context.has_watched(&item.id) {
            score -= weights.rewatch_penalty;
        }

        score += self.difficulty_bonus(item.difficulty);

        score.max(0.0)
    }

    fn difficulty_bonus(&self, difficulty: Option<Difficulty>) -> f64 {
        match difficulty {
            Some(Difficulty::Beginner) => self.weights.beginner_bonus,
            Some(Difficulty::Intermediate) => self.weights.intermediate_bonus,
            Some(Difficulty::Advanced) | None => 0.0,
        }
    }
}
