use serde::Deserialize;

use crate::services::ScoringWeights;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Fallback log filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Page size used when a feed request omits `limit`
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Largest accepted `limit`
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,

    /// Revisit nudges injected into the first feed page
    #[serde(default = "default_nudges_per_page")]
    pub nudges_per_page: usize,

    /// Minimum age in days before a saved video can be resurfaced
    #[serde(default = "default_nudge_min_days")]
    pub nudge_min_days: u32,

    /// Seed the demo user's saved library at startup
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,

    /// Multiplier applied to an item's engagement signal
    #[serde(default = "default_score_engagement_scale")]
    pub score_engagement_scale: f64,

    #[serde(default = "default_score_interest_bonus")]
    pub score_interest_bonus: f64,

    /// Bonus when an interest is related to the item's category
    #[serde(default = "default_score_related_bonus")]
    pub score_related_bonus: f64,

    #[serde(default = "default_score_rewatch_penalty")]
    pub score_rewatch_penalty: f64,

    #[serde(default = "default_score_beginner_bonus")]
    pub score_beginner_bonus: f64,

    #[serde(default = "default_score_intermediate_bonus")]
    pub score_intermediate_bonus: f64,
}

/// The subset of configuration the feed handlers need at request time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedSettings {
    pub default_page_size: usize,
    pub max_page_size: usize,
    pub nudges_per_page: usize,
    pub nudge_min_days: u32,
    pub weights: ScoringWeights,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            nudges_per_page: default_nudges_per_page(),
            nudge_min_days: default_nudge_min_days(),
            weights: ScoringWeights::default(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_page_size() -> usize {
    10
}

fn default_max_page_size() -> usize {
    50
}

fn default_nudges_per_page() -> usize {
    2
}

fn default_nudge_min_days() -> u32 {
    3
}

fn default_seed_demo_data() -> bool {
    true
}

fn default_score_engagement_scale() -> f64 {
    ScoringWeights::default().engagement_scale
}

fn default_score_interest_bonus() -> f64 {
    ScoringWeights::default().interest_match_bonus
}

fn default_score_related_bonus() -> f64 {
    ScoringWeights::default().related_interest_bonus
}

fn default_score_rewatch_penalty() -> f64 {
    ScoringWeights::default().rewatch_penalty
}

fn default_score_beginner_bonus() -> f64 {
    ScoringWeights::default().beginner_bonus
}

fn default_score_intermediate_bonus() -> f64 {
    ScoringWeights::default().intermediate_bonus
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Server bind address
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn feed_settings(&self) -> FeedSettings {
        FeedSettings {
            default_page_size: self.default_page_size,
            max_page_size: self.max_page_size,
            nudges_per_page: self.nudges_per_page,
            nudge_min_days: self.nudge_min_days,
            weights: self.scoring_weights(),
        }
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights {
            engagement_scale: self.score_engagement_scale,
            interest_match_bonus: self.score_interest_bonus,
            related_interest_bonus: self.score_related_bonus,
            rewatch_penalty: self.score_rewatch_penalty,
            beginner_bonus: self.score_beginner_bonus,
            intermediate_bonus: self.score_intermediate_bonus,
        }
    }
}
