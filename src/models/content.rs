use serde::{Deserialize, Deserializer, Serialize};

/// How demanding a video is for the viewer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Priority of a saved video when it is resurfaced as a revisit nudge
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Ordering weight, higher ranks first
    pub fn weight(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

/// A short-form video in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Stable identifier, unique within one catalog snapshot
    pub id: String,
    pub title: String,
    pub channel: String,
    /// Topic tag (e.g. "tech", "cooking")
    pub category: String,
    /// Precomputed popularity/quality signal in [0, 1]
    #[serde(deserialize_with = "deserialize_engagement")]
    pub engagement_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Length of the video in seconds
    #[serde(default)]
    pub duration_secs: u32,
}

impl ContentItem {
    /// Creates an item with an empty title and channel.
    ///
    /// The engagement score is clamped into [0, 1].
    pub fn new(id: impl Into<String>, category: impl Into<String>, engagement_score: f64) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            channel: String::new(),
            category: category.into(),
            engagement_score: engagement_score.clamp(0.0, 1.0),
            difficulty: None,
            tags: Vec::new(),
            duration_secs: 0,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>, channel: impl Into<String>) -> Self {
        self.title = title.into();
        self.channel = channel.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_duration(mut self, duration_secs: u32) -> Self {
        self.duration_secs = duration_secs;
        self
    }
}

fn deserialize_engagement<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(f64::deserialize(deserializer)?.clamp(0.0, 1.0))
}

/// A previously saved video that is eligible to be resurfaced in the feed
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RevisitNudge {
    #[serde(flatten)]
    pub item: ContentItem,
    pub days_since_saved: u32,
    pub priority: Priority,
    pub nudge_message: String,
    pub is_revisit: bool,
}

impl RevisitNudge {
    pub fn new(
        item: ContentItem,
        days_since_saved: u32,
        priority: Priority,
        nudge_message: impl Into<String>,
    ) -> Self {
        Self {
            item,
            days_since_saved,
            priority,
            nudge_message: nudge_message.into(),
            is_revisit: true,
        }
    }
}

/// One entry of a composed feed
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FeedItem {
    /// A catalog item placed by ranking or injected as a mix-in
    Ordinary(ContentItem),
    /// A saved item resurfaced to encourage re-engagement
    RevisitNudge(RevisitNudge),
}

impl FeedItem {
    pub fn content(&self) -> &ContentItem {
        match self {
            FeedItem::Ordinary(item) => item,
            FeedItem::RevisitNudge(nudge) => &nudge.item,
        }
    }

    pub fn id(&self) -> &str {
        &self.content().id
    }

    pub fn category(&self) -> &str {
        &self.content().category
    }

    pub fn is_revisit(&self) -> bool {
        matches!(self, FeedItem::RevisitNudge(_))
    }
}
