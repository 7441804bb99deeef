use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ContentItem, Priority, RevisitNudge};

/// A video a user saved to their library
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    #[serde(flatten)]
    pub item: ContentItem,
    pub saved_at: DateTime<Utc>,
    pub priority: Priority,
    /// Custom message shown when the item is resurfaced
    pub nudge_message: Option<String>,
}

/// Action carried by a save/unsave request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SaveAction {
    Save,
    Unsave,
}

impl SavedItem {
    pub fn new(item: ContentItem, saved_at: DateTime<Utc>, priority: Priority) -> Self {
        Self {
            item,
            saved_at,
            priority,
            nudge_message: None,
        }
    }

    pub fn with_nudge_message(mut self, message: impl Into<String>) -> Self {
        self.nudge_message = Some(message.into());
        self
    }

    /// Whole days elapsed since the item was saved, never negative
    pub fn days_since_saved(&self, now: DateTime<Utc>) -> u32 {
        let days = now.signed_duration_since(self.saved_at).num_days();
        u32::try_from(days.max(0)).unwrap_or(u32::MAX)
    }

    /// Converts the saved item into a nudge as of `now`
    pub fn to_nudge(&self, now: DateTime<Utc>) -> RevisitNudge {
        let days = self.days_since_saved(now);
        let message = self
            .nudge_message
            .clone()
            .unwrap_or_else(|| default_nudge_message(days));

        RevisitNudge::new(self.item.clone(), days, self.priority, message)
    }
}

fn default_nudge_message(days: u32) -> String {
    match days {
        d if d >= 14 => format!("You loved this {} weeks ago! Time for a refresher?", d / 7),
        d if d >= 7 => "Worth another look? You saved this over a week ago".to_string(),
        _ => "Still fresh in your saves - worth another look?".to_string(),
    }
}

/// Human readable age of a save, e.g. "3 days ago"
pub fn relative_time(saved_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = now.signed_duration_since(saved_at).num_days();

    match days {
        d if d <= 0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        d if d < 7 => format!("{} days ago", d),
        d if d < 14 => "1 week ago".to_string(),
        d if d < 30 => format!("{} weeks ago", d / 7),
        d => format!("{} months ago", d / 30),
    }
}
