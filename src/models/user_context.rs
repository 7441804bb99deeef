use std::collections::HashSet;

/// Per-request view of the viewer: declared interests and what they already watched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserContext {
    /// Categories the user selected
    pub interests: HashSet<String>,
    /// Ids of items the user has already seen
    pub watch_history: HashSet<String>,
}

impl UserContext {
    pub fn new<I, W>(interests: I, watch_history: W) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        W: IntoIterator,
        W::Item: Into<String>,
    {
        Self {
            interests: interests.into_iter().map(Into::into).collect(),
            watch_history: watch_history.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_interest(&self, category: &str) -> bool {
        self.interests.contains(category)
    }

    pub fn has_watched(&self, item_id: &str) -> bool {
        self.watch_history.contains(item_id)
    }
}
