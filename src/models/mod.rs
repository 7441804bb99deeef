pub mod content;
pub mod feed;
pub mod saved;
pub mod user_context;

pub use content::{ContentItem, Difficulty, FeedItem, Priority, RevisitNudge};
pub use feed::{FeedPage, FeedStats};
pub use saved::{relative_time, SaveAction, SavedItem};
pub use user_context::UserContext;
