pub mod catalog;
pub mod categories;
pub mod composer;
pub mod feed;
pub mod revisit;
pub mod scoring;

pub use catalog::Catalog;
pub use categories::related_categories;
pub use composer::{ComposedFeed, FeedComposer};
pub use feed::{FeedRequest, FeedService};
pub use revisit::{rank_nudges, NudgeStats, RevisitService};
pub use scoring::{Scorer, ScoringWeights};
