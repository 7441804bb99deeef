use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::models::{ContentItem, Difficulty, Priority, SavedItem};

/// Immutable catalog snapshot with id lookup
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<ContentItem>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog; a repeated id keeps its first occurrence for lookups
    pub fn new(items: Vec<ContentItem>) -> Self {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if index.contains_key(&item.id) {
                tracing::warn!(id = %item.id, "Duplicate catalog id");
                continue;
            }
            index.insert(item.id.clone(), position);
        }

        Self { items, index }
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&ContentItem> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Twelve demo videos, two per category
    pub fn demo() -> Self {
        use Difficulty::*;

        let video = |id: &str, title: &str, channel: &str, category: &str, engagement: f64| {
            ContentItem::new(id, category, engagement).with_title(title, channel)
        };

        Self::new(vec![
            video("1", "Master React Hooks in 60 Seconds", "CodeMaster", "tech", 0.85)
                .with_difficulty(Intermediate)
                .with_tags(["react", "hooks", "javascript"])
                .with_duration(60),
            video("2", "JavaScript Closures Explained Simply", "DevTips", "tech", 0.78)
                .with_difficulty(Advanced)
                .with_tags(["javascript", "closures", "fundamentals"])
                .with_duration(180),
            video("3", "Morning Motivation: Transform Your Mindset", "MotivationDaily", "motivation", 0.92)
                .with_difficulty(Beginner)
                .with_tags(["motivation", "mindset", "morning"])
                .with_duration(120),
            video("4", "5 Habits of Successful People", "SuccessPath", "motivation", 0.88)
                .with_difficulty(Beginner)
                .with_tags(["success", "habits", "productivity"])
                .with_duration(240),
            video("5", "Perfect Pasta in Under 10 Minutes", "QuickChef", "cooking", 0.95)
                .with_difficulty(Beginner)
                .with_tags(["pasta", "quick", "italian"])
                .with_duration(300),
            video("6", "Knife Skills Every Cook Needs", "CulinaryMaster", "cooking", 0.87)
                .with_difficulty(Intermediate)
                .with_tags(["knife", "skills", "techniques"])
                .with_duration(420),
            video("7", "5-Minute Meditation for Beginners", "MindfulMoments", "wellness", 0.91)
                .with_difficulty(Beginner)
                .with_tags(["meditation", "mindfulness", "stress"])
                .with_duration(300),
            video("8", "Breathing Techniques for Anxiety", "WellnessWise", "wellness", 0.89)
                .with_difficulty(Beginner)
                .with_tags(["breathing", "anxiety", "calm"])
                .with_duration(180),
            video("9", "Speed Reading Techniques That Work", "LearnFast", "learning", 0.83)
                .with_difficulty(Intermediate)
                .with_tags(["reading", "learning", "productivity"])
                .with_duration(360),
            video("10", "Memory Palace Method Explained", "BrainHacks", "learning", 0.86)
                .with_difficulty(Advanced)
                .with_tags(["memory", "learning", "techniques"])
                .with_duration(480),
            video("11", "Investing Basics for Beginners", "MoneyWise", "finance", 0.84)
                .with_difficulty(Beginner)
                .with_tags(["investing", "stocks", "finance"])
                .with_duration(420),
            video("12", "Budget Like a Pro in 2024", "FinanceFree", "finance", 0.88)
                .with_difficulty(Beginner)
                .with_tags(["budget", "planning", "money"])
                .with_duration(300),
        ])
    }
}

/// Saved library seeded for the demo user, saved 14, 10, 7 and 3 days before `now`
pub fn demo_saved_items(now: DateTime<Utc>) -> Vec<SavedItem> {
    let saved = |item: ContentItem, days: i64, priority: Priority, message: &str| {
        SavedItem::new(item, now - Duration::days(days), priority).with_nudge_message(message)
    };

    vec![
        saved(
            ContentItem::new("revisit_1", "learning", 0.92)
                .with_title("The Science of Habit Formation", "LifeHacker"),
            14,
            Priority::High,
            "You loved this 2 weeks ago! Time for a refresher?",
        ),
        saved(
            ContentItem::new("revisit_2", "tech", 0.87)
                .with_title("Advanced CSS Grid Techniques", "WebDev Pro"),
            10,
            Priority::Medium,
            "Ready to master CSS Grid? Let's dive deeper!",
        ),
        saved(
            ContentItem::new("revisit_3", "wellness", 0.89)
                .with_title("Mindfulness Meditation for Beginners", "ZenMaster"),
            7,
            Priority::Medium,
            "Your mind deserves this peaceful moment again",
        ),
        saved(
            ContentItem::new("revisit_4", "cooking", 0.84)
                .with_title("Quick Healthy Breakfast Ideas", "NutritionNinja"),
            3,
            Priority::Low,
            "Still fresh in your saves - worth another look?",
        ),
    ]
}
