/// Categories that earn partial credit when a user is interested in them
///
/// The table is hand-authored per category and is not symmetric: each entry
/// lists only what that category itself declares. Unknown categories have no
/// related categories.
pub fn related_categories(category: &str) -> &'static [&'static str] {
    match category {
        "tech" => &["learning", "career"],
        "learning" => &["tech", "career", "finance"],
        "motivation" => &["wellness", "career", "fitness"],
        "wellness" => &["motivation", "fitness"],
        "cooking" => &["wellness"],
        "finance" => &["learning", "career"],
        "career" => &["tech", "learning", "finance"],
        "fitness" => &["wellness", "motivation"],
        _ => &[],
    }
}
