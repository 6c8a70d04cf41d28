//! Search-term derivation from recipe titles.

/// Dish types recognized in titles, checked in order.
const DISH_TYPES: &[&str] = &[
    "pasta",
    "salad",
    "soup",
    "stew",
    "curry",
    "sandwich",
    "burger",
    "pizza",
    "stir-fry",
    "stir fry",
    "roast",
    "cake",
    "pie",
    "bread",
    "taco",
    "burrito",
    "rice",
    "noodle",
    "casserole",
    "steak",
    "chicken",
    "fish",
    "tofu",
    "vegetable",
    "dessert",
    "breakfast",
];

/// Words excluded from derived search terms.
const FILLER_WORDS: &[&str] = &["and", "with", "the", "spicy", "creamy", "fresh"];

fn is_filler(word: &str) -> bool {
    FILLER_WORDS.contains(&word)
}

/// Extract the most relevant search query from a recipe title.
///
/// If the title contains a known dish type, the result is up to two
/// significant words preceding it plus the dish type ("garlic chicken
/// curry" from "Spicy Garlic Chicken Curry With Rice" would be "garlic
/// chicken curry"). Otherwise the first two words longer than three
/// characters are used, excluding filler words. Falls back to the
/// lowercased title when nothing survives filtering.
pub fn derive_search_term(title: &str) -> String {
    let lower = title.to_lowercase();

    if let Some(dish) = DISH_TYPES.iter().find(|d| lower.contains(**d)) {
        let prefix = lower.split(dish).next().unwrap_or("");
        let words: Vec<&str> = prefix
            .split_whitespace()
            .filter(|w| w.len() > 2 && !is_filler(w))
            .collect();
        let start = words.len().saturating_sub(2);
        let mut parts: Vec<&str> = words[start..].to_vec();
        parts.push(dish);
        return parts.join(" ").trim().to_string();
    }

    let words: Vec<&str> = lower
        .split_whitespace()
        .filter(|w| w.len() > 3 && !is_filler(w))
        .take(2)
        .collect();

    if words.is_empty() {
        lower
    } else {
        words.join(" ")
    }
}

/// Simplified term for the secondary lookup: just the first word.
pub fn simplified_term(title: &str) -> String {
    title
        .split_whitespace()
        .next()
        .unwrap_or(title)
        .to_lowercase()
}
