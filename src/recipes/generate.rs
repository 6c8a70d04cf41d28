//! On-demand recipe generation and the template fallback.
//!
//! Completions arrive in whatever shape the model felt like producing:
//! a JSON array, a bare object, a fenced code block, or prose following a
//! `Recipe N:` template. Everything is normalized into `SuggestedRecipe`
//! here; a provider failure degrades to the fixed templates and is never
//! surfaced to the caller.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::llm::LlmProvider;

use super::dto::{RecipeSource, SuggestedRecipe};

/// Produce `needed` recipes for the given ingredient names: whatever the
/// provider yields (up to `needed`), topped up from the templates. The
/// output length is always exactly `needed`.
pub async fn generate_recipes(
    llm: &dyn LlmProvider,
    names: &[String],
    needed: usize,
) -> Vec<SuggestedRecipe> {
    let mut out = Vec::with_capacity(needed);
    if needed == 0 {
        return out;
    }

    let prompt = compose_prompt(names, needed);
    match llm.complete(&prompt).await {
        Ok(text) => {
            let mut parsed = parse_completion(&text);
            debug!(parsed = parsed.len(), provider = llm.name(), "completion parsed");
            parsed.truncate(needed);
            out.extend(parsed);
        }
        Err(e) => {
            warn!(error = %e, provider = llm.name(), "recipe generation failed, using templates");
        }
    }

    if out.len() < needed {
        out.extend(template_recipes(names, needed - out.len()));
    }
    out
}

pub fn compose_prompt(names: &[String], count: usize) -> String {
    format!(
        "You are a helpful cooking assistant. Suggest {count} recipes that use as many of \
         these ingredients as possible: {list}. Respond with only a JSON array of {count} \
         objects, each with the keys \"title\", \"ingredients\" (array of strings), \
         \"instructions\", and optionally \"emoji\" and \"tip\".",
        count = count,
        list = names.join(", "),
    )
}

/// A recipe as deserialized from a completion. The ingredients field is
/// sometimes a list and sometimes one comma-separated string.
#[derive(Debug, Deserialize)]
struct RawRecipe {
    title: String,
    ingredients: IngredientsField,
    instructions: String,
    #[serde(default)]
    emoji: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    tip: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IngredientsField {
    Many(Vec<String>),
    One(String),
}

impl IngredientsField {
    fn into_list(self) -> Vec<String> {
        match self {
            IngredientsField::Many(list) => list,
            IngredientsField::One(text) => text
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect(),
        }
    }
}

impl RawRecipe {
    fn into_suggested(self) -> SuggestedRecipe {
        SuggestedRecipe {
            title: self.title,
            ingredients: self.ingredients.into_list(),
            instructions: self.instructions,
            source: RecipeSource::Ai,
            emoji: self.emoji,
            image_url: None,
            match_count: None,
            match_percentage: None,
        }
    }
}

/// Parse a completion into recipes, trying the strict forms first.
pub fn parse_completion(text: &str) -> Vec<SuggestedRecipe> {
    let trimmed = text.trim();

    if let Some(recipes) = parse_json(trimmed) {
        return recipes;
    }

    // Models frequently wrap the payload in a fenced block.
    if let Some(inner) = extract_fenced_block(trimmed) {
        if let Some(recipes) = parse_json(inner.trim()) {
            return recipes;
        }
    }

    parse_textual(trimmed)
}

fn parse_json(text: &str) -> Option<Vec<SuggestedRecipe>> {
    if let Ok(list) = serde_json::from_str::<Vec<RawRecipe>>(text) {
        return Some(list.into_iter().map(RawRecipe::into_suggested).collect());
    }
    if let Ok(single) = serde_json::from_str::<RawRecipe>(text) {
        return Some(vec![single.into_suggested()]);
    }
    None
}

fn extract_fenced_block(text: &str) -> Option<&str> {
    lazy_static! {
        static ref FENCE: Regex = Regex::new(r"(?s)```(?:json)?\s*(.*?)```").unwrap();
    }
    FENCE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Line-oriented parser for the textual template:
/// `Recipe N: Title: ... Ingredients: ... Instructions: ... Emoji: ...`
/// Unlabeled lines continue the most recent labeled field.
fn parse_textual(text: &str) -> Vec<SuggestedRecipe> {
    lazy_static! {
        static ref BOUNDARY: Regex = Regex::new(r"(?m)^\s*Recipe\s*\d+\s*:").unwrap();
    }

    if !BOUNDARY.is_match(text) {
        return Vec::new();
    }

    BOUNDARY
        .split(text)
        .filter(|chunk| !chunk.trim().is_empty())
        .filter_map(parse_textual_chunk)
        .collect()
}

#[derive(Clone, Copy, PartialEq)]
enum Field {
    None,
    Title,
    Ingredients,
    Instructions,
}

fn parse_textual_chunk(chunk: &str) -> Option<SuggestedRecipe> {
    let mut title = String::new();
    let mut ingredients = String::new();
    let mut instructions = String::new();
    let mut emoji = None;
    let mut current = Field::None;

    for line in chunk.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = strip_label(line, "Title:") {
            title = rest.to_string();
            current = Field::Title;
        } else if let Some(rest) = strip_label(line, "Ingredients:") {
            ingredients = rest.to_string();
            current = Field::Ingredients;
        } else if let Some(rest) = strip_label(line, "Instructions:") {
            instructions = rest.to_string();
            current = Field::Instructions;
        } else if let Some(rest) = strip_label(line, "Emoji:") {
            emoji = Some(rest.to_string());
            current = Field::None;
        } else {
            match current {
                Field::Title => {
                    // A title never spans lines; treat the leftover as the
                    // start of instructions-free prose and ignore it.
                }
                Field::Ingredients => {
                    if !ingredients.is_empty() {
                        ingredients.push_str(", ");
                    }
                    ingredients.push_str(line);
                }
                Field::Instructions => {
                    if !instructions.is_empty() {
                        instructions.push('\n');
                    }
                    instructions.push_str(line);
                }
                Field::None => {}
            }
        }
    }

    if title.is_empty() || instructions.is_empty() {
        return None;
    }

    Some(SuggestedRecipe {
        title,
        ingredients: IngredientsField::One(ingredients).into_list(),
        instructions,
        source: RecipeSource::Ai,
        emoji,
        image_url: None,
        match_count: None,
        match_percentage: None,
    })
}

fn strip_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    match line.get(..label.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(label) => Some(line[label.len()..].trim()),
        _ => None,
    }
}

struct Template {
    title: &'static str,
    emoji: &'static str,
    extras: &'static [&'static str],
    steps: &'static str,
}

const TEMPLATES: &[Template] = &[
    Template {
        title: "Quick Stir Fry",
        emoji: "🥘",
        extras: &[
            "2 tablespoons vegetable oil",
            "2 cloves garlic, minced",
            "1 tablespoon soy sauce",
            "1 teaspoon sesame oil",
        ],
        steps: "1. Heat oil in a large pan over medium-high heat.\n\
                2. Add garlic and saute for 30 seconds.\n\
                3. Add {ingredients} and stir-fry for 5-7 minutes.\n\
                4. Season with soy sauce and sesame oil.\n\
                5. Serve hot over rice.",
    },
    Template {
        title: "Simple Soup",
        emoji: "🍲",
        extras: &[
            "4 cups vegetable or chicken broth",
            "1 onion, diced",
            "2 tablespoons olive oil",
            "Salt and pepper to taste",
        ],
        steps: "1. Heat olive oil in a pot over medium heat.\n\
                2. Add onion and saute until translucent.\n\
                3. Add {ingredients} and the broth.\n\
                4. Bring to a boil, then simmer for 20 minutes.\n\
                5. Season with salt and pepper and serve.",
    },
    Template {
        title: "Garden Salad",
        emoji: "🥗",
        extras: &[
            "3 tablespoons olive oil",
            "1 tablespoon vinegar",
            "Salt and pepper to taste",
        ],
        steps: "1. Chop {ingredients} into bite-sized pieces.\n\
                2. Whisk the olive oil and vinegar into a dressing.\n\
                3. Toss everything together and season.\n\
                4. Serve chilled.",
    },
];

/// Synthesize `needed` recipes from the fixed templates, interpolating the
/// caller's ingredient list. Cycles when more are needed than templates
/// exist.
pub fn template_recipes(names: &[String], needed: usize) -> Vec<SuggestedRecipe> {
    let list = if names.is_empty() {
        "your ingredients".to_string()
    } else {
        names.join(", ")
    };

    TEMPLATES
        .iter()
        .cycle()
        .take(needed)
        .map(|t| {
            let mut ingredients: Vec<String> = names.to_vec();
            ingredients.extend(t.extras.iter().map(|s| s.to_string()));
            SuggestedRecipe {
                title: t.title.to_string(),
                ingredients,
                instructions: t.steps.replace("{ingredients}", &list),
                source: RecipeSource::Fallback,
                emoji: Some(t.emoji.to_string()),
                image_url: None,
                match_count: None,
                match_percentage: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeLlm;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_json_array() {
        let text = r#"[
            {"title": "Lemon Chicken", "ingredients": ["chicken", "lemon"], "instructions": "Roast it.", "emoji": "🍋"},
            {"title": "Fried Rice", "ingredients": "rice, egg, peas", "instructions": "Fry it."}
        ]"#;
        let recipes = parse_completion(text);
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].title, "Lemon Chicken");
        assert_eq!(recipes[0].emoji.as_deref(), Some("🍋"));
        // String-form ingredients are split on commas.
        assert_eq!(recipes[1].ingredients, vec!["rice", "egg", "peas"]);
        assert!(recipes.iter().all(|r| r.source == RecipeSource::Ai));
    }

    #[test]
    fn parses_single_object() {
        let text = r#"{"title": "Toast", "ingredients": ["bread"], "instructions": "Toast the bread."}"#;
        let recipes = parse_completion(text);
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Toast");
    }

    #[test]
    fn parses_fenced_json() {
        let text = "Here you go!\n```json\n[{\"title\": \"Stew\", \"ingredients\": [\"beef\"], \"instructions\": \"Simmer.\"}]\n```\nEnjoy!";
        let recipes = parse_completion(text);
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Stew");
    }

    #[test]
    fn parses_textual_template() {
        let text = "Recipe 1: Title: Garlic Noodles\nIngredients: noodles, garlic, butter\nInstructions: Boil the noodles.\nToss with garlic butter.\nEmoji: 🍜\nRecipe 2: Title: Egg Drop Soup\nIngredients: eggs, broth\nInstructions: Whisk eggs into simmering broth.";
        let recipes = parse_completion(text);
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].title, "Garlic Noodles");
        assert_eq!(recipes[0].ingredients, vec!["noodles", "garlic", "butter"]);
        assert_eq!(
            recipes[0].instructions,
            "Boil the noodles.\nToss with garlic butter."
        );
        assert_eq!(recipes[0].emoji.as_deref(), Some("🍜"));
        assert_eq!(recipes[1].title, "Egg Drop Soup");
        assert!(recipes[1].emoji.is_none());
    }

    #[test]
    fn garbage_parses_to_nothing() {
        assert!(parse_completion("I'm sorry, I can't help with that.").is_empty());
        assert!(parse_completion("").is_empty());
    }

    #[test]
    fn templates_fill_exact_count_with_fallback_source() {
        let recipes = template_recipes(&names(&["carrot", "leek"]), 3);
        assert_eq!(recipes.len(), 3);
        assert!(recipes.iter().all(|r| r.source == RecipeSource::Fallback));
        assert!(recipes[0].instructions.contains("carrot, leek"));
        assert!(recipes[0].ingredients.contains(&"carrot".to_string()));
    }

    #[test]
    fn templates_cycle_past_their_count() {
        let recipes = template_recipes(&names(&["rice"]), 5);
        assert_eq!(recipes.len(), 5);
        assert_eq!(recipes[0].title, recipes[3].title);
    }

    #[tokio::test]
    async fn provider_failure_degrades_to_templates() {
        let llm = FakeLlm::failing();
        let recipes = generate_recipes(&llm, &names(&["chicken", "garlic"]), 2).await;
        assert_eq!(recipes.len(), 2);
        assert!(recipes.iter().all(|r| r.source == RecipeSource::Fallback));
    }

    #[tokio::test]
    async fn short_completion_is_topped_up() {
        let llm = FakeLlm::with_response(
            r#"[{"title": "Only One", "ingredients": ["x"], "instructions": "Cook."}]"#,
        );
        let recipes = generate_recipes(&llm, &names(&["x"]), 3).await;
        assert_eq!(recipes.len(), 3);
        assert_eq!(recipes[0].source, RecipeSource::Ai);
        assert_eq!(recipes[1].source, RecipeSource::Fallback);
        assert_eq!(recipes[2].source, RecipeSource::Fallback);
    }

    #[tokio::test]
    async fn oversized_completion_is_truncated() {
        let llm = FakeLlm::with_response(
            r#"[
                {"title": "A", "ingredients": ["x"], "instructions": "Cook."},
                {"title": "B", "ingredients": ["x"], "instructions": "Cook."},
                {"title": "C", "ingredients": ["x"], "instructions": "Cook."}
            ]"#,
        );
        let recipes = generate_recipes(&llm, &names(&["x"]), 2).await;
        assert_eq!(recipes.len(), 2);
    }
}
