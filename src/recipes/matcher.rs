//! Scoring of catalog recipes against a set of ingredient names.

use super::repo::CatalogRecipe;

#[derive(Debug, Clone)]
pub struct MatchedRecipe {
    pub recipe: CatalogRecipe,
    pub match_count: usize,
    pub match_percentage: u32,
}

/// Rank catalog recipes by how many of the given ingredient names appear
/// in their ingredient text (case-insensitive substring containment).
///
/// Recipes matching nothing are discarded; the rest are sorted descending
/// by match count with ties keeping catalog order, and capped at `count`.
/// Pure and deterministic for a fixed catalog and input list.
pub fn match_catalog(
    catalog: Vec<CatalogRecipe>,
    names: &[String],
    count: usize,
) -> Vec<MatchedRecipe> {
    if names.is_empty() {
        return Vec::new();
    }

    let needles: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();

    let mut matched: Vec<MatchedRecipe> = catalog
        .into_iter()
        .filter_map(|recipe| {
            let haystack = recipe.ingredients.join(" ").to_lowercase();
            let match_count = needles
                .iter()
                .filter(|needle| haystack.contains(needle.as_str()))
                .count();
            if match_count == 0 {
                return None;
            }
            let match_percentage =
                ((match_count as f64 / needles.len() as f64) * 100.0).round() as u32;
            Some(MatchedRecipe {
                recipe,
                match_count,
                match_percentage,
            })
        })
        .collect();

    // Stable sort: ties stay in catalog order.
    matched.sort_by(|a, b| b.match_count.cmp(&a.match_count));
    matched.truncate(count);
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn recipe(title: &str, ingredients: &[&str]) -> CatalogRecipe {
        CatalogRecipe {
            id: Uuid::new_v4(),
            title: title.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: "Cook everything.".to_string(),
            image_url: None,
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn zero_match_recipes_are_discarded() {
        let catalog = vec![
            recipe("Chicken Rice", &["chicken", "rice"]),
            recipe("Tofu Broccoli", &["tofu", "broccoli"]),
        ];
        let result = match_catalog(catalog, &names(&["chicken", "garlic"]), 3);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].recipe.title, "Chicken Rice");
        assert_eq!(result[0].match_count, 1);
        assert_eq!(result[0].match_percentage, 50);
    }

    #[test]
    fn sorted_descending_by_match_count() {
        let catalog = vec![
            recipe("One Hit", &["garlic bread"]),
            recipe("Two Hits", &["chicken thighs", "garlic cloves"]),
        ];
        let result = match_catalog(catalog, &names(&["chicken", "garlic"]), 3);
        assert_eq!(result[0].recipe.title, "Two Hits");
        assert_eq!(result[0].match_count, 2);
        assert_eq!(result[0].match_percentage, 100);
        assert_eq!(result[1].recipe.title, "One Hit");
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = vec![
            recipe("First", &["rice", "peas"]),
            recipe("Second", &["rice", "beans"]),
            recipe("Third", &["rice", "corn"]),
        ];
        let result = match_catalog(catalog, &names(&["rice"]), 3);
        let titles: Vec<&str> = result.iter().map(|m| m.recipe.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn capped_at_requested_count() {
        let catalog = vec![
            recipe("A", &["egg"]),
            recipe("B", &["egg"]),
            recipe("C", &["egg"]),
            recipe("D", &["egg"]),
        ];
        let result = match_catalog(catalog, &names(&["egg"]), 3);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn containment_is_case_insensitive_substring() {
        let catalog = vec![recipe("Stir Fry", &["2 Chicken Breasts, diced"])];
        let result = match_catalog(catalog, &names(&["chicken"]), 3);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let build = || {
            vec![
                recipe("Alpha", &["lemon", "thyme"]),
                recipe("Beta", &["lemon", "chicken"]),
            ]
        };
        let input = names(&["lemon", "chicken"]);
        let first: Vec<String> = match_catalog(build(), &input, 3)
            .into_iter()
            .map(|m| m.recipe.title)
            .collect();
        let second: Vec<String> = match_catalog(build(), &input, 3)
            .into_iter()
            .map(|m| m.recipe.title)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_matches_nothing() {
        let catalog = vec![recipe("Anything", &["salt"])];
        assert!(match_catalog(catalog, &[], 3).is_empty());
    }
}
