use serde::{Deserialize, Serialize};

/// Where a suggested recipe came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    Database,
    Ai,
    Fallback,
}

/// A recipe suggestion as returned to the client. Lives for one
/// request/response cycle; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestedRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub source: RecipeSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_percentage: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    /// Ingredient names to cook around. When omitted, the caller's
    /// expiring-soon bucket is used.
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    3
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub recipes: Vec<SuggestedRecipe>,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_tags_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&RecipeSource::Database).unwrap(),
            "\"database\""
        );
        assert_eq!(serde_json::to_string(&RecipeSource::Ai).unwrap(), "\"ai\"");
        assert_eq!(
            serde_json::to_string(&RecipeSource::Fallback).unwrap(),
            "\"fallback\""
        );
    }

    #[test]
    fn optional_fields_are_omitted() {
        let recipe = SuggestedRecipe {
            title: "Test".to_string(),
            ingredients: vec!["rice".to_string()],
            instructions: "Cook.".to_string(),
            source: RecipeSource::Fallback,
            emoji: None,
            image_url: None,
            match_count: None,
            match_percentage: None,
        };
        let json = serde_json::to_string(&recipe).unwrap();
        assert!(!json.contains("match_count"));
        assert!(!json.contains("image_url"));
        assert!(json.contains("\"fallback\""));
    }

    #[test]
    fn suggest_request_defaults() {
        let req: SuggestRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.count, 3);
        assert!(req.ingredients.is_none());
    }
}
