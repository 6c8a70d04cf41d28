use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use futures::future::join_all;
use time::OffsetDateTime;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::auth::jwt::AuthUser;
use crate::inventory::freshness::{bucket, FreshnessBucket};
use crate::inventory::repo::Ingredient;
use crate::state::AppState;

use super::dto::{Pagination, RecipeSource, SuggestRequest, SuggestResponse, SuggestedRecipe};
use super::generate::generate_recipes;
use super::matcher::match_catalog;
use super::repo::{self, CatalogRecipe};

#[instrument(skip(state))]
pub async fn list_catalog(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<CatalogRecipe>>, (StatusCode, String)> {
    let rows = CatalogRecipe::list(&state.db, p.limit, p.offset)
        .await
        .map_err(internal)?;
    Ok(Json(rows))
}

/// Suggest `count` recipes for the caller: catalog matches first, then
/// generated ones, then templates, each carrying its source tag and an
/// image URL.
#[instrument(skip(state, payload))]
pub async fn suggest_recipes(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, (StatusCode, String)> {
    let count = payload.count.clamp(1, 10);

    let names: Vec<String> = match payload.ingredients {
        Some(list) => {
            let cleaned: Vec<String> = list
                .into_iter()
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty())
                .collect();
            if cleaned.is_empty() {
                return Err((StatusCode::BAD_REQUEST, "No ingredients provided".into()));
            }
            cleaned
        }
        None => {
            let expiring = expiring_names(&state, user_id).await.map_err(internal)?;
            if expiring.is_empty() {
                return Err((
                    StatusCode::BAD_REQUEST,
                    "No ingredients expiring soon".into(),
                ));
            }
            expiring
        }
    };

    if let Err(e) = repo::record_history(&state.db, user_id, &names.join(", ")).await {
        warn!(error = %e, "failed to record recipe history");
    }

    let catalog = CatalogRecipe::fetch_all(&state.db)
        .await
        .map_err(internal)?;
    let matched = match_catalog(catalog, &names, count);
    info!(
        user_id = %user_id,
        requested = count,
        matched = matched.len(),
        "catalog matched"
    );

    let mut pending: Vec<(Option<Uuid>, SuggestedRecipe)> = matched
        .into_iter()
        .map(|m| {
            (
                Some(m.recipe.id),
                SuggestedRecipe {
                    title: m.recipe.title,
                    ingredients: m.recipe.ingredients,
                    instructions: m.recipe.instructions,
                    source: RecipeSource::Database,
                    emoji: None,
                    image_url: m.recipe.image_url,
                    match_count: Some(m.match_count),
                    match_percentage: Some(m.match_percentage),
                },
            )
        })
        .collect();

    let needed = count - pending.len();
    pending.extend(
        generate_recipes(state.llm.as_ref(), &names, needed)
            .await
            .into_iter()
            .map(|recipe| (None, recipe)),
    );

    // Image lookups fan out concurrently; each one falls back on its own.
    let state_ref = &state;
    let recipes = join_all(pending.into_iter().map(|(id, mut recipe)| async move {
        if recipe.image_url.is_none() {
            let url = state_ref
                .images
                .resolve(&state_ref.db, id, &recipe.title)
                .await;
            recipe.image_url = Some(url);
        }
        recipe
    }))
    .await;

    Ok(Json(SuggestResponse { recipes }))
}

async fn expiring_names(state: &AppState, user_id: Uuid) -> anyhow::Result<Vec<String>> {
    let rows = Ingredient::list_by_owner(&state.db, user_id).await?;
    let now = OffsetDateTime::now_utc();
    Ok(rows
        .into_iter()
        .filter(|row| bucket(row.expiry_date, now) == FreshnessBucket::ExpiringSoon)
        .map(|row| row.name)
        .collect())
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    error!(error = %e, "recipe query failed");
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
