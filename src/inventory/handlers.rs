use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use time::OffsetDateTime;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::auth::jwt::AuthUser;
use crate::state::AppState;

use super::dto::{CreateIngredientRequest, IngredientView};
use super::freshness::FreshnessBucket;
use super::repo::Ingredient;

#[instrument(skip(state))]
pub async fn list_ingredients(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<IngredientView>>, (StatusCode, String)> {
    let rows = Ingredient::list_by_owner(&state.db, user_id)
        .await
        .map_err(internal)?;
    let now = OffsetDateTime::now_utc();
    let items = rows
        .into_iter()
        .map(|row| IngredientView::from_row(row, now))
        .collect();
    Ok(Json(items))
}

#[instrument(skip(state))]
pub async fn list_expiring(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<IngredientView>>, (StatusCode, String)> {
    let rows = Ingredient::list_by_owner(&state.db, user_id)
        .await
        .map_err(internal)?;
    let now = OffsetDateTime::now_utc();
    let items = rows
        .into_iter()
        .map(|row| IngredientView::from_row(row, now))
        .filter(|view| view.freshness == FreshnessBucket::ExpiringSoon)
        .collect();
    Ok(Json(items))
}

#[instrument(skip(state, payload))]
pub async fn create_ingredient(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateIngredientRequest>,
) -> Result<(StatusCode, Json<IngredientView>), (StatusCode, String)> {
    let name = payload.name.trim();
    if name.is_empty() {
        warn!("create ingredient with empty name");
        return Err((StatusCode::BAD_REQUEST, "Name is required".into()));
    }

    let row = Ingredient::create(
        &state.db,
        user_id,
        name,
        payload.category.as_deref(),
        payload.quantity,
        payload.unit.as_deref(),
        payload.expiry_date,
    )
    .await
    .map_err(internal)?;

    info!(user_id = %user_id, ingredient_id = %row.id, "ingredient added");
    let now = OffsetDateTime::now_utc();
    Ok((StatusCode::CREATED, Json(IngredientView::from_row(row, now))))
}

#[instrument(skip(state))]
pub async fn consume_ingredient(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    let deleted = Ingredient::delete_by_owner(&state.db, user_id, id)
        .await
        .map_err(internal)?;

    if !deleted {
        return Err((StatusCode::NOT_FOUND, "Ingredient not found".into()));
    }

    info!(user_id = %user_id, ingredient_id = %id, "ingredient consumed");
    Ok(StatusCode::NO_CONTENT)
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    error!(error = %e, "inventory query failed");
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
