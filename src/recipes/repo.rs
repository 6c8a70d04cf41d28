use anyhow::Context;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// A recipe row from the seeded catalog. Read-only from the application's
/// perspective.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CatalogRecipe {
    pub id: Uuid,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image_url: Option<String>,
}

impl CatalogRecipe {
    pub async fn list(db: &PgPool, limit: i64, offset: i64) -> anyhow::Result<Vec<CatalogRecipe>> {
        let rows = sqlx::query_as::<_, CatalogRecipe>(
            r#"
            SELECT id, title, ingredients, instructions, image_url
            FROM recipes
            ORDER BY title ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// The whole catalog in stable (insertion) order, for matching.
    pub async fn fetch_all(db: &PgPool) -> anyhow::Result<Vec<CatalogRecipe>> {
        let rows = sqlx::query_as::<_, CatalogRecipe>(
            r#"
            SELECT id, title, ingredients, instructions, image_url
            FROM recipes
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}

/// Append a suggestion request to the history log. Telemetry only; the
/// caller ignores failures.
pub async fn record_history(db: &PgPool, user_id: Uuid, ingredients: &str) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO recipe_history (user_id, ingredients)
        VALUES ($1, $2)
        "#,
    )
    .bind(user_id)
    .bind(ingredients)
    .execute(db)
    .await
    .context("insert recipe history")?;
    Ok(())
}
