use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

/// Look up a previously resolved image URL for a catalog recipe.
pub async fn cached_url(db: &PgPool, recipe_id: Uuid) -> anyhow::Result<Option<String>> {
    let row: Option<(String,)> = sqlx::query_as(
        r#"
        SELECT image_url
          FROM recipe_images
         WHERE recipe_id = $1
        "#,
    )
    .bind(recipe_id)
    .fetch_optional(db)
    .await
    .context("select cached recipe image")?;

    Ok(row.map(|(url,)| url))
}

/// Store a resolved URL, replacing any previous entry for the recipe.
pub async fn store_url(db: &PgPool, recipe_id: Uuid, image_url: &str) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO recipe_images (recipe_id, image_url)
        VALUES ($1, $2)
        ON CONFLICT (recipe_id) DO UPDATE SET image_url = EXCLUDED.image_url
        "#,
    )
    .bind(recipe_id)
    .bind(image_url)
    .execute(db)
    .await
    .context("upsert recipe image")?;

    Ok(())
}
