use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// One row of a user's inventory. Every query here is filtered by the
/// owning user id; no call site can reach another user's rows.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ingredient {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub quantity: f64,
    pub unit: Option<String>,
    pub expiry_date: OffsetDateTime,
    pub added_date: OffsetDateTime,
}

impl Ingredient {
    pub async fn list_by_owner(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Ingredient>> {
        let rows = sqlx::query_as::<_, Ingredient>(
            r#"
            SELECT id, user_id, name, category, quantity, unit, expiry_date, added_date
            FROM ingredients
            WHERE user_id = $1
            ORDER BY expiry_date ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        name: &str,
        category: Option<&str>,
        quantity: f64,
        unit: Option<&str>,
        expiry_date: OffsetDateTime,
    ) -> anyhow::Result<Ingredient> {
        let row = sqlx::query_as::<_, Ingredient>(
            r#"
            INSERT INTO ingredients (user_id, name, category, quantity, unit, expiry_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, name, category, quantity, unit, expiry_date, added_date
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(category)
        .bind(quantity)
        .bind(unit)
        .bind(expiry_date)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    /// Delete an ingredient the user marked as consumed. Returns false
    /// when no row matched (wrong id or wrong owner).
    pub async fn delete_by_owner(db: &PgPool, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM ingredients
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
