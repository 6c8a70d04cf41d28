use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::freshness::{bucket, days_until_expiry, FreshnessBucket};
use super::repo::Ingredient;

#[derive(Debug, Deserialize)]
pub struct CreateIngredientRequest {
    pub name: String,
    pub category: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    pub unit: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub expiry_date: OffsetDateTime,
}

fn default_quantity() -> f64 {
    1.0
}

/// Inventory row as returned to the client, annotated with its freshness
/// bucket computed at read time.
#[derive(Debug, Serialize)]
pub struct IngredientView {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub quantity: f64,
    pub unit: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub expiry_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub added_date: OffsetDateTime,
    pub freshness: FreshnessBucket,
    pub days_until_expiry: i64,
}

impl IngredientView {
    pub fn from_row(row: Ingredient, now: OffsetDateTime) -> Self {
        Self {
            freshness: bucket(row.expiry_date, now),
            days_until_expiry: days_until_expiry(row.expiry_date, now),
            id: row.id,
            name: row.name,
            category: row.category,
            quantity: row.quantity,
            unit: row.unit,
            expiry_date: row.expiry_date,
            added_date: row.added_date,
        }
    }
}
