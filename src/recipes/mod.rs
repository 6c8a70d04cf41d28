pub mod dto;
pub mod generate;
pub mod handlers;
pub mod matcher;
pub mod repo;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(handlers::list_catalog))
        .route("/recipes/suggest", post(handlers::suggest_recipes))
}
