pub mod dto;
pub mod freshness;
pub mod handlers;
pub mod repo;

use axum::routing::{delete, get};
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/ingredients",
            get(handlers::list_ingredients).post(handlers::create_ingredient),
        )
        .route("/ingredients/expiring", get(handlers::list_expiring))
        .route("/ingredients/:id", delete(handlers::consume_ingredient))
}
