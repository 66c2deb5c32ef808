use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{health_check, root};

pub fn init_health_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
