use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{create_order, verify_payment};

pub fn init_payment_router() -> Router<AppState> {
    Router::new()
        .route("/payment/create-order", post(create_order))
        .route("/payment/verify", post(verify_payment))
}
