use anyhow::anyhow;
use axum::http::StatusCode;
use tracing::instrument;

use datacleaner_core::{AppError, ErrorResponse};

fn payment_unavailable() -> AppError {
    AppError::not_implemented(anyhow!(
        "payment handling is not available in this deployment"
    ))
}

#[utoipa::path(
    post,
    path = "/api/payment/create-order",
    responses(
        (status = 501, description = "Payment handling is not wired into this deployment", body = ErrorResponse)
    ),
    tag = "Payment"
)]
#[instrument]
pub async fn create_order() -> Result<StatusCode, AppError> {
    Err(payment_unavailable())
}

#[utoipa::path(
    post,
    path = "/api/payment/verify",
    responses(
        (status = 501, description = "Payment handling is not wired into this deployment", body = ErrorResponse)
    ),
    tag = "Payment"
)]
#[instrument]
pub async fn verify_payment() -> Result<StatusCode, AppError> {
    Err(payment_unavailable())
}
