use anyhow::anyhow;
use axum::http::StatusCode;
use tracing::instrument;

use datacleaner_core::{AppError, ErrorResponse};

/// Entry point of the upload collection. File ingestion and cleaning run in
/// the upload service; this deployment only reserves the route.
#[utoipa::path(
    post,
    path = "/api/upload",
    responses(
        (status = 501, description = "Upload handling is not wired into this deployment", body = ErrorResponse)
    ),
    tag = "Upload"
)]
#[instrument]
pub async fn upload_file() -> Result<StatusCode, AppError> {
    Err(AppError::not_implemented(anyhow!(
        "upload handling is not available in this deployment"
    )))
}
