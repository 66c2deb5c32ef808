use utoipa::OpenApi;

use crate::modules::health::model::{HealthResponse, StatusResponse};
use datacleaner_config::server::DEFAULT_API_PREFIX;
use datacleaner_core::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Data Cleaner & Visual Insight Tool",
        version = "1.0.0",
        description = "Backend entry point for the Data Cleaner front-end"
    ),
    paths(
        crate::modules::health::controller::root,
        crate::modules::health::controller::health_check,
        crate::modules::upload::controller::upload_file,
        crate::modules::payment::controller::create_order,
        crate::modules::payment::controller::verify_payment,
    ),
    components(schemas(StatusResponse, HealthResponse, ErrorResponse)),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Upload", description = "Dataset upload collection"),
        (name = "Payment", description = "Payment collection"),
    )
)]
pub struct ApiDoc;

/// The OpenAPI document with the collection paths moved under `api_prefix`.
///
/// Handlers are annotated with the default `/api` prefix; the liveness
/// endpoints are not mounted under a prefix and keep their paths.
pub fn api_doc(api_prefix: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.paths.paths = std::mem::take(&mut doc.paths.paths)
        .into_iter()
        .map(|(path, item)| (rebase_path(&path, api_prefix), item))
        .collect();
    doc
}

fn rebase_path(path: &str, api_prefix: &str) -> String {
    match path.strip_prefix(DEFAULT_API_PREFIX) {
        Some("") => {
            if api_prefix.is_empty() {
                "/".to_string()
            } else {
                api_prefix.to_string()
            }
        }
        Some(rest) if rest.starts_with('/') => format!("{api_prefix}{rest}"),
        _ => path.to_string(),
    }
}
