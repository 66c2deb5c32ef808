use crate::docs::api_doc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::middleware::origin::audit_origin;
use crate::modules::health::init_health_router;
use crate::modules::payment::{self, init_payment_router};
use crate::modules::upload::{self, init_upload_router};
use crate::mount::{ApiMount, RouteCollection};
use crate::state::AppState;
use axum::{Router, middleware};
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

/// Mounts the upload and payment collections under the configured prefix.
pub fn default_api_mount(state: &AppState) -> ApiMount {
    let mut api = ApiMount::new(state.server_config.api_prefix.clone());
    api.mount(RouteCollection::new(upload::COLLECTION, init_upload_router()));
    api.mount(RouteCollection::new(payment::COLLECTION, init_payment_router()));
    api
}

pub fn init_router(state: AppState) -> Router {
    let api = default_api_mount(&state);
    build_router(state, api)
}

pub fn build_router(state: AppState, api: ApiMount) -> Router {
    let cors = state.cors_config.layer();
    let doc = api_doc(api.prefix());

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc.clone()))
        .merge(Scalar::with_url("/scalar", doc))
        .merge(init_health_router())
        .merge(api.into_router())
        .with_state(state.clone())
        .layer(cors)
        .layer(middleware::from_fn_with_state(state, audit_origin))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
