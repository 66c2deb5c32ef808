use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::metrics::track_cors_rejection;
use crate::state::AppState;

/// Records cross-origin requests whose `Origin` is outside the allow-list.
/// The CORS layer decides what headers go out; this only observes.
pub async fn audit_origin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let rejected = req
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .filter(|origin| !state.cors_config.is_origin_allowed(origin))
        .map(str::to_string);

    if let Some(origin) = rejected {
        debug!(origin = %origin, path = %req.uri().path(), "Origin not in CORS allow-list");
        track_cors_rejection();
    }

    next.run(req).await
}
