use std::collections::HashMap;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use datacleaner::datacleaner_config::{CorsConfig, ServerConfig};
use datacleaner::router::init_router;
use datacleaner::state::AppState;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const NETLIFY_ORIGIN: &str = "https://data-cleaner-project.netlify.app";

/// Variable lookup backed by a fixed map, so tests never touch the process env.
pub fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

pub fn test_state() -> AppState {
    AppState {
        cors_config: CorsConfig::default(),
        server_config: ServerConfig::default(),
    }
}

pub fn state_from(pairs: &[(&str, &str)]) -> AppState {
    AppState {
        cors_config: CorsConfig::from_lookup(lookup_from(pairs)).unwrap(),
        server_config: ServerConfig::from_lookup(lookup_from(pairs)).unwrap(),
    }
}

pub fn setup_test_app() -> Router {
    init_router(test_state())
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap()
}
