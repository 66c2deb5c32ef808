#[allow(dead_code)]
mod common;

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use common::{NETLIFY_ORIGIN, send, setup_test_app, state_from};
use datacleaner::router::init_router;

fn get_with_origin(uri: &str, origin: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::ORIGIN, origin)
        .body(Body::empty())
        .unwrap()
}

fn preflight(uri: &str, origin: &str, method: &str) -> Request<Body> {
    Request::builder()
        .method("OPTIONS")
        .uri(uri)
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, method)
        .header(
            header::ACCESS_CONTROL_REQUEST_HEADERS,
            "content-type,x-requested-with",
        )
        .body(Body::empty())
        .unwrap()
}

fn header_str<'a>(headers: &'a HeaderMap, name: header::HeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn test_configured_origin_is_echoed() {
    let app = init_router(state_from(&[("CORS_ORIGINS", NETLIFY_ORIGIN)]));
    let response = send(app, get_with_origin("/health", NETLIFY_ORIGIN)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        header_str(headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(NETLIFY_ORIGIN)
    );
    assert_eq!(
        header_str(headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
        Some("true")
    );
}

#[tokio::test]
async fn test_unlisted_origin_gets_no_allow_origin() {
    let app = init_router(state_from(&[("CORS_ORIGINS", NETLIFY_ORIGIN)]));
    let response = send(app, get_with_origin("/health", "https://evil.example.com")).await;

    // The handler still runs; the browser blocks the read.
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn test_env_list_replaces_fallback() {
    let app = init_router(state_from(&[("CORS_ORIGINS", NETLIFY_ORIGIN)]));
    let response = send(app, get_with_origin("/health", "http://localhost:5173")).await;

    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn test_configured_origin_matches_browser_form() {
    let app = init_router(state_from(&[(
        "CORS_ORIGINS",
        "HTTPS://Data-Cleaner-Project.Netlify.app:443",
    )]));
    let response = send(app, get_with_origin("/health", NETLIFY_ORIGIN)).await;

    assert_eq!(
        header_str(response.headers(), header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(NETLIFY_ORIGIN)
    );
}

#[tokio::test]
async fn test_fallback_allows_local_dev_servers() {
    for origin in [
        NETLIFY_ORIGIN,
        "http://localhost:5173",
        "http://localhost:3000",
        "http://127.0.0.1:5173",
        "http://127.0.0.1:3000",
    ] {
        let response = send(setup_test_app(), get_with_origin("/", origin)).await;
        assert_eq!(
            header_str(response.headers(), header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(origin),
            "origin {origin} should be allowed"
        );
    }
}

#[tokio::test]
async fn test_preflight_from_allowed_origin() {
    let app = init_router(state_from(&[("CORS_ORIGINS", NETLIFY_ORIGIN)]));
    let response = send(app, preflight("/api/upload", NETLIFY_ORIGIN, "POST")).await;

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(
        header_str(headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(NETLIFY_ORIGIN)
    );
    assert_eq!(
        header_str(headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
        Some("true")
    );

    let methods = header_str(headers, header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_ascii_uppercase();
    for method in ["GET", "POST", "PUT", "DELETE", "OPTIONS"] {
        assert!(methods.contains(method), "missing {method} in {methods}");
    }
    assert!(!methods.contains("PATCH"));

    let allowed_headers = header_str(headers, header::ACCESS_CONTROL_ALLOW_HEADERS)
        .unwrap()
        .to_ascii_lowercase();
    for name in [
        "authorization",
        "content-type",
        "accept",
        "origin",
        "x-requested-with",
    ] {
        assert!(allowed_headers.contains(name), "missing {name}");
    }

    assert_eq!(header_str(headers, header::ACCESS_CONTROL_MAX_AGE), Some("3600"));
}

#[tokio::test]
async fn test_preflight_from_unlisted_origin() {
    let app = init_router(state_from(&[("CORS_ORIGINS", NETLIFY_ORIGIN)]));
    let response = send(app, preflight("/api/upload", "https://evil.example.com", "POST")).await;

    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn test_wildcard_without_credentials() {
    let app = init_router(state_from(&[
        ("CORS_ORIGINS", "*"),
        ("CORS_ALLOW_CREDENTIALS", "false"),
    ]));
    let response = send(app, get_with_origin("/health", "https://anyone.example.com")).await;

    let headers = response.headers();
    assert_eq!(
        header_str(headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some("*")
    );
    assert!(headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
}

#[tokio::test]
async fn test_custom_max_age() {
    let app = init_router(state_from(&[("CORS_MAX_AGE_SECS", "120")]));
    let response = send(app, preflight("/health", "http://localhost:3000", "GET")).await;

    assert_eq!(
        header_str(response.headers(), header::ACCESS_CONTROL_MAX_AGE),
        Some("120")
    );
}
