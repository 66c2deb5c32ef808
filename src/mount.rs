//! Mounting of named route collections under a shared prefix.
//!
//! Collections are keyed by name. Registering a name twice keeps the first
//! registration and ignores the second, so the resulting router and its
//! route selection are the same no matter how often a collection is mounted.

use axum::Router;
use tracing::{debug, warn};

use crate::state::AppState;

/// A named group of handlers owned by one collaborator module.
pub struct RouteCollection {
    name: String,
    router: Router<AppState>,
}

impl RouteCollection {
    pub fn new(name: impl Into<String>, router: Router<AppState>) -> Self {
        Self {
            name: name.into(),
            router,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

pub struct ApiMount {
    prefix: String,
    collections: Vec<RouteCollection>,
}

impl ApiMount {
    /// `prefix` is expected in the form produced by
    /// [`datacleaner_config::server::normalize_api_prefix`]: empty for the
    /// root, otherwise `/segment[/segment...]`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            collections: Vec::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Registers a collection. Returns `false` when a collection with the
    /// same name is already mounted.
    pub fn mount(&mut self, collection: RouteCollection) -> bool {
        if self.is_mounted(collection.name()) {
            warn!(
                collection = %collection.name(),
                prefix = %self.prefix,
                "Route collection already mounted, ignoring"
            );
            return false;
        }

        debug!(collection = %collection.name(), prefix = %self.prefix, "Mounting route collection");
        self.collections.push(collection);
        true
    }

    pub fn is_mounted(&self, name: &str) -> bool {
        self.collections.iter().any(|c| c.name == name)
    }

    /// Names in registration order.
    pub fn mounted(&self) -> Vec<&str> {
        self.collections.iter().map(RouteCollection::name).collect()
    }

    pub fn into_router(self) -> Router<AppState> {
        if self.collections.is_empty() {
            return Router::new();
        }

        let merged = self
            .collections
            .into_iter()
            .fold(Router::new(), |acc, collection| acc.merge(collection.router));

        if self.prefix.is_empty() {
            merged
        } else {
            Router::new().nest(&self.prefix, merged)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use datacleaner_config::{CorsConfig, ServerConfig};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState {
            cors_config: CorsConfig::default(),
            server_config: ServerConfig::default(),
        }
    }

    fn collection(name: &str, path: &str, reply: &'static str) -> RouteCollection {
        RouteCollection::new(name, Router::new().route(path, get(move || async move { reply })))
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn test_mount_rejects_duplicate_names() {
        let mut api = ApiMount::new("/api");
        assert!(api.mount(collection("upload", "/upload", "first")));
        assert!(!api.mount(collection("upload", "/upload", "second")));
        assert_eq!(api.mounted(), vec!["upload"]);
    }

    #[test]
    fn test_mounted_keeps_registration_order() {
        let mut api = ApiMount::new("/api");
        api.mount(collection("upload", "/upload", "u"));
        api.mount(collection("payment", "/payment", "p"));
        api.mount(collection("upload", "/upload", "u"));
        assert_eq!(api.mounted(), vec!["upload", "payment"]);
        assert!(api.is_mounted("payment"));
        assert!(!api.is_mounted("reports"));
    }

    #[tokio::test]
    async fn test_duplicate_mount_keeps_first_registration() {
        let mut api = ApiMount::new("/api");
        api.mount(collection("upload", "/upload", "first"));
        api.mount(collection("upload", "/upload", "second"));

        let app = api.into_router().with_state(test_state());
        let (status, body) = get_body(app, "/api/upload").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "first");
    }

    #[tokio::test]
    async fn test_prefix_applies_to_every_collection() {
        let mut api = ApiMount::new("/api");
        api.mount(collection("upload", "/upload", "u"));
        api.mount(collection("payment", "/payment", "p"));
        let app = api.into_router().with_state(test_state());

        assert_eq!(get_body(app.clone(), "/api/upload").await.0, StatusCode::OK);
        assert_eq!(get_body(app.clone(), "/api/payment").await.0, StatusCode::OK);
        assert_eq!(get_body(app.clone(), "/upload").await.0, StatusCode::NOT_FOUND);
        assert_eq!(get_body(app, "/payment").await.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_empty_prefix_mounts_at_root() {
        let mut api = ApiMount::new("");
        api.mount(collection("upload", "/upload", "u"));
        let app = api.into_router().with_state(test_state());

        assert_eq!(get_body(app.clone(), "/upload").await.0, StatusCode::OK);
        assert_eq!(get_body(app, "/api/upload").await.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_no_collections_yields_empty_router() {
        let app = ApiMount::new("/api").into_router().with_state(test_state());
        assert_eq!(get_body(app, "/api").await.0, StatusCode::NOT_FOUND);
    }
}
