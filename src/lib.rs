//! # Data Cleaner API
//!
//! HTTP backend entry point for the Data Cleaner & Visual Insight Tool, built
//! with Axum.
//!
//! The service itself is thin: it resolves which browser origins may call
//! it, mounts the `upload` and `payment` route collections under one prefix,
//! and answers two liveness probes. Upload, cleaning and payment logic are
//! provided by the collaborator modules behind those mount points.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Origin auditing
//! ├── modules/          # Route collections
//! │   ├── health/      # GET / and GET /health
//! │   ├── upload/      # Upload collection
//! │   └── payment/     # Payment collection
//! ├── mount.rs          # Named, idempotent collection mounting
//! └── router.rs         # Application router and middleware stack
//! crates/
//! ├── datacleaner-core/    # AppError and error bodies
//! └── datacleaner-config/  # CORS and server configuration
//! ```
//!
//! ## Cross-Origin Policy
//!
//! `CORS_ORIGINS` is authoritative when set. Without it the service allows
//! the production front-end and the local Vite/React dev servers. Wildcard
//! origins are refused at startup while credentials are enabled.
//!
//! ## Quick Start
//!
//! ```bash
//! CORS_ORIGINS=https://data-cleaner-project.netlify.app
//! HOST=0.0.0.0
//! PORT=8000
//! API_PREFIX=/api
//! ```
//!
//! When the server is running, API documentation is available at
//! `/swagger-ui` and `/scalar`.

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod mount;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use datacleaner_config;
pub use datacleaner_core;
