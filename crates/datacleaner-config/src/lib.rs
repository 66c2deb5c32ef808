//! # Data Cleaner Config
//!
//! Configuration types for the Data Cleaner API, loaded from environment
//! variables once at startup.
//!
//! - [`cors`]: cross-origin allow-list and the CORS layer built from it
//! - [`server`]: bind address, API prefix, deployment label
//!
//! # Example
//!
//! ```ignore
//! use datacleaner_config::{CorsConfig, ServerConfig};
//!
//! let cors_config = CorsConfig::from_env()?;
//! let server_config = ServerConfig::from_env()?;
//! ```

pub mod cors;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::{CorsConfig, CorsConfigError};
pub use server::{ServerConfig, ServerConfigError};
