//! # Data Cleaner Core
//!
//! Core types shared by the Data Cleaner API crates.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use datacleaner_core::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Dataset not found"));
//! ```

pub mod errors;

pub use errors::{AppError, ErrorResponse};
