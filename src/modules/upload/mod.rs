pub mod controller;
pub mod router;

pub use router::init_upload_router;

/// Name the collection is mounted under.
pub const COLLECTION: &str = "upload";
