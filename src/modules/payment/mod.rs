pub mod controller;
pub mod router;

pub use router::init_payment_router;

pub const COLLECTION: &str = "payment";
