pub mod health;
pub mod payment;
pub mod upload;
