//! Domain records exposed by the service layer.

pub mod client;
pub mod types;
pub mod user_preference;
