pub mod client;
pub mod errors;
pub mod user_preference;

pub use errors::{ServiceError, ServiceResult};
