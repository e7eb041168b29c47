//! DTOs exposed by the API endpoints.

pub mod client;
