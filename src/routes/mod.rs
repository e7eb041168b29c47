//! HTTP routes of the warehouse API.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, Scope, web};
use serde_json::json;

use crate::repository::{ClientReader, UserPreferenceReader, UserPreferenceWriter};
use crate::services::ServiceError;

pub mod api;
pub mod preferences;

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Storage details stay in the logs.
        let message = match self {
            ServiceError::Internal(_) => "internal server error".to_string(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}

/// Builds the `/api` scope. `C` serves the client listing, `P` the
/// preference store; both are looked up from app data.
pub fn api_scope<C, P>() -> Scope
where
    C: ClientReader + 'static,
    P: UserPreferenceReader + UserPreferenceWriter + 'static,
{
    web::scope("/api")
        .route("/clients", web::get().to(api::api_clients::<C>))
        .route(
            "/preferences",
            web::post().to(preferences::save_preference::<P>),
        )
        .route(
            "/preferences/{user_id}",
            web::get().to(preferences::list_preferences::<P>),
        )
        .route(
            "/preferences/{user_id}/{name}",
            web::get().to(preferences::get_preference::<P>),
        )
}
