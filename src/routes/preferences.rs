use actix_web::{HttpResponse, web};

use crate::domain::user_preference::NewUserPreference;
use crate::forms::preferences::SavePreferenceForm;
use crate::repository::{UserPreferenceReader, UserPreferenceWriter};
use crate::services::ServiceError;
use crate::services::user_preference::PreferenceStore;

/// `POST /api/preferences`
pub async fn save_preference<R>(
    store: web::Data<PreferenceStore<R>>,
    web::Json(form): web::Json<SavePreferenceForm>,
) -> Result<HttpResponse, ServiceError>
where
    R: UserPreferenceWriter + 'static,
{
    let new_preference = NewUserPreference::try_from(form)?;
    let stored = store.save(&new_preference)?;
    Ok(HttpResponse::Ok().json(stored))
}

/// `GET /api/preferences/{user_id}`
pub async fn list_preferences<R>(
    store: web::Data<PreferenceStore<R>>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, ServiceError>
where
    R: UserPreferenceReader + 'static,
{
    let preferences = store.list(&user_id)?;
    Ok(HttpResponse::Ok().json(preferences))
}

/// `GET /api/preferences/{user_id}/{name}`
pub async fn get_preference<R>(
    store: web::Data<PreferenceStore<R>>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ServiceError>
where
    R: UserPreferenceReader + 'static,
{
    let (user_id, name) = path.into_inner();
    let preference = store.find(&user_id, &name)?.ok_or(ServiceError::NotFound)?;
    Ok(HttpResponse::Ok().json(preference))
}
