//! Preference persistence service.

use crate::domain::types::{PreferenceName, UserId};
use crate::domain::user_preference::{NewUserPreference, UserPreference};
use crate::repository::{UserPreferenceReader, UserPreferenceWriter};
use crate::services::ServiceResult;

/// Persists user preferences and reads them back.
///
/// `save` always returns the stored record, including its generated id.
pub struct PreferenceStore<R> {
    repo: R,
}

impl<R> PreferenceStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R> PreferenceStore<R>
where
    R: UserPreferenceWriter,
{
    pub fn save(&self, preference: &NewUserPreference) -> ServiceResult<UserPreference> {
        let stored = self.repo.save_preference(preference).map_err(|err| {
            log::error!(
                "Failed to save preference {} for {}: {err}",
                preference.name,
                preference.user_id
            );
            err
        })?;

        log::debug!("Saved preference {} as id {}", stored.name, stored.id);
        Ok(stored)
    }
}

impl<R> PreferenceStore<R>
where
    R: UserPreferenceReader,
{
    pub fn find(&self, user_id: &str, name: &str) -> ServiceResult<Option<UserPreference>> {
        let user_id = UserId::new(user_id)?;
        let name = PreferenceName::new(name)?;

        Ok(self.repo.get_preference(&user_id, &name).map_err(|err| {
            log::error!("Failed to load preference {name} for {user_id}: {err}");
            err
        })?)
    }

    /// Lists the preferences of a user ordered by name.
    pub fn list(&self, user_id: &str) -> ServiceResult<Vec<UserPreference>> {
        let user_id = UserId::new(user_id)?;

        Ok(self.repo.list_preferences(&user_id).map_err(|err| {
            log::error!("Failed to list preferences for {user_id}: {err}");
            err
        })?)
    }
}
