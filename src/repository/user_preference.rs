//! Repository implementation for user preferences.

use diesel::{prelude::*, upsert::excluded};

use crate::{
    domain::{
        types::{PreferenceName, UserId},
        user_preference::{NewUserPreference, UserPreference},
    },
    models::user_preference::{
        NewUserPreference as DbNewUserPreference, UserPreference as DbUserPreference,
    },
    repository::{
        DieselRepository, UserPreferenceReader, UserPreferenceWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl UserPreferenceWriter for DieselRepository {
    fn save_preference(&self, preference: &NewUserPreference) -> RepositoryResult<UserPreference> {
        use crate::schema::user_preferences;

        let mut conn = self.conn()?;
        let db_new_preference: DbNewUserPreference = preference.into();

        let stored = diesel::insert_into(user_preferences::table)
            .values(&db_new_preference)
            .on_conflict((user_preferences::user_id, user_preferences::name))
            .do_update()
            .set((
                user_preferences::value.eq(excluded(user_preferences::value)),
                user_preferences::updated_at.eq(excluded(user_preferences::updated_at)),
            ))
            .get_result::<DbUserPreference>(&mut conn)?;

        UserPreference::try_from(stored).map_err(RepositoryError::from)
    }
}

impl UserPreferenceReader for DieselRepository {
    fn get_preference(
        &self,
        user_id: &UserId,
        name: &PreferenceName,
    ) -> RepositoryResult<Option<UserPreference>> {
        use crate::schema::user_preferences;

        let mut conn = self.conn()?;
        let row = user_preferences::table
            .filter(user_preferences::user_id.eq(user_id.as_str()))
            .filter(user_preferences::name.eq(name.as_str()))
            .first::<DbUserPreference>(&mut conn)
            .optional()?;

        row.map(UserPreference::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_preferences(&self, user_id: &UserId) -> RepositoryResult<Vec<UserPreference>> {
        use crate::schema::user_preferences;

        let mut conn = self.conn()?;
        user_preferences::table
            .filter(user_preferences::user_id.eq(user_id.as_str()))
            .order(user_preferences::name.asc())
            .load::<DbUserPreference>(&mut conn)?
            .into_iter()
            .map(|row| UserPreference::try_from(row).map_err(RepositoryError::from))
            .collect()
    }
}
