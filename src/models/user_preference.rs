//! Diesel models for stored user preferences.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::{PreferenceId, PreferenceName, TypeConstraintError, UserId};
use crate::domain::user_preference::{
    NewUserPreference as DomainNewUserPreference, UserPreference as DomainUserPreference,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::user_preferences)]
/// Diesel model for [`crate::domain::user_preference::UserPreference`].
/// The value column holds serialized JSON.
pub struct UserPreference {
    pub id: i32,
    pub user_id: String,
    pub name: String,
    pub value: String,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::user_preferences)]
pub struct NewUserPreference<'a> {
    pub user_id: &'a str,
    pub name: &'a str,
    pub value: String,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<UserPreference> for DomainUserPreference {
    type Error = TypeConstraintError;

    fn try_from(row: UserPreference) -> Result<Self, Self::Error> {
        let value = serde_json::from_str(&row.value)
            .map_err(|e| TypeConstraintError::InvalidValue(e.to_string()))?;

        Ok(Self {
            id: PreferenceId::try_from(row.id)?,
            user_id: UserId::new(row.user_id)?,
            name: PreferenceName::new(row.name)?,
            value,
            updated_at: row.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewUserPreference> for NewUserPreference<'a> {
    fn from(preference: &'a DomainNewUserPreference) -> Self {
        Self {
            user_id: preference.user_id.as_str(),
            name: preference.name.as_str(),
            value: preference.value.to_string(),
            updated_at: preference.updated_at,
        }
    }
}
