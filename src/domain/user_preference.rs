//! User preference records handled by the preference store.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::types::{PreferenceId, PreferenceName, TypeConstraintError, UserId};

/// A preference as persisted by the store.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserPreference {
    pub id: PreferenceId,
    pub user_id: UserId,
    pub name: PreferenceName,
    pub value: Value,
    pub updated_at: NaiveDateTime,
}

/// A preference submitted for saving. Saving an existing `(user_id, name)`
/// pair replaces the stored value.
#[derive(Clone, Debug, PartialEq)]
pub struct NewUserPreference {
    pub user_id: UserId,
    pub name: PreferenceName,
    pub value: Value,
    pub updated_at: NaiveDateTime,
}

impl NewUserPreference {
    #[must_use]
    pub fn new(user_id: UserId, name: PreferenceName, value: Value) -> Self {
        Self {
            user_id,
            name,
            value,
            updated_at: Utc::now().naive_utc(),
        }
    }

    /// Builds a preference from raw input, validating the owner and key.
    pub fn try_new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        value: Value,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self::new(UserId::new(user_id)?, PreferenceName::new(name)?, value))
    }
}
