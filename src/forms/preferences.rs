use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::domain::types::{PreferenceName, UserId};
use crate::domain::user_preference::NewUserPreference;
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
/// JSON body of `POST /api/preferences`.
pub struct SavePreferenceForm {
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

impl TryFrom<SavePreferenceForm> for NewUserPreference {
    type Error = FormError;

    fn try_from(form: SavePreferenceForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let user_id = UserId::new(form.user_id).map_err(|_| FormError::InvalidUserId)?;
        let name = PreferenceName::new(form.name).map_err(|_| FormError::InvalidName)?;

        Ok(NewUserPreference::new(user_id, name, form.value))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn valid_form_converts_to_new_preference() {
        let form = SavePreferenceForm {
            user_id: "u-1".to_string(),
            name: "dashboard".to_string(),
            value: json!({"widgets": ["stock", "orders"]}),
        };

        let preference = NewUserPreference::try_from(form).unwrap();

        assert_eq!(preference.user_id.as_str(), "u-1");
        assert_eq!(preference.value["widgets"][0], json!("stock"));
    }

    #[test]
    fn empty_fields_fail_validation() {
        let form = SavePreferenceForm {
            user_id: String::new(),
            name: "dashboard".to_string(),
            value: Value::Null,
        };

        assert!(matches!(
            NewUserPreference::try_from(form),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn whitespace_name_is_rejected() {
        let form = SavePreferenceForm {
            user_id: "u-1".to_string(),
            name: "   ".to_string(),
            value: json!(true),
        };

        assert!(matches!(
            NewUserPreference::try_from(form),
            Err(FormError::InvalidName)
        ));
    }

    #[test]
    fn missing_value_defaults_to_null() {
        let form: SavePreferenceForm =
            serde_json::from_value(json!({"user_id": "u-1", "name": "theme"})).unwrap();
        assert_eq!(form.value, Value::Null);
    }
}
