use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Internal client record keyed by its persistent key.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Client {
    pub id: i32,
    pub persistent_key: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewClient {
    pub persistent_key: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl NewClient {
    #[must_use]
    pub fn new(
        persistent_key: String,
        name: String,
        email: Option<String>,
        phone: Option<String>,
        address: Option<String>,
    ) -> Self {
        Self {
            persistent_key: persistent_key.trim().to_string(),
            name,
            email: email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            address: address
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_client_normalizes_contacts() {
        let client = NewClient::new(
            " C1 ".to_string(),
            "Acme".to_string(),
            Some(" Ops@Acme.COM ".to_string()),
            Some("   ".to_string()),
            None,
        );

        assert_eq!(client.persistent_key, "C1");
        assert_eq!(client.email.as_deref(), Some("ops@acme.com"));
        assert_eq!(client.phone, None);
        assert_eq!(client.address, None);
    }
}
