//! Transfer representation of clients returned by the REST API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// External view of [`crate::domain::client::Client`]. The persistent key is
/// published as `pKey`; every other field keeps its name.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ClientVo {
    pub id: i32,
    #[serde(rename = "pKey")]
    pub p_key: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
