use crate::{
    db::{DbConnection, DbPool},
    domain::{
        client::{Client, NewClient},
        types::{PreferenceName, UserId},
        user_preference::{NewUserPreference, UserPreference},
    },
    repository::errors::RepositoryResult,
};

pub mod client;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod user_preference;

/// Diesel-backed repository shared by the client and preference services.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

pub trait ClientReader {
    /// Returns every client ordered by insertion.
    fn find_all_clients(&self) -> RepositoryResult<Vec<Client>>;
}

pub trait ClientWriter {
    fn create_clients(&self, new_clients: &[NewClient]) -> RepositoryResult<usize>;
}

pub trait UserPreferenceReader {
    fn get_preference(
        &self,
        user_id: &UserId,
        name: &PreferenceName,
    ) -> RepositoryResult<Option<UserPreference>>;
    fn list_preferences(&self, user_id: &UserId) -> RepositoryResult<Vec<UserPreference>>;
}

pub trait UserPreferenceWriter {
    /// Inserts or replaces the preference and returns the stored row.
    fn save_preference(&self, preference: &NewUserPreference) -> RepositoryResult<UserPreference>;
}
