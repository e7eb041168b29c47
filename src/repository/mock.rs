//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::{Client, NewClient};
use crate::domain::types::{PreferenceName, UserId};
use crate::domain::user_preference::{NewUserPreference, UserPreference};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, ClientWriter, UserPreferenceReader, UserPreferenceWriter};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn find_all_clients(&self) -> RepositoryResult<Vec<Client>>;
    }

    impl ClientWriter for Repository {
        fn create_clients(&self, new_clients: &[NewClient]) -> RepositoryResult<usize>;
    }

    impl UserPreferenceReader for Repository {
        fn get_preference(
            &self,
            user_id: &UserId,
            name: &PreferenceName,
        ) -> RepositoryResult<Option<UserPreference>>;
        fn list_preferences(&self, user_id: &UserId) -> RepositoryResult<Vec<UserPreference>>;
    }

    impl UserPreferenceWriter for Repository {
        fn save_preference(&self, preference: &NewUserPreference) -> RepositoryResult<UserPreference>;
    }
}
