use crate::domain::client::Client;
use crate::repository::ClientReader;
use crate::services::{ServiceError, ServiceResult};

/// Client lookup collaborator used by the client endpoint.
pub struct ClientService<R> {
    repo: R,
}

impl<R> ClientService<R>
where
    R: ClientReader,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns all clients in storage order.
    pub fn find_all(&self) -> ServiceResult<Vec<Client>> {
        self.repo.find_all_clients().map_err(|err| {
            log::error!("Failed to list clients: {err}");
            ServiceError::from(err)
        })
    }
}
