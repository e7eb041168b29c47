use diesel::prelude::*;

use crate::{
    domain::client::{Client, NewClient},
    models::client::{Client as DbClient, NewClient as DbNewClient},
    repository::{ClientReader, ClientWriter, DieselRepository, errors::RepositoryResult},
};

impl ClientReader for DieselRepository {
    fn find_all_clients(&self) -> RepositoryResult<Vec<Client>> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let items = clients::table
            .order(clients::id.asc())
            .select(DbClient::as_select())
            .load::<DbClient>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl ClientWriter for DieselRepository {
    fn create_clients(&self, new_clients: &[NewClient]) -> RepositoryResult<usize> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewClient> = new_clients.iter().map(Into::into).collect();
        let affected = diesel::insert_into(clients::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
