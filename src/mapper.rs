//! Conversions between internal client records and their transfer form.

use crate::domain::client::Client;
use crate::dto::client::ClientVo;

/// Controls whether [`ClientMapper::copy`] carries identity fields over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyMode {
    /// Copy every field, `id` and `persistent_key` included.
    #[default]
    Overwrite,
    /// Keep the target's `id` and `persistent_key`.
    PreserveTarget,
}

/// Stateless mapper between [`Client`] and [`ClientVo`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ClientMapper {
    copy_mode: CopyMode,
}

impl ClientMapper {
    pub fn new(copy_mode: CopyMode) -> Self {
        Self { copy_mode }
    }

    pub fn copy_mode(&self) -> CopyMode {
        self.copy_mode
    }

    /// Maps a client list, keeping order and length.
    pub fn clients_to_client_vos(&self, clients: &[Client]) -> Vec<ClientVo> {
        clients.iter().map(|client| self.to_vo(client)).collect()
    }

    pub fn to_vo(&self, entity: &Client) -> ClientVo {
        ClientVo {
            id: entity.id,
            p_key: entity.persistent_key.clone(),
            name: entity.name.clone(),
            email: entity.email.clone(),
            phone: entity.phone.clone(),
            address: entity.address.clone(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn from_vo(&self, vo: &ClientVo) -> Client {
        Client {
            id: vo.id,
            persistent_key: vo.p_key.clone(),
            name: vo.name.clone(),
            email: vo.email.clone(),
            phone: vo.phone.clone(),
            address: vo.address.clone(),
            created_at: vo.created_at,
            updated_at: vo.updated_at,
        }
    }

    /// Overwrites `target` with the fields of `source` according to the
    /// configured [`CopyMode`].
    pub fn copy(&self, source: &Client, target: &mut Client) {
        if self.copy_mode == CopyMode::Overwrite {
            target.id = source.id;
            target.persistent_key.clone_from(&source.persistent_key);
        }
        target.name.clone_from(&source.name);
        target.email.clone_from(&source.email);
        target.phone.clone_from(&source.phone);
        target.address.clone_from(&source.address);
        target.created_at = source.created_at;
        target.updated_at = source.updated_at;
    }
}

impl From<Client> for ClientVo {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            p_key: client.persistent_key,
            name: client.name,
            email: client.email,
            phone: client.phone,
            address: client.address,
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}

impl From<ClientVo> for Client {
    fn from(vo: ClientVo) -> Self {
        Self {
            id: vo.id,
            persistent_key: vo.p_key,
            name: vo.name,
            email: vo.email,
            phone: vo.phone,
            address: vo.address,
            created_at: vo.created_at,
            updated_at: vo.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;

    fn timestamp(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .expect("valid timestamp")
    }

    fn client(id: i32, key: &str, name: &str) -> Client {
        Client {
            id,
            persistent_key: key.to_string(),
            name: name.to_string(),
            email: Some(format!("{}@example.com", key.to_lowercase())),
            phone: None,
            address: Some(format!("Dock {id}")),
            created_at: timestamp(1),
            updated_at: timestamp(id as u32 + 1),
        }
    }

    #[test]
    fn list_mapping_preserves_order_and_length() {
        let mapper = ClientMapper::default();
        let clients = vec![
            client(1, "C1", "Alpha"),
            client(2, "C2", "Beta"),
            client(3, "C3", "Gamma"),
        ];

        let vos = mapper.clients_to_client_vos(&clients);

        assert_eq!(vos.len(), clients.len());
        for (client, vo) in clients.iter().zip(&vos) {
            assert_eq!(vo.p_key, client.persistent_key);
            assert_eq!(vo.name, client.name);
        }
    }

    #[test]
    fn empty_list_maps_to_empty_list() {
        assert!(ClientMapper::default().clients_to_client_vos(&[]).is_empty());
    }

    #[test]
    fn to_vo_copies_fields_by_name() {
        let source = client(5, "C5", "Depot");
        let vo = ClientMapper::default().to_vo(&source);

        assert_eq!(vo.id, 5);
        assert_eq!(vo.p_key, "C5");
        assert_eq!(vo.email, source.email);
        assert_eq!(vo.address, source.address);
        assert_eq!(vo.updated_at, source.updated_at);
    }

    #[test]
    fn from_vo_inverts_to_vo() {
        let mapper = ClientMapper::default();
        let original = client(8, "C8", "Yard");

        let restored = mapper.from_vo(&mapper.to_vo(&original));

        assert_eq!(restored.persistent_key, original.persistent_key);
        assert_eq!(restored, original);
    }

    #[test]
    fn owned_conversions_match_mapper() {
        let mapper = ClientMapper::default();
        let original = client(2, "C2", "Beta");

        let vo: ClientVo = original.clone().into();
        assert_eq!(vo, mapper.to_vo(&original));

        let back: Client = vo.into();
        assert_eq!(back, original);
    }

    #[test]
    fn copy_overwrites_identity_by_default() {
        let mapper = ClientMapper::default();
        assert_eq!(mapper.copy_mode(), CopyMode::Overwrite);

        let source = client(1, "C1", "Alpha");
        let mut target = client(2, "C2", "Beta");

        mapper.copy(&source, &mut target);

        assert_eq!(target.persistent_key, source.persistent_key);
        assert_eq!(target, source);
    }

    #[test]
    fn copy_can_preserve_target_identity() {
        let mapper = ClientMapper::new(CopyMode::PreserveTarget);
        let source = client(1, "C1", "Alpha");
        let mut target = client(2, "C2", "Beta");

        mapper.copy(&source, &mut target);

        assert_eq!(target.id, 2);
        assert_eq!(target.persistent_key, "C2");
        assert_eq!(target.name, "Alpha");
        assert_eq!(target.email, source.email);
        assert_eq!(target.address, source.address);
        assert_eq!(target.updated_at, source.updated_at);
    }
}
