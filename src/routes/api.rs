use actix_web::{HttpResponse, web};

use crate::dto::client::ClientVo;
use crate::mapper::ClientMapper;
use crate::repository::ClientReader;
use crate::services::{ServiceError, ServiceResult};
use crate::services::client::ClientService;

/// Read-only client listing backed by a lookup service and a mapper.
pub struct ClientQueryEndpoint<R> {
    service: ClientService<R>,
    mapper: ClientMapper,
}

impl<R> ClientQueryEndpoint<R>
where
    R: ClientReader,
{
    pub fn new(service: ClientService<R>, mapper: ClientMapper) -> Self {
        Self { service, mapper }
    }

    /// Loads every client and converts it to its transfer form, in order.
    pub fn find_all(&self) -> ServiceResult<Vec<ClientVo>> {
        let clients = self.service.find_all()?;
        Ok(self.mapper.clients_to_client_vos(&clients))
    }
}

/// `GET /api/clients`
pub async fn api_clients<R>(
    endpoint: web::Data<ClientQueryEndpoint<R>>,
) -> Result<HttpResponse, ServiceError>
where
    R: ClientReader + 'static,
{
    let clients = endpoint.find_all()?;
    Ok(HttpResponse::Ok().json(clients))
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use actix_web::App;
    use actix_web::http::StatusCode;
    use actix_web::test::{TestRequest, call_service, init_service, read_body};

    use super::*;
    use crate::domain::client::Client;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn endpoint(repo: MockRepository) -> web::Data<ClientQueryEndpoint<MockRepository>> {
        web::Data::new(ClientQueryEndpoint::new(
            ClientService::new(repo),
            ClientMapper::default(),
        ))
    }

    #[test]
    fn find_all_maps_keys_in_order() {
        let mut repo = MockRepository::new();
        repo.expect_find_all_clients().times(1).returning(|| {
            Ok(["C3", "C1", "C2"]
                .iter()
                .map(|key| Client {
                    persistent_key: key.to_string(),
                    ..Client::default()
                })
                .collect())
        });

        let vos = endpoint(repo).find_all().expect("should list clients");

        let keys: Vec<_> = vos.iter().map(|vo| vo.p_key.as_str()).collect();
        assert_eq!(keys, vec!["C3", "C1", "C2"]);
    }

    #[actix_web::test]
    async fn lookup_failure_returns_internal_server_error() {
        let mut repo = MockRepository::new();
        repo.expect_find_all_clients()
            .returning(|| Err(RepositoryError::DatabaseError("no such table".into())));

        let app = init_service(
            App::new()
                .app_data(endpoint(repo))
                .route("/clients", web::get().to(api_clients::<MockRepository>)),
        )
        .await;

        let req = TestRequest::get().uri("/clients").to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_body(resp).await;
        let body: serde_json::Value = serde_json::from_slice(&body).expect("json error body");
        assert_eq!(body["error"], "internal server error");
    }
}
