#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::db::{ConnectionOptions, establish_connection_pool};
#[cfg(feature = "server")]
use crate::mapper::ClientMapper;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;
#[cfg(feature = "server")]
use crate::routes::api::ClientQueryEndpoint;
#[cfg(feature = "server")]
use crate::services::client::ClientService;
#[cfg(feature = "server")]
use crate::services::user_preference::PreferenceStore;

pub mod domain;
pub mod dto;
pub mod mapper;
pub mod models;
pub mod schema;

#[cfg(feature = "server")]
pub mod db;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(
        &server_config.database_url,
        ConnectionOptions::from(&server_config),
    )
    .map_err(|e| std::io::Error::other(format!("Failed to establish database connection: {e}")))?;

    let repo = DieselRepository::new(pool);

    let clients = web::Data::new(ClientQueryEndpoint::new(
        ClientService::new(repo.clone()),
        ClientMapper::default(),
    ));
    let preferences = web::Data::new(PreferenceStore::new(repo));

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(clients.clone())
            .app_data(preferences.clone())
            .service(routes::api_scope::<DieselRepository, DieselRepository>())
    })
    .bind(bind_address)?
    .run()
    .await
}
