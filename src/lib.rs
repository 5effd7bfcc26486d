#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::{JsonFileUserRepository, UserReader};
#[cfg(feature = "server")]
use crate::routes::api::api_v1_users;

pub mod domain;
pub mod dto;
pub mod error_conversions;
#[cfg(feature = "server")]
pub mod models;
pub mod pagination;
pub mod pipeline;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod services;
pub mod token;

/// Registers the grid API on an actix `App`.
#[cfg(feature = "server")]
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").service(api_v1_users));
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let repo = JsonFileUserRepository::new(&server_config.data_path);
    log::info!("Serving users from {}", repo.path().display());

    let repo: Arc<dyn UserReader + Send + Sync> = Arc::new(repo);
    let repo = web::Data::from(repo);

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(configure)
            .app_data(repo.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
