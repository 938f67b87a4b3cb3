mod config;
mod constants;
mod errors;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;
mod validators;

use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};
use mongodb::Client;
use redis::aio::ConnectionManager;

use crate::config::Config;
use crate::repositories::{MongoUserStore, UserRepository};
use crate::services::{AuthService, HealthService, PasswordHasher, TokenService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;
    info!(
        "Starting {} ({} environment)",
        config.service_name, config.node_env
    );

    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&config.mongodb_url)
        .await
        .map_err(io::Error::other)?;
    let db = client.database(&config.mongodb_name);
    db.run_command(mongodb::bson::doc! { "ping": 1 })
        .await
        .map_err(io::Error::other)?;
    info!("Successfully connected to MongoDB");

    info!("Connecting to Redis...");
    let redis_info = config.redis_connection_info().map_err(io::Error::other)?;
    let redis_client = redis::Client::open(redis_info).map_err(io::Error::other)?;
    let redis = ConnectionManager::new(redis_client)
        .await
        .map_err(io::Error::other)?;
    info!("Successfully connected to Redis");

    let hasher = PasswordHasher::new(config.bcrypt_cost);
    info!("Hashing passwords with bcrypt cost {}", hasher.cost());
    let repository = UserRepository::new(
        Arc::new(MongoUserStore::new(&db)),
        hasher,
        config.write_timeout(),
    );
    repository.init().await.map_err(io::Error::other)?;

    let tokens = TokenService::new(
        &config.service_secret,
        &config.service_name,
        config.jwt_expiration_hours,
    );
    info!(
        "Issuing tokens as '{}' valid for {}h",
        tokens.issuer(),
        config.jwt_expiration_hours
    );
    let auth_service = web::Data::new(AuthService::new(repository.clone(), tokens.clone()));
    let repository = web::Data::new(repository);
    let health = web::Data::new(HealthService::new(db.clone(), redis));

    let server_addr = config.bind_address();
    info!("Serving API at http://{}", server_addr);

    HttpServer::new(move || {
        let tokens = tokens.clone();
        App::new()
            .wrap(Logger::default())
            .app_data(repository.clone())
            .app_data(auth_service.clone())
            .app_data(health.clone())
            .configure(|cfg| routes::configure_routes(cfg, &tokens))
    })
    .shutdown_timeout(config.shutdown_grace_secs)
    .bind(&server_addr)?
    .run()
    .await?;

    info!("Server stopped, closing MongoDB client");
    client.shutdown().await;
    Ok(())
}
