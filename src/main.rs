// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config and logging, start HTTP server

mod config;
mod errors;
mod handlers;
mod models;
mod services;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            config.log_level.as_str()
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting tourist attractions service...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let config_clone = config.clone();

    HttpServer::new(move || {
        let static_dir = config_clone.static_dir.clone();

        App::new()
            // Application state (configuration only; requests share nothing else)
            .app_data(web::Data::new(config_clone.clone()))
            // Middleware
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            // Routes
            .configure(|cfg| handlers::frontend_config(cfg, &static_dir))
            .configure(handlers::health_config)
            .configure(handlers::attractions_config)
            .default_service(web::route().to(handlers::not_found))
    })
    .bind(&server_addr)?
    .run()
    .await
}
