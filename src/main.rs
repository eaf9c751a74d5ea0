use std::env;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use driftwood_api::app_config;
use driftwood_api::models::addon::AddOnCatalog;
use driftwood_api::models::property::PropertyConfig;
use driftwood_api::services::proximity_service::ProximityService;
use driftwood_api::session::SessionManager;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    let proximity = match ProximityService::new(env::var("ROUTING_URL").ok()) {
        Ok(service) => service,
        Err(err) => {
            eprintln!("Failed to build routing client: {}", err);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, err.to_string()));
        }
    };

    let manager = web::Data::new(SessionManager::new(
        AddOnCatalog::default(),
        PropertyConfig::driftwood_cottage(),
        proximity.clone(),
    ));
    let proximity_data = web::Data::new(proximity);

    println!("Attempting to bind to {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(manager.clone())
            .app_data(proximity_data.clone())
            .configure(app_config)
    })
    .bind((host, port))?
    .run()
    .await
}
