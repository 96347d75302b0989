mod config;
mod services;
mod store;

use crate::config::ServerConfig;
use crate::store::ContentStore;
use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info, warn};
use std::io;
use std::thread::{self, JoinHandle};
use std::time::Duration;

fn cors(config: &ServerConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET"])
        .allow_any_header()
        .max_age(3600);
    if config.allows_any_origin() {
        cors.allow_any_origin()
    } else {
        config
            .cors_origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}

/// Opens `url` with `open` after `delay`, off the server thread. A failure is
/// only logged: the server keeps running without a browser.
fn launch_browser<F>(url: String, delay: Duration, open: F) -> JoinHandle<()>
where
    F: FnOnce(&str) -> io::Result<()> + Send + 'static,
{
    thread::spawn(move || {
        thread::sleep(delay);
        if let Err(e) = open(&url) {
            warn!("Could not open {} in a browser: {}", url, e);
        }
    })
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        std::io::Error::other(e)
    })?;

    let store = ContentStore::load(config.content_path.as_deref()).map_err(|e| {
        error!("Cannot load case study content: {}", e);
        std::io::Error::other(e)
    })?;
    match &config.content_path {
        Some(path) => info!("Serving content from {}", path.display()),
        None => info!("Serving embedded content"),
    }

    let url = config.url();
    if config.open_browser {
        launch_browser(url.clone(), Duration::from_millis(500), webbrowser::open);
    }

    info!("Server running at {}", url);

    let store = web::Data::new(store);
    let bind = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors(&config))
            .app_data(store.clone())
            .service(services::content::configure_routes())
            .default_service(web::route().to(services::site::serve_embedded))
    })
        .bind(bind)?
        .run()
        .await
}
