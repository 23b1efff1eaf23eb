//! Static host for the university directory frontend.
//!
//! Serves the embedded WASM bundle and the runtime `/config.json`. The
//! universities REST API itself lives elsewhere; its base URL comes from
//! `UNIVERSITIES_API_BASE`.

mod assets;
mod config;
mod services;

use crate::config::HostConfig;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::io;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = HostConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let url = config.url();

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url_clone) {
                warn!("Could not open browser: {}", e);
            }
        });
    }

    if config.api_base.is_empty() {
        info!("Frontend will call the universities API on its own origin");
    } else {
        info!("Frontend will call the universities API at {}", config.api_base);
    }
    info!("Server running at {}", url);

    let client_config = web::Data::new(config.client_config());

    HttpServer::new(move || {
        App::new()
            .app_data(client_config.clone())
            .service(services::config::configure_routes())
            .default_service(web::route().to(assets::serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
