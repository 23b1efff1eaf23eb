use actix_web::{web, HttpResponse, Responder};
use common::model::config::ClientConfig;

/// Actix web handler for `GET /config.json`.
pub async fn process(config: web::Data<ClientConfig>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store"))
        .json(config.get_ref())
}
