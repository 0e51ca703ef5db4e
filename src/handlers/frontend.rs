// src/handlers/frontend.rs
// DOCUMENTATION: Frontend page and static assets
// PURPOSE: Serve index.html at / and the static directory under /static

use crate::config::Config;
use crate::errors::AttractionsError;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use std::path::Path;

const FALLBACK_PAGE: &str = "<h1>Frontend not found. Please create static/index.html</h1>";

/// GET /
/// index.html from the static directory, or a short fallback page. Always 200.
pub async fn index(config: web::Data<Config>) -> impl Responder {
    let index_path = Path::new(&config.static_dir).join("index.html");

    let content = match tokio::fs::read_to_string(&index_path).await {
        Ok(content) => content,
        Err(e) => {
            log::debug!("No frontend at {}: {}", index_path.display(), e);
            FALLBACK_PAGE.to_string()
        }
    };

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(content)
}

/// Fallback for unknown routes
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AttractionsError> {
    Err(AttractionsError::NotFound(req.path().to_string()))
}

/// Configuration for frontend routes
/// DOCUMENTATION: /static is only mounted when the directory exists
pub fn config(cfg: &mut web::ServiceConfig, static_dir: &str) {
    cfg.route("/", web::get().to(index));

    if Path::new(static_dir).is_dir() {
        cfg.service(actix_files::Files::new("/static", static_dir));
    } else {
        log::warn!("Static directory '{}' not found, /static disabled", static_dir);
    }
}
