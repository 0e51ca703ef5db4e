// src/handlers/attractions.rs
// DOCUMENTATION: HTTP handler for the attractions search
// PURPOSE: Parse the bounding box, run the aggregation, return JSON

use crate::config::Config;
use crate::errors::AttractionsError;
use crate::models::AttractionsQuery;
use crate::services::AttractionService;
use actix_web::{web, HttpResponse, Responder};

/// GET /attractions
/// Popular places inside the bounding box
///
/// DOCUMENTATION: Responds 200 with a JSON array even when every upstream
/// category failed. The X-Categories-* headers tell the two cases apart.
pub async fn get_attractions(
    config: web::Data<Config>,
    query: web::Query<AttractionsQuery>,
) -> Result<impl Responder, AttractionsError> {
    let query = query.into_inner();
    let bounds = query.bounds();

    let result = AttractionService::get_attractions(config.get_ref(), &bounds, query.radius).await?;
    let stats = result.stats;

    Ok(HttpResponse::Ok()
        .insert_header(("X-Categories-Attempted", stats.categories_attempted.to_string()))
        .insert_header(("X-Categories-Skipped", stats.categories_skipped.to_string()))
        .insert_header(("X-Categories-Failed", stats.categories_failed.to_string()))
        .json(result.attractions))
}

/// Configuration for attraction routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/attractions", web::get().to(get_attractions));
}
