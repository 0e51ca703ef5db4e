// src/services/attraction_service.rs
// DOCUMENTATION: Attraction aggregation over Google Places Nearby Search
// PURPOSE: Query every place category around the box midpoint, keep popular
// places inside the box, drop duplicates

use crate::config::Config;
use crate::errors::AttractionsError;
use crate::models::{Attraction, BoundingBox};
use crate::services::{GooglePlace, GooglePlacesClient, PLACE_CATEGORIES, STATUS_OK};
use serde::Serialize;
use std::time::{Duration, Instant};

/// A place needs strictly more ratings than this to be returned
pub const MIN_USER_RATINGS: u32 = 500;

/// Fixed pause after every category request
pub const THROTTLE_DELAY: Duration = Duration::from_millis(100);

/// Aggregation statistics
/// DOCUMENTATION: Tracks what happened during one aggregation pass.
/// Failures never abort the pass; they are counted here instead.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AggregationStats {
    /// Categories for which a request was issued
    pub categories_attempted: u32,
    /// Categories answered with status OK
    pub categories_succeeded: u32,
    /// Categories answered with any other API status
    pub categories_skipped: u32,
    /// Categories whose request failed (transport, HTTP or decode error)
    pub categories_failed: u32,
    /// Places returned by upstream across all OK categories
    pub places_seen: u32,
    /// Places with too few ratings
    pub places_below_threshold: u32,
    /// Places outside the bounding box or without coordinates
    pub places_out_of_bounds: u32,
    /// Places already collected under an earlier category
    pub duplicates_dropped: u32,
    /// Attractions returned
    pub attractions: u32,
    /// Error messages encountered
    pub errors: Vec<String>,
    /// Total duration of the pass in milliseconds
    pub duration_ms: u64,
}

/// Outcome of one aggregation pass
#[derive(Debug, Clone)]
pub struct AggregationResult {
    pub attractions: Vec<Attraction>,
    pub stats: AggregationStats,
}

/// Attraction aggregation service
pub struct AttractionService;

impl AttractionService {
    /// Aggregate attractions inside a bounding box
    /// DOCUMENTATION: Entry point used by the HTTP handler
    ///
    /// Fails with a configuration error, before any request is issued, when
    /// no API key is configured. Otherwise always succeeds, possibly with an
    /// empty list.
    ///
    /// # Arguments
    /// * `config` - Application configuration (API key and base URL)
    /// * `bounds` - Requested bounding box
    /// * `radius` - Search radius in meters around the box midpoint
    pub async fn get_attractions(
        config: &Config,
        bounds: &BoundingBox,
        radius: u32,
    ) -> Result<AggregationResult, AttractionsError> {
        let client = GooglePlacesClient::from_config(config)?;
        Ok(Self::collect(&client, bounds, radius).await)
    }

    /// Run the aggregation pass with an existing client
    /// DOCUMENTATION: Categories are processed strictly in order, one request
    /// at a time, with a fixed pause after each. Per-category failures are
    /// logged and skipped.
    pub async fn collect(
        client: &GooglePlacesClient,
        bounds: &BoundingBox,
        radius: u32,
    ) -> AggregationResult {
        let start_time = Instant::now();
        let mut stats = AggregationStats::default();
        let mut attractions: Vec<Attraction> = Vec::new();

        let (center_lat, center_lng) = bounds.center();

        log::info!(
            "Searching attractions: center=({}, {}), radius={}m, {} categories",
            center_lat,
            center_lng,
            radius,
            PLACE_CATEGORIES.len()
        );

        for place_type in PLACE_CATEGORIES {
            stats.categories_attempted += 1;

            match client
                .nearby_search(center_lat, center_lng, radius, place_type)
                .await
            {
                Ok(response) if response.status == STATUS_OK => {
                    stats.categories_succeeded += 1;
                    stats.places_seen += response.results.len() as u32;
                    let before = attractions.len();

                    for place in &response.results {
                        if let Some(attraction) =
                            Self::to_attraction(place, bounds, client, &mut stats)
                        {
                            if attractions.iter().any(|a| a.place_id == attraction.place_id) {
                                stats.duplicates_dropped += 1;
                            } else {
                                attractions.push(attraction);
                            }
                        }
                    }

                    log::debug!(
                        "{}: {} results, {} kept",
                        place_type,
                        response.results.len(),
                        attractions.len() - before
                    );

                    if response.next_page_token.is_some() {
                        log::debug!("{}: further result pages not fetched", place_type);
                    }
                }
                Ok(response) => {
                    stats.categories_skipped += 1;
                    if response.status == "ZERO_RESULTS" {
                        log::debug!("{}: no results", place_type);
                    } else {
                        log::warn!(
                            "{}: skipped, status {} ({})",
                            place_type,
                            response.status,
                            response.error_message.as_deref().unwrap_or("no message")
                        );
                    }
                }
                Err(e) => {
                    stats.categories_failed += 1;
                    let error_msg = format!("Error fetching data for {}: {}", place_type, e);
                    log::error!("{}", error_msg);
                    stats.errors.push(error_msg);
                }
            }

            tokio::time::sleep(THROTTLE_DELAY).await;
        }

        stats.attractions = attractions.len() as u32;
        stats.duration_ms = start_time.elapsed().as_millis() as u64;

        log::info!(
            "Attraction search done: {} attractions, {}/{} categories ok, {} skipped, {} failed in {}ms",
            stats.attractions,
            stats.categories_succeeded,
            stats.categories_attempted,
            stats.categories_skipped,
            stats.categories_failed,
            stats.duration_ms
        );

        AggregationResult { attractions, stats }
    }

    /// Filter a single upstream place and convert it
    /// DOCUMENTATION: Applies the rating threshold, then the bounding box.
    /// Missing name, rating and place_id fall back to defaults.
    fn to_attraction(
        place: &GooglePlace,
        bounds: &BoundingBox,
        client: &GooglePlacesClient,
        stats: &mut AggregationStats,
    ) -> Option<Attraction> {
        let user_ratings_total = place.user_ratings_total.unwrap_or(0);
        if user_ratings_total <= MIN_USER_RATINGS {
            stats.places_below_threshold += 1;
            return None;
        }

        let (lat, lng) = match place.coordinates() {
            Some((lat, lng)) if bounds.contains(lat, lng) => (lat, lng),
            _ => {
                stats.places_out_of_bounds += 1;
                return None;
            }
        };

        Some(Attraction {
            name: place.name.clone().unwrap_or_else(|| "Unknown".to_string()),
            lat,
            lng,
            rating: place.rating.unwrap_or(0.0),
            user_ratings_total,
            photo_url: place
                .first_photo_reference()
                .map(|reference| client.photo_url(reference)),
            place_id: place.place_id.clone().unwrap_or_default(),
        })
    }
}
