// src/models/attraction.rs
// DOCUMENTATION: Attraction output record and /attractions query parameters
// PURPOSE: Serialization models for the attractions endpoint

use serde::{Deserialize, Serialize};

use super::BoundingBox;

/// Default search radius in meters
pub const DEFAULT_RADIUS_M: u32 = 5000;

/// A popular place inside the requested bounding box
/// DOCUMENTATION: Built transiently from an upstream search result and
/// returned as JSON. `place_id` is unique within a single response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    /// Place name ("Unknown" when upstream omits it)
    pub name: String,

    /// Latitude in degrees
    pub lat: f64,

    /// Longitude in degrees
    pub lng: f64,

    /// Rating from Google (0-5, 0 when absent)
    pub rating: f64,

    /// Number of ratings on Google
    pub user_ratings_total: u32,

    /// Photo URL built from the first photo reference, null when none
    pub photo_url: Option<String>,

    /// Google Places unique identifier (deduplication key)
    pub place_id: String,
}

/// Query parameters for GET /attractions
#[derive(Debug, Clone, Deserialize)]
pub struct AttractionsQuery {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,

    /// Search radius in meters around the box midpoint
    #[serde(default = "default_radius")]
    pub radius: u32,
}

fn default_radius() -> u32 {
    DEFAULT_RADIUS_M
}

impl AttractionsQuery {
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.north, self.south, self.east, self.west)
    }
}
