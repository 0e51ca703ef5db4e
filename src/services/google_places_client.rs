// src/services/google_places_client.rs
// DOCUMENTATION: Google Places API client
// PURPOSE: Issue Nearby Search requests and build photo URLs

use crate::config::Config;
use crate::errors::AttractionsError;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Max photo width requested from the photo endpoint
pub const PHOTO_MAX_WIDTH: u32 = 200;

/// Status value of a successful Nearby Search
pub const STATUS_OK: &str = "OK";

/// Google Places API client
/// DOCUMENTATION: Handles authentication and API calls to Google Places
pub struct GooglePlacesClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Places API key
    api_key: String,
    /// Base URL for Google Places API
    base_url: String,
}

/// Response from Google Places Nearby Search
/// DOCUMENTATION: `status` is returned untouched; interpreting it is up to
/// the caller. Missing fields fall back to empty values.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NearbySearchResponse {
    /// Status of the API call ("OK", "ZERO_RESULTS", "REQUEST_DENIED", ...)
    #[serde(default)]
    pub status: String,
    /// Results array from API
    #[serde(default)]
    pub results: Vec<GooglePlace>,
    /// Error message (if status is not OK)
    pub error_message: Option<String>,
    /// Next page token, never followed
    pub next_page_token: Option<String>,
}

/// Individual place from Google Places API
/// DOCUMENTATION: Every field is optional so that one sparse result cannot
/// fail the whole response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GooglePlace {
    /// Google's unique place identifier
    pub place_id: Option<String>,
    /// Place name
    pub name: Option<String>,
    /// Geographic location
    pub geometry: Option<GoogleGeometry>,
    /// Rating (0-5)
    pub rating: Option<f64>,
    /// Number of user ratings
    pub user_ratings_total: Option<u32>,
    /// Photos attached to the result
    pub photos: Option<Vec<GooglePhoto>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GoogleGeometry {
    pub location: Option<GoogleLocation>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GoogleLocation {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Photo from Google Places
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GooglePhoto {
    /// Photo reference (used to fetch actual photo)
    pub photo_reference: Option<String>,
}

impl GooglePlace {
    /// (lat, lng) when both coordinates are present
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let location = self.geometry.as_ref()?.location.as_ref()?;
        Some((location.lat?, location.lng?))
    }

    /// Reference of the first listed photo; later photos are never consulted
    pub fn first_photo_reference(&self) -> Option<&str> {
        self.photos
            .as_ref()?
            .first()?
            .photo_reference
            .as_deref()
    }
}

impl GooglePlacesClient {
    /// Create new Google Places API client
    /// DOCUMENTATION: Initializes client with API key and the public base URL
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: crate::config::env::DEFAULT_PLACES_BASE_URL.to_string(),
        }
    }

    /// Point the client at another Places-compatible host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build a client from application configuration
    /// DOCUMENTATION: Fails with a configuration error when no API key is set.
    /// Nothing is sent upstream in that case.
    pub fn from_config(config: &Config) -> Result<Self, AttractionsError> {
        match config.google_places_api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => {
                Ok(Self::new(key.to_string()).with_base_url(config.google_places_base_url.as_str()))
            }
            _ => Err(AttractionsError::Configuration(
                "Google Places API key not configured. Set GOOGLE_PLACES_API_KEY environment variable."
                    .to_string(),
            )),
        }
    }

    /// Perform nearby search for places
    /// DOCUMENTATION: Searches for places of one type near a geographic point
    ///
    /// # Arguments
    /// * `latitude` - Center point latitude
    /// * `longitude` - Center point longitude
    /// * `radius` - Search radius in meters
    /// * `place_type` - Type filter (e.g., "museum", "park")
    ///
    /// # Returns
    /// The decoded response. Transport failures, non-2xx statuses and
    /// undecodable bodies are reported as `UpstreamRequest`.
    pub async fn nearby_search(
        &self,
        latitude: f64,
        longitude: f64,
        radius: u32,
        place_type: &str,
    ) -> Result<NearbySearchResponse, AttractionsError> {
        let url = format!("{}/nearbysearch/json", self.base_url);

        let params = [
            ("location", format!("{},{}", latitude, longitude)),
            ("radius", radius.to_string()),
            ("type", place_type.to_string()),
            ("key", self.api_key.clone()),
        ];

        log::debug!(
            "Google Places nearby search: lat={}, lng={}, radius={}, type={}",
            latitude,
            longitude,
            radius,
            place_type
        );

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| AttractionsError::UpstreamRequest(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AttractionsError::UpstreamRequest(format!(
                "API error {}: {}",
                status, body
            )));
        }

        response
            .json::<NearbySearchResponse>()
            .await
            .map_err(|e| AttractionsError::UpstreamRequest(format!("Parse error: {}", e)))
    }

    /// Get photo URL from photo reference
    /// DOCUMENTATION: URL usable directly in img tags; it embeds the API key
    pub fn photo_url(&self, photo_reference: &str) -> String {
        format!(
            "{}/photo?maxwidth={}&photoreference={}&key={}",
            self.base_url, PHOTO_MAX_WIDTH, photo_reference, self.api_key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use tokio_test::{assert_err, assert_ok};

    fn test_config(key: Option<&str>) -> Config {
        Config {
            server_address: "127.0.0.1".to_string(),
            server_port: 8000,
            environment: "test".to_string(),
            log_level: "debug".to_string(),
            google_places_api_key: key.map(str::to_string),
            google_places_base_url: "http://places.test/maps/api/place/".to_string(),
            static_dir: "static".to_string(),
        }
    }

    #[test]
    fn test_photo_url() {
        let client = GooglePlacesClient::new("test_key".to_string());
        assert_eq!(
            client.photo_url("ref123"),
            "https://maps.googleapis.com/maps/api/place/photo?maxwidth=200&photoreference=ref123&key=test_key"
        );
    }

    #[test]
    fn test_from_config_requires_key() {
        let err = GooglePlacesClient::from_config(&test_config(None)).err().unwrap();
        assert!(matches!(err, AttractionsError::Configuration(_)));
        assert!(err.to_string().contains("GOOGLE_PLACES_API_KEY"));

        assert!(GooglePlacesClient::from_config(&test_config(Some("  "))).is_err());
    }

    #[test]
    fn test_from_config_uses_base_url() {
        let client = GooglePlacesClient::from_config(&test_config(Some("abc"))).unwrap();
        assert_eq!(
            client.photo_url("r"),
            "http://places.test/maps/api/place/photo?maxwidth=200&photoreference=r&key=abc"
        );
    }

    #[test]
    fn test_sparse_place_decodes() {
        let place: GooglePlace = serde_json::from_str(r#"{"place_id": "abc"}"#).unwrap();
        assert_eq!(place.place_id.as_deref(), Some("abc"));
        assert!(place.coordinates().is_none());
        assert!(place.first_photo_reference().is_none());
    }

    #[test]
    fn test_first_photo_reference_only() {
        let place: GooglePlace = serde_json::from_value(serde_json::json!({
            "geometry": { "location": { "lat": 1.5, "lng": 2.5 } },
            "photos": [ {}, { "photo_reference": "second" } ]
        }))
        .unwrap();

        assert_eq!(place.coordinates(), Some((1.5, 2.5)));
        // The first photo has no reference; later ones are ignored
        assert!(place.first_photo_reference().is_none());
    }

    #[tokio::test]
    async fn test_nearby_search_sends_expected_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/nearbysearch/json")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("location".into(), "48.85,2.35".into()),
                Matcher::UrlEncoded("radius".into(), "5000".into()),
                Matcher::UrlEncoded("type".into(), "museum".into()),
                Matcher::UrlEncoded("key".into(), "test_key".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "status": "OK",
                    "results": [ { "place_id": "p1", "name": "Louvre" } ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = GooglePlacesClient::new("test_key".to_string()).with_base_url(server.url());
        let response = client.nearby_search(48.85, 2.35, 5000, "museum").await;

        mock.assert_async().await;
        let response = assert_ok!(response);
        assert_eq!(response.status, STATUS_OK);
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].name.as_deref(), Some("Louvre"));
    }

    #[tokio::test]
    async fn test_nearby_search_passes_through_api_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/nearbysearch/json")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"status": "REQUEST_DENIED", "error_message": "The provided API key is invalid."}"#)
            .create_async()
            .await;

        let client = GooglePlacesClient::new("bad".to_string()).with_base_url(server.url());
        let response = assert_ok!(client.nearby_search(0.0, 0.0, 100, "zoo").await);

        assert_eq!(response.status, "REQUEST_DENIED");
        assert!(response.results.is_empty());
        assert!(response.error_message.is_some());
    }

    #[tokio::test]
    async fn test_nearby_search_http_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/nearbysearch/json")
            .match_query(Matcher::Any)
            .with_status(503)
            .with_body("unavailable")
            .create_async()
            .await;

        let client = GooglePlacesClient::new("k".to_string()).with_base_url(server.url());
        let err = assert_err!(client.nearby_search(0.0, 0.0, 100, "zoo").await);

        assert!(matches!(err, AttractionsError::UpstreamRequest(_)));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_nearby_search_invalid_json() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/nearbysearch/json")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = GooglePlacesClient::new("k".to_string()).with_base_url(server.url());
        let err = assert_err!(client.nearby_search(0.0, 0.0, 100, "zoo").await);

        assert!(err.to_string().contains("Parse error"));
    }
}
