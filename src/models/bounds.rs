// src/models/bounds.rs
// DOCUMENTATION: Geographic bounding box used as the search area
// PURPOSE: Midpoint and containment checks for the requested map viewport

use serde::{Deserialize, Serialize};

/// Rectangular geographic region in degrees
/// DOCUMENTATION: Caller supplied and unvalidated. Nothing enforces
/// north > south or east > west; an inverted box simply contains no point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// North boundary (max latitude)
    pub north: f64,
    /// South boundary (min latitude)
    pub south: f64,
    /// East boundary (max longitude)
    pub east: f64,
    /// West boundary (min longitude)
    pub west: f64,
}

impl BoundingBox {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Arithmetic midpoint of the box as (lat, lng)
    pub fn center(&self) -> (f64, f64) {
        (
            (self.north + self.south) / 2.0,
            (self.east + self.west) / 2.0,
        )
    }

    /// Inclusive containment check against all four edges
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        self.south <= lat && lat <= self.north && self.west <= lng && lng <= self.east
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris() -> BoundingBox {
        BoundingBox::new(48.90, 48.80, 2.40, 2.25)
    }

    #[test]
    fn test_center() {
        let (lat, lng) = paris().center();
        assert!((lat - 48.85).abs() < 1e-9);
        assert!((lng - 2.325).abs() < 1e-9);
    }

    #[test]
    fn test_contains_interior_and_edges() {
        let bounds = paris();
        assert!(bounds.contains(48.85, 2.30));
        // Edges are inclusive
        assert!(bounds.contains(48.90, 2.40));
        assert!(bounds.contains(48.80, 2.25));
    }

    #[test]
    fn test_contains_rejects_outside() {
        let bounds = paris();
        assert!(!bounds.contains(48.91, 2.30));
        assert!(!bounds.contains(48.79, 2.30));
        assert!(!bounds.contains(48.85, 2.41));
        assert!(!bounds.contains(48.85, 2.24));
    }

    #[test]
    fn test_inverted_box_contains_nothing() {
        // north < south: accepted as-is, matches no point
        let inverted = BoundingBox::new(48.80, 48.90, 2.40, 2.25);
        assert!(!inverted.contains(48.85, 2.30));

        let (lat, _) = inverted.center();
        assert!((lat - 48.85).abs() < 1e-9);
    }
}
