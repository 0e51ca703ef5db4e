// src/services/place_categories.rs
// DOCUMENTATION: Place types searched for every attractions request
// PURPOSE: Fixed, ordered category list; results keep this order

/// Google Places types queried one after another.
/// Order matters: the first category that yields a place wins deduplication.
pub const PLACE_CATEGORIES: [&str; 40] = [
    // Core tourist attractions
    "tourist_attraction",
    "museum",
    "amusement_park",
    "zoo",
    "art_gallery",
    "aquarium",
    // Religious & cultural sites
    "church",
    "hindu_temple",
    "mosque",
    "synagogue",
    "place_of_worship",
    // Entertainment & recreation
    "casino",
    "night_club",
    "bowling_alley",
    "movie_theater",
    // Nature & parks
    "park",
    "campground",
    "rv_park",
    // Shopping
    "shopping_mall",
    "department_store",
    // Sports & activities
    "stadium",
    "gym",
    "spa",
    // Historical & educational
    "library",
    "university",
    "school",
    // Food & dining
    "restaurant",
    "cafe",
    "bar",
    // Landmark hotels
    "lodging",
    // Transportation hubs
    "airport",
    "train_station",
    "subway_station",
    // Health
    "hospital",
    // Government & civic
    "city_hall",
    "courthouse",
    "embassy",
    // Miscellaneous
    "cemetery",
    "funeral_home",
    "storage",
];
