use serde::{Deserialize, Serialize};

use crate::data::geo::Plottable;

/// One row of the rooms listing, as served by `GET /api/rooms` and the map
/// search endpoint. Every field except id and name is optional: listings are
/// aggregated from scraped venue data and are routinely incomplete, so
/// consumers must treat missing fields as "unknown", never as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomSummary {
    pub id: i64,
    pub name: String,
    pub theme: Option<String>,
    pub difficulty: Option<u8>,
    pub duration_minutes: Option<u32>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub venue_name: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub primary_image_url: Option<String>,
}

impl Default for RoomSummary {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            theme: None,
            difficulty: None,
            duration_minutes: None,
            price_min: None,
            price_max: None,
            price: None,
            currency: None,
            venue_name: None,
            city: None,
            latitude: None,
            longitude: None,
            primary_image_url: None,
        }
    }
}

impl RoomSummary {
    /// Difficulty as a usable 1-5 rating. A stored 0 means the scraper found
    /// no rating, so it reads as missing.
    pub fn difficulty_rating(&self) -> Option<u8> {
        self.difficulty.filter(|d| *d != 0)
    }

    /// Duration with missing values collapsed to 0, the form the duration
    /// bucket predicates compare against.
    pub fn duration_or_zero(&self) -> u32 {
        self.duration_minutes.unwrap_or(0)
    }
}

impl Plottable for RoomSummary {
    fn pin_id(&self) -> i64 {
        self.id
    }

    fn pin_latitude(&self) -> Option<f64> {
        self.latitude
    }

    fn pin_longitude(&self) -> Option<f64> {
        self.longitude
    }
}

/// Venue block nested in a room detail payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueDetail {
    pub name: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

impl Default for VenueDetail {
    fn default() -> Self {
        Self {
            name: None,
            city: None,
            address: None,
            phone: None,
            website: None,
        }
    }
}

/// Full payload of `GET /api/rooms/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomDetail {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub theme: Option<String>,
    pub difficulty: Option<u8>,
    pub min_players: Option<u32>,
    pub max_players: Option<u32>,
    pub duration_minutes: Option<u32>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub success_rate: Option<f64>,
    pub primary_image_url: Option<String>,
    pub image_urls: Vec<String>,
    pub venue: Option<VenueDetail>,
}

impl Default for RoomDetail {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            description: None,
            theme: None,
            difficulty: None,
            min_players: None,
            max_players: None,
            duration_minutes: None,
            price_min: None,
            price_max: None,
            price: None,
            currency: None,
            success_rate: None,
            primary_image_url: None,
            image_urls: Vec::new(),
            venue: None,
        }
    }
}
