use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::constants::{
    DEFAULT_PAGE_SIZE, DEFAULT_SEARCH_RADIUS_KM, LONDON_CENTER_LAT, LONDON_CENTER_LON,
};
use crate::data::session::SessionProvider;
use crate::models::room::{RoomDetail, RoomSummary};

/// Errors from the rooms REST API. Callers are expected to catch these and
/// degrade to an empty catalog with a retry affordance, never to crash a
/// page on them.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error talking to rooms API: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON parse error from rooms API: {0}")]
    Json(#[from] serde_json::Error),
    #[error("rooms API returned status {0}")]
    Status(StatusCode),
    #[error("room {0} not found")]
    RoomNotFound(i64),
}

/// Query parameters for the map search endpoint `GET /api/rooms/map`.
#[derive(Debug, Clone, PartialEq)]
pub struct MapQuery {
    pub lat: f64,
    pub lng: f64,
    pub radius_km: f64,
    pub theme: Option<String>,
    pub min_difficulty: Option<u8>,
    pub max_difficulty: Option<u8>,
    pub min_players: Option<u32>,
    pub max_players: Option<u32>,
    pub group_size: Option<u32>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
    pub sort_by: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

impl Default for MapQuery {
    fn default() -> Self {
        Self {
            lat: LONDON_CENTER_LAT,
            lng: LONDON_CENTER_LON,
            radius_km: DEFAULT_SEARCH_RADIUS_KM,
            theme: None,
            min_difficulty: None,
            max_difficulty: None,
            min_players: None,
            max_players: None,
            group_size: None,
            max_price: None,
            min_rating: None,
            sort_by: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl MapQuery {
    /// Key/value pairs for the request, with inactive filters omitted the
    /// same way the web client omits them.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("lat", self.lat.to_string()),
            ("lng", self.lng.to_string()),
            ("radius", self.radius_km.to_string()),
        ];
        if let Some(theme) = &self.theme {
            pairs.push(("theme", theme.clone()));
        }
        if let Some(v) = self.min_difficulty {
            pairs.push(("min_difficulty", v.to_string()));
        }
        if let Some(v) = self.max_difficulty {
            pairs.push(("max_difficulty", v.to_string()));
        }
        if let Some(v) = self.min_players {
            pairs.push(("min_players", v.to_string()));
        }
        if let Some(v) = self.max_players {
            pairs.push(("max_players", v.to_string()));
        }
        if let Some(v) = self.group_size {
            pairs.push(("group_size", v.to_string()));
        }
        if let Some(v) = self.max_price {
            pairs.push(("max_price", v.to_string()));
        }
        if let Some(v) = self.min_rating {
            pairs.push(("min_rating", v.to_string()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sort_by", sort_by.clone()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("page_size", self.page_size.to_string()));
        pairs
    }
}

/// Paged response from the map search endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapResponse {
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub rooms: Vec<RoomSummary>,
}

#[derive(Debug, Deserialize)]
struct ThemesResponse {
    themes: Vec<String>,
}

#[derive(Debug, serde::Serialize)]
struct ViewTrackingBody<'a> {
    session_id: &'a str,
}

/// Thin typed wrapper around the rooms REST API, blocking by design: the
/// callers of this crate are synchronous view/CLI layers.
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/rooms`. Accepts the wrapped `{"rooms": [...]}` shape or,
    /// degraded, a bare array; malformed records are skipped with a warning.
    pub fn fetch_rooms(&self) -> Result<Vec<RoomSummary>, ApiError> {
        let url = format!("{}/api/rooms", self.base_url);
        debug!("Fetching room catalog from {}", url);

        let response = self.http.get(&url).send()?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let document: Value = response.json()?;
        let entries = match document {
            Value::Object(mut map) => match map.remove("rooms") {
                Some(Value::Array(rooms)) => rooms,
                _ => Vec::new(),
            },
            Value::Array(rooms) => rooms,
            _ => Vec::new(),
        };

        let mut rooms = Vec::with_capacity(entries.len());
        for entry in entries {
            match serde_json::from_value::<RoomSummary>(entry) {
                Ok(room) => rooms.push(room),
                Err(e) => warn!("Skipping malformed room record from API: {}", e),
            }
        }
        Ok(rooms)
    }

    /// `GET /api/rooms/map` with the active filters as query parameters.
    pub fn fetch_rooms_map(&self, query: &MapQuery) -> Result<MapResponse, ApiError> {
        let url = format!("{}/api/rooms/map", self.base_url);
        let response = self.http.get(&url).query(&query.to_query_pairs()).send()?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json()?)
    }

    /// `GET /api/rooms/:id`.
    pub fn fetch_room_by_id(&self, id: i64) -> Result<RoomDetail, ApiError> {
        let url = format!("{}/api/rooms/{}", self.base_url, id);
        let response = self.http.get(&url).send()?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(ApiError::RoomNotFound(id)),
            status if !status.is_success() => Err(ApiError::Status(status)),
            _ => Ok(response.json()?),
        }
    }

    /// `GET /api/rooms/themes`.
    pub fn fetch_themes(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/api/rooms/themes", self.base_url);
        let response = self.http.get(&url).send()?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        let body: ThemesResponse = response.json()?;
        Ok(body.themes)
    }

    /// `POST /api/rooms/:id/view`. Best-effort analytics; the session token
    /// comes from the injected provider so this crate holds no ambient
    /// storage state.
    pub fn track_room_view(
        &self,
        room_id: i64,
        session: &dyn SessionProvider,
    ) -> Result<(), ApiError> {
        let url = format!("{}/api/rooms/{}/view", self.base_url, room_id);
        let session_id = session.session_id();
        let response = self
            .http
            .post(&url)
            .json(&ViewTrackingBody {
                session_id: &session_id,
            })
            .send()?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }
}
