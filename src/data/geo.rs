use serde::{Deserialize, Serialize};

use crate::config::const_funcs::is_usable_coordinate;
use crate::config::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn is_in_range(&self) -> bool {
        (MIN_LATITUDE..=MAX_LATITUDE).contains(&self.latitude)
            && (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.longitude)
    }

    /// Straight-line distance in degree space. Good enough for collision
    /// checks at city scale; not a geodesic distance.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        let dlat = self.latitude - other.latitude;
        let dlon = self.longitude - other.longitude;
        (dlat * dlat + dlon * dlon).sqrt()
    }
}

/// Anything with a stable id and a (possibly missing) map position.
///
/// `plot_position` applies the shared usability policy: an entity whose
/// latitude or longitude is missing, zero, or NaN is unplottable and gets
/// dropped from map layout without an error.
pub trait Plottable {
    fn pin_id(&self) -> i64;
    fn pin_latitude(&self) -> Option<f64>;
    fn pin_longitude(&self) -> Option<f64>;

    fn plot_position(&self) -> Option<GeoPoint> {
        let lat = self.pin_latitude().filter(|v| is_usable_coordinate(*v))?;
        let lon = self.pin_longitude().filter(|v| is_usable_coordinate(*v))?;
        Some(GeoPoint::new(lat, lon))
    }
}

/// Axis-aligned box over a set of pins, used by callers to frame the map
/// viewport around the visible markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl GeoBounds {
    pub fn around(point: GeoPoint) -> Self {
        Self {
            min_latitude: point.latitude,
            max_latitude: point.latitude,
            min_longitude: point.longitude,
            max_longitude: point.longitude,
        }
    }

    pub fn extend(&mut self, point: GeoPoint) {
        self.min_latitude = self.min_latitude.min(point.latitude);
        self.max_latitude = self.max_latitude.max(point.latitude);
        self.min_longitude = self.min_longitude.min(point.longitude);
        self.max_longitude = self.max_longitude.max(point.longitude);
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min_latitude + self.max_latitude) / 2.0,
            (self.min_longitude + self.max_longitude) / 2.0,
        )
    }

    /// Bounds over every plottable point in the iterator, or None when
    /// nothing is plottable.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut iter = points.into_iter();
        let mut bounds = GeoBounds::around(iter.next()?);
        for point in iter {
            bounds.extend(point);
        }
        Some(bounds)
    }
}
