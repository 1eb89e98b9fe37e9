use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Attraction,
    Restaurant,
    Shopping,
    Entertainment,
    Hotel,
    TransportHub,
}

impl Category {
    /// Whether this category is open to visits at the given hour of day
    /// (0..24), used by the feasibility filter's temporal gate.
    pub fn open_at_hour(&self, hour: u32) -> bool {
        match hour {
            0..=5 => matches!(self, Category::Hotel),
            6..=8 => matches!(
                self,
                Category::Restaurant | Category::Attraction | Category::Hotel
            ),
            21..=23 => matches!(
                self,
                Category::Restaurant | Category::Hotel | Category::Entertainment
            ),
            _ => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub category: Category,
    pub address: String,
    pub avg_visit_hours: f64,
    pub ticket_price: Decimal,
    pub nominal_rating: f64,
    pub review_count: u64,
}

impl Poi {
    /// Great-circle distance to another POI, in kilometers.
    pub fn haversine_km(&self, other: &Poi) -> f64 {
        haversine_km(self.lat, self.lon, other.lat, other.lon)
    }
}

/// Standard haversine formula, Earth radius 6371 km.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    const EARTH_RADIUS_KM: f64 = 6371.0;
    let (lat1r, lat2r) = (lat1.to_radians(), lat2.to_radians());
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let a = (dlat / 2.0).sin().powi(2) + lat1r.cos() * lat2r.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();
    EARTH_RADIUS_KM * c
}
