use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Walk,
    Taxi,
    Bus,
    Subway,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportEdge {
    pub mode: TransportMode,
    pub distance_km: f64,
    pub time_hours: f64,
    pub cost: Decimal,
}
