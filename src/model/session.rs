use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::poi::Poi;
use super::profile::UserProfile;
use super::transport::TransportEdge;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardConstraints {
    pub return_by_hour: Option<f64>,
    pub return_poi_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub poi_id: String,
    pub edge: TransportEdge,
    pub elapsed_after: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub current_poi: Poi,
    pub elapsed_hours: f64,
    pub remaining_budget: Decimal,
    pub visited_ids: HashSet<String>,
    pub region_visit_counts: HashMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub session_id: Uuid,
    pub user_id: String,
    pub destination_city: String,
    pub duration_hours: f64,
    pub profile: UserProfile,
    pub initial_state: SessionState,
    pub current_state: SessionState,
    pub history: Vec<HistoryEntry>,
    pub hard_constraints: HardConstraints,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, ttl_hours: i64, now: DateTime<Utc>) -> bool {
        now - self.last_active > chrono::Duration::hours(ttl_hours)
    }
}
