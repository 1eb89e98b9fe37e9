use async_trait::async_trait;

use crate::model::Poi;

/// Opportunistic road-distance lookup. Never on the critical path for
/// feasibility or transport enumeration, which compute haversine in-core;
/// consulted only by the verification stage's spatial check.
#[async_trait]
pub trait MapService: Send + Sync {
    async fn road_distance(&self, from: &Poi, to: &Poi) -> Option<(f64, f64)>;
}

/// Always-unavailable stub. Callers fall back to the haversine×factor
/// heuristic documented in the verification stage.
#[derive(Debug, Default, Clone)]
pub struct DisabledMapService;

#[async_trait]
impl MapService for DisabledMapService {
    async fn road_distance(&self, _from: &Poi, _to: &Poi) -> Option<(f64, f64)> {
        None
    }
}

/// Thin `reqwest`-backed client for a real map vendor. Disabled by default;
/// wired in only when `services.map_endpoint` is configured.
pub struct HttpMapService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpMapService {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl MapService for HttpMapService {
    async fn road_distance(&self, from: &Poi, to: &Poi) -> Option<(f64, f64)> {
        #[derive(serde::Deserialize)]
        struct RouteResponse {
            distance_km: f64,
            time_hours: f64,
        }

        let url = format!(
            "{}/route?from_lat={}&from_lon={}&to_lat={}&to_lon={}",
            self.endpoint, from.lat, from.lon, to.lat, to.lon
        );
        match self.client.get(&url).send().await {
            Ok(resp) => resp
                .json::<RouteResponse>()
                .await
                .ok()
                .map(|r| (r.distance_km, r.time_hours)),
            Err(e) => {
                tracing::warn!(error = %e, "map service request failed");
                None
            }
        }
    }
}
