use async_trait::async_trait;

use crate::error::CoreResult;
use crate::model::Poi;

/// Read-only lookup of candidate POIs by city. Implementations must return
/// POIs in a stable order so ranking stays deterministic across identical
/// calls.
#[async_trait]
pub trait PoiStore: Send + Sync {
    async fn list_in_city(&self, city: &str, limit: usize) -> CoreResult<Vec<Poi>>;
}

/// In-memory implementation backing tests and demos.
#[derive(Debug, Default, Clone)]
pub struct InMemoryPoiStore {
    by_city: std::collections::HashMap<String, Vec<Poi>>,
}

impl InMemoryPoiStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, city: impl Into<String>, poi: Poi) {
        self.by_city.entry(city.into()).or_default().push(poi);
    }
}

#[async_trait]
impl PoiStore for InMemoryPoiStore {
    async fn list_in_city(&self, city: &str, limit: usize) -> CoreResult<Vec<Poi>> {
        Ok(self
            .by_city
            .get(city)
            .map(|pois| pois.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}
