//! Explicit, concurrency-safe session storage.
//!
//! The in-memory implementation is an `RwLock`-guarded map plus a
//! background GC loop driven by `tokio::time::interval` — there is nothing
//! calendar-shaped about idle-session expiry, so a `cron` schedule would be
//! the wrong tool here.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::model::Session;

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, id: Uuid) -> CoreResult<Session>;
    async fn put(&self, session: Session) -> CoreResult<()>;
    async fn delete(&self, id: Uuid) -> CoreResult<()>;
    async fn gc_expired(&self, ttl_hours: i64) -> usize;
}

#[derive(Default)]
pub struct InMemorySessionStore {
    inner: RwLock<HashMap<Uuid, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Spawn a background task that periodically sweeps expired sessions.
    /// Returns the task's join handle so callers can abort it on shutdown.
    pub fn spawn_gc(self: &Arc<Self>, ttl_hours: i64, interval_secs: u64) -> tokio::task::JoinHandle<()> {
        let store = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(std::time::Duration::from_secs(interval_secs));
            loop {
                ticker.tick().await;
                let swept = store.gc_expired(ttl_hours).await;
                if swept > 0 {
                    tracing::debug!(swept, "session gc sweep");
                }
            }
        })
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, id: Uuid) -> CoreResult<Session> {
        let guard = self.inner.read().await;
        guard.get(&id).cloned().ok_or(CoreError::SessionNotFound(id))
    }

    async fn put(&self, session: Session) -> CoreResult<()> {
        let mut guard = self.inner.write().await;
        guard.insert(session.session_id, session);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> CoreResult<()> {
        let mut guard = self.inner.write().await;
        guard.remove(&id);
        Ok(())
    }

    async fn gc_expired(&self, ttl_hours: i64) -> usize {
        let now = Utc::now();
        let mut guard = self.inner.write().await;
        let before = guard.len();
        guard.retain(|_, s| !s.is_expired(ttl_hours, now));
        before - guard.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HardConstraints, Poi, SessionState, UserProfile};
    use std::collections::{HashMap as Map, HashSet};

    fn dummy_session(id: Uuid, last_active_hours_ago: i64) -> Session {
        let poi = Poi {
            id: "p1".into(),
            name: "Test POI".into(),
            lat: 0.0,
            lon: 0.0,
            category: crate::model::Category::Attraction,
            address: String::new(),
            avg_visit_hours: 1.0,
            ticket_price: Default::default(),
            nominal_rating: 4.5,
            review_count: 100,
        };
        let state = SessionState {
            current_poi: poi,
            elapsed_hours: 0.0,
            remaining_budget: rust_decimal::Decimal::new(10000, 0),
            visited_ids: HashSet::new(),
            region_visit_counts: Map::new(),
        };
        let now = Utc::now();
        Session {
            session_id: id,
            destination_city: "Suzhou".into(),
            duration_hours: 72.0,
            profile: UserProfile::from_user_input(""),
            initial_state: state.clone(),
            current_state: state,
            history: vec![],
            hard_constraints: HardConstraints {
                return_by_hour: None,
                return_poi_id: None,
            },
            created_at: now,
            last_active: now - chrono::Duration::hours(last_active_hours_ago),
        }
    }

    #[tokio::test]
    async fn put_then_get_roundtrips() {
        let store = InMemorySessionStore::new();
        let id = Uuid::new_v4();
        store.put(dummy_session(id, 0)).await.unwrap();
        let fetched = store.get(id).await.unwrap();
        assert_eq!(fetched.session_id, id);
    }

    #[tokio::test]
    async fn get_missing_returns_not_found() {
        let store = InMemorySessionStore::new();
        let err = store.get(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, CoreError::SessionNotFound(_)));
    }

    #[tokio::test]
    async fn gc_sweeps_only_expired() {
        let store = InMemorySessionStore::new();
        let fresh = Uuid::new_v4();
        let stale = Uuid::new_v4();
        store.put(dummy_session(fresh, 1)).await.unwrap();
        store.put(dummy_session(stale, 48)).await.unwrap();

        let swept = store.gc_expired(24).await;
        assert_eq!(swept, 1);
        assert!(store.get(fresh).await.is_ok());
        assert!(store.get(stale).await.is_err());
    }
}
