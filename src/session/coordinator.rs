//! Session Coordinator: owns session lifecycle, drives the pipeline for
//! `next_options`, and applies user selections in `select`.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::model::{
    CandidateOption, HardConstraints, HistoryEntry, Poi, Session, SessionState, TransportEdge,
    UserProfile,
};
use crate::pipeline::{Pipeline, PipelineOutcome};
use crate::regions::region_of;
use crate::store::SessionStore;

pub struct Coordinator {
    pub sessions: Arc<dyn SessionStore>,
    pub pipeline: Pipeline,
    pub ttl_hours: i64,
}

impl Coordinator {
    #[instrument(skip(self, start_poi))]
    pub async fn initialize(
        &self,
        user_id: String,
        user_input: &str,
        start_poi: Poi,
        city: String,
        duration_hours: f64,
        budget: Decimal,
        hard_constraints: HardConstraints,
    ) -> CoreResult<Session> {
        if duration_hours <= 0.0 {
            return Err(CoreError::InvalidInput("duration_hours must be positive".into()));
        }
        if city.trim().is_empty() {
            return Err(CoreError::InvalidInput("city must not be empty".into()));
        }

        let profile = UserProfile::from_user_input(user_input);
        let now = Utc::now();
        let state = SessionState {
            current_poi: start_poi,
            elapsed_hours: 0.0,
            remaining_budget: budget,
            visited_ids: Default::default(),
            region_visit_counts: HashMap::new(),
        };
        let session = Session {
            session_id: Uuid::new_v4(),
            user_id,
            destination_city: city,
            duration_hours,
            profile,
            initial_state: state.clone(),
            current_state: state,
            history: vec![],
            hard_constraints,
            created_at: now,
            last_active: now,
        };
        self.sessions.put(session.clone()).await?;
        Ok(session)
    }

    #[instrument(skip(self))]
    pub async fn next_options(&self, session_id: Uuid) -> CoreResult<PipelineOutcome> {
        let mut session = self.sessions.get(session_id).await?;
        if session.is_expired(self.ttl_hours, Utc::now()) {
            self.sessions.delete(session_id).await?;
            return Err(CoreError::SessionExpired(session_id));
        }
        session.last_active = Utc::now();
        let outcome = self.pipeline.next_options(&session).await?;
        self.sessions.put(session).await?;
        Ok(outcome)
    }

    #[instrument(skip(self, chosen_option, chosen_edge))]
    pub async fn select(
        &self,
        session_id: Uuid,
        chosen_option: &CandidateOption,
        chosen_edge: TransportEdge,
    ) -> CoreResult<SessionState> {
        let mut session = self.sessions.get(session_id).await?;
        if session.is_expired(self.ttl_hours, Utc::now()) {
            self.sessions.delete(session_id).await?;
            return Err(CoreError::SessionExpired(session_id));
        }

        let chosen_poi = chosen_option.poi.clone();

        if session.current_state.visited_ids.contains(&chosen_poi.id) {
            return Err(CoreError::InvalidSelection(format!(
                "poi {} already visited",
                chosen_poi.id
            )));
        }

        if !chosen_option.edges.contains(&chosen_edge) {
            return Err(CoreError::InvalidSelection(format!(
                "chosen edge does not belong to candidate option for poi {}",
                chosen_poi.id
            )));
        }

        let total_cost = chosen_edge.cost + chosen_poi.ticket_price;
        let region = region_of(&chosen_poi.name, &chosen_poi.address);

        session.current_state.elapsed_hours += chosen_edge.time_hours + chosen_poi.avg_visit_hours;
        session.current_state.remaining_budget -= total_cost;
        session.current_state.visited_ids.insert(chosen_poi.id.clone());
        *session
            .current_state
            .region_visit_counts
            .entry(region)
            .or_insert(0) += 1;

        session.history.push(HistoryEntry {
            poi_id: chosen_poi.id.clone(),
            edge: chosen_edge,
            elapsed_after: session.current_state.elapsed_hours,
        });
        session.current_state.current_poi = chosen_poi;
        session.last_active = Utc::now();

        let new_state = session.current_state.clone();
        self.sessions.put(session).await?;
        Ok(new_state)
    }
}
