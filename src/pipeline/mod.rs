//! The full get-next-options pipeline: fetch → feasibility → transport →
//! verification → quality → base score → W-axis enrichment → compose →
//! rank → risk → explanation.

pub mod base_score;
pub mod causal;
pub mod compose;
pub mod explanation;
pub mod feasibility;
pub mod quality;
pub mod rank;
pub mod risk;
pub mod tensions;
pub mod transport;
pub mod verification;

use std::sync::Arc;
use std::time::Duration;

use tracing::instrument;

use crate::config::Config;
use crate::error::{CoreResult, DegradationNote};
use crate::model::{CandidateOption, Session};
use crate::services::{ExplanationService, MapService, ReasoningService};
use crate::store::PoiStore;
use crate::time_utils::hour_of_day;

#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub options: Vec<CandidateOption>,
    pub degradation: Vec<DegradationNote>,
    /// Populated only when `options` is empty — e.g. "insufficient_time",
    /// "no_candidates_in_city". Absence of options is never an error.
    pub empty_reason: Option<&'static str>,
}

pub struct Pipeline {
    pub poi_store: Arc<dyn PoiStore>,
    pub map_service: Arc<dyn MapService>,
    pub reasoning: Arc<dyn ReasoningService>,
    pub explanation: Arc<dyn ExplanationService>,
    pub config: Config,
}

impl Pipeline {
    #[instrument(skip(self, session), fields(session_id = %session.session_id))]
    pub async fn next_options(&self, session: &Session) -> CoreResult<PipelineOutcome> {
        let mut notes = Vec::new();
        let state = &session.current_state;
        let hour = hour_of_day(self.config.session.default_start_hour, state.elapsed_hours);

        let pool = self
            .poi_store
            .list_in_city(&session.destination_city, self.config.pipeline.pool_size)
            .await?;
        if pool.is_empty() {
            return Ok(PipelineOutcome {
                options: vec![],
                degradation: notes,
                empty_reason: Some("no_candidates_in_city"),
            });
        }

        let feasible = feasibility::filter_feasible(
            pool,
            state,
            session.duration_hours,
            self.config.session.default_start_hour,
            &self.config.pipeline,
        );
        if feasible.is_empty() {
            return Ok(PipelineOutcome {
                options: vec![],
                degradation: notes,
                empty_reason: Some("insufficient_time"),
            });
        }

        let mut staged = Vec::new();
        for poi in feasible {
            let edges = transport::enumerate_edges(&state.current_poi, &poi, &self.config.transport);
            if edges.is_empty() {
                continue;
            }

            let verification = verification::verify(
                &poi,
                &state.current_poi,
                hour,
                self.map_service.as_ref(),
                10,
                &mut notes,
            )
            .await;

            let quality = quality::evaluate(&poi, &verification);
            if self.config.pipeline.enable_quality_filter
                && !quality::passes_filter(&verification, &quality, &self.config.quality_filter)
            {
                continue;
            }

            let base = base_score::score(
                base_score::BaseScoreInputs {
                    poi: &poi,
                    profile: &session.profile,
                    verification: &verification,
                    quality: &quality,
                    edges: &edges,
                    state,
                    hour,
                },
                &self.config.scoring,
            );

            staged.push((poi, edges, verification, quality, base));
        }

        if staged.is_empty() {
            return Ok(PipelineOutcome {
                options: vec![],
                degradation: notes,
                empty_reason: Some("no_qualified_candidates"),
            });
        }

        let causal_inputs = staged
            .iter()
            .map(|(poi, _edges, _v, _q, _b)| {
                let (tensions, region, visit_count) =
                    tensions::compute(poi, &state.current_poi, &state.region_visit_counts, hour);
                causal::CausalInput {
                    poi: poi.clone(),
                    tensions,
                    region: region.clone(),
                    visit_count,
                    prompt: causal::build_prompt(&state.current_poi, poi, &region, visit_count, hour),
                }
            })
            .collect();

        let w_axis_details = causal::enrich(
            causal_inputs,
            Arc::clone(&self.reasoning),
            self.config.concurrency.reasoning_fan_out_limit,
            Duration::from_millis(self.config.concurrency.request_deadline_ms),
            &mut notes,
        )
        .await;

        let mut candidates: Vec<CandidateOption> = staged
            .into_iter()
            .zip(w_axis_details)
            .map(|((poi, edges, verification, quality, base), w_axis)| {
                let final_score = compose::compose(base.base_score, &w_axis, &self.config.w_axis);
                CandidateOption {
                    poi,
                    edges,
                    verification,
                    quality,
                    base_score: base.base_score,
                    match_score: base.match_score,
                    w_axis: Some(w_axis),
                    final_score,
                    explanation: None,
                    rank: 0,
                    risk_level: crate::model::RiskLevel::Info,
                }
            })
            .collect();

        for candidate in &mut candidates {
            risk::annotate(
                candidate,
                state,
                session.duration_hours,
                &session.hard_constraints,
                &self.config.risk,
            );
        }

        let mut ranked = rank::sort_and_assign_ranks(candidates);
        ranked.truncate(self.config.pipeline.top_k);

        let ranked = explanation::explain_all(
            ranked,
            &state.current_poi.name,
            hour,
            Arc::clone(&self.explanation),
            self.config.concurrency.explanation_fan_out_limit,
            Duration::from_millis(self.config.concurrency.request_deadline_ms),
        )
        .await;

        Ok(PipelineOutcome {
            options: ranked,
            degradation: notes,
            empty_reason: None,
        })
    }
}
