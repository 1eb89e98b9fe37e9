//! Causal reasoner: concurrent fan-out to the Reasoning Service, one call
//! per surviving candidate, merged with the rule-derived tensions into a
//! [`crate::model::WAxisDetails`].

use std::sync::Arc;
use std::time::Duration;

use crate::concurrency::{completion_ratio, fan_out};
use crate::error::{DegradationNote, DegradationReason};
use crate::model::{CausalSource, Poi, Tensions, WAxisDetails};
use crate::services::ReasoningService;

pub struct CausalInput {
    pub poi: Poi,
    pub tensions: Tensions,
    pub region: String,
    pub visit_count: u32,
    pub prompt: String,
}

/// Run the reasoning fan-out and merge each response (or fallback) into a
/// [`WAxisDetails`] per candidate, preserving input order.
///
/// Requires a strict majority (≥50%) of the fan-out to complete before any
/// individual scalar is trusted; if fewer than half return in time, the
/// whole batch falls back to the rule-derived semantic score rather than
/// mixing a minority of live results with mostly-fallback ones.
pub async fn enrich(
    inputs: Vec<CausalInput>,
    reasoning: Arc<dyn ReasoningService>,
    concurrency_limit: usize,
    deadline: Duration,
    notes: &mut Vec<DegradationNote>,
) -> Vec<WAxisDetails> {
    let tensions_and_meta: Vec<(Tensions, String, u32)> = inputs
        .iter()
        .map(|i| (i.tensions, i.region.clone(), i.visit_count))
        .collect();

    let prompts: Vec<String> = inputs.into_iter().map(|i| i.prompt).collect();
    let scalars = fan_out(prompts, concurrency_limit, deadline, move |prompt| {
        let reasoning = Arc::clone(&reasoning);
        async move { reasoning.rate(&prompt).await }
    })
    .await;

    let majority_reached = scalars.is_empty() || completion_ratio(&scalars) >= 0.5;
    if !majority_reached {
        notes.push(DegradationNote {
            stage: "causal.enrich",
            reason: DegradationReason::PartialMajority,
        });
    }

    scalars
        .into_iter()
        .zip(tensions_and_meta)
        .map(|(scalar, (tensions, region, visit_count))| {
            let (c_causal, causal_source) = if majority_reached {
                match scalar {
                    Some(v) => (v, CausalSource::Reasoned),
                    None => (tensions.semantic_score().clamp(0.0, 1.0), CausalSource::Fallback),
                }
            } else {
                (tensions.semantic_score().clamp(0.0, 1.0), CausalSource::Fallback)
            };
            WAxisDetails {
                c_causal,
                causal_source,
                tensions,
                region,
                visit_count,
            }
        })
        .collect()
}

pub fn build_prompt(current: &Poi, candidate: &Poi, region: &str, visit_count: u32, hour: u32) -> String {
    format!(
        "Current location: {}. Candidate: {}. Region: {} (visited {} times so far). \
         Hour of day: {}. On a scale of 0 to 1, how well does this candidate fit as the \
         next step right now? Answer with a single number.",
        current.name, candidate.name, region, visit_count, hour
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::DisabledReasoningService;
    use rust_decimal::Decimal;

    fn poi(name: &str) -> Poi {
        Poi {
            id: name.into(),
            name: name.into(),
            lat: 0.0,
            lon: 0.0,
            category: crate::model::Category::Attraction,
            address: String::new(),
            avg_visit_hours: 1.0,
            ticket_price: Decimal::new(0, 0),
            nominal_rating: 4.5,
            review_count: 100,
        }
    }

    #[tokio::test]
    async fn disabled_reasoning_falls_back_to_rule_score() {
        let tensions = Tensions::from_signed(0.8, 0.3, 0.2);
        let inputs = vec![CausalInput {
            poi: poi("a"),
            tensions,
            region: "Gusu".to_string(),
            visit_count: 0,
            prompt: build_prompt(&poi("start"), &poi("a"), "Gusu", 0, 10),
        }];
        let mut notes = Vec::new();
        let out = enrich(
            inputs,
            Arc::new(DisabledReasoningService),
            4,
            Duration::from_millis(50),
            &mut notes,
        )
        .await;
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].causal_source, CausalSource::Fallback);
        assert!((0.0..=1.0).contains(&out[0].c_causal));
    }

    #[tokio::test]
    async fn minority_completion_falls_back_for_every_candidate() {
        use crate::services::ReasoningService;
        use async_trait::async_trait;

        struct SlowReasoning;
        #[async_trait]
        impl ReasoningService for SlowReasoning {
            async fn rate(&self, _prompt: &str) -> Option<f64> {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Some(1.0)
            }
        }

        let inputs: Vec<CausalInput> = (0..4)
            .map(|i| CausalInput {
                poi: poi(&format!("c{i}")),
                tensions: Tensions::from_signed(0.8, 0.3, 0.2),
                region: "Gusu".to_string(),
                visit_count: 0,
                prompt: build_prompt(&poi("start"), &poi(&format!("c{i}")), "Gusu", 0, 10),
            })
            .collect();
        let mut notes = Vec::new();
        let out = enrich(
            inputs,
            Arc::new(SlowReasoning),
            4,
            Duration::from_millis(10),
            &mut notes,
        )
        .await;
        assert!(out.iter().all(|w| w.causal_source == CausalSource::Fallback));
        assert!(notes
            .iter()
            .any(|n| n.reason == crate::error::DegradationReason::PartialMajority));
    }
}
