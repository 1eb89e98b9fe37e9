//! Explanation layer: rank-aware rationale synthesis, with a stratified
//! rule-template fallback bank for when the generative service is
//! unavailable.

use std::sync::Arc;
use std::time::Duration;

use crate::concurrency::fan_out;
use crate::model::{CandidateOption, TransportMode};
use crate::regions::LANDMARK_TOKENS;
use crate::services::ExplanationService;

pub async fn explain_all(
    mut candidates: Vec<CandidateOption>,
    current_name: &str,
    hour: u32,
    explanation: Arc<dyn ExplanationService>,
    concurrency_limit: usize,
    deadline: Duration,
) -> Vec<CandidateOption> {
    let alternatives: Vec<String> = candidates.iter().map(|c| c.poi.name.clone()).collect();
    let prompts: Vec<String> = candidates
        .iter()
        .enumerate()
        .map(|(idx, c)| build_prompt(c, idx + 1, current_name, hour, &alternatives))
        .collect();

    let generated = fan_out(prompts, concurrency_limit, deadline, move |prompt| {
        let explanation = Arc::clone(&explanation);
        async move { explanation.generate(&prompt).await }
    })
    .await;

    for (idx, (candidate, gen)) in candidates.iter_mut().zip(generated).enumerate() {
        candidate.explanation = Some(gen.unwrap_or_else(|| fallback(candidate, idx + 1, hour, &alternatives)));
    }
    candidates
}

fn build_prompt(
    candidate: &CandidateOption,
    rank: usize,
    current_name: &str,
    hour: u32,
    alternatives: &[String],
) -> String {
    let visit_count = candidate.w_axis.as_ref().map(|w| w.visit_count).unwrap_or(0);
    let conflict = candidate.w_axis.as_ref().map(|w| w.tensions.conflict).unwrap_or(0.0);

    if rank == 1 && visit_count >= 2 {
        let alt = alternatives.iter().find(|a| a.as_str() != candidate.poi.name);
        format!(
            "We are about to recommend {} again, but this region has already been visited {} times. \
             Write a short, conversational message that gently questions this choice and, if reasonable, \
             suggests {} instead as a less-visited alternative.",
            candidate.poi.name,
            visit_count,
            alt.cloned().unwrap_or_default()
        )
    } else if rank == 2 {
        format!(
            "Explain in one or two sentences why {} could be a better choice than the top \
             recommendation, focusing on novelty, proximity, or rest.",
            candidate.poi.name
        )
    } else {
        let concession = if conflict > 1.0 / 3.0 {
            " The choice has some tension with recent context, so use a concessive clause (e.g. \"although\")."
        } else {
            " Keep the tone tentative; avoid over-confident openers like \"perfect\" or \"just right\"."
        };
        format!(
            "Currently at {current_name}, hour {hour}. Write a short, conversational rationale for \
             visiting {} next.{concession}",
            candidate.poi.name
        )
    }
}

fn fallback(candidate: &CandidateOption, rank: usize, hour: u32, alternatives: &[String]) -> String {
    let visit_count = candidate.w_axis.as_ref().map(|w| w.visit_count).unwrap_or(0);
    let conflict = candidate.w_axis.as_ref().map(|w| w.tensions.conflict).unwrap_or(0.0);
    let mode = candidate.fastest_edge().mode;

    if rank == 1 && visit_count >= 2 {
        let alt = alternatives.iter().find(|a| a.as_str() != candidate.poi.name);
        return match alt {
            Some(alt) => format!(
                "You've already spent a lot of time in this area — have you considered {alt} instead?"
            ),
            None => "You've already spent a lot of time in this area — are you sure about this one?".to_string(),
        };
    }
    if rank == 2 {
        return format!(
            "{} is close by and hasn't been visited yet — a nice change of pace from the top pick.",
            candidate.poi.name
        );
    }
    if LANDMARK_TOKENS.iter().any(|t| candidate.poi.name.contains(t)) {
        return format!("{} is a well-known landmark worth the detour.", candidate.poi.name);
    }
    if candidate.poi.category == crate::model::Category::Restaurant && ((11..=13).contains(&hour) || (17..=19).contains(&hour)) {
        return format!("It's around mealtime — {} is a solid nearby option.", candidate.poi.name);
    }
    if matches!(mode, TransportMode::Walk) {
        return format!("{} is just a short walk away.", candidate.poi.name);
    }
    if conflict > 1.0 / 3.0 {
        format!(
            "Although it's a bit out of the way, {} fits well with where you are headed.",
            candidate.poi.name
        )
    } else {
        format!("{} could be a good next stop.", candidate.poi.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CausalSource, Poi, QualityScore, RiskLevel, Tensions, TransportEdge, Verification, WAxisDetails};
    use crate::services::DisabledExplanationService;
    use rust_decimal::Decimal;

    fn candidate(name: &str, visit_count: u32, conflict: f64) -> CandidateOption {
        CandidateOption {
            poi: Poi {
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
            },
            edges: vec![TransportEdge {
                mode: TransportMode::Walk,
                distance_km: 0.5,
                time_hours: 0.1,
                cost: Decimal::new(0, 0),
            }],
            verification: Verification {
                consistency: 0.8,
                weighted_rating: 4.5,
                rating_variance: 0.0,
                valid_reviews: 100,
                fake_rate: 0.05,
                positive_rate: 0.9,
                negative_rate: 0.05,
                spatial_score: 0.8,
                detour_rate: 0.1,
                temporal_score: 0.8,
                predicted_crowd_level: 0.3,
                overall_trust: 0.8,
                sources: vec![],
            },
            quality: QualityScore {
                playability: 0.5,
                viewability: 0.5,
                popularity: 0.5,
                history: 0.5,
                overall: 0.5,
            },
            base_score: 0.7,
            match_score: 0.5,
            w_axis: Some(WAxisDetails {
                c_causal: 0.5,
                causal_source: CausalSource::Fallback,
                tensions: Tensions {
                    novelty: 0.0,
                    continuity: 0.0,
                    energy: 0.0,
                    conflict,
                },
                region: "Gusu".into(),
                visit_count,
            }),
            final_score: 0.7,
            explanation: None,
            rank: 1,
            risk_level: RiskLevel::Info,
        }
    }

    #[tokio::test]
    async fn rank_one_saturated_region_gets_counter_suggestion() {
        let candidates = vec![candidate("Garden", 3, 0.0), candidate("Alley", 0, 0.0)];
        let result = explain_all(
            candidates,
            "start",
            10,
            Arc::new(DisabledExplanationService),
            4,
            Duration::from_millis(50),
        )
        .await;
        let text = result[0].explanation.clone().unwrap();
        assert!(text.contains('?') || text.to_lowercase().contains("considered"));
    }

    #[tokio::test]
    async fn disabled_service_always_fills_explanation() {
        let candidates = vec![candidate("Garden", 0, 0.0)];
        let result = explain_all(
            candidates,
            "start",
            10,
            Arc::new(DisabledExplanationService),
            4,
            Duration::from_millis(50),
        )
        .await;
        assert!(result[0].explanation.is_some());
    }
}
