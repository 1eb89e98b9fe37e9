//! Base scorer, Φ₃: a weighted sum over preference match, trust, quality,
//! efficiency, novelty, and crowd-avoidance.

use crate::config::ScoringWeights;
use crate::model::{Category, Poi, QualityScore, SessionState, TransportEdge, UserProfile, Verification};
use crate::time_utils::predicted_crowd_level;

pub struct BaseScoreInputs<'a> {
    pub poi: &'a Poi,
    pub profile: &'a UserProfile,
    pub verification: &'a Verification,
    pub quality: &'a QualityScore,
    pub edges: &'a [TransportEdge],
    pub state: &'a SessionState,
    pub hour: u32,
}

pub struct BaseScoreOutput {
    pub base_score: f64,
    pub match_score: f64,
}

pub fn score(inputs: BaseScoreInputs, weights: &ScoringWeights) -> BaseScoreOutput {
    let match_score = preference_match(inputs.poi, inputs.profile);
    let trust = inputs.verification.overall_trust;
    let quality = inputs.quality.overall;
    let efficiency = efficiency_term(inputs.edges);
    let novelty = if inputs.state.visited_ids.contains(&inputs.poi.id) {
        0.0
    } else {
        1.0
    };
    let crowd = 1.0 - predicted_crowd_level(inputs.poi.category, inputs.hour);

    let base_score = weights.match_weight * match_score
        + weights.trust * trust
        + weights.quality * quality
        + weights.efficiency * efficiency
        + weights.novelty * novelty
        + weights.crowd * crowd;

    BaseScoreOutput {
        base_score: base_score.clamp(0.0, 1.0),
        match_score,
    }
}

fn preference_match(poi: &Poi, profile: &UserProfile) -> f64 {
    let tags: &[&str] = match poi.category {
        Category::Attraction => &["culture", "nature", "leisure", "adventure"],
        Category::Restaurant => &["food"],
        Category::Shopping => &["shopping"],
        Category::Entertainment => &["adventure", "leisure"],
        Category::Hotel => &["leisure"],
        Category::TransportHub => &[],
    };
    let purpose_match = profile.purpose_match(tags);
    let pace = pace_match(profile, poi.category);
    let intensity = intensity_match(profile, poi.category);

    let mut terms = vec![purpose_match, pace, intensity];
    if poi.category == Category::Restaurant {
        terms.push(0.7);
    }
    terms.iter().sum::<f64>() / terms.len() as f64
}

/// The pace a category implies, used to match against `UserProfile.pace`.
/// Transport hubs carry no pace signal of their own.
fn pace_tag(category: Category) -> Option<&'static str> {
    match category {
        Category::Attraction | Category::Hotel => Some("slow"),
        Category::Restaurant | Category::Shopping => Some("medium"),
        Category::Entertainment => Some("fast"),
        Category::TransportHub => None,
    }
}

/// The physical/experiential intensity a category implies, used to match
/// against `UserProfile.intensity`.
fn intensity_tag(category: Category) -> Option<&'static str> {
    match category {
        Category::Restaurant | Category::Hotel => Some("low"),
        Category::Attraction | Category::Shopping => Some("medium"),
        Category::Entertainment => Some("high"),
        Category::TransportHub => None,
    }
}

fn pace_match(profile: &UserProfile, category: Category) -> f64 {
    match pace_tag(category) {
        Some(tag) => profile.pace.get(tag).copied().unwrap_or(0.0),
        None => 0.5,
    }
}

fn intensity_match(profile: &UserProfile, category: Category) -> f64 {
    match intensity_tag(category) {
        Some(tag) => profile.intensity.get(tag).copied().unwrap_or(0.0),
        None => 0.5,
    }
}

fn efficiency_term(edges: &[TransportEdge]) -> f64 {
    let min_time = edges
        .iter()
        .map(|e| e.time_hours)
        .fold(f64::INFINITY, f64::min);
    (-min_time / 2.0).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::collections::{HashMap, HashSet};

    fn poi(category: Category) -> Poi {
        Poi {
            id: "p".into(),
            name: "p".into(),
            lat: 0.0,
            lon: 0.0,
            category,
            address: String::new(),
            avg_visit_hours: 1.0,
            ticket_price: Decimal::new(0, 0),
            nominal_rating: 4.5,
            review_count: 100,
        }
    }

    #[test]
    fn score_stays_in_range() {
        let p = poi(Category::Attraction);
        let profile = UserProfile::from_user_input("文化");
        let verification = Verification {
            consistency: 0.8,
            weighted_rating: 4.6,
            rating_variance: 0.1,
            valid_reviews: 200,
            fake_rate: 0.05,
            positive_rate: 0.9,
            negative_rate: 0.05,
            spatial_score: 0.8,
            detour_rate: 0.1,
            temporal_score: 0.8,
            predicted_crowd_level: 0.3,
            overall_trust: 0.8,
            sources: vec![],
        };
        let quality = QualityScore {
            playability: 0.7,
            viewability: 0.7,
            popularity: 0.6,
            history: 0.6,
            overall: 0.65,
        };
        let state = SessionState {
            current_poi: poi(Category::Attraction),
            elapsed_hours: 0.0,
            remaining_budget: Decimal::new(1000, 0),
            visited_ids: HashSet::new(),
            region_visit_counts: HashMap::new(),
        };
        let edges = vec![crate::model::TransportEdge {
            mode: crate::model::TransportMode::Walk,
            distance_km: 0.5,
            time_hours: 0.125,
            cost: Decimal::new(0, 0),
        }];
        let out = score(
            BaseScoreInputs {
                poi: &p,
                profile: &profile,
                verification: &verification,
                quality: &quality,
                edges: &edges,
                state: &state,
                hour: 10,
            },
            &ScoringWeights::default(),
        );
        assert!((0.0..=1.0).contains(&out.base_score));
    }
}
