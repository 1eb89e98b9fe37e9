//! Verification aggregator: multi-source rating consistency, review
//! cleanliness, spatial plausibility, and temporal fit, combined into an
//! `overall_trust` score. Every sub-check degrades to a documented default
//! rather than failing.

use crate::error::{DegradationNote, DegradationReason};
use crate::model::{Category, DataSourceRating, Poi, Verification};
use crate::services::MapService;
use crate::time_utils::predicted_crowd_level;

const SOURCE_NAMES: &[(&str, f64, f64)] = &[
    // (name, collector weight, credibility)
    ("primary_map", 0.40, 1.00),
    ("travel_platform", 0.25, 0.95),
    ("community_guide", 0.15, 0.90),
    ("review_aggregator", 0.15, 0.90),
    ("social_media", 0.05, 0.85),
];

/// Synthesize plausible per-source ratings around a POI's nominal rating.
/// Stands in for a real multi-source collector; deterministic given the
/// POI so verification stays reproducible in tests.
fn synthesize_sources(poi: &Poi) -> Vec<DataSourceRating> {
    if poi.review_count == 0 {
        return Vec::new();
    }
    SOURCE_NAMES
        .iter()
        .enumerate()
        .map(|(i, (name, weight, credibility))| {
            // Deterministic jitter keyed by index, not randomness.
            let jitter = [0.0, -0.1, 0.15, -0.05, 0.05][i % 5];
            DataSourceRating {
                source: name.to_string(),
                rating: (poi.nominal_rating + jitter).clamp(0.0, 5.0),
                review_count: poi.review_count / SOURCE_NAMES.len() as u64,
                weight: *weight,
                credibility: *credibility,
            }
        })
        .collect()
}

pub async fn verify(
    poi: &Poi,
    current: &Poi,
    hour: u32,
    map_service: &dyn MapService,
    min_reviews_for_cleaning: u64,
    notes: &mut Vec<DegradationNote>,
) -> Verification {
    let sources = synthesize_sources(poi);

    let (consistency, weighted_rating, rating_variance) = multi_source(&sources, poi, notes);
    let (fake_rate, positive_rate, negative_rate, valid_reviews) =
        data_cleaning(poi, min_reviews_for_cleaning, notes);
    let (spatial_score, detour_rate) = spatial(poi, current, map_service, notes).await;
    let (temporal_score, predicted_crowd) = temporal(poi, hour);

    let overall_trust =
        Verification::compute_overall_trust(consistency, fake_rate, spatial_score, temporal_score);

    Verification {
        consistency,
        weighted_rating,
        rating_variance,
        valid_reviews,
        fake_rate,
        positive_rate,
        negative_rate,
        spatial_score,
        detour_rate,
        temporal_score,
        predicted_crowd_level: predicted_crowd,
        overall_trust,
        sources,
    }
}

fn multi_source(
    sources: &[DataSourceRating],
    poi: &Poi,
    notes: &mut Vec<DegradationNote>,
) -> (f64, f64, f64) {
    if sources.len() < 2 {
        notes.push(DegradationNote {
            stage: "verification.multi_source",
            reason: DegradationReason::Disabled,
        });
        return (0.7, poi.nominal_rating.max(4.0), 0.0);
    }

    let ratings: Vec<f64> = sources.iter().map(|s| s.rating).collect();
    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
    let variance = ratings.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / ratings.len() as f64;
    let stddev = variance.sqrt();
    let consistency = if mean > 0.0 {
        (1.0 - stddev / mean).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let weight_sum: f64 = sources.iter().map(|s| s.weight * s.credibility).sum();
    let weighted_rating = if weight_sum > 0.0 {
        sources
            .iter()
            .map(|s| s.rating * s.weight * s.credibility)
            .sum::<f64>()
            / weight_sum
    } else {
        poi.nominal_rating
    };

    (consistency, weighted_rating, variance)
}

fn data_cleaning(poi: &Poi, min_reviews: u64, notes: &mut Vec<DegradationNote>) -> (f64, f64, f64, u64) {
    if poi.review_count < min_reviews {
        notes.push(DegradationNote {
            stage: "verification.data_cleaning",
            reason: DegradationReason::Disabled,
        });
        return (0.1, 0.7, 0.1, poi.review_count);
    }
    // Heuristic fake-review rate: lower for highly-rated, well-reviewed POIs.
    let fake_rate = if poi.nominal_rating >= 4.5 { 0.05 } else { 0.12 };
    let positive_rate = (poi.nominal_rating / 5.0).clamp(0.0, 1.0);
    let negative_rate = (1.0 - positive_rate) * 0.4;
    let valid_reviews = ((poi.review_count as f64) * (1.0 - fake_rate)) as u64;
    (fake_rate, positive_rate, negative_rate, valid_reviews)
}

async fn spatial(
    poi: &Poi,
    current: &Poi,
    map_service: &dyn MapService,
    notes: &mut Vec<DegradationNote>,
) -> (f64, f64) {
    let straight = current.haversine_km(poi);
    let road_distance = map_service.road_distance(current, poi).await;
    let detour_rate = match road_distance {
        Some((road_km, _)) if straight > 0.0 => (road_km / straight - 1.0).max(0.0),
        Some(_) => 0.0,
        None => {
            notes.push(DegradationNote {
                stage: "verification.spatial",
                reason: DegradationReason::Timeout,
            });
            0.3 // straight * 1.3 approximation implies a 30% detour
        }
    };
    let connectivity = 1.0;
    let gnn_stub = 0.8;
    let d_term = 1.0 - detour_rate.min(1.0);
    let score = (0.4 * d_term + 0.3 * connectivity + 0.3 * gnn_stub).clamp(0.0, 1.0);
    (score, detour_rate)
}

fn temporal(poi: &Poi, hour: u32) -> (f64, f64) {
    let is_open = if poi.category.open_at_hour(hour) { 1.0 } else { 0.0 };
    let crowd = predicted_crowd_level(poi.category, hour);
    let remaining_to_required = 1.0; // no external capacity signal; treat as unconstrained
    let score = (0.3 * is_open + 0.4 * (1.0 - crowd) + 0.3 * remaining_to_required).clamp(0.0, 1.0);
    (score, crowd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::DisabledMapService;
    use rust_decimal::Decimal;

    fn poi(review_count: u64, rating: f64) -> Poi {
        Poi {
            id: "p".into(),
            name: "p".into(),
            lat: 31.3,
            lon: 120.5,
            category: Category::Attraction,
            address: String::new(),
            avg_visit_hours: 1.0,
            ticket_price: Decimal::new(0, 0),
            nominal_rating: rating,
            review_count,
        }
    }

    #[tokio::test]
    async fn low_review_count_falls_back_to_defaults() {
        let p = poi(5, 4.2);
        let current = poi(0, 4.0);
        let mut notes = Vec::new();
        let v = verify(&p, &current, 12, &DisabledMapService, 10, &mut notes).await;
        assert_eq!(v.consistency, 0.7);
        assert!(!notes.is_empty());
    }

    #[tokio::test]
    async fn overall_trust_in_range() {
        let p = poi(500, 4.7);
        let current = poi(0, 4.0);
        let mut notes = Vec::new();
        let v = verify(&p, &current, 12, &DisabledMapService, 10, &mut notes).await;
        assert!((0.0..=1.0).contains(&v.overall_trust));
    }
}
