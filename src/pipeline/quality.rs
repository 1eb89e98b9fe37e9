//! Quality filter: playability / viewability / popularity / history
//! sub-scores derived from category, visit duration, rating, and name/address
//! tokens, combined into a weighted overall quality score.

use crate::config::QualityFilterConfig;
use crate::model::{Category, Poi, QualityScore, Verification};

const PLAYABILITY_TOKENS: &[&str] = &["体验", "互动", "乐园", "experience", "interactive"];
const VIEWABILITY_TOKENS: &[&str] = &["景", "观景", "view", "scenic", "全景"];
const HISTORY_NAME_TOKENS: &[&str] = &[
    "园", "寺", "庙", "塔", "古", "故居", "博物馆", "纪念馆", "遗址", "文化", "历史", "传统", "老街",
    "古镇", "museum", "heritage", "ancient", "temple",
];
const OLD_TOWN_ADDRESS_TOKENS: &[&str] = &["古城", "老城区", "old town"];

pub fn evaluate(poi: &Poi, verification: &Verification) -> QualityScore {
    let playability = playability(poi);
    let viewability = viewability(poi, verification.weighted_rating);
    let popularity = popularity(poi, verification);
    let history = history(poi);

    let overall = 0.30 * playability + 0.25 * viewability + 0.25 * popularity + 0.20 * history;

    QualityScore {
        playability,
        viewability,
        popularity,
        history,
        overall: overall.clamp(0.0, 1.0),
    }
}

fn playability(poi: &Poi) -> f64 {
    let duration_term = match poi.avg_visit_hours {
        h if h >= 3.0 => 0.5,
        h if h >= 1.5 => 0.3,
        h if h >= 0.5 => 0.15,
        _ => 0.05,
    };
    let category_base = match poi.category {
        Category::Attraction => 0.4,
        Category::Entertainment => 0.35,
        Category::Shopping => 0.3,
        Category::Restaurant => 0.2,
        Category::Hotel => 0.1,
        Category::TransportHub => 0.0,
    };
    let token_bonus = if contains_any(&poi.name, PLAYABILITY_TOKENS) { 0.1 } else { 0.0 };
    (duration_term + category_base + token_bonus).clamp(0.0, 1.0)
}

fn viewability(poi: &Poi, weighted_rating: f64) -> f64 {
    let category_base = match poi.category {
        Category::Attraction => 0.6,
        Category::Entertainment => 0.3,
        Category::Shopping => 0.25,
        Category::Restaurant => 0.3,
        Category::Hotel => 0.2,
        Category::TransportHub => 0.1,
    };
    let token_bonus = if contains_any(&poi.name, VIEWABILITY_TOKENS) { 0.2 } else { 0.0 };
    let rating_bonus = rating_bonus(weighted_rating, 0.2, 0.15, 0.1, 0.0);
    (category_base + token_bonus + rating_bonus).clamp(0.0, 1.0)
}

fn popularity(poi: &Poi, verification: &Verification) -> f64 {
    let review_term = if verification.valid_reviews > 0 {
        ((verification.valid_reviews as f64).log10() / 4.0).min(0.4)
    } else {
        0.0
    };
    let rating_bonus = rating_bonus(verification.weighted_rating, 0.3, 0.25, 0.15, 0.05);
    let source_bonus = (0.1 * verification.sources.len() as f64).min(0.3);
    (review_term + rating_bonus + source_bonus).clamp(0.0, 1.0)
}

fn history(poi: &Poi) -> f64 {
    let mut score = 0.0;
    if contains_any(&poi.name, HISTORY_NAME_TOKENS) {
        score += 0.4;
    }
    if contains_any(&poi.address, OLD_TOWN_ADDRESS_TOKENS) {
        score += 0.2;
    }
    if !poi.ticket_price.is_zero() {
        score += 0.2;
    }
    score.clamp(0.0, 1.0)
}

fn rating_bonus(rating: f64, at_48: f64, at_45: f64, at_40: f64, floor: f64) -> f64 {
    if rating >= 4.8 {
        at_48
    } else if rating >= 4.5 {
        at_45
    } else if rating >= 4.0 {
        at_40
    } else {
        floor
    }
}

fn contains_any(haystack: &str, tokens: &[&str]) -> bool {
    let lower = haystack.to_lowercase();
    tokens.iter().any(|t| haystack.contains(t) || lower.contains(&t.to_lowercase()))
}

pub fn passes_filter(
    verification: &Verification,
    quality: &QualityScore,
    cfg: &QualityFilterConfig,
) -> bool {
    quality.is_qualified(
        verification.valid_reviews,
        verification.weighted_rating,
        cfg.min_review_count,
        cfg.min_rating,
        cfg.min_playability,
        cfg.min_overall_score,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn poi(name: &str, category: Category, avg_visit_hours: f64, ticket: i64) -> Poi {
        Poi {
            id: "p".into(),
            name: name.into(),
            lat: 0.0,
            lon: 0.0,
            category,
            address: String::new(),
            avg_visit_hours,
            ticket_price: Decimal::new(ticket, 0),
            nominal_rating: 4.5,
            review_count: 500,
        }
    }

    #[test]
    fn historic_garden_scores_high_history() {
        let p = poi("拙政园", Category::Attraction, 3.0, 70);
        let h = history(&p);
        assert!(h >= 0.6, "history was {h}");
    }

    #[test]
    fn transport_hub_scores_low_playability() {
        let p = poi("Central Station", Category::TransportHub, 0.1, 0);
        assert!(playability(&p) < 0.2);
    }

    #[test]
    fn overall_quality_in_range() {
        let p = poi("Suzhou Museum", Category::Attraction, 2.0, 0);
        let verification = Verification {
            consistency: 0.9,
            weighted_rating: 4.6,
            rating_variance: 0.1,
            valid_reviews: 1000,
            fake_rate: 0.05,
            positive_rate: 0.9,
            negative_rate: 0.05,
            spatial_score: 0.8,
            detour_rate: 0.1,
            temporal_score: 0.8,
            predicted_crowd_level: 0.3,
            overall_trust: 0.85,
            sources: vec![],
        };
        let q = evaluate(&p, &verification);
        assert!((0.0..=1.0).contains(&q.overall));
    }
}
