//! Time-of-day and crowd heuristics shared by the feasibility, verification,
//! and base-scoring stages. All pure functions of `(category, hour)` so they
//! stay deterministic and cheap to call repeatedly per candidate.

use crate::model::Category;

/// Hour of day (0..24) given a start hour and elapsed time into the trip.
pub fn hour_of_day(start_hour: u32, elapsed_hours: f64) -> u32 {
    (start_hour as f64 + elapsed_hours).rem_euclid(24.0) as u32
}

/// Crowd level heuristic in [0, 1], shared by verification's temporal score
/// and the base scorer's crowd-avoidance term.
pub fn predicted_crowd_level(category: Category, hour: u32) -> f64 {
    let base = match category {
        Category::Attraction => 0.5,
        Category::Restaurant => 0.4,
        Category::Shopping => 0.4,
        Category::Entertainment => 0.3,
        Category::Hotel => 0.1,
        Category::TransportHub => 0.6,
    };
    let peak_bump = match (category, hour) {
        (Category::Restaurant, 11..=13) | (Category::Restaurant, 17..=19) => 0.35,
        (Category::Attraction, 10..=16) => 0.25,
        (Category::Shopping, 13..=19) => 0.2,
        _ => 0.0,
    };
    (base + peak_bump).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_wraps_past_midnight() {
        assert_eq!(hour_of_day(9, 20.0), 5);
    }

    #[test]
    fn restaurant_crowds_peak_at_mealtimes() {
        let lunch = predicted_crowd_level(Category::Restaurant, 12);
        let midafternoon = predicted_crowd_level(Category::Restaurant, 15);
        assert!(lunch > midafternoon);
    }
}
