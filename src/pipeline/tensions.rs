//! Rule-derived tensions (novelty, continuity, energy, conflict), always
//! computed regardless of whether the causal reasoner is available.

use crate::model::{Category, Poi, Tensions};
use crate::regions::{region_of, LANDMARK_TOKENS};

pub fn compute(poi: &Poi, current: &Poi, region_visit_counts: &std::collections::HashMap<String, u32>, hour: u32) -> (Tensions, String, u32) {
    let region = region_of(&poi.name, &poi.address);
    let visit_count = region_visit_counts.get(&region).copied().unwrap_or(0);

    let novelty = match visit_count {
        0 => 0.8,
        1 => -0.3,
        _ => -0.6,
    };

    let mut continuity = if poi.category == current.category { -0.4 } else { 0.3 };
    if LANDMARK_TOKENS.iter().any(|t| poi.name.contains(t)) {
        continuity += 0.2;
    }

    let mut energy = match hour {
        0..=11 => 0.6,
        12..=15 => 0.2,
        16..=17 => -0.2,
        _ => -0.5,
    };
    let is_mealtime = (11..=13).contains(&hour) || (17..=19).contains(&hour);
    if poi.category == Category::Restaurant && is_mealtime {
        energy += 0.4;
    }

    let tensions = Tensions::from_signed(novelty, continuity.clamp(-1.0, 1.0), energy.clamp(-1.0, 1.0));
    (tensions, region, visit_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn poi(name: &str, category: Category) -> Poi {
        Poi {
            id: "p".into(),
            name: name.into(),
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
    fn unvisited_region_gets_novelty_bonus() {
        let p = poi("拙政园", Category::Attraction);
        let current = poi("start", Category::Attraction);
        let (t, _region, count) = compute(&p, &current, &std::collections::HashMap::new(), 10);
        assert_eq!(count, 0);
        assert_eq!(t.novelty, 0.8);
    }

    #[test]
    fn mealtime_restaurant_gets_energy_bonus() {
        let p = poi("Noodle House", Category::Restaurant);
        let current = poi("start", Category::Attraction);
        let (t, _, _) = compute(&p, &current, &std::collections::HashMap::new(), 12);
        assert!(t.energy > 0.5);
    }
}
