//! Deterministic ranking. Tie-break chain: higher novelty tension, then
//! shorter fastest-edge time, then POI id, lexicographically.

use crate::model::CandidateOption;

pub fn sort_and_assign_ranks(mut candidates: Vec<CandidateOption>) -> Vec<CandidateOption> {
    candidates.sort_by(|a, b| {
        b.final_score
            .total_cmp(&a.final_score)
            .then_with(|| {
                let nov_a = a.w_axis.as_ref().map(|w| w.tensions.novelty).unwrap_or(0.0);
                let nov_b = b.w_axis.as_ref().map(|w| w.tensions.novelty).unwrap_or(0.0);
                nov_b.total_cmp(&nov_a)
            })
            .then_with(|| a.fastest_edge().time_hours.total_cmp(&b.fastest_edge().time_hours))
            .then_with(|| a.poi.id.cmp(&b.poi.id))
    });
    for (idx, c) in candidates.iter_mut().enumerate() {
        c.rank = idx + 1;
    }
    candidates
}
