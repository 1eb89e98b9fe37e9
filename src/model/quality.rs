use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityScore {
    pub playability: f64,
    pub viewability: f64,
    pub popularity: f64,
    pub history: f64,
    pub overall: f64,
}

impl QualityScore {
    pub fn is_qualified(
        &self,
        valid_reviews: u64,
        weighted_rating: f64,
        min_review_count: u64,
        min_rating: f64,
        min_playability: f64,
        min_overall_score: f64,
    ) -> bool {
        valid_reviews >= min_review_count
            && weighted_rating >= min_rating
            && self.playability >= min_playability
            && self.overall >= min_overall_score
    }
}
