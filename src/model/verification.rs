use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSourceRating {
    pub source: String,
    pub rating: f64,
    pub review_count: u64,
    pub weight: f64,
    pub credibility: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    pub consistency: f64,
    pub weighted_rating: f64,
    pub rating_variance: f64,
    pub valid_reviews: u64,
    pub fake_rate: f64,
    pub positive_rate: f64,
    pub negative_rate: f64,
    pub spatial_score: f64,
    pub detour_rate: f64,
    pub temporal_score: f64,
    pub predicted_crowd_level: f64,
    pub overall_trust: f64,
    pub sources: Vec<DataSourceRating>,
}

impl Verification {
    /// `overall_trust` is the equal-weighted mean of the four principle
    /// scores: consistency, review cleanliness, spatial plausibility, and
    /// temporal fit.
    pub fn compute_overall_trust(
        consistency: f64,
        fake_rate: f64,
        spatial_score: f64,
        temporal_score: f64,
    ) -> f64 {
        ((consistency + (1.0 - fake_rate) + spatial_score + temporal_score) / 4.0).clamp(0.0, 1.0)
    }
}
