use serde::{Deserialize, Serialize};

use super::poi::Poi;
use super::quality::QualityScore;
use super::tensions::WAxisDetails;
use super::transport::TransportEdge;
use super::verification::Verification;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateOption {
    pub poi: Poi,
    pub edges: Vec<TransportEdge>,
    pub verification: Verification,
    pub quality: QualityScore,
    pub base_score: f64,
    pub match_score: f64,
    pub w_axis: Option<WAxisDetails>,
    pub final_score: f64,
    pub explanation: Option<String>,
    pub rank: usize,
    pub risk_level: RiskLevel,
}

impl CandidateOption {
    /// The fastest of this candidate's transport edges, used for the
    /// efficiency term and the rank tie-break.
    pub fn fastest_edge(&self) -> &TransportEdge {
        self.edges
            .iter()
            .min_by(|a, b| a.time_hours.total_cmp(&b.time_hours))
            .expect("candidate options always carry at least one transport edge")
    }
}
