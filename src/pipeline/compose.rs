//! Field composer: Φ₄ = Φ₃ + δ·S_sem + ε·C_causal.

use crate::config::WAxisConfig;
use crate::model::WAxisDetails;

pub fn compose(base_score: f64, w_axis: &WAxisDetails, cfg: &WAxisConfig) -> f64 {
    let f_wc = cfg.delta * w_axis.tensions.semantic_score() + cfg.epsilon * w_axis.c_causal;
    (base_score + f_wc).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CausalSource, Tensions};

    #[test]
    fn composed_score_stays_bounded() {
        let w_axis = WAxisDetails {
            c_causal: 1.0,
            causal_source: CausalSource::Reasoned,
            tensions: Tensions::from_signed(1.0, 1.0, 1.0),
            region: "x".into(),
            visit_count: 0,
        };
        let cfg = WAxisConfig { delta: 0.2, epsilon: 0.2 };
        let score = compose(0.9, &w_axis, &cfg);
        assert!(score <= 1.0);
    }

    #[test]
    fn zero_weights_leave_base_score_unchanged() {
        let w_axis = WAxisDetails {
            c_causal: 0.9,
            causal_source: CausalSource::Reasoned,
            tensions: Tensions::from_signed(0.8, 0.3, 0.2),
            region: "x".into(),
            visit_count: 0,
        };
        let cfg = WAxisConfig { delta: 0.0, epsilon: 0.0 };
        assert_eq!(compose(0.5, &w_axis, &cfg), 0.5);
    }
}
