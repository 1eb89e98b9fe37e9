use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tensions {
    pub novelty: f64,
    pub continuity: f64,
    pub energy: f64,
    pub conflict: f64,
}

impl Tensions {
    /// `conflict` is derived from how many of the three signed tensions
    /// point in opposite directions: min(positive count, negative count) / 3.
    pub fn from_signed(novelty: f64, continuity: f64, energy: f64) -> Self {
        let signed = [novelty, continuity, energy];
        let pos = signed.iter().filter(|v| **v > 0.0).count();
        let neg = signed.iter().filter(|v| **v < 0.0).count();
        let conflict = pos.min(neg) as f64 / 3.0;
        Self {
            novelty,
            continuity,
            energy,
            conflict,
        }
    }

    /// S_sem = 0.5 + 0.3*novelty + 0.2*continuity + 0.1*energy, clamped.
    pub fn semantic_score(&self) -> f64 {
        (0.5 + 0.3 * self.novelty + 0.2 * self.continuity + 0.1 * self.energy).clamp(-1.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CausalSource {
    Reasoned,
    Fallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WAxisDetails {
    pub c_causal: f64,
    pub causal_source: CausalSource,
    pub tensions: Tensions,
    pub region: String,
    pub visit_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_requires_opposing_signs() {
        let t = Tensions::from_signed(0.8, 0.3, 0.2);
        assert_eq!(t.conflict, 0.0);

        let t = Tensions::from_signed(0.8, -0.4, -0.2);
        assert!((t.conflict - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn semantic_score_clamped() {
        let t = Tensions::from_signed(1.0, 1.0, 1.0);
        assert!(t.semantic_score() <= 1.0);
        let t = Tensions::from_signed(-1.0, -1.0, -1.0);
        assert!(t.semantic_score() >= -1.0);
    }
}
