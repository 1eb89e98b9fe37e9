use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    Low,
    Medium,
    High,
    Luxury,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub purpose: HashMap<String, f64>,
    pub pace: HashMap<String, f64>,
    pub intensity: HashMap<String, f64>,
    pub budget_tier: BudgetTier,
    pub crowd_avoidance: f64,
}

impl UserProfile {
    /// Derive a profile from free-text user input, using keyword mapping.
    /// Mirrors the defaults a real onboarding flow would apply when the
    /// input is empty or unrecognized.
    pub fn from_user_input(text: &str) -> Self {
        let mut purpose = HashMap::new();
        let lower = text.to_lowercase();

        let hits: &[(&[&str], &str, f64)] = &[
            (&["文化", "历史", "culture", "history"], "culture", 0.9),
            (&["美食", "food", "吃"], "food", 0.9),
            (&["自然", "风景", "nature", "scenery"], "nature", 0.9),
            (&["休闲", "leisure", "relax"], "leisure", 0.8),
            (&["购物", "shopping"], "shopping", 0.8),
            (&["探险", "adventure"], "adventure", 0.8),
        ];
        for (keywords, tag, weight) in hits {
            if keywords.iter().any(|k| lower.contains(k) || text.contains(k)) {
                purpose.insert(tag.to_string(), *weight);
            }
        }
        if purpose.is_empty() {
            purpose.insert("leisure".to_string(), 0.6);
            purpose.insert("culture".to_string(), 0.5);
        }

        let mut pace = HashMap::new();
        if text.contains("慢") || lower.contains("slow") {
            pace.insert("slow".to_string(), 0.8);
            pace.insert("medium".to_string(), 0.15);
            pace.insert("fast".to_string(), 0.05);
        } else if text.contains("快") || text.contains("紧凑") || lower.contains("fast") {
            pace.insert("slow".to_string(), 0.05);
            pace.insert("medium".to_string(), 0.25);
            pace.insert("fast".to_string(), 0.7);
        } else {
            pace.insert("slow".to_string(), 0.6);
            pace.insert("medium".to_string(), 0.3);
            pace.insert("fast".to_string(), 0.1);
        }

        let mut intensity = HashMap::new();
        if text.contains("刺激") || text.contains("极限") || lower.contains("adventure") || lower.contains("extreme") {
            intensity.insert("high".to_string(), 0.7);
            intensity.insert("medium".to_string(), 0.25);
            intensity.insert("low".to_string(), 0.05);
        } else if text.contains("轻松") || text.contains("温和") || lower.contains("gentle") || lower.contains("relax") {
            intensity.insert("high".to_string(), 0.05);
            intensity.insert("medium".to_string(), 0.25);
            intensity.insert("low".to_string(), 0.7);
        } else {
            intensity.insert("high".to_string(), 0.2);
            intensity.insert("medium".to_string(), 0.6);
            intensity.insert("low".to_string(), 0.2);
        }

        let budget_tier = if lower.contains("luxury") || text.contains("奢华") {
            BudgetTier::Luxury
        } else if lower.contains("budget") || text.contains("省钱") {
            BudgetTier::Low
        } else {
            BudgetTier::Medium
        };

        Self {
            purpose,
            pace,
            intensity,
            budget_tier,
            crowd_avoidance: 0.5,
        }
    }

    /// Best match across this profile's purpose weights for the given tags.
    pub fn purpose_match(&self, tags: &[&str]) -> f64 {
        tags.iter()
            .filter_map(|t| self.purpose.get(*t).copied())
            .fold(0.0_f64, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gets_defaults() {
        let p = UserProfile::from_user_input("");
        assert!(p.purpose.contains_key("leisure"));
    }

    #[test]
    fn culture_keyword_detected() {
        let p = UserProfile::from_user_input("休闲慢节奏喜欢园林文化");
        assert!(p.purpose.get("culture").copied().unwrap_or(0.0) > 0.0);
        assert!(p.pace.get("slow").copied().unwrap_or(0.0) > 0.5);
    }
}
