//! Typed configuration for the decision core.
//!
//! Loaded from an optional TOML file (`tripweave.toml` by default) with
//! environment-variable overrides, validated once at startup. Unknown TOML
//! keys are rejected rather than silently ignored.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    pub pipeline: PipelineConfig,
    pub scoring: ScoringWeights,
    pub quality_filter: QualityFilterConfig,
    pub transport: TransportConfig,
    pub risk: RiskConfig,
    pub w_axis: WAxisConfig,
    pub session: SessionConfig,
    pub concurrency: ConcurrencyConfig,
    pub services: ServicesConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            scoring: ScoringWeights::default(),
            quality_filter: QualityFilterConfig::default(),
            transport: TransportConfig::default(),
            risk: RiskConfig::default(),
            w_axis: WAxisConfig::default(),
            session: SessionConfig::default(),
            concurrency: ConcurrencyConfig::default(),
            services: ServicesConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load from an optional TOML file plus environment overrides, then
    /// validate. A missing file is not an error — defaults apply.
    pub fn load(path: Option<&Path>) -> CoreResult<Self> {
        dotenvy::dotenv().ok();

        let mut cfg: Config = match path {
            Some(p) if p.exists() => {
                let text = std::fs::read_to_string(p)
                    .map_err(|e| CoreError::InvalidInput(format!("reading config: {e}")))?;
                toml::from_str(&text)
                    .map_err(|e| CoreError::InvalidInput(format!("parsing config: {e}")))?
            }
            _ => Config::default(),
        };

        cfg.apply_env_overrides();
        cfg.validate()?;
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("TRIPWEAVE_TOP_K") {
            if let Ok(k) = v.parse() {
                self.pipeline.top_k = k;
            }
        }
        if let Ok(v) = std::env::var("TRIPWEAVE_REASONING_ENDPOINT") {
            self.services.reasoning_endpoint = Some(v);
        }
        if let Ok(v) = std::env::var("TRIPWEAVE_EXPLANATION_ENDPOINT") {
            self.services.explanation_endpoint = Some(v);
        }
        if let Ok(v) = std::env::var("TRIPWEAVE_LOG_LEVEL") {
            self.logging.level = v;
        }
    }

    fn validate(&self) -> CoreResult<()> {
        let w = &self.scoring;
        let sum = w.match_weight + w.trust + w.quality + w.efficiency + w.novelty + w.crowd;
        if (sum - 1.0).abs() > 1e-6 {
            return Err(CoreError::InvalidInput(format!(
                "scoring weights must sum to 1.0, got {sum}"
            )));
        }
        if !(0.0..=0.2).contains(&self.w_axis.delta) || !(0.0..=0.2).contains(&self.w_axis.epsilon)
        {
            return Err(CoreError::InvalidInput(
                "w_axis delta/epsilon must be in [0, 0.2]".into(),
            ));
        }
        if self.pipeline.top_k == 0 {
            return Err(CoreError::InvalidInput("top_k must be > 0".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct PipelineConfig {
    pub pool_size: usize,
    pub top_k: usize,
    pub max_distance_km: f64,
    pub enable_temporal_filter: bool,
    pub enable_quality_filter: bool,
    pub min_remaining_buffer_hours: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            pool_size: 200,
            top_k: 10,
            max_distance_km: 50.0,
            enable_temporal_filter: false,
            enable_quality_filter: true,
            min_remaining_buffer_hours: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ScoringWeights {
    #[serde(rename = "match")]
    pub match_weight: f64,
    pub trust: f64,
    pub quality: f64,
    pub efficiency: f64,
    pub novelty: f64,
    pub crowd: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            match_weight: 0.25,
            trust: 0.20,
            quality: 0.20,
            efficiency: 0.15,
            novelty: 0.10,
            crowd: 0.10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct QualityFilterConfig {
    pub min_overall_score: f64,
    pub min_review_count: u64,
    pub min_rating: f64,
    pub min_playability: f64,
    pub weight_playability: f64,
    pub weight_viewability: f64,
    pub weight_popularity: f64,
    pub weight_history: f64,
}

impl Default for QualityFilterConfig {
    fn default() -> Self {
        Self {
            min_overall_score: 0.5,
            min_review_count: 50,
            min_rating: 4.0,
            min_playability: 0.3,
            weight_playability: 0.30,
            weight_viewability: 0.25,
            weight_popularity: 0.25,
            weight_history: 0.20,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TransportModeConfig {
    pub speed_kmh: f64,
    pub distance_factor: f64,
    pub min_distance_km: f64,
    pub max_distance_km: f64,
    pub wait_time_h: f64,
    pub base_fare: f64,
    pub price_per_km: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TransportConfig {
    pub walk: TransportModeConfig,
    pub taxi: TransportModeConfig,
    pub bus: TransportModeConfig,
    pub subway: TransportModeConfig,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            walk: TransportModeConfig {
                speed_kmh: 4.0,
                distance_factor: 1.0,
                min_distance_km: 0.0,
                max_distance_km: 2.0,
                wait_time_h: 0.0,
                base_fare: 0.0,
                price_per_km: 0.0,
            },
            taxi: TransportModeConfig {
                speed_kmh: 30.0,
                distance_factor: 1.3,
                min_distance_km: 0.0,
                max_distance_km: f64::INFINITY,
                wait_time_h: 0.0,
                base_fare: 13.0,
                price_per_km: 2.5,
            },
            bus: TransportModeConfig {
                speed_kmh: 15.0,
                distance_factor: 1.4,
                min_distance_km: 1.0,
                max_distance_km: 20.0,
                wait_time_h: 0.3,
                base_fare: 2.0,
                price_per_km: 0.0,
            },
            subway: TransportModeConfig {
                speed_kmh: 35.0,
                distance_factor: 1.2,
                min_distance_km: 3.0,
                max_distance_km: 30.0,
                wait_time_h: 0.25,
                base_fare: 2.0,
                price_per_km: 0.1,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RiskConfig {
    pub budget_warning_threshold: f64,
    pub budget_critical_threshold: f64,
    pub time_warning_threshold_h: f64,
    pub time_critical_threshold_h: f64,
    pub return_buffer_time_h: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            budget_warning_threshold: 100.0,
            budget_critical_threshold: 50.0,
            time_warning_threshold_h: 1.0,
            time_critical_threshold_h: 0.5,
            return_buffer_time_h: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct WAxisConfig {
    pub delta: f64,
    pub epsilon: f64,
}

impl Default for WAxisConfig {
    fn default() -> Self {
        Self {
            delta: 0.1,
            epsilon: 0.1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SessionConfig {
    pub ttl_hours: i64,
    pub gc_interval_secs: u64,
    pub default_budget: f64,
    pub default_start_hour: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_hours: 24,
            gc_interval_secs: 300,
            default_budget: 10_000.0,
            default_start_hour: 9,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ConcurrencyConfig {
    pub reasoning_fan_out_limit: usize,
    pub explanation_fan_out_limit: usize,
    pub request_deadline_ms: u64,
}

impl Default for ConcurrencyConfig {
    fn default() -> Self {
        Self {
            reasoning_fan_out_limit: 10,
            explanation_fan_out_limit: 10,
            request_deadline_ms: 4_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ServicesConfig {
    /// When absent, the Reasoning/Explanation/Map services are disabled and
    /// the pipeline runs entirely on rule-only fallbacks.
    pub reasoning_endpoint: Option<String>,
    pub explanation_endpoint: Option<String>,
    pub map_endpoint: Option<String>,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            reasoning_endpoint: None,
            explanation_endpoint: None,
            map_endpoint: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let cfg = Config::default();
        cfg.validate().unwrap();
    }

    #[test]
    fn bad_weight_sum_rejected() {
        let mut cfg = Config::default();
        cfg.scoring.match_weight = 0.9;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn bad_w_axis_rejected() {
        let mut cfg = Config::default();
        cfg.w_axis.delta = 0.5;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn unknown_field_rejected() {
        let toml_text = "[pipeline]\ntop_k = 5\nbogus_field = true\n";
        let result: Result<Config, _> = toml::from_str(toml_text);
        assert!(result.is_err());
    }
}
