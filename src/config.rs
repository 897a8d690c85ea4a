use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::models::ScoringWeights;

/// Allowed drift of the weight sum from 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Errors that can occur while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scoring weights must sum to 1.0, got {sum}")]
    InvalidWeights { sum: f64 },

    #[error("Scoring weight `{name}` must be a non-negative number, got {value}")]
    NegativeWeight { name: &'static str, value: f64 },
}

/// Engine configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_min_threshold")]
    pub min_threshold: f64,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_threshold: default_min_threshold(),
            top_n: default_top_n(),
            parallel: default_parallel(),
        }
    }
}

fn default_min_threshold() -> f64 { 30.0 }
fn default_top_n() -> usize { 10 }
fn default_parallel() -> bool { true }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
    #[serde(default = "default_salary_weight")]
    pub salary: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skills: default_skills_weight(),
            experience: default_experience_weight(),
            salary: default_salary_weight(),
            location: default_location_weight(),
        }
    }
}

fn default_skills_weight() -> f64 { 0.40 }
fn default_experience_weight() -> f64 { 0.25 }
fn default_salary_weight() -> f64 { 0.20 }
fn default_location_weight() -> f64 { 0.15 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

fn environment() -> Environment {
    // e.g., JOBMATCH__SCORING__WEIGHTS__SKILLS -> scoring.weights.skills
    Environment::with_prefix("JOBMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. `.env` file, if present
    /// 3. Configuration file (config/default.toml)
    /// 4. Local overrides (config/local.toml)
    /// 5. Environment variables (prefixed with JOBMATCH__)
    pub fn load() -> Result<Self, SettingsError> {
        dotenv::dotenv().ok();

        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Parse settings from TOML text, without consulting the environment
    pub fn from_toml_str(toml: &str) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Configured weights, rejected unless each is non-negative and they sum to 1.0
    pub fn scoring_weights(&self) -> Result<ScoringWeights, SettingsError> {
        let config = &self.scoring.weights;
        let weights = ScoringWeights {
            skills: config.skills,
            experience: config.experience,
            salary: config.salary,
            location: config.location,
        };

        for (name, value) in [
            ("skills", weights.skills),
            ("experience", weights.experience),
            ("salary", weights.salary),
            ("location", weights.location),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::NegativeWeight { name, value });
            }
        }

        let sum = weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(SettingsError::InvalidWeights { sum });
        }

        Ok(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.skills, 0.40);
        assert_eq!(weights.experience, 0.25);
        assert_eq!(weights.salary, 0.20);
        assert_eq!(weights.location, 0.15);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        let settings = Settings::from_toml_str("").unwrap();

        assert_eq!(settings.matching.min_threshold, 30.0);
        assert_eq!(settings.matching.top_n, 10);
        assert!(settings.matching.parallel);
        assert_eq!(settings.scoring_weights().unwrap(), ScoringWeights::default());
    }

    #[test]
    fn test_partial_override() {
        let settings = Settings::from_toml_str(
            r#"
            [matching]
            min_threshold = 45.0

            [scoring.weights]
            skills = 0.5
            experience = 0.2
            salary = 0.15
            location = 0.15

            [logging]
            format = "pretty"
            "#,
        )
        .unwrap();

        assert_eq!(settings.matching.min_threshold, 45.0);
        assert_eq!(settings.matching.top_n, 10);
        assert_eq!(settings.scoring_weights().unwrap().skills, 0.5);
        assert_eq!(settings.logging.format, "pretty");
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let settings = Settings::from_toml_str("[scoring.weights]\nskills = 0.9\n").unwrap();

        match settings.scoring_weights() {
            Err(SettingsError::InvalidWeights { sum }) => assert!((sum - 1.5).abs() < 1e-9),
            other => panic!("expected InvalidWeights, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_weight_rejected() {
        let settings = Settings::from_toml_str(
            "[scoring.weights]\nskills = 0.6\nexperience = -0.05\nsalary = 0.3\nlocation = 0.15\n",
        )
        .unwrap();

        assert!(matches!(
            settings.scoring_weights(),
            Err(SettingsError::NegativeWeight { name: "experience", .. })
        ));
    }
}
