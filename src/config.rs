//! Configuration management for the ATS scorer

use crate::error::{AtsScorerError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub processing: ProcessingConfig,
    pub scoring: ScoringWeights,
    pub output: OutputConfig,
}

/// Pipeline guardrails. The caps are deliberate bounds on worst-case
/// latency for adversarial input, not tuning knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Only the first N keywords are matched.
    pub max_keywords: usize,
    /// Only the first N generated variations per keyword are tried.
    pub max_variations_per_keyword: usize,
    /// Resume text is clipped to this many characters before processing.
    pub max_resume_chars: usize,
    /// Soft deadline for the whole pipeline, in milliseconds.
    pub time_budget_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub exact_match: f64,
    pub partial_match: f64,
    pub semantic_match: f64,
    pub category_weights: CategoryWeights,
    pub bonus_scores: BonusScores,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub technical: f64,
    pub soft_skill: f64,
    pub qualification: f64,
    pub job_function: f64,
    pub other: f64,
}

/// Flat additive bonuses for matches in hand-picked technology buckets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusScores {
    pub programming_language: f64,
    pub ai_ml: f64,
    pub cloud: f64,
    pub framework: f64,
    pub database: f64,
    pub devops: f64,
    pub security: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            processing: ProcessingConfig {
                max_keywords: 30,
                max_variations_per_keyword: 3,
                max_resume_chars: 10_000,
                time_budget_ms: 5_000,
            },
            scoring: ScoringWeights::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            exact_match: 1.0,
            partial_match: 0.5,
            semantic_match: 0.7,
            category_weights: CategoryWeights {
                technical: 10.0,
                soft_skill: 6.0,
                qualification: 8.0,
                job_function: 5.0,
                other: 2.0,
            },
            bonus_scores: BonusScores {
                programming_language: 3.0,
                ai_ml: 4.0,
                cloud: 3.0,
                framework: 2.0,
                database: 2.0,
                devops: 3.0,
                security: 2.0,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                AtsScorerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            AtsScorerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-scorer")
            .join("config.toml")
    }
}
