//! ATS keyword scoring engine library

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scoring;

pub use config::Config;
pub use error::{AtsScorerError, Result};
pub use scoring::scorer::{calculate_ats_score, calculate_enhanced_ats_score, AtsScorer};
pub use scoring::types::{
    AtsScoreResult, EnhancedAtsScoreResult, KeywordCategory, KeywordMatch, MatchType, SectionInfo,
};
