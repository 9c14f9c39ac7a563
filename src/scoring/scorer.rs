//! Public entry point: input guards, truncation and timeout enforcement

use crate::config::Config;
use crate::error::{AtsScorerError, Result};
use crate::scoring::deadline::Deadline;
use crate::scoring::engine::ScoringEngine;
use crate::scoring::matcher::MatchingEngine;
use crate::scoring::section_parser::SectionParser;
use crate::scoring::types::{AtsScoreResult, EnhancedAtsScoreResult};
use log::{info, warn};
use std::time::Duration;

/// Orchestrates section parsing, keyword matching and scoring.
///
/// The contract is: never fail across the public boundary. Every internal
/// error, including a tripped deadline, is absorbed into a structured
/// result that is always safe to render.
pub struct AtsScorer {
    section_parser: SectionParser,
    matching_engine: MatchingEngine,
    scoring_engine: ScoringEngine,
    max_resume_chars: usize,
    time_budget: Duration,
}

impl AtsScorer {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let processing = &config.processing;
        Self {
            section_parser: SectionParser::new(),
            matching_engine: MatchingEngine::with_limits(
                processing.max_keywords,
                processing.max_variations_per_keyword,
            ),
            scoring_engine: ScoringEngine::with_weights(
                config.scoring.clone(),
                processing.max_keywords,
            ),
            max_resume_chars: processing.max_resume_chars,
            time_budget: Duration::from_millis(processing.time_budget_ms),
        }
    }

    /// Score a resume against a keyword list. Always returns a result:
    /// empty/missing input yields the empty sentinel, and any pipeline
    /// failure yields an error sentinel with a diagnostic recommendation.
    pub async fn calculate_score(
        &self,
        resume_text: &str,
        keywords: &[String],
    ) -> EnhancedAtsScoreResult {
        if resume_text.trim().is_empty() || keywords.is_empty() {
            return EnhancedAtsScoreResult::empty(keywords);
        }

        // Documents past the cap are silently clipped, a stated bound
        let truncated = truncate_chars(resume_text, self.max_resume_chars);
        let deadline = Deadline::new(self.time_budget);

        match self.run_pipeline(truncated, keywords, &deadline) {
            Ok(result) => {
                info!(
                    "scored {} keywords against {} chars of resume: {}",
                    keywords.len(),
                    truncated.len(),
                    result.score
                );
                result
            }
            Err(AtsScorerError::Timeout(stage)) => {
                warn!("scoring timed out: {}", stage);
                EnhancedAtsScoreResult::failure(keywords, "ATS scoring timeout - resume too complex")
            }
            Err(e) => {
                warn!("scoring failed: {}", e);
                EnhancedAtsScoreResult::failure(keywords, &e.to_string())
            }
        }
    }

    fn run_pipeline(
        &self,
        resume_text: &str,
        keywords: &[String],
        deadline: &Deadline,
    ) -> Result<EnhancedAtsScoreResult> {
        let sections = self.section_parser.parse_sections(resume_text, deadline)?;
        let matches =
            self.matching_engine
                .find_matches(resume_text, keywords, &sections, deadline)?;
        deadline.check("scoring")?;
        Ok(self
            .scoring_engine
            .calculate_score(resume_text, keywords, &sections, &matches))
    }
}

impl Default for AtsScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Score with the default configuration.
pub async fn calculate_enhanced_ats_score(
    resume_text: &str,
    keywords: &[String],
) -> EnhancedAtsScoreResult {
    AtsScorer::new().calculate_score(resume_text, keywords).await
}

/// Legacy entry point returning the flat result shape.
pub async fn calculate_ats_score(resume_text: &str, keywords: &[String]) -> AtsScoreResult {
    calculate_enhanced_ats_score(resume_text, keywords)
        .await
        .into()
}

/// First `max_chars` characters, respecting char boundaries.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("héllo", 2), "hé");
    }

    #[tokio::test]
    async fn test_empty_resume_returns_empty_sentinel() {
        let scorer = AtsScorer::new();
        let keywords = vec!["python".to_string()];
        let result = scorer.calculate_score("", &keywords).await;

        assert_eq!(result.score, 0);
        assert_eq!(result.missing_keywords, keywords);
        assert!(result.recommendations[0].contains("Please provide"));
    }

    #[tokio::test]
    async fn test_empty_keywords_return_empty_sentinel() {
        let scorer = AtsScorer::new();
        let result = scorer.calculate_score("a perfectly fine resume", &[]).await;

        assert_eq!(result.score, 0);
        assert!(result.missing_keywords.is_empty());
        assert!(!result.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_zero_budget_surfaces_timeout_sentinel() {
        let mut config = Config::default();
        config.processing.time_budget_ms = 0;
        let scorer = AtsScorer::with_config(&config);

        let keywords = vec!["python".to_string()];
        let result = scorer
            .calculate_score("Skills:\nPython every day", &keywords)
            .await;

        assert_eq!(result.score, 0);
        assert!(result.recommendations[0].contains("timeout"));
        assert_eq!(result.missing_keywords, keywords);
    }

    #[tokio::test]
    async fn test_legacy_wrapper_preserves_fields() {
        let resume = "Skills:\nPython and React in production";
        let keywords = vec!["Python".to_string(), "terraform".to_string()];

        let enhanced = calculate_enhanced_ats_score(resume, &keywords).await;
        let legacy = calculate_ats_score(resume, &keywords).await;

        assert_eq!(legacy.score, enhanced.score);
        assert_eq!(legacy.total_keywords, enhanced.total_keywords);
        assert_eq!(legacy.missing_keywords, enhanced.missing_keywords);
        assert_eq!(legacy.recommendations, enhanced.recommendations);
        assert!(legacy.matched_keywords.contains(&"Python".to_string()));
    }
}
