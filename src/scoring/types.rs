//! Result and match types for the ATS scoring pipeline

use serde::{Deserialize, Serialize};

/// Classification of a keyword, derived from the static keyword database.
///
/// Never stored anywhere - recomputed per keyword on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeywordCategory {
    Technical,
    SoftSkill,
    Qualification,
    JobFunction,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Partial,
    Semantic,
}

/// A single matched keyword. At most one match per distinct keyword survives
/// deduplication - the highest-scoring one wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    pub match_type: MatchType,
    pub score: f64,
    pub section: Option<String>,
    /// Text snippet around the match location, purely diagnostic.
    pub context: Option<String>,
}

/// One contiguous region of resume text under a detected heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionInfo {
    pub name: String,
    pub content: String,
    /// Scales match scores found within this section, roughly [1.0, 1.7].
    pub multiplier: f64,
    /// Informational ranking (1-10), not used in scoring math.
    pub priority: u8,
}

/// Raw point contributions before conversion to a percentage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub exact_matches: f64,
    pub partial_matches: f64,
    pub semantic_matches: f64,
    pub section_bonuses: f64,
    pub category_bonuses: f64,
}

/// Terminal output of the scoring pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedAtsScoreResult {
    /// Integer score, always clamped to [0, 100].
    pub score: u8,
    pub total_keywords: usize,
    /// Exact and semantic matches.
    pub matched_keywords: Vec<KeywordMatch>,
    /// Keywords with no match of any type.
    pub missing_keywords: Vec<String>,
    pub partial_matches: Vec<KeywordMatch>,
    pub recommendations: Vec<String>,
    pub breakdown: ScoreBreakdown,
    /// Unique matched keywords divided by total resume word count.
    pub keyword_density: f64,
    pub sections_detected: Vec<String>,
}

impl EnhancedAtsScoreResult {
    /// Sentinel for empty or missing input. Safe to render directly.
    pub fn empty(keywords: &[String]) -> Self {
        Self {
            score: 0,
            total_keywords: keywords.len(),
            matched_keywords: Vec::new(),
            missing_keywords: keywords.to_vec(),
            partial_matches: Vec::new(),
            recommendations: vec!["Please provide both resume content and keywords".to_string()],
            breakdown: ScoreBreakdown::default(),
            keyword_density: 0.0,
            sections_detected: Vec::new(),
        }
    }

    /// Sentinel carrying an internal error message. The pipeline never lets
    /// an error escape to the caller; it is absorbed into this shape.
    pub fn failure(keywords: &[String], message: &str) -> Self {
        let mut result = Self::empty(keywords);
        result.recommendations = vec![format!("Error calculating score: {}", message)];
        result
    }
}

/// Legacy flat result shape for backward-compatible callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsScoreResult {
    pub score: u8,
    pub total_keywords: usize,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub partial_matches: Vec<String>,
    pub recommendations: Vec<String>,
}

impl From<EnhancedAtsScoreResult> for AtsScoreResult {
    fn from(result: EnhancedAtsScoreResult) -> Self {
        Self {
            score: result.score,
            total_keywords: result.total_keywords,
            matched_keywords: result
                .matched_keywords
                .into_iter()
                .map(|m| m.keyword)
                .collect(),
            missing_keywords: result.missing_keywords,
            partial_matches: result
                .partial_matches
                .into_iter()
                .map(|m| m.keyword)
                .collect(),
            recommendations: result.recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let keywords = vec!["rust".to_string(), "python".to_string()];
        let result = EnhancedAtsScoreResult::empty(&keywords);

        assert_eq!(result.score, 0);
        assert_eq!(result.total_keywords, 2);
        assert_eq!(result.missing_keywords, keywords);
        assert!(result.matched_keywords.is_empty());
        assert!(!result.recommendations.is_empty());
    }

    #[test]
    fn test_failure_result_embeds_message() {
        let keywords = vec!["rust".to_string()];
        let result = EnhancedAtsScoreResult::failure(&keywords, "resume too complex");

        assert_eq!(result.score, 0);
        assert!(result.recommendations[0].contains("resume too complex"));
    }

    #[test]
    fn test_legacy_conversion_flattens_matches() {
        let mut enhanced = EnhancedAtsScoreResult::empty(&[]);
        enhanced.matched_keywords.push(KeywordMatch {
            keyword: "python".to_string(),
            match_type: MatchType::Exact,
            score: 1.0,
            section: Some("skills".to_string()),
            context: None,
        });
        enhanced.partial_matches.push(KeywordMatch {
            keyword: "kubernetes".to_string(),
            match_type: MatchType::Partial,
            score: 0.5,
            section: None,
            context: None,
        });
        enhanced.score = 42;

        let legacy: AtsScoreResult = enhanced.into();
        assert_eq!(legacy.score, 42);
        assert_eq!(legacy.matched_keywords, vec!["python"]);
        assert_eq!(legacy.partial_matches, vec!["kubernetes"]);
    }
}
