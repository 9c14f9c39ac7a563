//! Score aggregation and recommendation generation

use crate::config::ScoringWeights;
use crate::scoring::keyword_db::{
    is_noise_word, keyword_category, AI_ML_TECHNOLOGIES, CLOUD_PLATFORMS, PROGRAMMING_LANGUAGES,
};
use crate::scoring::types::{
    EnhancedAtsScoreResult, KeywordCategory, KeywordMatch, MatchType, ScoreBreakdown, SectionInfo,
};
use log::debug;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

const FRAMEWORK_INDICATORS: &[&str] = &["js", "react", "angular", "vue", "django", "flask", "spring"];
const DATABASE_INDICATORS: &[&str] = &["sql", "database", "db", "mongo", "redis", "elastic"];
const DEVOPS_INDICATORS: &[&str] = &["docker", "kubernetes", "terraform", "jenkins", "ci/cd"];
const SECURITY_INDICATORS: &[&str] = &["security", "auth", "ssl", "encryption", "firewall"];

/// Turns a set of matches into a single 0-100 score plus a breakdown and
/// human-readable recommendations.
pub struct ScoringEngine {
    weights: ScoringWeights,
    /// Mirrors the matching engine's keyword cap so that keywords beyond it
    /// are absent from both the matched and the missing lists.
    max_keywords: usize,
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self {
            weights: ScoringWeights::default(),
            max_keywords: 30,
        }
    }

    pub fn with_weights(weights: ScoringWeights, max_keywords: usize) -> Self {
        Self {
            weights,
            max_keywords,
        }
    }

    pub fn calculate_score(
        &self,
        resume_text: &str,
        keywords: &[String],
        sections: &[SectionInfo],
        matches: &[KeywordMatch],
    ) -> EnhancedAtsScoreResult {
        if resume_text.is_empty() || keywords.is_empty() {
            return EnhancedAtsScoreResult::empty(keywords);
        }

        let exact_matches: Vec<&KeywordMatch> = matches
            .iter()
            .filter(|m| m.match_type == MatchType::Exact)
            .collect();
        let partial_matches: Vec<&KeywordMatch> = matches
            .iter()
            .filter(|m| m.match_type == MatchType::Partial)
            .collect();
        let semantic_matches: Vec<&KeywordMatch> = matches
            .iter()
            .filter(|m| m.match_type == MatchType::Semantic)
            .collect();

        // Category weight x match-type weight, layered on top of the
        // per-match scores from the matching engine. The double weighting
        // is intentional: category matters both per match and in aggregate.
        let exact_score = self.partition_score(&exact_matches, self.weights.exact_match);
        let partial_score = self.partition_score(&partial_matches, self.weights.partial_match);
        let semantic_score = self.partition_score(&semantic_matches, self.weights.semantic_match);
        let base_score = exact_score + partial_score + semantic_score;

        let section_bonus = self.section_bonus(matches, sections);
        let category_bonus = self.category_bonus(matches);
        let keyword_density = self.keyword_density(resume_text, matches);
        let density_bonus = self.density_bonus(keyword_density);
        let length_bonus = self.length_bonus(matches);

        // The denominator assumes every keyword could have been an exact
        // technical match. Conservative on purpose: non-technical keyword
        // lists are structurally unable to reach very high scores.
        let total_possible =
            keywords.len() as f64 * self.weights.category_weights.technical * self.weights.exact_match;

        let raw_percentage = (base_score + section_bonus + category_bonus) / total_possible * 100.0;
        let final_score = (raw_percentage * (1.0 + density_bonus + length_bonus)).min(100.0);

        debug!(
            "base={:.2} section_bonus={:.2} category_bonus={:.2} density_bonus={:.3} length_bonus={:.3} -> {:.2}",
            base_score, section_bonus, category_bonus, density_bonus, length_bonus, final_score
        );

        let matched_set: HashSet<String> =
            matches.iter().map(|m| m.keyword.to_lowercase()).collect();
        let missing_keywords: Vec<String> = keywords
            .iter()
            .take(self.max_keywords)
            .filter(|k| !matched_set.contains(&k.to_lowercase()))
            .cloned()
            .collect();

        let recommendations = self.generate_recommendations(
            final_score,
            &exact_matches,
            &partial_matches,
            &missing_keywords,
            sections,
            keyword_density,
        );

        EnhancedAtsScoreResult {
            score: final_score.round().clamp(0.0, 100.0) as u8,
            total_keywords: keywords.len(),
            matched_keywords: exact_matches
                .iter()
                .chain(semantic_matches.iter())
                .map(|m| (*m).clone())
                .collect(),
            missing_keywords,
            partial_matches: partial_matches.iter().map(|m| (*m).clone()).collect(),
            recommendations,
            breakdown: ScoreBreakdown {
                exact_matches: exact_score,
                partial_matches: partial_score,
                semantic_matches: semantic_score,
                section_bonuses: section_bonus,
                category_bonuses: category_bonus,
            },
            keyword_density,
            sections_detected: sections.iter().map(|s| s.name.clone()).collect(),
        }
    }

    fn category_weight(&self, category: KeywordCategory) -> f64 {
        let weights = &self.weights.category_weights;
        match category {
            KeywordCategory::Technical => weights.technical,
            KeywordCategory::SoftSkill => weights.soft_skill,
            KeywordCategory::Qualification => weights.qualification,
            KeywordCategory::JobFunction => weights.job_function,
            KeywordCategory::Other => weights.other,
        }
    }

    fn partition_score(&self, matches: &[&KeywordMatch], match_weight: f64) -> f64 {
        matches
            .iter()
            .map(|m| self.category_weight(keyword_category(&m.keyword)) * match_weight)
            .sum()
    }

    /// Only the incremental portion above the 1.0 baseline counts, to avoid
    /// double-counting the multiplier already folded into raw match scores.
    fn section_bonus(&self, matches: &[KeywordMatch], sections: &[SectionInfo]) -> f64 {
        matches
            .iter()
            .filter_map(|m| {
                let section_name = m.section.as_ref()?;
                let section = sections.iter().find(|s| &s.name == section_name)?;
                let base = self.category_weight(keyword_category(&m.keyword));
                Some(base * (section.multiplier - 1.0))
            })
            .sum()
    }

    /// A single keyword can stack several bonuses when it hits multiple
    /// technology buckets.
    fn category_bonus(&self, matches: &[KeywordMatch]) -> f64 {
        let bonuses = &self.weights.bonus_scores;
        let mut bonus = 0.0;

        for m in matches {
            let keyword = m.keyword.to_lowercase();

            if PROGRAMMING_LANGUAGES.contains(keyword.as_str()) {
                bonus += bonuses.programming_language;
            }
            if AI_ML_TECHNOLOGIES.contains(keyword.as_str()) {
                bonus += bonuses.ai_ml;
            }
            if CLOUD_PLATFORMS.contains(keyword.as_str()) {
                bonus += bonuses.cloud;
            }
            if FRAMEWORK_INDICATORS.iter().any(|i| keyword.contains(i)) {
                bonus += bonuses.framework;
            }
            if DATABASE_INDICATORS.iter().any(|i| keyword.contains(i)) {
                bonus += bonuses.database;
            }
            if DEVOPS_INDICATORS.iter().any(|i| keyword.contains(i)) {
                bonus += bonuses.devops;
            }
            if SECURITY_INDICATORS.iter().any(|i| keyword.contains(i)) {
                bonus += bonuses.security;
            }
        }

        bonus
    }

    /// Tighter band first; only one band applies.
    fn density_bonus(&self, keyword_density: f64) -> f64 {
        if (0.01..=0.05).contains(&keyword_density) {
            0.1
        } else if (0.005..=0.07).contains(&keyword_density) {
            0.05
        } else {
            0.0
        }
    }

    fn length_bonus(&self, matches: &[KeywordMatch]) -> f64 {
        let bonus: f64 = matches
            .iter()
            .map(|m| match m.keyword.len() {
                3..=20 => 0.5,
                21..=30 => 0.2,
                _ => 0.0,
            })
            .sum();
        bonus / 100.0
    }

    fn keyword_density(&self, resume_text: &str, matches: &[KeywordMatch]) -> f64 {
        let total_words = resume_text.unicode_words().count();
        if total_words == 0 {
            return 0.0;
        }
        let unique_matches: HashSet<String> =
            matches.iter().map(|m| m.keyword.to_lowercase()).collect();
        unique_matches.len() as f64 / total_words as f64
    }

    fn generate_recommendations(
        &self,
        score: f64,
        exact_matches: &[&KeywordMatch],
        partial_matches: &[&KeywordMatch],
        missing_keywords: &[String],
        sections: &[SectionInfo],
        keyword_density: f64,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        if score < 30.0 {
            recommendations.push(
                "Your resume needs significant improvement to match this job posting".to_string(),
            );
        } else if score < 60.0 {
            recommendations.push(
                "Your resume has potential but needs optimization for better ATS performance"
                    .to_string(),
            );
        } else if score < 80.0 {
            recommendations.push(
                "Good foundation! A few tweaks will significantly improve your ATS score"
                    .to_string(),
            );
        } else {
            recommendations
                .push("Excellent! Your resume is well-optimized for ATS systems".to_string());
        }

        let top_missing: Vec<&str> = missing_keywords
            .iter()
            .filter(|k| !is_noise_word(k))
            .take(5)
            .map(|k| k.as_str())
            .collect();
        if !top_missing.is_empty() {
            recommendations.push(format!(
                "Add these important keywords: {}",
                top_missing.join(", ")
            ));
        }

        if !partial_matches.is_empty() {
            let top_partial: Vec<&str> = partial_matches
                .iter()
                .take(3)
                .map(|m| m.keyword.as_str())
                .collect();
            recommendations.push(format!(
                "Consider using exact terms: {}",
                top_partial.join(", ")
            ));
        }

        let has_skills_section = sections
            .iter()
            .any(|s| s.name.contains("skill") || s.name.contains("technical"));
        let has_experience_section = sections
            .iter()
            .any(|s| s.name.contains("experience") || s.name.contains("work"));

        if !has_skills_section {
            recommendations
                .push("Add a dedicated 'Skills' or 'Technical Skills' section".to_string());
        }
        if !has_experience_section {
            recommendations
                .push("Ensure your work experience section uses relevant keywords".to_string());
        }

        if keyword_density < 0.005 {
            recommendations
                .push("Your resume could benefit from more relevant keywords".to_string());
        } else if keyword_density > 0.07 {
            recommendations
                .push("Avoid keyword stuffing - use keywords naturally in context".to_string());
        }

        if !exact_matches.is_empty() {
            let top_matches: Vec<&str> = exact_matches
                .iter()
                .take(3)
                .map(|m| m.keyword.as_str())
                .collect();
            recommendations.push(format!("Great job including: {}", top_matches.join(", ")));
        }

        recommendations
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(keyword: &str, section: Option<&str>) -> KeywordMatch {
        KeywordMatch {
            keyword: keyword.to_string(),
            match_type: MatchType::Exact,
            score: 1.0,
            section: section.map(|s| s.to_string()),
            context: None,
        }
    }

    fn partial(keyword: &str) -> KeywordMatch {
        KeywordMatch {
            keyword: keyword.to_string(),
            match_type: MatchType::Partial,
            score: 0.5,
            section: None,
            context: None,
        }
    }

    fn keywords(list: &[&str]) -> Vec<String> {
        list.iter().map(|k| k.to_string()).collect()
    }

    fn skills_section() -> SectionInfo {
        SectionInfo {
            name: "technical skills".to_string(),
            content: "Python, React".to_string(),
            multiplier: 1.6,
            priority: 10,
        }
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        let engine = ScoringEngine::new();
        let result = engine.calculate_score("", &keywords(&["python"]), &[], &[]);
        assert_eq!(result.score, 0);
        assert!(!result.recommendations.is_empty());

        let result = engine.calculate_score("some text", &[], &[], &[]);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_score_is_bounded() {
        let engine = ScoringEngine::new();
        let sections = vec![skills_section()];
        // A single technical keyword with every bonus stacked cannot
        // escape the [0, 100] range
        let matches = vec![exact("python", Some("technical skills"))];
        let result = engine.calculate_score(
            "short resume with python inside",
            &keywords(&["python"]),
            &sections,
            &matches,
        );
        assert!(result.score <= 100);
    }

    #[test]
    fn test_base_score_uses_category_weights() {
        let engine = ScoringEngine::new();
        let matches = vec![exact("python", None), exact("communication", None)];
        let result = engine.calculate_score(
            "resume mentioning python and communication at length",
            &keywords(&["python", "communication"]),
            &[],
            &matches,
        );

        // technical 10 x 1.0 + softSkill 6 x 1.0
        assert!((result.breakdown.exact_matches - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_section_bonus_counts_only_increment() {
        let engine = ScoringEngine::new();
        let sections = vec![skills_section()];
        let matches = vec![exact("python", Some("technical skills"))];
        let result = engine.calculate_score(
            "python resume",
            &keywords(&["python"]),
            &sections,
            &matches,
        );

        // 10 x (1.6 - 1.0)
        assert!((result.breakdown.section_bonuses - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_category_bonuses_stack() {
        let engine = ScoringEngine::new();
        // "postgresql" hits the database indicator ("sql"); "python" the
        // programming language set; "aws" the cloud set
        let matches = vec![
            exact("python", None),
            exact("aws", None),
            exact("postgresql", None),
        ];
        let result = engine.calculate_score(
            "python aws postgresql",
            &keywords(&["python", "aws", "postgresql"]),
            &[],
            &matches,
        );

        // python 3 + aws 3 + postgresql (database 2 + sql-substring... the
        // database indicator fires once per keyword) = 8
        assert!((result.breakdown.category_bonuses - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_keywords_excludes_matched() {
        let engine = ScoringEngine::new();
        let matches = vec![exact("python", None), partial("kubernetes")];
        let result = engine.calculate_score(
            "python and k8s resume text",
            &keywords(&["python", "kubernetes", "terraform"]),
            &[],
            &matches,
        );

        assert_eq!(result.missing_keywords, vec!["terraform"]);
        // The partial-only keyword is in neither matched nor missing
        assert!(result
            .matched_keywords
            .iter()
            .all(|m| m.keyword != "kubernetes"));
        assert_eq!(result.partial_matches.len(), 1);
    }

    #[test]
    fn test_missing_keywords_respect_cap() {
        let engine = ScoringEngine::new();
        let many: Vec<String> = (0..40).map(|i| format!("kw{}", i)).collect();
        let result = engine.calculate_score("resume text here", &many, &[], &[]);

        assert_eq!(result.missing_keywords.len(), 30);
        assert!(!result.missing_keywords.contains(&"kw30".to_string()));
        assert_eq!(result.total_keywords, 40);
    }

    #[test]
    fn test_density_bonus_bands() {
        let engine = ScoringEngine::new();
        assert!((engine.density_bonus(0.03) - 0.1).abs() < 1e-9);
        assert!((engine.density_bonus(0.006) - 0.05).abs() < 1e-9);
        assert!((engine.density_bonus(0.06) - 0.05).abs() < 1e-9);
        assert!((engine.density_bonus(0.2) - 0.0).abs() < 1e-9);
        assert!((engine.density_bonus(0.0001) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_recommendation_tiers() {
        let engine = ScoringEngine::new();

        let low = engine.calculate_score("nothing relevant here at all", &keywords(&["python"]), &[], &[]);
        assert!(low.recommendations[0].contains("significant improvement"));

        let sections = vec![skills_section()];
        let matches = vec![exact("python", Some("technical skills"))];
        let high = engine.calculate_score(
            "python resume",
            &keywords(&["python"]),
            &sections,
            &matches,
        );
        assert!(high.score >= 80);
        assert!(high.recommendations[0].contains("Excellent"));
    }

    #[test]
    fn test_recommendations_flag_missing_sections() {
        let engine = ScoringEngine::new();
        let result = engine.calculate_score("text", &keywords(&["python"]), &[], &[]);

        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("'Skills' or 'Technical Skills'")));
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("work experience section")));
    }

    #[test]
    fn test_recommendations_skip_noise_in_missing_list() {
        let engine = ScoringEngine::new();
        let result = engine.calculate_score(
            "resume text",
            &keywords(&["experience", "strong"]),
            &[],
            &[],
        );

        // Both keywords are noise: no "add these keywords" line
        assert!(result
            .recommendations
            .iter()
            .all(|r| !r.contains("Add these important keywords")));
    }
}
