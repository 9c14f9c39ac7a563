//! Keyword matching against resume text

use crate::error::Result;
use crate::scoring::deadline::Deadline;
use crate::scoring::keyword_db::{
    is_noise_word, keyword_category, keyword_variations, normalize_keyword,
};
use crate::scoring::types::{KeywordCategory, KeywordMatch, MatchType, SectionInfo};
use log::debug;
use std::collections::HashMap;

const CONTEXT_RADIUS: usize = 50;
const SECTION_PROBE_CHARS: usize = 50;

/// Locates each keyword (or a variation of it) inside the resume text and
/// classifies and scores the match.
pub struct MatchingEngine {
    /// Keyword list cap. Bounds worst-case latency on adversarial input.
    max_keywords: usize,
    /// Variation cap per keyword.
    max_variations: usize,
}

impl MatchingEngine {
    pub fn new() -> Self {
        Self {
            max_keywords: 30,
            max_variations: 3,
        }
    }

    pub fn with_limits(max_keywords: usize, max_variations: usize) -> Self {
        Self {
            max_keywords,
            max_variations,
        }
    }

    /// Find matches for each keyword. Only the first `max_keywords` entries
    /// are considered; noise words are skipped up front. Keywords with no
    /// match of any type are simply absent from the output.
    pub fn find_matches(
        &self,
        resume_text: &str,
        keywords: &[String],
        sections: &[SectionInfo],
        deadline: &Deadline,
    ) -> Result<Vec<KeywordMatch>> {
        if resume_text.is_empty() || keywords.is_empty() {
            return Ok(Vec::new());
        }

        let resume_lower = resume_text.to_lowercase();
        let section_offsets = self.section_offsets(&resume_lower, sections);
        let mut matches = Vec::new();

        for keyword in keywords.iter().take(self.max_keywords) {
            deadline.check("keyword matching")?;

            if is_noise_word(keyword) {
                continue;
            }

            let normalized = normalize_keyword(keyword);

            // Exact: the normalized keyword appears as a substring
            if let Some(position) = resume_lower.find(&normalized) {
                matches.push(self.build_match(
                    keyword,
                    &normalized,
                    MatchType::Exact,
                    position,
                    resume_text,
                    &section_offsets,
                ));
                continue;
            }

            // Partial: one of the generated variations appears. A keyword
            // with no exact or variation hit is simply absent from the
            // output; related-term lookups never count as matches.
            let variations = keyword_variations(&normalized);
            for variation in variations.iter().take(self.max_variations) {
                let variation_lower = variation.to_lowercase();
                if let Some(position) = resume_lower.find(&variation_lower) {
                    matches.push(self.build_match(
                        keyword,
                        &variation_lower,
                        MatchType::Partial,
                        position,
                        resume_text,
                        &section_offsets,
                    ));
                    break;
                }
            }
        }

        let deduplicated = deduplicate_matches(matches);
        debug!(
            "matched {} of {} keywords",
            deduplicated.len(),
            keywords.len().min(self.max_keywords)
        );
        Ok(deduplicated)
    }

    fn build_match(
        &self,
        keyword: &str,
        matched_term: &str,
        match_type: MatchType,
        position: usize,
        resume_text: &str,
        section_offsets: &[(usize, SectionInfo)],
    ) -> KeywordMatch {
        let section = section_for_position(position, section_offsets);
        KeywordMatch {
            keyword: keyword.to_string(),
            match_type,
            score: match_score(keyword, match_type, section),
            section: section.map(|s| s.name.clone()),
            context: extract_context(resume_text, matched_term.len(), position),
        }
    }

    /// Approximate section start offsets, re-derived by searching for the
    /// first characters of each section's content back in the resume text.
    /// Best effort: boundary text shared between sections can misattribute
    /// a match to a neighboring section.
    fn section_offsets(
        &self,
        resume_lower: &str,
        sections: &[SectionInfo],
    ) -> Vec<(usize, SectionInfo)> {
        let mut offsets = Vec::with_capacity(sections.len());
        for section in sections {
            let probe: String = section
                .content
                .chars()
                .take(SECTION_PROBE_CHARS)
                .collect::<String>()
                .to_lowercase();
            if probe.is_empty() {
                continue;
            }
            if let Some(start) = resume_lower.find(&probe) {
                offsets.push((start, section.clone()));
            }
        }
        offsets
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Nearest section whose start offset precedes the match position.
fn section_for_position(
    position: usize,
    section_offsets: &[(usize, SectionInfo)],
) -> Option<&SectionInfo> {
    section_offsets
        .iter()
        .filter(|(start, _)| *start <= position)
        .min_by_key(|(start, _)| position - start)
        .map(|(_, section)| section)
}

/// `score = base(match type) * category multiplier * section multiplier`
fn match_score(keyword: &str, match_type: MatchType, section: Option<&SectionInfo>) -> f64 {
    let base = match match_type {
        MatchType::Exact => 1.0,
        MatchType::Partial => 0.5,
        MatchType::Semantic => 0.7,
    };

    let category_multiplier = match keyword_category(keyword) {
        KeywordCategory::Technical => 1.0,
        KeywordCategory::Qualification => 0.8,
        KeywordCategory::SoftSkill => 0.6,
        KeywordCategory::JobFunction => 0.5,
        KeywordCategory::Other => 0.2,
    };

    let section_multiplier = section.map_or(1.0, |s| s.multiplier);

    base * category_multiplier * section_multiplier
}

/// Snippet around the match location, for diagnostics. Byte offsets are
/// clamped back to char boundaries since positions come from a lowercased
/// copy of the text.
fn extract_context(text: &str, term_len: usize, position: usize) -> Option<String> {
    let mut start = position.saturating_sub(CONTEXT_RADIUS);
    let mut end = (position + term_len + CONTEXT_RADIUS).min(text.len());

    while start > 0 && !text.is_char_boundary(start) {
        start -= 1;
    }
    while end < text.len() && !text.is_char_boundary(end) {
        end += 1;
    }
    if start > text.len() || start >= end {
        return None;
    }

    Some(text[start..end].trim().to_string())
}

/// Keep only the highest-scoring match per keyword (case-insensitive),
/// preserving first-seen order.
fn deduplicate_matches(matches: Vec<KeywordMatch>) -> Vec<KeywordMatch> {
    let mut best: Vec<KeywordMatch> = Vec::with_capacity(matches.len());
    let mut index_by_keyword: HashMap<String, usize> = HashMap::new();

    for m in matches {
        let key = m.keyword.to_lowercase();
        match index_by_keyword.get(&key) {
            Some(&idx) => {
                if m.score > best[idx].score {
                    best[idx] = m;
                }
            }
            None => {
                index_by_keyword.insert(key, best.len());
                best.push(m);
            }
        }
    }

    best
}
