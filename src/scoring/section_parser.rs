//! Resume section detection with weighted heading tables

use crate::error::Result;
use crate::scoring::deadline::Deadline;
use crate::scoring::types::SectionInfo;
use log::debug;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Known section names with their score multiplier and informational
/// priority. Order matters: the loose heading fallback scans this list
/// top to bottom and takes the first hit.
const SECTION_PROFILES: &[(&str, f64, u8)] = &[
    // High priority technical sections
    ("technical skills", 1.6, 10),
    ("technical requirements", 1.6, 10),
    ("technical competencies", 1.6, 10),
    ("skills", 1.4, 9),
    ("core competencies", 1.4, 9),
    ("essential skills", 1.4, 9),
    // High priority requirement sections
    ("requirements", 1.5, 8),
    ("qualifications", 1.5, 8),
    ("required skills", 1.6, 8),
    ("minimum qualifications", 1.5, 8),
    ("preferred qualifications", 1.3, 7),
    ("must have", 1.7, 10),
    ("desired skills", 1.3, 7),
    // Experience and responsibilities
    ("experience", 1.3, 6),
    ("responsibilities", 1.2, 5),
    ("duties", 1.2, 5),
    ("key responsibilities", 1.2, 5),
    ("position responsibilities", 1.2, 5),
    // Role description sections
    ("about the role", 1.1, 4),
    ("role", 1.1, 4),
    ("position", 1.1, 4),
    ("job description", 1.1, 4),
    ("what you will do", 1.1, 4),
    ("what we are looking for", 1.2, 5),
    // Education and certifications
    ("education", 1.2, 6),
    ("certifications", 1.3, 7),
    // Soft skills
    ("soft skills", 1.1, 3),
    ("abilities", 1.1, 3),
    ("ai-centric abilities", 1.4, 8),
    // Nice to have
    ("nice to have", 1.1, 3),
    ("preferred", 1.1, 3),
    // General sections
    ("tasks", 1.0, 2),
    ("general", 1.0, 1),
];

/// Section names whose content never contributes to scoring.
static IGNORE_SECTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "benefits",
        "compensation",
        "salary",
        "perks",
        "company",
        "about us",
        "our company",
        "our mission",
        "our values",
        "culture",
        "diversity",
        "equal opportunity",
        "privacy",
        "legal",
        "disclaimer",
        "notice",
        "travel",
        "location",
        "office",
        "work environment",
        "what we offer",
        "why join us",
        "employee benefits",
        "health insurance",
        "dental",
        "vision",
        "401k",
        "retirement",
        "vacation",
        "pto",
        "holidays",
        "applicant privacy notice",
        "employment candidate privacy notice",
        "how to apply",
        "application process",
        "contact",
        "contact us",
    ]
    .into_iter()
    .collect()
});

#[derive(Debug, Clone, Copy)]
struct SectionProfile {
    name: &'static str,
    multiplier: f64,
    priority: u8,
}

enum HeaderKind {
    Known(SectionProfile),
    Ignored,
}

/// Splits raw resume text into named, weighted sections.
pub struct SectionParser {
    patterns: Vec<(Regex, SectionProfile)>,
    noise_line_patterns: Vec<Regex>,
    punct_or_digits: Regex,
    heading_suffix: Regex,
    heading_markup: Regex,
}

impl SectionParser {
    pub fn new() -> Self {
        let mut patterns = Vec::with_capacity(SECTION_PROFILES.len() * 3);
        for &(name, multiplier, priority) in SECTION_PROFILES {
            let profile = SectionProfile {
                name,
                multiplier,
                priority,
            };
            let escaped = regex::escape(name);
            // Three shapes per name: exact heading, heading joined with a
            // conjunction, and heading embedded in a longer phrase.
            let shapes = [
                format!(r"(?i)^\s*{}\s*[:\-]?\s*$", escaped),
                format!(r"(?i)^\s*{}\s*(?:and|&)\s*\w+\s*[:\-]?\s*$", escaped),
                format!(
                    r"(?i)^\s*(?:key\s+|required\s+|essential\s+)?{}(?:\s*requirements?)?\s*[:\-]?\s*$",
                    escaped
                ),
            ];
            for shape in shapes {
                patterns.push((
                    Regex::new(&shape).expect("invalid section heading pattern"),
                    profile,
                ));
            }
        }

        let noise_line_patterns = [
            r"^page \d+ of \d+$",
            r"^confidential$",
            r"^internal use only$",
            r"^draft$",
            r"^version \d+",
            r"^updated:",
            r"^effective date:",
            r"^\d{1,2}/\d{1,2}/\d{4}$",
            r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}$",
            r"^https?://",
            r"^www\.",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("invalid noise line pattern"))
        .collect();

        Self {
            patterns,
            noise_line_patterns,
            punct_or_digits: Regex::new(r"^[\d\s\-\*\#•:\.,\(\)]+$")
                .expect("invalid punctuation pattern"),
            heading_suffix: Regex::new(r"[:\-\*\#•]$").expect("invalid heading suffix pattern"),
            heading_markup: Regex::new(r"[:\-\*\#•]+").expect("invalid heading markup pattern"),
        }
    }

    /// Segment text into sections. Never returns an empty list for
    /// non-empty input - the worst case is a single `general` section
    /// spanning the whole document.
    pub fn parse_sections(&self, text: &str, deadline: &Deadline) -> Result<Vec<SectionInfo>> {
        let mut sections = Vec::new();
        let mut current = SectionInfo {
            name: "general".to_string(),
            content: String::new(),
            multiplier: 1.0,
            priority: 1,
        };
        let mut in_ignored_section = false;

        for raw_line in text.lines() {
            deadline.check("section parsing")?;

            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            match self.identify_section_header(line) {
                Some(HeaderKind::Known(profile)) => {
                    if !current.content.trim().is_empty() {
                        sections.push(current);
                    }
                    current = SectionInfo {
                        name: profile.name.to_string(),
                        content: String::new(),
                        multiplier: profile.multiplier,
                        priority: profile.priority,
                    };
                    in_ignored_section = false;
                }
                Some(HeaderKind::Ignored) => {
                    if !current.content.trim().is_empty() {
                        sections.push(current);
                    }
                    current = SectionInfo {
                        name: "general".to_string(),
                        content: String::new(),
                        multiplier: 1.0,
                        priority: 1,
                    };
                    in_ignored_section = true;
                }
                None => {
                    if !in_ignored_section && !self.is_likely_noise(line) {
                        if !current.content.is_empty() {
                            current.content.push('\n');
                        }
                        current.content.push_str(line);
                    }
                }
            }
        }

        if !current.content.trim().is_empty() {
            sections.push(current);
        }

        if sections.is_empty() && !text.trim().is_empty() {
            sections.push(SectionInfo {
                name: "general".to_string(),
                content: text.to_string(),
                multiplier: 1.0,
                priority: 1,
            });
        }

        debug!(
            "parsed {} sections: {:?}",
            sections.len(),
            sections.iter().map(|s| s.name.as_str()).collect::<Vec<_>>()
        );

        Ok(sections)
    }

    fn identify_section_header(&self, line: &str) -> Option<HeaderKind> {
        for (pattern, profile) in &self.patterns {
            if pattern.is_match(line) {
                return Some(HeaderKind::Known(*profile));
            }
        }

        if !self.looks_like_section_header(line) {
            return None;
        }

        let cleaned = self
            .heading_markup
            .replace_all(line, "")
            .trim()
            .to_lowercase();

        if IGNORE_SECTIONS.contains(cleaned.as_str()) {
            return Some(HeaderKind::Ignored);
        }

        // Loose substring match against the known table, both directions
        let squashed_cleaned = squash_whitespace(&cleaned);
        for &(name, multiplier, priority) in SECTION_PROFILES {
            let squashed_name = squash_whitespace(name);
            if cleaned.contains(&squashed_name) || name.contains(&squashed_cleaned) {
                return Some(HeaderKind::Known(SectionProfile {
                    name,
                    multiplier,
                    priority,
                }));
            }
        }

        // Unrecognized heading: a fresh general section
        Some(HeaderKind::Known(SectionProfile {
            name: "general",
            multiplier: 1.0,
            priority: 1,
        }))
    }

    fn looks_like_section_header(&self, line: &str) -> bool {
        let trimmed = line.trim();

        // Short line ending in heading punctuation
        if trimmed.len() < 50 && self.heading_suffix.is_match(trimmed) {
            return true;
        }

        // Short ALL-CAPS line
        if trimmed.len() < 30
            && trimmed == trimmed.to_uppercase()
            && trimmed.chars().any(|c| c.is_ascii_uppercase())
        {
            return true;
        }

        // Markdown heading: a '#' run followed by whitespace. A bare
        // "#hashtag" token is content, not a heading.
        if let Some(rest) = trimmed.strip_prefix('#') {
            if rest.trim_start_matches('#').starts_with(char::is_whitespace) {
                return true;
            }
        }

        // Bold-wrapped line
        if (trimmed.starts_with("**") && trimmed.ends_with("**") && trimmed.len() > 4)
            || (trimmed.starts_with("__") && trimmed.ends_with("__") && trimmed.len() > 4)
        {
            return true;
        }

        false
    }

    /// Structural noise: page numbers, bare dates, emails, URLs, lines too
    /// short or made of pure punctuation.
    fn is_likely_noise(&self, line: &str) -> bool {
        let trimmed = line.trim().to_lowercase();

        if trimmed.len() < 3 {
            return true;
        }

        if self.punct_or_digits.is_match(&trimmed) {
            return true;
        }

        self.noise_line_patterns.iter().any(|p| p.is_match(&trimmed))
    }

    pub fn section_multiplier(&self, section_name: &str) -> f64 {
        let normalized = section_name.to_lowercase();
        SECTION_PROFILES
            .iter()
            .find(|(name, _, _)| *name == normalized)
            .map(|(_, multiplier, _)| *multiplier)
            .unwrap_or(1.0)
    }

    pub fn section_priority(&self, section_name: &str) -> u8 {
        let normalized = section_name.to_lowercase();
        SECTION_PROFILES
            .iter()
            .find(|(name, _, _)| *name == normalized)
            .map(|(_, _, priority)| *priority)
            .unwrap_or(1)
    }

    pub fn is_noise_section(&self, section_name: &str) -> bool {
        IGNORE_SECTIONS.contains(section_name.to_lowercase().as_str())
    }
}

impl Default for SectionParser {
    fn default() -> Self {
        Self::new()
    }
}

fn squash_whitespace(text: &str) -> String {
    text.split_whitespace().collect()
}
