//! Output formatters with console, JSON and Markdown support

use crate::config::OutputFormat;
use crate::error::Result;
use crate::scoring::types::EnhancedAtsScoreResult;
use colored::Colorize;

/// Trait for formatting a scoring result.
pub trait OutputFormatter {
    fn format_result(&self, result: &EnhancedAtsScoreResult) -> Result<String>;
}

/// Console formatter with score-tier coloring.
pub struct ConsoleFormatter {
    pub use_colors: bool,
    pub detailed: bool,
}

/// JSON formatter for structured consumers.
pub struct JsonFormatter {
    pub pretty: bool,
}

/// Markdown formatter for reports.
pub struct MarkdownFormatter;

pub fn formatter_for(
    format: OutputFormat,
    use_colors: bool,
    detailed: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter {
            use_colors,
            detailed,
        }),
        OutputFormat::Json => Box::new(JsonFormatter { pretty: true }),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
    }
}

impl ConsoleFormatter {
    fn score_line(&self, score: u8) -> String {
        let label = format!("ATS Score: {}/100", score);
        if !self.use_colors {
            return label;
        }
        match score {
            80..=100 => label.green().bold().to_string(),
            60..=79 => label.cyan().bold().to_string(),
            30..=59 => label.yellow().bold().to_string(),
            _ => label.red().bold().to_string(),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_result(&self, result: &EnhancedAtsScoreResult) -> Result<String> {
        let mut out = String::new();

        out.push_str(&self.score_line(result.score));
        out.push('\n');
        out.push_str(&format!(
            "Keywords: {} total, {} matched, {} partial, {} missing\n",
            result.total_keywords,
            result.matched_keywords.len(),
            result.partial_matches.len(),
            result.missing_keywords.len()
        ));

        if !result.sections_detected.is_empty() {
            out.push_str(&format!(
                "Sections detected: {}\n",
                result.sections_detected.join(", ")
            ));
        }

        if !result.matched_keywords.is_empty() {
            out.push_str("\nMatched keywords:\n");
            for m in &result.matched_keywords {
                let section = m.section.as_deref().unwrap_or("general");
                out.push_str(&format!(
                    "  + {} ({:?}, section: {})\n",
                    m.keyword, m.match_type, section
                ));
            }
        }

        if !result.partial_matches.is_empty() {
            out.push_str("\nPartial matches:\n");
            for m in &result.partial_matches {
                out.push_str(&format!("  ~ {}\n", m.keyword));
            }
        }

        if !result.missing_keywords.is_empty() {
            out.push_str("\nMissing keywords:\n");
            for keyword in &result.missing_keywords {
                out.push_str(&format!("  - {}\n", keyword));
            }
        }

        out.push_str("\nRecommendations:\n");
        for recommendation in &result.recommendations {
            out.push_str(&format!("  * {}\n", recommendation));
        }

        if self.detailed {
            let b = &result.breakdown;
            out.push_str("\nScore breakdown (raw points):\n");
            out.push_str(&format!("  exact matches:    {:.2}\n", b.exact_matches));
            out.push_str(&format!("  partial matches:  {:.2}\n", b.partial_matches));
            out.push_str(&format!("  semantic matches: {:.2}\n", b.semantic_matches));
            out.push_str(&format!("  section bonuses:  {:.2}\n", b.section_bonuses));
            out.push_str(&format!("  category bonuses: {:.2}\n", b.category_bonuses));
            out.push_str(&format!(
                "  keyword density:  {:.2}%\n",
                result.keyword_density * 100.0
            ));

            for m in result
                .matched_keywords
                .iter()
                .chain(result.partial_matches.iter())
            {
                if let Some(context) = &m.context {
                    out.push_str(&format!("\n  [{}] ...{}...\n", m.keyword, context));
                }
            }
        }

        Ok(out)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, result: &EnhancedAtsScoreResult) -> Result<String> {
        let serialized = if self.pretty {
            serde_json::to_string_pretty(result)?
        } else {
            serde_json::to_string(result)?
        };
        Ok(serialized)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_result(&self, result: &EnhancedAtsScoreResult) -> Result<String> {
        let mut out = String::new();

        out.push_str("# ATS Score Report\n\n");
        out.push_str(&format!("**Score:** {}/100\n\n", result.score));
        out.push_str(&format!(
            "**Keywords:** {} total / {} matched / {} partial / {} missing\n\n",
            result.total_keywords,
            result.matched_keywords.len(),
            result.partial_matches.len(),
            result.missing_keywords.len()
        ));
        out.push_str(&format!(
            "**Keyword density:** {:.2}%\n\n",
            result.keyword_density * 100.0
        ));

        if !result.matched_keywords.is_empty() {
            out.push_str("## Matched\n\n");
            for m in &result.matched_keywords {
                out.push_str(&format!("- `{}` ({:?})\n", m.keyword, m.match_type));
            }
            out.push('\n');
        }

        if !result.missing_keywords.is_empty() {
            out.push_str("## Missing\n\n");
            for keyword in &result.missing_keywords {
                out.push_str(&format!("- `{}`\n", keyword));
            }
            out.push('\n');
        }

        out.push_str("## Recommendations\n\n");
        for recommendation in &result.recommendations {
            out.push_str(&format!("- {}\n", recommendation));
        }

        Ok(out)
    }
}
