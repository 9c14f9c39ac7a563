//! CLI interface for the ATS scorer

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ats-scorer")]
#[command(about = "ATS keyword scoring for resumes against job description keywords")]
#[command(
    long_about = "Score resume compatibility against a job's keyword list using section-aware keyword matching"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against a list of job keywords
    Score {
        /// Path to resume file (TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to keywords file (one keyword per line)
        #[arg(short, long)]
        keywords: Option<PathBuf>,

        /// Comma-separated keywords passed inline
        #[arg(short, long, conflicts_with = "keywords")]
        inline: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Include score breakdown and match contexts
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Emit the legacy flat result shape (JSON only)
        #[arg(long)]
        legacy: bool,
    },

    /// Show how a resume splits into weighted sections
    Sections {
        /// Path to resume file (TXT, MD)
        resume: PathBuf,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

/// Split keyword input into a cleaned, ordered list. Input deduplication is
/// the caller's concern; this only trims and drops empties.
pub fn parse_keyword_list(raw: &str) -> Vec<String> {
    raw.split(['\n', ','])
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert!(parse_output_format("console").is_ok());
        assert!(parse_output_format("JSON").is_ok());
        assert!(parse_output_format("md").is_ok());
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("resume.txt"), &["txt", "md"]).is_ok());
        assert!(validate_file_extension(Path::new("resume.MD"), &["txt", "md"]).is_ok());
        assert!(validate_file_extension(Path::new("resume.pdf"), &["txt", "md"]).is_err());
        assert!(validate_file_extension(Path::new("resume"), &["txt"]).is_err());
    }

    #[test]
    fn test_parse_keyword_list() {
        let keywords = parse_keyword_list("python\nreact, aws\n\n  docker  ");
        assert_eq!(keywords, vec!["python", "react", "aws", "docker"]);
    }
}
