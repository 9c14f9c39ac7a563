//! ATS scorer: section-aware keyword scoring for resumes

use ats_scorer::cli::{self, Cli, Commands, ConfigAction};
use ats_scorer::config::Config;
use ats_scorer::error::{AtsScorerError, Result};
use ats_scorer::output::formatter::formatter_for;
use ats_scorer::scoring::deadline::Deadline;
use ats_scorer::scoring::scorer::AtsScorer;
use ats_scorer::scoring::section_parser::SectionParser;
use clap::Parser;
use log::{error, info};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            keywords,
            inline,
            output,
            detailed,
            save,
            legacy,
        } => {
            cli::validate_file_extension(&resume, &["txt", "md"])
                .map_err(|e| AtsScorerError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(AtsScorerError::InvalidInput)?;

            let resume_text = std::fs::read_to_string(&resume)?;

            let keyword_list = match (keywords, inline) {
                (Some(path), _) => cli::parse_keyword_list(&std::fs::read_to_string(&path)?),
                (None, Some(raw)) => cli::parse_keyword_list(&raw),
                (None, None) => {
                    return Err(AtsScorerError::InvalidInput(
                        "Provide keywords via --keywords <file> or --inline <list>".to_string(),
                    ));
                }
            };

            info!(
                "scoring {} against {} keywords",
                resume.display(),
                keyword_list.len()
            );

            let scorer = AtsScorer::with_config(&config);
            let result = scorer.calculate_score(&resume_text, &keyword_list).await;

            let rendered = if legacy {
                let legacy_result: ats_scorer::AtsScoreResult = result.into();
                serde_json::to_string_pretty(&legacy_result)?
            } else {
                let formatter = formatter_for(output_format, config.output.color_output, detailed);
                formatter.format_result(&result)?
            };

            match save {
                Some(path) => {
                    std::fs::write(&path, &rendered)?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Sections { resume } => {
            cli::validate_file_extension(&resume, &["txt", "md"])
                .map_err(|e| AtsScorerError::InvalidInput(format!("Resume file: {}", e)))?;

            let resume_text = std::fs::read_to_string(&resume)?;
            let sections = SectionParser::new().parse_sections(&resume_text, &Deadline::none())?;

            println!("{} sections detected:\n", sections.len());
            for section in &sections {
                println!(
                    "[{}] multiplier={:.1} priority={}",
                    section.name, section.multiplier, section.priority
                );
                for line in section.content.lines().take(3) {
                    println!("    {}", line);
                }
                println!();
            }
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let serialized = toml::to_string_pretty(&config).map_err(|e| {
                    AtsScorerError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", serialized);
            }
            ConfigAction::Reset => {
                let defaults = Config::default();
                defaults.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}
