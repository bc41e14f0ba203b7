//! Resume assessor: rule-based resume scoring and career guidance

use clap::Parser;
use log::{debug, error, info};
use resume_assessor::cli::{self, Cli, Commands, ConfigAction};
use resume_assessor::config::OutputFormat;
use resume_assessor::input::file_detector::DocumentKind;
use resume_assessor::input::InputManager;
use resume_assessor::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_assessor::{AnalysisEngine, AssessorError, Config, Result};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            output,
            save,
            detailed,
        } => {
            cli::validate_file_extension(&resume, DocumentKind::SUPPORTED_EXTENSIONS)
                .map_err(|e| AssessorError::Validation(format!("Resume file: {}", e)))?;

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(AssessorError::Validation)?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;

            info!("Assessing resume: {}", resume.display());
            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            debug!("Extracted {} characters", resume_text.chars().count());

            let engine = AnalysisEngine::new(&config)?;
            let report = engine.analyze(&resume_text)?;

            // Colors would end up as escape codes in a saved file
            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(use_colors, detailed, true, true, true);
            let rendered = generator.generate_report(&report, output_format)?;

            match save {
                Some(path) => {
                    let target = if path.is_dir() {
                        path.join(suggest_filename(
                            output_format,
                            &resume.to_string_lossy(),
                            true,
                        ))
                    } else {
                        path
                    };
                    save_report_to_file(&rendered, &target)?;
                    info!("Report saved to {}", target.display());
                    if output_format == OutputFormat::Console {
                        println!("{}", rendered);
                    }
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);

            match action {
                Some(ConfigAction::Show) | None => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        AssessorError::Configuration(format!("Failed to serialize config: {}", e))
                    })?;
                    println!("# {}\n{}", path.display(), content);
                }
                Some(ConfigAction::Reset) => {
                    Config::default().save_to(&path)?;
                    info!("Configuration reset to defaults at {}", path.display());
                }
                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}
