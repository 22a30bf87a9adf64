//! Kuku CLI - mood-based AI voice notes
//!
//! Pick a mood, name a topic, and get a short spoken voice note: Gemini
//! writes the script, ElevenLabs reads it out.

#![allow(clippy::print_stdout)] // CLI program intentionally uses stdout

mod config;
mod console;
mod error;
mod export;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use kuku::prelude::*;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, IssueLevel};
use crate::console::ConsoleHooks;
use crate::error::{CliError, Result};

/// Kuku - your AI voice note, based on mood and interest
#[derive(Parser)]
#[command(name = "kuku")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file path
    #[arg(short, long, env = "KUKU_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a script and speak it
    Generate(GenerateArgs),

    /// List the available moods
    Moods,

    /// Show configuration and which API keys are set
    Status,

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for the generate command
#[derive(Args)]
struct GenerateArgs {
    /// What's your mood today?
    #[arg(short, long, default_value_t = Mood::default(), value_parser = parse_mood)]
    mood: Mood,

    /// A topic you'd like to hear about
    #[arg(short, long, default_value = "mindfulness")]
    topic: String,

    /// Where to write the audio (overrides config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also save a copy; without a value it goes to ./kuku_ai_voice.mp3
    #[arg(short, long, value_name = "PATH", num_args = 0..=1)]
    download: Option<Option<PathBuf>>,

    /// Text model to use (overrides config)
    #[arg(long)]
    model: Option<String>,

    /// Log progress instead of printing it
    #[arg(short, long)]
    quiet: bool,
}

/// Arguments for the config command
#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommands,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show configuration file path
    Path,
    /// Show current configuration
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Validate configuration
    Validate,
}

fn parse_mood(s: &str) -> std::result::Result<Mood, String> {
    s.parse().map_err(|e: Error| e.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");

    match rt.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging with the given verbosity level.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "kuku_cli={level},kuku={level},{}",
            if verbosity >= 3 { "debug" } else { "warn" }
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .init();
}

/// Main async entry point.
async fn run(cli: Cli) -> Result<()> {
    let config_file = cli.config.unwrap_or_else(config::config_path);

    match cli.command {
        Commands::Generate(args) => cmd_generate(args, &config_file).await,
        Commands::Moods => {
            cmd_moods();
            Ok(())
        }
        Commands::Status => cmd_status(&config_file).await,
        Commands::Config(args) => cmd_config(args, &config_file).await,
    }
}

/// Run the pipeline once.
async fn cmd_generate(args: GenerateArgs, config_file: &Path) -> Result<()> {
    let mut config = config::load_layered(config_file).await?;
    if let Some(output) = args.output {
        config.output.path = output;
    }
    if let Some(model) = args.model {
        config.gemini.model = model;
    }
    if let Some(issue) = config
        .validate()
        .into_iter()
        .find(|issue| issue.level == IssueLevel::Error)
    {
        return Err(CliError::config(issue.to_string()));
    }

    let generator = Gemini::new(config.gemini_config()?)?;
    let speech = ElevenLabs::new(config.elevenlabs_config()?)?;

    let pipeline = Pipeline::new(
        ScriptGenerator::new(generator),
        SpeechSynthesizer::with_settings(speech, config.synthesis_settings()),
    );
    let pipeline = if args.quiet {
        pipeline.with_hooks(LoggingHooks::new())
    } else {
        pipeline.with_hooks(ConsoleHooks)
    };

    let request = GenerationRequest::new(args.mood, args.topic);
    match pipeline.run(&request).await {
        Outcome::Completed { audio_path, .. } => {
            if args.quiet {
                println!("{}", audio_path.display());
            }
            if let Some(target) = args.download {
                let name = &config.output.download_name;
                let target = target.map_or_else(
                    || PathBuf::from(name),
                    |path| export::resolve_target(&path, name),
                );
                let saved = export::export_audio(&audio_path, &target).await?;
                println!("Downloaded to {}", saved.display());
            }
            Ok(())
        }
        unfinished => Err(CliError::from_outcome(&unfinished)),
    }
}

/// List moods.
fn cmd_moods() {
    for mood in Mood::ALL {
        if mood == Mood::default() {
            println!("{mood} (default)");
        } else {
            println!("{mood}");
        }
    }
}

/// Show status.
async fn cmd_status(config_file: &Path) -> Result<()> {
    println!("Kuku Status\n");

    println!("Configuration:");
    println!("  Path:   {}", config_file.display());
    println!(
        "  Exists: {}",
        if config_file.exists() { "yes" } else { "no" }
    );

    match config::load_layered(config_file).await {
        Ok(config) => {
            println!("  Valid:  {}", if config.is_valid() { "yes" } else { "no" });
            print_settings(&config);
        }
        Err(e) => println!("  Valid:  no ({e})"),
    }

    println!();
    println!("Environment:");
    print_env_status("GOOGLE_API_KEY");
    print_env_status("ELEVENLABS_API_KEY");
    print_env_status("GEMINI_MODEL");
    print_env_status("KUKU_OUTPUT");

    Ok(())
}

fn print_settings(config: &AppConfig) {
    println!();
    println!("Script:");
    println!("  Model:    {}", config.gemini.model);
    println!("  Endpoint: {}", config.gemini.base_url);
    println!();
    println!("Voice:");
    println!("  Voice id: {}", config.voice.voice_id);
    println!("  Model:    {}", config.voice.model_id);
    println!(
        "  Tuning:   stability {}, similarity boost {}",
        config.voice.stability, config.voice.similarity_boost
    );
    println!();
    println!("Output:");
    println!("  Audio:    {}", config.output.path.display());
    println!("  Download: {}", config.output.download_name);
}

/// Configuration management.
async fn cmd_config(args: ConfigArgs, config_file: &Path) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            println!("{}", config_file.display());
        }
        ConfigCommands::Show => {
            if config_file.exists() {
                let content = tokio::fs::read_to_string(config_file).await?;
                println!("{content}");
            } else {
                println!("Configuration file does not exist.");
                println!("Run 'kuku config init' to create one.");
            }
        }
        ConfigCommands::Init { force } => {
            if config::init_config_at(config_file, force).await? {
                println!("Configuration created: {}", config_file.display());
                println!();
                println!("Next steps:");
                println!("  1. export GOOGLE_API_KEY=<key>");
                println!("  2. export ELEVENLABS_API_KEY=<key>");
                println!("  3. kuku generate --mood calm --topic sleep");
            } else {
                println!("Configuration already exists at: {}", config_file.display());
                println!("Use --force to overwrite.");
            }
        }
        ConfigCommands::Validate => {
            let config = config::load_layered(config_file).await?;
            let issues = config.validate();
            for issue in &issues {
                println!("{issue}");
            }
            if config.is_valid() {
                println!("Configuration is valid");
            } else {
                return Err(CliError::config("configuration has errors"));
            }
        }
    }

    Ok(())
}

/// Print environment variable status.
fn print_env_status(name: &str) {
    let status = if std::env::var(name).is_ok() {
        "set"
    } else {
        "-"
    };
    println!("  {name}: {status}");
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_defaults() {
        let cli = Cli::try_parse_from(["kuku", "generate"]).unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.mood, Mood::Motivation);
        assert_eq!(args.topic, "mindfulness");
        assert!(args.download.is_none());
        assert!(!args.quiet);
    }

    #[test]
    fn generate_with_mood_topic_and_bare_download() {
        let cli = Cli::try_parse_from([
            "kuku", "generate", "--mood", "Calm", "--topic", "", "--download",
        ])
        .unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.mood, Mood::Calm);
        assert_eq!(args.topic, "");
        assert_eq!(args.download, Some(None));
    }

    #[test]
    fn download_accepts_a_path() {
        let cli =
            Cli::try_parse_from(["kuku", "generate", "--download", "notes/today.mp3"]).unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.download, Some(Some(PathBuf::from("notes/today.mp3"))));
    }

    #[test]
    fn unknown_mood_is_rejected_at_parse_time() {
        let err = Cli::try_parse_from(["kuku", "generate", "--mood", "angry"]).err();
        assert!(err.is_some_and(|e| e.to_string().contains("Unknown mood 'angry'")));
    }

    #[test]
    fn config_init_force() {
        let cli = Cli::try_parse_from(["kuku", "config", "init", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigArgs {
                command: ConfigCommands::Init { force: true }
            })
        ));
    }
}
