use anyhow::{Context, Result};
use chatmark_config::{Config, OutputFormat};
use chatmark_engine::{
    ChatMessage, Complexity, MarkdownFeatures, extract_artifacts, has_code_blocks,
    html::render_html, render_markdown, select_suggestions,
};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(author, version, about = "Render and inspect chat-style markdown", long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file to use instead of ~/.config/chatmark/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Segment markdown into blocks
    Render {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
        #[arg(short, long, value_enum)]
        format: Option<Format>,
    },
    /// Report the rendering tier and detected features
    Classify { file: Option<PathBuf> },
    /// List code and chart artifacts
    Artifacts {
        file: Option<PathBuf>,
        /// Treat the input as a ChatMessage JSON document
        #[arg(long)]
        message: bool,
    },
    /// Show a stored chat history, optionally appending a message
    Session {
        /// History file (JSON array of messages); created on first write
        file: PathBuf,
        /// Append this text before printing
        #[arg(long)]
        say: Option<String>,
        /// Append as the assistant instead of the user
        #[arg(long, requires = "say")]
        assistant: bool,
    },
    /// Pick random suggestion chips
    Suggest {
        #[arg(short, long)]
        count: Option<usize>,
        /// Seed for a repeatable selection
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
    Html,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Yaml => OutputFormat::Yaml,
            Format::Html => OutputFormat::Html,
        }
    }
}

#[derive(Serialize)]
struct Classification {
    complexity: Complexity,
    features: MarkdownFeatures,
    has_code_blocks: bool,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?.unwrap_or_default(),
        None => Config::load_or_default()?,
    };
    log::debug!("Using config: {config:?}");

    match cli.command {
        Commands::Render { file, format } => {
            let text = read_input(file.as_deref())?;
            let blocks = render_markdown(&text);
            let format = format.map(OutputFormat::from).unwrap_or(config.output);
            match format {
                OutputFormat::Html => print!("{}", render_html(&blocks)),
                other => print_structured(&blocks, other)?,
            }
        }
        Commands::Classify { file } => {
            let text = read_input(file.as_deref())?;
            let report = Classification {
                complexity: Complexity::of(&text),
                features: MarkdownFeatures::detect(&text),
                has_code_blocks: has_code_blocks(&text),
            };
            print_structured(&report, config.output)?;
        }
        Commands::Artifacts { file, message } => {
            let input = read_input(file.as_deref())?;
            let message = if message {
                serde_json::from_str::<ChatMessage>(&input)
                    .context("Failed to parse chat message JSON")?
            } else {
                ChatMessage::assistant(input)
            };
            print_structured(&extract_artifacts(&message), config.output)?;
        }
        Commands::Session {
            file,
            say,
            assistant,
        } => {
            let json = if file.exists() {
                std::fs::read_to_string(&file)
                    .with_context(|| format!("Failed to read {}", file.display()))?
            } else {
                "[]".to_string()
            };
            let mut session = config.restore_session(&json);

            if let Some(text) = say {
                let message = if assistant {
                    ChatMessage::assistant(text)
                } else {
                    ChatMessage::user(text)
                };
                session.push(message);
                std::fs::write(&file, session.to_json()?)
                    .with_context(|| format!("Failed to write {}", file.display()))?;
            }

            let messages: Vec<&ChatMessage> = session.messages().collect();
            print_structured(&messages, config.output)?;
        }
        Commands::Suggest { count, seed } => {
            let count = count.unwrap_or(config.suggestion_count);
            let pool = config.chip_pool();
            let (chips, _) = match seed {
                Some(seed) => {
                    let mut rng = StdRng::seed_from_u64(seed);
                    select_suggestions(&pool, &BTreeSet::new(), count, &mut rng)
                }
                None => select_suggestions(&pool, &BTreeSet::new(), count, &mut rand::rng()),
            };
            print_structured(&chips, config.output)?;
        }
    }

    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// JSON or YAML; HTML only applies to rendered blocks so it falls back to JSON.
fn print_structured<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<()> {
    let out = match format {
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Json | OutputFormat::Html => serde_json::to_string_pretty(value)?,
    };
    println!("{}", out.trim_end());
    Ok(())
}
