//! OCR output decoding CLI

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use ocr_rs::{Config, OutputFormat, OutputWriter, RecognitionSession, ReplayEngine, Tensor};

/// Decode text-recognition model outputs into text
#[derive(Parser)]
#[command(name = "ocr-rs")]
#[command(about = "Decode OCR model output tensors into text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Vocabulary and decoder overrides shared by subcommands
#[derive(clap::Args)]
struct VocabArgs {
    /// Vocabulary as a string, one symbol per character
    #[arg(long)]
    charset: Option<String>,

    /// JSON model metadata with a `charlist` or `vocab` key
    #[arg(long)]
    vocab_file: Option<PathBuf>,

    /// End-of-text marker (empty string disables truncation)
    #[arg(short, long)]
    end_marker: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a recorded model output (JSON: {"dims": [1, S, V], "data": [...]})
    Decode {
        /// Recorded output tensor file
        input: PathBuf,

        #[command(flatten)]
        vocab: VocabArgs,

        /// Keep consecutive duplicate characters
        #[arg(long)]
        no_collapse: bool,

        /// Class index of the CTC blank symbol
        #[arg(short, long)]
        blank_index: Option<usize>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable console output
        #[arg(long)]
        no_console: bool,
    },

    /// Show the resolved vocabulary
    Vocab {
        #[command(flatten)]
        vocab: VocabArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging - quiet by default, use -v for more
    let log_level = match cli.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = if let Some(ref config_path) = cli.config {
        Config::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        Config::default()
    };

    match cli.command {
        Commands::Decode {
            input,
            vocab,
            no_collapse,
            blank_index,
            format,
            output,
            no_console,
        } => {
            // Apply CLI overrides
            apply_vocab_args(&mut config, vocab);
            if no_collapse {
                config.decoder.collapse_repeats = false;
            }
            if blank_index.is_some() {
                config.decoder.blank_index = blank_index;
            }
            if let Some(output) = output {
                config.output.output_path = Some(output);
            }
            config.output.format = format.parse::<OutputFormat>()?;
            config.output.enable_console = !no_console;

            decode_file(config, input)
        }
        Commands::Vocab { vocab } => {
            apply_vocab_args(&mut config, vocab);
            show_vocab(&config)
        }
    }
}

fn apply_vocab_args(config: &mut Config, args: VocabArgs) {
    if let Some(charset) = args.charset {
        config.vocabulary.charset = charset;
        config.vocabulary.symbols = None;
        config.vocabulary.metadata_path = None;
    }
    if let Some(path) = args.vocab_file {
        config.vocabulary.metadata_path = Some(path);
    }
    if let Some(marker) = args.end_marker {
        config.decoder.end_marker = if marker.is_empty() { None } else { Some(marker) };
    }
}

/// Decode a recorded output tensor through a replay session
fn decode_file(config: Config, input_path: PathBuf) -> Result<()> {
    info!("Decoding: {}", input_path.display());

    let engine = ReplayEngine::from_file(&input_path)
        .with_context(|| format!("Failed to load recorded output {}", input_path.display()))?;
    let mut session =
        RecognitionSession::from_config(engine, &config).context("Failed to open session")?;

    let decoder = session.decoder();
    info!(
        "Decoder ready: {} symbols, end marker {:?}, blank index {:?}",
        decoder.vocabulary().len(),
        decoder.config().end_marker,
        decoder.config().blank_index
    );

    // Replay ignores its input
    let result = session
        .recognize(&Tensor::new(Vec::new(), Vec::new()))
        .context("Failed to decode model output")?;

    info!(
        "Decoded {} timesteps into {} chars",
        result.timesteps,
        result.text.chars().count()
    );

    let mut output = OutputWriter::new(config.output).context("Failed to create output writer")?;
    if result.text.is_empty() {
        info!("No text detected");
    }
    output.write(&result)?;
    output.flush()?;

    session.close()?;
    Ok(())
}

/// Print the resolved vocabulary
fn show_vocab(config: &Config) -> Result<()> {
    let vocabulary = config
        .vocabulary
        .load()
        .context("Failed to load vocabulary")?;

    println!("Vocabulary: {} symbols", vocabulary.len());
    match config.decoder.end_marker {
        Some(ref marker) => println!("End marker: {:?}", marker),
        None => println!("End marker: none"),
    }
    if let Some(blank) = config.decoder.blank_index {
        println!("Blank index: {}", blank);
    }
    for (i, symbol) in vocabulary.symbols().iter().enumerate() {
        println!("  {:>4}  {:?}", i, symbol);
    }

    Ok(())
}
