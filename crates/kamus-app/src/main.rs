use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use kamus_config::Config;
use kamus_core::Language;
use kamus_types::DictionaryEntry;

pub mod state;

use self::state::AppState;

/// Malay/Mandarin learner's dictionary
#[derive(Parser, Debug)]
#[command(name = "kamus", version)]
struct Args {
    /// JSON config file, environment variables are used when absent
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve words into dictionary entries
    Resolve {
        #[arg(required = true)]
        words: Vec<String>,

        /// Human readable output instead of JSON
        #[arg(long)]
        plain: bool,
    },
    /// Translate text using curated pairs, then the translation service
    Translate {
        text: String,

        #[arg(long, default_value = "ms", value_parser = parse_language)]
        from: Language,

        #[arg(long, default_value = "zh", value_parser = parse_language)]
        to: Language,
    },
    /// Print pinyin for a word
    Pinyin { word: String },
}

fn parse_language(code: &str) -> Result<Language, String> {
    Language::from_code(code).ok_or_else(|| format!("unsupported language '{}'", code))
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(Config::new()),
    }
}

fn print_plain(entry: &DictionaryEntry) {
    println!("{} → {}", entry.source_word, entry.target_word);
    println!("Pronunciation: {}", entry.pronunciation);
    if entry.is_adjective {
        println!("Part of speech: adjective");
    }
    if entry.is_curated {
        println!("Source: curated");
    }
    println!();
    println!("{}", entry.explanation);
    println!();
    println!("{}", entry.numbered_examples());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        // Missing .env is normal
        if !e.not_found() {
            eprintln!("Failed to read .env: {}", e);
        }
    }

    let args = Args::parse();
    init_tracing(args.json_logs);

    let config = load_config(args.config.as_ref())?;
    let state = AppState::new(&config);

    match args.command {
        Command::Resolve { words, plain } => {
            let entries = state.pipeline.resolve_all(words.as_slice()).await;

            for (i, entry) in entries.iter().enumerate() {
                if plain {
                    if i > 0 {
                        println!("\n---\n");
                    }
                    print_plain(entry);
                } else {
                    println!("{}", serde_json::to_string_pretty(entry)?);
                }
            }
        }
        Command::Translate { text, from, to } => {
            let translated = state
                .pipeline
                .resolver()
                .translate(&text, from, to)
                .await
                .with_context(|| format!("failed to translate '{}'", text))?;
            println!("{}", translated);
        }
        Command::Pinyin { word } => {
            println!("{}", state.pipeline.pinyin().convert(&word));
        }
    }

    Ok(())
}
