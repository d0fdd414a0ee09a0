//! CLI Adapter.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "memebot")]
#[command(version)]
#[command(
    about = "Turn a chat transcript into a memegen.link meme URL",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a template and captions for a transcript and print the meme URL
    #[clap(visible_alias = "g")]
    Generate {
        /// Config file (defaults to ./memebot.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Transcript file of `speaker: message` lines; reads stdin when omitted
        #[arg(short, long)]
        transcript: Option<PathBuf>,
    },
    /// Encode captions for a template into a meme URL
    #[clap(visible_alias = "e")]
    Encode {
        /// Template id (see `memebot templates`)
        template: String,
        /// One caption per template slot, in order
        #[arg(required = true)]
        captions: Vec<String>,
    },
    /// List supported templates
    #[clap(visible_alias = "t")]
    Templates {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the system prompt and schema sent to the model
    Prompt,
}

/// Entry point for the CLI.
pub fn run() {
    dotenvy::dotenv().ok();
    crate::logging::init_logging();

    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate { config, transcript } => {
            run_generate(config.as_deref(), transcript.as_deref())
        }
        Commands::Encode { template, captions } => run_encode(&template, &captions),
        Commands::Templates { json } => run_templates(json),
        Commands::Prompt => run_prompt(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(config: Option<&Path>, transcript: Option<&Path>) -> Result<(), AppError> {
    let transcript = match transcript {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let url = crate::generate(transcript.trim_end(), config)?;
    println!("{}", url);
    Ok(())
}

fn run_encode(template: &str, captions: &[String]) -> Result<(), AppError> {
    let url = crate::encode(template, captions)?;
    println!("{}", url);
    Ok(())
}

fn run_templates(json: bool) -> Result<(), AppError> {
    let templates = crate::templates();
    if json {
        let out = serde_json::to_string_pretty(templates)
            .map_err(|e| AppError::config_error(format!("Failed to serialize catalog: {}", e)))?;
        println!("{}", out);
        return Ok(());
    }

    for t in templates {
        println!("{:<10} {:<22} {}", t.id, t.name, t.slots.join(" / "));
    }
    Ok(())
}

fn run_prompt() -> Result<(), AppError> {
    let preview = crate::prompt_preview()?;
    println!("{}", preview.system_prompt);
    println!();
    let schema = serde_json::to_string_pretty(&preview.schema)
        .map_err(|e| AppError::config_error(format!("Failed to serialize schema: {}", e)))?;
    println!("{}", schema);
    Ok(())
}
