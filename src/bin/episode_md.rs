//! Command-line converter from episode markdown to JSON.
//!
//! Usage:
//!   episode_md <INPUT>... [--language ko] [--episode-id episode1] [--output out.json]

use clap::Parser;
use episode_md::links::{unresolved_links, UnresolvedLink};
use episode_md::{parse_episode, to_json, Error, Language, ParseOptions, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info, warn};

#[derive(Debug, Parser)]
#[command(name = "episode_md", version, about = "Convert episode markdown into scene/node JSON")]
struct Cli {
    /// Markdown files to convert
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Episode identifier written into the output
    #[arg(long, default_value = "episode1")]
    episode_id: String,

    /// Script language (en or ko); guessed from the file name when omitted
    #[arg(long, short)]
    language: Option<String>,

    /// Output path; only valid with a single input. Defaults to <input>.json
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Skip the whole lookahead window after an email or choice block
    #[arg(long)]
    legacy_windows: bool,

    /// Warn about forward references that name no node or scene
    #[arg(long)]
    check_links: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if cli.output.is_some() && cli.inputs.len() > 1 {
        error!("--output can only be used with a single input");
        return ExitCode::FAILURE;
    }

    let options = if cli.legacy_windows {
        ParseOptions::legacy()
    } else {
        ParseOptions::default()
    };

    let mut failed = false;
    for input in &cli.inputs {
        if let Err(e) = convert(&cli, input, &options) {
            error!(path = %input.display(), "{}", e);
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn convert(cli: &Cli, input: &Path, options: &ParseOptions) -> Result<()> {
    let language: Language = match &cli.language {
        Some(tag) => tag.parse()?,
        None => guess_language(input),
    };

    info!(path = %input.display(), %language, "Parsing");
    let text = fs::read_to_string(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let episode = parse_episode(&text, &cli.episode_id, language, options);
    if cli.check_links {
        for link in unresolved_links(&episode) {
            match link {
                UnresolvedLink::Node { from, target } => {
                    warn!(%from, %target, "next node does not exist")
                }
                UnresolvedLink::Scene { from, target } => {
                    warn!(%from, %target, "choice target scene does not exist")
                }
            }
        }
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| input.with_extension("json"));
    fs::write(&output, to_json(&episode)?).map_err(|source| Error::Write {
        path: output.clone(),
        source,
    })?;

    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| output.display().to_string());
    println!("✓ Created {}", name);
    Ok(())
}

/// `Episode1_Korean.md` and `episode1_ko.md` are Korean; anything else English.
fn guess_language(path: &Path) -> Language {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let is_korean = stem.contains("korean")
        || stem
            .split(|c: char| !c.is_ascii_alphanumeric())
            .any(|part| part == "ko" || part == "kr");
    if is_korean {
        Language::Ko
    } else {
        Language::En
    }
}
