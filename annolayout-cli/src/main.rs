use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "annolayout", version)]
struct Cli {
    /// Emit debug traces on stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out one annotation document.
    Layout(LayoutArgs),
    /// Print the words of a sentence with their character offsets.
    Tokenize(TokenizeArgs),
    /// Lay out a JSON array of annotation documents.
    Batch(BatchArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input annotation document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Layout config JSON (row height, padding, pixel scale).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output layout JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TokenizeArgs {
    /// Sentence text.
    #[arg(long)]
    text: String,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Input JSON array of annotation documents.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Layout config JSON (row height, padding, pixel scale).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Lay documents out in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "lowercase")]
enum BatchEntry {
    Ok(annolayout::AnnotationLayout),
    Error(String),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Tokenize(args) => cmd_tokenize(args),
        Command::Batch(args) => cmd_batch(args),
    }
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let doc = annolayout::AnnotationDocument::from_path(&args.in_path)?;
    let layout = annolayout::layout_document::<serde_json::Value>(doc, &config)
        .with_context(|| format!("lay out '{}'", args.in_path.display()))?;
    write_json(args.out.as_deref(), &layout)
}

fn cmd_tokenize(args: TokenizeArgs) -> anyhow::Result<()> {
    let words = match annolayout::tokenize(&args.text) {
        Ok(words) => words,
        Err(annolayout::LayoutError::EmptyInput) => Vec::new(),
        Err(e) => return Err(e.into()),
    };
    write_json(None, &words)
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let raw = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read batch '{}'", args.in_path.display()))?;
    let docs: Vec<annolayout::AnnotationDocument> = serde_json::from_str(&raw)
        .with_context(|| format!("parse batch '{}'", args.in_path.display()))?;

    let opts = annolayout::BatchOpts {
        parallel: args.parallel,
        threads: args.threads,
    };
    let results = annolayout::layout_batch(docs, &config, &opts)?;
    let failed = results.iter().filter(|r| r.is_err()).count();
    let entries: Vec<BatchEntry> = results
        .into_iter()
        .map(|r| match r {
            Ok(layout) => BatchEntry::Ok(layout),
            Err(e) => BatchEntry::Error(e.to_string()),
        })
        .collect();

    write_json(args.out.as_deref(), &entries)?;
    if failed > 0 {
        eprintln!("{failed} of {} documents failed", entries.len());
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<annolayout::LayoutConfig> {
    match path {
        Some(p) => Ok(annolayout::LayoutConfig::from_path(p)?),
        None => Ok(annolayout::LayoutConfig::default()),
    }
}

fn write_json<T: serde::Serialize>(out: Option<&Path>, value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output JSON")?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, json)
                .with_context(|| format!("write json '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("write stdout")?;
        }
    }
    Ok(())
}
