mod input;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use oie_engine::{Extractor, ExtractorConfig, Report};
use rayon::prelude::*;
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::input::{load_treebank, InputFormat};

#[derive(Parser)]
#[command(author, version, about = "Open information extraction over dependency trees")]
struct Cli {
    /// More log output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract triples from a treebank and write them as JSON
    Extract(ExtractArgs),
    /// Compile a CoNLL-U or JSON treebank into an rkyv archive
    Compile(CompileArgs),
}

#[derive(Args)]
struct ExtractArgs {
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Output file; stdout when missing
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[arg(long, value_enum)]
    format: Option<InputFormat>,

    /// JSON file with extractor settings; flags below override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Do not split coordinated complements or follow coordinated verbs
    #[arg(long)]
    no_cc: bool,

    /// Do not turn subordinate clauses into complements
    #[arg(long)]
    no_sc: bool,

    /// Do not emit appositive extractions
    #[arg(long)]
    no_appositive: bool,

    /// Do not restate extractions through appositive aliases
    #[arg(long)]
    no_transitive: bool,

    /// Keep predicates without an explicit subject
    #[arg(long)]
    hidden_subjects: bool,

    /// Include token details for each extraction
    #[arg(long)]
    debug: bool,

    #[arg(long)]
    pretty: bool,
}

#[derive(Args)]
struct CompileArgs {
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    #[arg(long, value_enum)]
    format: Option<InputFormat>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Extract(args) => extract(args),
        Command::Compile(args) => compile(args),
    }
}

fn load_config(args: &ExtractArgs) -> anyhow::Result<ExtractorConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {:?}", path))?
        }
        None => ExtractorConfig::default(),
    };

    if args.no_cc {
        config.coordinating_conjunctions = false;
    }
    if args.no_sc {
        config.subordinating_conjunctions = false;
    }
    if args.no_appositive {
        config.appositive = false;
    }
    if args.no_transitive {
        config.transitive = false;
    }
    if args.hidden_subjects {
        config.hidden_subjects = true;
    }
    if args.debug {
        config.debug = true;
    }
    Ok(config)
}

fn extract(args: ExtractArgs) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    let treebank = load_treebank(&args.input, args.format)?;
    let extractor = Extractor::new(config.clone());

    // Sentences are independent; collect keeps input order.
    let sentences: Vec<_> = treebank
        .sentences
        .into_par_iter()
        .map(|sentence| extractor.report(sentence))
        .collect();

    let extracted: usize = sentences.iter().map(|s| s.extractions.len()).sum();
    let failed = sentences.iter().filter(|s| s.error.is_some()).count();
    info!(sentences = sentences.len(), extracted, failed, "extraction finished");

    let report = Report { config, sentences };
    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    match &args.output {
        Some(path) => fs::write(path, json).with_context(|| format!("writing {:?}", path))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn compile(args: CompileArgs) -> anyhow::Result<()> {
    let treebank = load_treebank(&args.input, args.format)?;

    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(&treebank)
        .map_err(|e| anyhow::anyhow!("rkyv serialization failed: {:?}", e))?;
    let bytes = serializer.into_serializer().into_inner();

    fs::write(&args.output, &bytes).with_context(|| format!("writing {:?}", args.output))?;
    info!(output = ?args.output, bytes = bytes.len(), sentences = treebank.sentences.len(), "treebank compiled");
    Ok(())
}
