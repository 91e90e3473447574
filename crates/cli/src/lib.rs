//! # Flagword CLI
//!
//! `flagword generate` turns a country table and a word list into flag
//! puzzles. Missing flags stop the run after an operator checklist is printed;
//! saving the suggested wiki preview page into the flag folder and running
//! again fills them in.

use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use flagword_flag_cache::FlagCache;
use flagword_puzzle::{PuzzleConfig, DEFAULT_DICTIONARY};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

mod flags;
pub mod pipeline;
pub mod report;

use flags::{DuplicatesFlag, ScoringFlag};
use pipeline::{default_flags_dir, default_out_dir, GenerateOptions};

/// Overrides the dictionary path when `--dict` is not given.
pub const DICTIONARY_ENV: &str = "FLAGWORD_DICT";

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "flagword")]
#[command(about = "Find words spelled by country codes and draw them as flags", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Cache flags, score dictionary words and render the best puzzles
    Generate(GenerateArgs),

    /// Only make sure every flag in the table is cached
    Fetch(FetchArgs),

    /// Stack arbitrary images into one bordered image
    Paste(PasteArgs),
}

#[derive(Args)]
struct TableArgs {
    /// Country table (CSV with ISO-3166 Code, Country, Index, Population)
    #[arg(long, default_value = "iso-countries.csv")]
    countries: PathBuf,

    /// Flag cache folder (defaults to iso-flags beside the country table)
    #[arg(long)]
    flags_dir: Option<PathBuf>,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct GenerateArgs {
    #[command(flatten)]
    table: TableArgs,

    /// Word list, one word per line (overrides FLAGWORD_DICT)
    #[arg(long)]
    dict: Option<PathBuf>,

    /// Where puzzle<rank>.png files go (defaults to the country table's folder)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Number of puzzles to render
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Scoring strategy
    #[arg(long, value_enum, default_value = "min-population")]
    scoring: ScoringFlag,

    /// What to do when two words spell the same flags
    #[arg(long, value_enum, default_value = "last-wins")]
    duplicates: DuplicatesFlag,
}

#[derive(Args)]
struct FetchArgs {
    #[command(flatten)]
    table: TableArgs,
}

#[derive(Args)]
struct PasteArgs {
    /// Output PNG path (overwritten)
    output: PathBuf,

    /// Images to stack, top first
    #[arg(required = true, num_args = 1..)]
    images: Vec<PathBuf>,
}

pub fn main_entry() -> Result<()> {
    let mut cli = Cli::parse();

    // Keep stdout clean for JSON
    let json_output = match &cli.command {
        Commands::Generate(args) => args.table.json,
        Commands::Fetch(args) => args.table.json,
        Commands::Paste(_) => false,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Generate(args) => run_generate(args)?,
        Commands::Fetch(args) => run_fetch(args)?,
        Commands::Paste(args) => run_paste(args)?,
    }

    Ok(())
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let countries = args.table.countries;
    let dictionary = args
        .dict
        .or_else(|| env::var_os(DICTIONARY_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DICTIONARY));
    let options = GenerateOptions {
        flags_dir: args
            .table
            .flags_dir
            .unwrap_or_else(|| default_flags_dir(&countries)),
        out_dir: args
            .out_dir
            .unwrap_or_else(|| default_out_dir(&countries)),
        countries,
        dictionary,
        config: PuzzleConfig {
            top_n: args.top,
            scoring: args.scoring.as_domain(),
            duplicates: args.duplicates.as_domain(),
        },
    };
    log::debug!(
        "Scoring with {} into {}",
        options.config.scoring.as_str(),
        options.out_dir.display()
    );

    if args.table.json {
        let mut cache = FlagCache::with_output(&options.flags_dir, Vec::new());
        let mut report = pipeline::generate(&options, &mut cache)?;
        report.checklist = checklist_text(cache.into_output())?;
        print_stdout(&serde_json::to_string_pretty(&report)?)?;
    } else {
        let mut cache = FlagCache::new(&options.flags_dir);
        let report = pipeline::generate(&options, &mut cache)?;
        let saved = report::render_saved(&report);
        if !saved.is_empty() {
            print_stdout(saved.trim_end())?;
        }
        log::info!("{}", report::render_summary(&report));
    }
    Ok(())
}

fn run_fetch(args: FetchArgs) -> Result<()> {
    let countries = args.table.countries;
    let flags_dir = args
        .table
        .flags_dir
        .unwrap_or_else(|| default_flags_dir(&countries));

    if args.table.json {
        let mut cache = FlagCache::with_output(&flags_dir, Vec::new());
        let mut report = pipeline::fetch(&countries, &mut cache)?;
        report.checklist = checklist_text(cache.into_output())?;
        print_stdout(&serde_json::to_string_pretty(&report)?)?;
    } else {
        let mut cache = FlagCache::new(&flags_dir);
        pipeline::fetch(&countries, &mut cache)?;
    }
    Ok(())
}

fn run_paste(args: PasteArgs) -> Result<()> {
    flagword_compositor::compose_files(&args.output, &args.images)
        .with_context(|| format!("Failed to paste into {}", args.output.display()))?;
    print_stdout(&format!("Saved as {}", args.output.display()))
}

fn checklist_text(captured: Vec<u8>) -> Result<Option<String>> {
    let text = String::from_utf8(captured).context("Checklist is not UTF-8")?;
    Ok((!text.is_empty()).then_some(text))
}
