use crate::report::{FetchReport, GenerateReport, RenderedPuzzle, RunStatus};
use anyhow::{Context, Result};
use flagword_countries::CountryTable;
use flagword_flag_cache::FlagCache;
use flagword_puzzle::{load_words, Decomposer, PuzzleConfig};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Folder name of the flag cache when none is given.
pub const DEFAULT_FLAGS_DIR: &str = "iso-flags";

/// Everything `generate` needs, with defaults already applied.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub countries: PathBuf,
    pub dictionary: PathBuf,
    pub flags_dir: PathBuf,
    pub out_dir: PathBuf,
    pub config: PuzzleConfig,
}

/// `iso-flags` beside the country table.
pub fn default_flags_dir(countries: &Path) -> PathBuf {
    countries.with_file_name(DEFAULT_FLAGS_DIR)
}

/// The folder holding the country table.
pub fn default_out_dir(countries: &Path) -> PathBuf {
    match countries.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Resolve every country's flag once, filling the cache as a side effect.
pub fn ingest<W: Write>(table: &CountryTable, cache: &mut FlagCache<W>) -> Result<()> {
    for country in table.iter() {
        cache
            .resolve(&country.display_name, country.index)
            .with_context(|| {
                format!(
                    "Failed to resolve flag{} ({})",
                    country.index, country.display_name
                )
            })?;
    }
    Ok(())
}

pub fn fetch<W: Write>(countries: &Path, cache: &mut FlagCache<W>) -> Result<FetchReport> {
    let table = load_table(countries)?;
    ingest(&table, cache)?;

    let report = FetchReport {
        status: RunStatus::from_cache(cache),
        countries: table.len(),
        missing: cache.missing().to_vec(),
        checklist: None,
    };
    if report.missing.is_empty() {
        log::info!("All {} flags are cached", report.countries);
    } else {
        log::warn!(
            "{} of {} flags missing",
            report.missing.len(),
            report.countries
        );
    }
    Ok(report)
}

/// Full run: ingest flags, then score and render unless a flag is missing.
pub fn generate<W: Write>(
    options: &GenerateOptions,
    cache: &mut FlagCache<W>,
) -> Result<GenerateReport> {
    options
        .config
        .validate()
        .context("Invalid puzzle configuration")?;

    let table = load_table(&options.countries)?;
    ingest(&table, cache)?;

    let mut report = GenerateReport {
        status: RunStatus::from_cache(cache),
        countries: table.len(),
        words: 0,
        missing: cache.missing().to_vec(),
        puzzles: Vec::new(),
        checklist: None,
    };
    if report.status == RunStatus::Incomplete {
        log::warn!(
            "{} flags missing; save the preview page in {} and run again",
            report.missing.len(),
            cache.dir().display()
        );
        return Ok(report);
    }

    let words = load_words(&options.dictionary).with_context(|| {
        format!(
            "Failed to read dictionary {}",
            options.dictionary.display()
        )
    })?;
    report.words = words.len();

    let decomposer = Decomposer::new(&table, options.config.scoring);
    let board = decomposer
        .rank(words.iter().map(String::as_str), cache, &options.config)
        .context("Failed to score words")?;

    fs::create_dir_all(&options.out_dir).with_context(|| {
        format!("Cannot create output dir {}", options.out_dir.display())
    })?;
    for (rank, puzzle) in (1..).zip(board.top(options.config.top_n)) {
        let output = options.out_dir.join(format!("puzzle{rank}.png"));
        flagword_compositor::compose_files(&output, &puzzle.flags)
            .with_context(|| format!("Failed to render {}", output.display()))?;
        log::debug!("puzzle{rank}: {} scored {}", puzzle.word, puzzle.score);
        report.puzzles.push(RenderedPuzzle {
            rank,
            word: puzzle.word,
            codes: puzzle.codes,
            countries: puzzle.countries,
            score: puzzle.score,
            output,
        });
    }

    Ok(report)
}

fn load_table(path: &Path) -> Result<CountryTable> {
    CountryTable::load(path)
        .with_context(|| format!("Failed to load country table {}", path.display()))
}
