use flagword_countries::IsoCode;
use flagword_flag_cache::{FlagCache, MissingFlag};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Ok,
    /// At least one flag is missing; nothing was rendered.
    Incomplete,
}

impl RunStatus {
    pub fn from_cache<W: Write>(cache: &FlagCache<W>) -> Self {
        if cache.is_complete() {
            RunStatus::Ok
        } else {
            RunStatus::Incomplete
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderedPuzzle {
    pub rank: usize,
    pub word: String,
    pub codes: Vec<IsoCode>,
    pub countries: Vec<String>,
    pub score: u64,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    pub status: RunStatus,
    pub countries: usize,
    pub words: usize,
    pub missing: Vec<MissingFlag>,
    pub puzzles: Vec<RenderedPuzzle>,

    /// Operator checklist, captured instead of printed in JSON mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checklist: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FetchReport {
    pub status: RunStatus,
    pub countries: usize,
    pub missing: Vec<MissingFlag>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub checklist: Option<String>,
}

/// One `Saved as` line per rendered puzzle.
pub fn render_saved(report: &GenerateReport) -> String {
    let mut text = String::new();
    for puzzle in &report.puzzles {
        text.push_str(&format!("Saved as {}\n", puzzle.output.display()));
    }
    text
}

pub fn render_summary(report: &GenerateReport) -> String {
    match report.status {
        RunStatus::Incomplete => format!(
            "{} of {} flags missing, no puzzles generated",
            report.missing.len(),
            report.countries
        ),
        RunStatus::Ok => {
            let mut summary = format!(
                "{} puzzles from {} candidate words",
                report.puzzles.len(),
                report.words
            );
            if let Some(best) = report.puzzles.first() {
                summary.push_str(&format!(
                    "; best: {} ({}) score {}",
                    best.word,
                    best.countries.join(", "),
                    best.score
                ));
            }
            summary
        }
    }
}
