use crate::scrape::{scrape, ScrapeReport};
use crate::Result;
use serde::Serialize;
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};

/// Printed once, before the first checklist line of a run.
pub const OPERATOR_PREAMBLE: &str = "\
To fetch missing flags:
* Edit your Wikipedia user page.
* Copy the list below, and paste it in the editor.
* Wait for the preview to update.
* Then save the complete web page in the iso-flags folder.
* Run this script again to generate puzzles.

Here's the list to paste in the editor:";

/// Deterministic location of a flag inside the cache folder.
pub fn flag_path(dir: &Path, index: u32) -> PathBuf {
    dir.join(format!("flag{index}.png"))
}

/// A flag that is still missing after a scrape pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingFlag {
    pub name: String,
    pub index: u32,
    pub path: PathBuf,
}

impl MissingFlag {
    /// Wiki markup the operator pastes into a preview to get the image.
    pub fn request_line(&self) -> String {
        format!(
            "* flag{} {{{{flagicon|{}|size=300px}}}}",
            self.index, self.name
        )
    }
}

/// Flag image cache for one run.
///
/// Owns the cache folder plus the run state: whether the operator preamble was
/// printed and which flags are still missing. Checklist text goes to `W`
/// (stdout unless built with [`FlagCache::with_output`]).
pub struct FlagCache<W: Write = Stdout> {
    dir: PathBuf,
    output: W,
    preamble_printed: bool,
    missing: Vec<MissingFlag>,
    scrapes: Vec<ScrapeReport>,
}

impl FlagCache<Stdout> {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self::with_output(dir, io::stdout())
    }
}

impl<W: Write> FlagCache<W> {
    pub fn with_output(dir: impl AsRef<Path>, output: W) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            output,
            preamble_printed: false,
            missing: Vec::new(),
            scrapes: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn flag_path(&self, index: u32) -> PathBuf {
        flag_path(&self.dir, index)
    }

    /// Map a flag index to its cached image path.
    ///
    /// A cached flag returns straight away. Otherwise newly saved pages are
    /// scraped first; if the flag is still absent the checklist line is
    /// printed, the miss is recorded and the (non-existent) path is returned
    /// anyway. Callers must check [`FlagCache::is_complete`] before using the
    /// results.
    pub fn resolve(&mut self, name: &str, index: u32) -> Result<PathBuf> {
        let path = self.flag_path(index);
        if path.exists() {
            return Ok(path);
        }

        let report = scrape(&self.dir)?;
        if !report.is_empty() {
            self.scrapes.push(report);
        }
        if path.exists() {
            log::debug!("flag{index} ({name}) picked up from a saved page");
            return Ok(path);
        }

        self.request(name, index, &path)?;
        Ok(path)
    }

    fn request(&mut self, name: &str, index: u32, path: &Path) -> Result<()> {
        if !self.preamble_printed {
            writeln!(self.output, "{OPERATOR_PREAMBLE}")?;
            self.preamble_printed = true;
        }
        let missing = MissingFlag {
            name: name.to_string(),
            index,
            path: path.to_path_buf(),
        };
        writeln!(self.output, "{}", missing.request_line())?;
        self.output.flush()?;
        log::debug!("flag{index} ({name}) is missing");
        self.missing.push(missing);
        Ok(())
    }

    /// False once any resolve ended in a miss.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn missing(&self) -> &[MissingFlag] {
        &self.missing
    }

    /// Non-empty scrape passes run so far, oldest first.
    pub fn scrapes(&self) -> &[ScrapeReport] {
        &self.scrapes
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_line_format() {
        let missing = MissingFlag {
            name: "United Kingdom".to_string(),
            index: 244,
            path: PathBuf::from("flag244.png"),
        };
        assert_eq!(
            missing.request_line(),
            "* flag244 {{flagicon|United Kingdom|size=300px}}"
        );
    }

    #[test]
    fn flag_path_is_deterministic() {
        assert_eq!(
            flag_path(Path::new("iso-flags"), 5),
            Path::new("iso-flags").join("flag5.png")
        );
    }
}
