use crate::archive::{relocate, ArchiveEntry};
use crate::cache::flag_path;
use crate::lock::ScrapeLock;
use crate::parser::extract_flag_refs;
use crate::{FlagCacheError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// What one scrape pass consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeReport {
    /// Flag indexes written, in page order
    pub flags_copied: Vec<u32>,

    /// One entry per consumed page
    pub archived: Vec<ArchiveEntry>,
}

impl ScrapeReport {
    pub fn is_empty(&self) -> bool {
        self.archived.is_empty()
    }
}

/// Consume every saved page sitting directly in `dir`.
///
/// Each page needs its `<stem>_files` folder; a page without one aborts the
/// pass before anything is copied from it. Extracted images overwrite
/// `flag<index>.png`, then the page and its folder move into the next archive
/// version so they are never read again.
pub(crate) fn scrape(dir: &Path) -> Result<ScrapeReport> {
    let mut report = ScrapeReport::default();
    if !dir.is_dir() {
        return Ok(report);
    }

    let _lock = ScrapeLock::acquire(dir)?;
    for page in source_pages(dir)? {
        let bundle = bundle_for(&page)?;
        let text = fs::read_to_string(&page)?;

        let refs = extract_flag_refs(&text);
        for flag in &refs {
            let from = dir.join(&flag.src);
            let to = flag_path(dir, flag.index);
            fs::copy(&from, &to).map_err(|source| FlagCacheError::CopyFailed {
                from: from.clone(),
                to: to.clone(),
                source,
            })?;
            report.flags_copied.push(flag.index);
        }

        let entry = relocate(dir, &page, &bundle)?;
        log::info!(
            "Scraped {} flags from {} into archive version {}",
            refs.len(),
            page.display(),
            entry.version
        );
        report.archived.push(entry);
    }

    Ok(report)
}

/// `*.html` files directly inside `dir`, sorted by name.
fn source_pages(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/*.html", glob::Pattern::escape(&dir.to_string_lossy()));

    let mut pages = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        if path.is_file() {
            pages.push(path);
        }
    }
    pages.sort();
    Ok(pages)
}

fn bundle_for(page: &Path) -> Result<PathBuf> {
    let stem = page
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let bundle = page.with_file_name(format!("{stem}_files"));
    if bundle.is_dir() {
        Ok(bundle)
    } else {
        Err(FlagCacheError::MissingBundle {
            page: page.to_path_buf(),
            bundle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn source_pages_ignores_archive_and_other_files() {
        let temp = tempdir().unwrap();
        let dir = temp.path();
        fs::write(dir.join("b.html"), "").unwrap();
        fs::write(dir.join("a.html"), "").unwrap();
        fs::write(dir.join("flag1.png"), "").unwrap();
        fs::create_dir_all(dir.join("archive/version1")).unwrap();
        fs::write(dir.join("archive/version1/old.html"), "").unwrap();

        let pages = source_pages(dir).unwrap();
        assert_eq!(pages, vec![dir.join("a.html"), dir.join("b.html")]);
    }

    #[test]
    fn source_pages_handles_glob_metacharacters_in_dir() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("flags [draft]");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("page.html"), "").unwrap();

        assert_eq!(source_pages(&dir).unwrap(), vec![dir.join("page.html")]);
    }

    #[test]
    fn missing_dir_is_an_empty_pass() {
        let temp = tempdir().unwrap();
        let report = scrape(&temp.path().join("nope")).unwrap();
        assert!(report.is_empty());
    }
}
