use crate::{FlagCacheError, Result};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::Instant;

const LOCK_FILE: &str = ".scrape.lock";

/// Exclusive lock over the scan-and-archive step of a cache folder.
pub(crate) struct ScrapeLock {
    file: File,
}

impl Drop for ScrapeLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

fn lock_path(dir: &Path) -> PathBuf {
    dir.join(LOCK_FILE)
}

impl ScrapeLock {
    pub(crate) fn acquire(dir: &Path) -> Result<Self> {
        let path = lock_path(dir);
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(|err| {
                FlagCacheError::Other(format!("open scrape lock {}: {err}", path.display()))
            })?;

        let start = Instant::now();
        file.lock_exclusive().map_err(|err| {
            FlagCacheError::Other(format!("acquire scrape lock {}: {err}", path.display()))
        })?;
        log::debug!(
            "Scrape lock {} acquired in {}ms",
            path.display(),
            start.elapsed().as_millis()
        );

        Ok(Self { file })
    }
}
