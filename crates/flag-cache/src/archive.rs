use crate::{FlagCacheError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Archive folder name inside the cache folder.
pub const ARCHIVE_DIR: &str = "archive";

const VERSION_PREFIX: &str = "version";

/// A consumed page and its asset folder, frozen under `archive/version<N>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub version: u32,
    pub path: PathBuf,
}

/// Move `page` and `bundle` into the lowest free `archive/version<N>`.
///
/// The version folder is claimed with a non-recursive `create_dir`, so two
/// writers can never end up sharing an entry. No rollback happens if the second
/// rename fails after the first succeeded.
pub(crate) fn relocate(dir: &Path, page: &Path, bundle: &Path) -> Result<ArchiveEntry> {
    let root = dir.join(ARCHIVE_DIR);
    fs::create_dir_all(&root)?;

    for version in 1.. {
        let path = root.join(format!("{VERSION_PREFIX}{version}"));
        match fs::create_dir(&path) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::AlreadyExists => continue,
            Err(err) => return Err(err.into()),
        }

        move_into(page, &path)?;
        move_into(bundle, &path)?;
        return Ok(ArchiveEntry { version, path });
    }

    Err(FlagCacheError::Other(format!(
        "no free archive version under {}",
        root.display()
    )))
}

fn move_into(item: &Path, folder: &Path) -> Result<()> {
    let name = item
        .file_name()
        .ok_or_else(|| FlagCacheError::Other(format!("cannot archive {}", item.display())))?;
    fs::rename(item, folder.join(name))?;
    Ok(())
}

/// Archive versions present in the cache folder, ascending.
pub fn archive_versions(dir: &Path) -> Result<Vec<u32>> {
    let root = dir.join(ARCHIVE_DIR);
    let entries = match fs::read_dir(&root) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };

    let mut versions = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        if let Some(version) = name
            .to_str()
            .and_then(|name| name.strip_prefix(VERSION_PREFIX))
            .and_then(|digits| digits.parse::<u32>().ok())
        {
            versions.push(version);
        }
    }
    versions.sort_unstable();
    Ok(versions)
}
