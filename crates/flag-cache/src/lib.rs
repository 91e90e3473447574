//! # Flagword Flag Cache
//!
//! Maps a flag index to `flag<index>.png` inside a cache folder.
//!
//! ## Acquisition workflow
//!
//! ```text
//! resolve(name, index)
//!     │
//!     ├──> flag<index>.png exists ──────────────> path
//!     │
//!     ├──> scrape pass
//!     │      ├─> *.html + <stem>_files/ saved by the operator
//!     │      ├─> extract (flag label, <img src>) pairs
//!     │      ├─> copy each image to flag<index>.png
//!     │      └─> move page + bundle to archive/version<N>/
//!     │
//!     ├──> flag<index>.png exists now ──────────> path
//!     │
//!     └──> miss: print the operator checklist line, remember it
//! ```
//!
//! After every country has been resolved, [`FlagCache::is_complete`] tells the
//! caller whether it is safe to go on and render puzzles.

mod archive;
mod cache;
mod error;
mod lock;
mod parser;
mod scrape;

pub use archive::{archive_versions, ArchiveEntry, ARCHIVE_DIR};
pub use cache::{flag_path, FlagCache, MissingFlag, OPERATOR_PREAMBLE};
pub use error::{FlagCacheError, Result};
pub use parser::{extract_flag_refs, FlagRef};
pub use scrape::ScrapeReport;
