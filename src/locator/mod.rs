//! Deterministic configuration-file resolution.
//!
//! Named files are searched in a fixed priority order: the current working
//! directory first, then the per-user `~/.crawlino` directory. Absolute paths
//! bypass the search entirely and are returned as-is, existing or not.

use std::io;
use std::path::{Path, PathBuf};
use std::{env, fs};

use thiserror::Error;

/// Name of the per-user dotfile directory under the home directory.
pub const CRAWLINO_DIR: &str = ".crawlino";

/// Errors surfaced while resolving the crawlino home directory.
#[derive(Debug, Error)]
pub enum LocatorError {
    #[error("user home directory could not be resolved")]
    HomeNotFound,
    #[error("failed to create {path:?}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        source: io::Error,
    },
}

/// Resolves `file_name` against the candidate directories.
///
/// Absolute inputs come back verbatim without an existence check. Relative
/// names return the first candidate path that exists, or `None`.
pub fn find_file(file_name: &str) -> Option<PathBuf> {
    find_file_in(file_name, candidate_dirs())
}

/// Same search over an explicit, ordered list of candidate directories.
pub fn find_file_in<I>(file_name: &str, locations: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    let requested = Path::new(file_name);
    if requested.is_absolute() {
        return Some(requested.to_path_buf());
    }

    for location in locations {
        let candidate = location.join(file_name);
        if candidate.exists() {
            log::debug!("resolved {file_name:?} -> {}", candidate.display());
            return Some(candidate);
        }
        log::trace!("no {file_name:?} under {}", location.display());
    }
    None
}

/// Candidate directories in priority order. Either entry is skipped when the
/// environment cannot supply it.
fn candidate_dirs() -> Vec<PathBuf> {
    let mut locations = Vec::with_capacity(2);
    if let Ok(cwd) = env::current_dir() {
        locations.push(cwd);
    }
    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(CRAWLINO_DIR));
    }
    locations
}

/// Resolves `~/.crawlino`, creating it on first use.
///
/// Creation is non-recursive: only the final segment is created, and a home
/// directory with missing parents is an error. Calling this again once the
/// directory exists is a no-op.
pub fn crawlino_home() -> Result<PathBuf, LocatorError> {
    let home = dirs::home_dir().ok_or(LocatorError::HomeNotFound)?;
    ensure_dotdir(&home)
}

fn ensure_dotdir(home: &Path) -> Result<PathBuf, LocatorError> {
    let crawlino_home = home.join(CRAWLINO_DIR);
    if !crawlino_home.exists() {
        fs::create_dir(&crawlino_home).map_err(|source| LocatorError::DirectoryCreation {
            path: crawlino_home.clone(),
            source,
        })?;
        log::debug!("created {}", crawlino_home.display());
    }
    Ok(crawlino_home)
}
