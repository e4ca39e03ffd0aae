use std::env;
use std::ffi::{CString, OsStr};
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("{0}: command not found")]
    NotFound(String),
}

/// Directories from one reading of `PATH`, in priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    pub fn from_env() -> Self {
        Self::parse(env::var_os("PATH").as_deref())
    }

    /// Split a `PATH`-style value; empty entries are dropped.
    pub fn parse(value: Option<&OsStr>) -> Self {
        let dirs = value
            .map(|value| {
                env::split_paths(value)
                    .filter(|dir| !dir.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default();
        Self { dirs }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

/// Turns a command name into a runnable file.
#[derive(Clone, Default)]
pub struct PathResolver;

impl PathResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve against the current value of `PATH`.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, ResolveError> {
        self.resolve_in(name, &SearchPath::from_env())
    }

    pub fn resolve_in(&self, name: &str, search_path: &SearchPath) -> Result<PathBuf, ResolveError> {
        if name.is_empty() {
            return Err(ResolveError::NotFound(String::new()));
        }

        let direct = Path::new(name);
        if is_executable(direct) {
            return Ok(direct.to_path_buf());
        }

        search_path
            .dirs()
            .iter()
            .map(|dir| candidate(dir, name))
            .find(|path| is_executable(path))
            .inspect(|found| debug!("resolved {} to {}", name, found.display()))
            .ok_or_else(|| ResolveError::NotFound(name.to_string()))
    }
}

/// `dir/name`, kept literal even when `name` is itself absolute.
fn candidate(dir: &Path, name: &str) -> PathBuf {
    let mut joined = dir.as_os_str().to_owned();
    joined.push("/");
    joined.push(name);
    PathBuf::from(joined)
}

/// A regular file (after following links) the current user may execute.
pub fn is_executable(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => {}
        _ => return false,
    }
    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}
