use std::env;
use std::path::{Path, PathBuf};

use crate::core::commands::CommandError;

#[derive(Clone)]
pub struct PathExpander;

impl Default for PathExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    pub fn expand(&self, path: &str) -> Result<PathBuf, CommandError> {
        if path.starts_with('~') {
            self.expand_tilde(path)
        } else {
            Ok(Path::new(path).to_path_buf())
        }
    }

    fn expand_tilde(&self, path: &str) -> Result<PathBuf, CommandError> {
        if path.len() == 1 {
            // Just "~"
            self.home_dir()
        } else if let Some(stripped) = path[1..].strip_prefix('/') {
            Ok(self.home_dir()?.join(stripped))
        } else {
            // "~user" is left alone
            Ok(Path::new(path).to_path_buf())
        }
    }

    /// `HOME` when set, otherwise the account's home directory.
    pub fn home_dir(&self) -> Result<PathBuf, CommandError> {
        env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .ok_or(CommandError::HomeNotSet)
    }
}
