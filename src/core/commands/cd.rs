use super::{Command, CommandError, Invocation};
use crate::path::{PathExpander, PathModel};
use log::debug;
use std::env;
use std::path::Path;

#[derive(Clone)]
pub struct CdCommand {
    path_expander: PathExpander,
}

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self {
            path_expander: PathExpander::new(),
        }
    }

    fn change_to(&self, shown: &str, path: &Path) -> Result<(), CommandError> {
        env::set_current_dir(path).map_err(|e| {
            debug!("chdir {} failed: {}", path.display(), e);
            CommandError::NoSuchDirectory(shown.to_string())
        })
    }
}

impl Command for CdCommand {
    fn execute(&self, invocation: &mut Invocation<'_>) -> Result<(), CommandError> {
        let target = match invocation.args.get(1).map(String::as_str) {
            None => {
                let home = self.path_expander.home_dir()?;
                return self.change_to(&home.to_string_lossy(), &home);
            }
            Some(".") => return Ok(()),
            Some(target) => target,
        };

        let expanded = self.path_expander.expand(target)?;
        let mut model = if expanded.has_root() {
            PathModel::root()
        } else {
            let cwd = env::current_dir().map_err(|source| CommandError::CurrentDir {
                command: "cd",
                source,
            })?;
            PathModel::from_path(&cwd)
        };
        model.apply(&expanded);

        self.change_to(target, &model.to_path_buf())
    }
}
