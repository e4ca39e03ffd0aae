use std::env;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;

use super::{Command, CommandError, Invocation};

#[derive(Clone, Default)]
pub struct PwdCommand;

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn execute(&self, invocation: &mut Invocation<'_>) -> Result<(), CommandError> {
        let cwd = env::current_dir().map_err(|source| CommandError::CurrentDir {
            command: "pwd",
            source,
        })?;
        invocation.out.write_all(cwd.as_os_str().as_bytes())?;
        invocation.out.write_all(b"\n")?;
        Ok(())
    }
}
