use std::io::Write;

use super::{Command, CommandError, Invocation};

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, invocation: &mut Invocation<'_>) -> Result<(), CommandError> {
        // process::exit skips destructors, so buffered output goes first
        invocation.out.flush()?;
        std::process::exit(0);
    }
}
