use std::io::Write;

use super::{Command, CommandError, Invocation};

#[derive(Clone, Default)]
pub struct HelpCommand;

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn execute(&self, invocation: &mut Invocation<'_>) -> Result<(), CommandError> {
        for builtin in invocation.table {
            writeln!(invocation.out, "{} - {}", builtin.name(), builtin.doc())?;
        }
        Ok(())
    }
}
