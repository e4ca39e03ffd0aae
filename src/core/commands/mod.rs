use std::io::{self, Write};

use thiserror::Error;

mod cd;
mod exit;
mod help;
mod pwd;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use pwd::PwdCommand;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("no builtin at index {0}")]
    NotFound(usize),
    #[error("cd: {0}: No such file or directory")]
    NoSuchDirectory(String),
    #[error("cd: HOME not set")]
    HomeNotSet,
    #[error("{command}: cannot determine current directory: {source}")]
    CurrentDir {
        command: &'static str,
        source: io::Error,
    },
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// What a builtin handler gets to work with.
pub struct Invocation<'a> {
    /// The full token sequence, command name first.
    pub args: &'a [String],
    pub out: &'a mut dyn Write,
    pub table: &'a [Builtin],
}

pub trait Command {
    fn execute(&self, invocation: &mut Invocation<'_>) -> Result<(), CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Help(HelpCommand),
    Exit(ExitCommand),
    Pwd(PwdCommand),
    Cd(CdCommand),
}

impl Command for CommandType {
    fn execute(&self, invocation: &mut Invocation<'_>) -> Result<(), CommandError> {
        match self {
            CommandType::Help(cmd) => cmd.execute(invocation),
            CommandType::Exit(cmd) => cmd.execute(invocation),
            CommandType::Pwd(cmd) => cmd.execute(invocation),
            CommandType::Cd(cmd) => cmd.execute(invocation),
        }
    }
}

#[derive(Clone)]
pub struct Builtin {
    name: &'static str,
    doc: &'static str,
    command: CommandType,
}

impl Builtin {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn doc(&self) -> &'static str {
        self.doc
    }
}

/// Fixed, ordered table of in-process commands.
#[derive(Clone)]
pub struct BuiltinRegistry {
    commands: Vec<Builtin>,
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        let builtin = |name, doc, command| Builtin { name, doc, command };
        let commands = vec![
            builtin("?", "show this help menu", CommandType::Help(HelpCommand::new())),
            builtin("help", "show this help menu", CommandType::Help(HelpCommand::new())),
            builtin("exit", "exit the command shell", CommandType::Exit(ExitCommand::new())),
            builtin("pwd", "display present working directory", CommandType::Pwd(PwdCommand::new())),
            builtin("cd", "change present working directory", CommandType::Cd(CdCommand::new())),
        ];
        Self { commands }
    }

    /// Index of the builtin named exactly `name`.
    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.commands.iter().position(|builtin| builtin.name == name)
    }

    pub fn dispatch(
        &self,
        index: usize,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<(), CommandError> {
        let builtin = self.commands.get(index).ok_or(CommandError::NotFound(index))?;
        let mut invocation = Invocation {
            args,
            out,
            table: &self.commands,
        };
        builtin.command.execute(&mut invocation)
    }

    pub fn entries(&self) -> &[Builtin] {
        &self.commands
    }
}
