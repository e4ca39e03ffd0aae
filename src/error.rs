use thiserror::Error;

use crate::process::TerminalError;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Terminal error: {0}")]
    Terminal(#[from] TerminalError),
    #[error("Flag error: {0}")]
    Flag(String),
    #[error("line too long (limit is {limit} bytes)")]
    LineTooLong { limit: usize },
    #[error("Logging error: {0}")]
    Logging(#[from] log::SetLoggerError),
}
