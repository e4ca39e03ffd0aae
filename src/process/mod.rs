use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub mod launcher;
pub mod signal;
pub mod terminal;

pub use launcher::{LaunchDescriptor, ProcessLauncher};
pub use terminal::{TerminalController, TerminalError};

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("{}: {source}", path.display())]
    Spawn { path: PathBuf, source: io::Error },
    #[error("failed waiting for pid {pid}: {source}")]
    Wait { pid: libc::pid_t, source: io::Error },
}

impl ProcessError {
    /// Status the failed child carries: the OS error code of the launch.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ProcessError::Spawn { source, .. } => source.raw_os_error(),
            ProcessError::Wait { .. } => None,
        }
    }
}
