use std::ffi::OsString;
use std::io;
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use log::{debug, warn};

use super::terminal::TerminalController;
use super::{signal, ProcessError};
use crate::core::state::Session;

/// Resolved executable plus the argument vector it runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchDescriptor {
    path: PathBuf,
    argv: Vec<OsString>,
}

impl LaunchDescriptor {
    /// `tokens[0]` becomes argv[0]; the image comes from `path`.
    pub fn new(path: impl Into<PathBuf>, tokens: &[String]) -> Self {
        Self {
            path: path.into(),
            argv: tokens.iter().map(OsString::from).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn argv(&self) -> &[OsString] {
        &self.argv
    }

    fn command(&self) -> Command {
        // A bare file name would send exec back through PATH.
        let program = if self.path.components().count() == 1 && !self.path.has_root() {
            Path::new(".").join(&self.path)
        } else {
            self.path.clone()
        };

        let mut command = Command::new(program);
        if let Some((arg0, rest)) = self.argv.split_first() {
            command.arg0(arg0).args(rest);
        }
        command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }
}

/// Spawns one foreground child at a time and waits for it.
#[derive(Clone, Default)]
pub struct ProcessLauncher;

impl ProcessLauncher {
    pub fn new() -> Self {
        Self
    }

    /// Run `descriptor` to completion and return its exit status.
    ///
    /// In an interactive session the child gets its own process group and the
    /// terminal for as long as it runs.
    pub fn launch(
        &self,
        session: &Session,
        descriptor: &LaunchDescriptor,
    ) -> Result<ExitStatus, ProcessError> {
        let mut command = descriptor.command();
        let job_control = session.is_interactive();

        if job_control {
            let terminal = session.terminal();
            unsafe {
                command.pre_exec(move || {
                    if libc::setpgid(0, 0) == -1 {
                        return Err(io::Error::last_os_error());
                    }
                    // The parent makes the same call; whichever runs first wins.
                    libc::tcsetpgrp(terminal, libc::getpid());
                    signal::restore_job_control()
                });
            }
        }

        let child = match command.spawn() {
            Ok(child) => child,
            Err(source) => {
                if job_control {
                    TerminalController::reclaim_or_warn(session);
                }
                return Err(ProcessError::Spawn {
                    path: descriptor.path().to_path_buf(),
                    source,
                });
            }
        };

        let pid = child.id() as libc::pid_t;
        debug!("spawned {} as pid {}", descriptor.path().display(), pid);

        if job_control {
            // EACCES here only means the child already exec'd in its own group.
            unsafe { libc::setpgid(pid, pid) };
            if let Err(e) = TerminalController::give_to(session.terminal(), pid) {
                debug!("{}", e);
            }
        }

        let status = wait_for(pid);

        if job_control {
            TerminalController::reclaim_or_warn(session);
        }
        status
    }
}

/// Block until `pid` itself terminates.
fn wait_for(pid: libc::pid_t) -> Result<ExitStatus, ProcessError> {
    loop {
        let mut raw: libc::c_int = 0;
        let reaped = unsafe { libc::waitpid(pid, &mut raw, libc::WUNTRACED) };
        if reaped == -1 {
            let source = io::Error::last_os_error();
            if source.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(ProcessError::Wait { pid, source });
        }

        if libc::WIFSTOPPED(raw) {
            warn!(
                "pid {} stopped by {}; suspension is not supported, resuming it",
                pid,
                signal::describe(libc::WSTOPSIG(raw))
            );
            unsafe { libc::kill(pid, libc::SIGCONT) };
            continue;
        }

        let status = ExitStatus::from_raw(raw);
        debug!("pid {} finished: {}", pid, status);
        return Ok(status);
    }
}
