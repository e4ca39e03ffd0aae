use std::io;

use log::{debug, warn};
use thiserror::Error;

use super::signal;
use crate::core::state::Session;

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("failed to query the foreground process group: {0}")]
    ForegroundQuery(#[source] io::Error),
    #[error("failed to stop process group {pgid}: {source}")]
    Suspend { pgid: libc::pid_t, source: io::Error },
    #[error("failed to ignore job-control signals: {0}")]
    Signals(#[source] io::Error),
    #[error("failed to create process group {pgid}: {source}")]
    ProcessGroup { pgid: libc::pid_t, source: io::Error },
    #[error("failed to hand the terminal to process group {pgid}: {source}")]
    Foreground { pgid: libc::pid_t, source: io::Error },
    #[error("failed to read terminal attributes: {0}")]
    ReadModes(#[source] io::Error),
    #[error("failed to restore terminal attributes: {0}")]
    RestoreModes(#[source] io::Error),
}

/// Owns the controlling terminal's foreground-group assignment.
pub struct TerminalController;

impl TerminalController {
    /// Attach `session` to the controlling terminal, if standard input is one.
    ///
    /// Blocks (stopped by `SIGTTIN`) until the shell's group is in the
    /// foreground, then moves the shell into its own process group, takes
    /// the terminal and snapshots its attributes.
    pub fn init(session: &mut Session) -> Result<(), TerminalError> {
        let fd = session.terminal();
        if unsafe { libc::isatty(fd) } == 0 {
            debug!("fd {} is not a terminal; running non-interactively", fd);
            session.detach();
            return Ok(());
        }

        loop {
            let foreground = unsafe { libc::tcgetpgrp(fd) };
            if foreground == -1 {
                return Err(TerminalError::ForegroundQuery(io::Error::last_os_error()));
            }
            let pgrp = unsafe { libc::getpgrp() };
            if foreground == pgrp {
                break;
            }
            debug!("group {} is in the background (foreground is {}); stopping", pgrp, foreground);
            if unsafe { libc::kill(-pgrp, libc::SIGTTIN) } == -1 {
                return Err(TerminalError::Suspend {
                    pgid: pgrp,
                    source: io::Error::last_os_error(),
                });
            }
        }

        // SIGTTOU must already be ignored when a background group calls tcsetpgrp.
        signal::ignore_job_control().map_err(TerminalError::Signals)?;

        let pid = unsafe { libc::getpid() };
        if unsafe { libc::getpgrp() } != pid && unsafe { libc::setpgid(pid, pid) } == -1 {
            return Err(TerminalError::ProcessGroup {
                pgid: pid,
                source: io::Error::last_os_error(),
            });
        }

        Self::give_to(fd, pid)?;

        let mut modes: libc::termios = unsafe { std::mem::zeroed() };
        if unsafe { libc::tcgetattr(fd, &mut modes) } == -1 {
            return Err(TerminalError::ReadModes(io::Error::last_os_error()));
        }

        session.attach(pid, modes);
        debug!("took control of terminal fd {} as process group {}", fd, pid);
        Ok(())
    }

    pub fn give_to(fd: libc::c_int, pgid: libc::pid_t) -> Result<(), TerminalError> {
        if unsafe { libc::tcsetpgrp(fd, pgid) } == -1 {
            return Err(TerminalError::Foreground {
                pgid,
                source: io::Error::last_os_error(),
            });
        }
        Ok(())
    }

    /// Put the shell back in the foreground with its saved terminal modes.
    pub fn reclaim(session: &Session) -> Result<(), TerminalError> {
        if !session.is_interactive() {
            return Ok(());
        }
        let fd = session.terminal();
        Self::give_to(fd, session.pgid())?;
        if let Some(modes) = session.saved_modes() {
            if unsafe { libc::tcsetattr(fd, libc::TCSADRAIN, modes) } == -1 {
                return Err(TerminalError::RestoreModes(io::Error::last_os_error()));
            }
        }
        Ok(())
    }

    /// [`reclaim`](Self::reclaim) for paths that have nobody to report to.
    pub fn reclaim_or_warn(session: &Session) {
        if let Err(e) = Self::reclaim(session) {
            warn!("{}", e);
        }
    }
}
