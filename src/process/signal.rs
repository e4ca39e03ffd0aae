use std::io;

use libc::{c_int, sighandler_t, SIG_DFL, SIG_ERR, SIG_IGN};
use signal_hook::consts::signal::{SIGINT, SIGQUIT, SIGTSTP, SIGTTIN, SIGTTOU};

/// Signals the terminal driver sends to the foreground group.
pub const JOB_CONTROL_SIGNALS: [c_int; 5] = [SIGINT, SIGQUIT, SIGTSTP, SIGTTIN, SIGTTOU];

/// Keep the shell alive while its foreground child takes keyboard signals.
pub fn ignore_job_control() -> io::Result<()> {
    set_disposition(SIG_IGN)
}

/// Undo [`ignore_job_control`] in a freshly forked child.
///
/// Only calls `signal(2)`, so it is safe between fork and exec.
pub fn restore_job_control() -> io::Result<()> {
    set_disposition(SIG_DFL)
}

fn set_disposition(handler: sighandler_t) -> io::Result<()> {
    for &sig in JOB_CONTROL_SIGNALS.iter() {
        if unsafe { libc::signal(sig, handler) } == SIG_ERR {
            return Err(io::Error::last_os_error());
        }
    }
    Ok(())
}

pub fn describe(sig: c_int) -> String {
    signal_hook::low_level::signal_name(sig)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("signal {}", sig))
}
