use std::os::unix::io::RawFd;

/// Process-lifetime state of one shell session.
///
/// Created once at startup. Only the terminal controller fills in the
/// terminal fields and only the driver moves the prompt counter.
pub struct Session {
    interactive: bool,
    terminal: RawFd,
    saved_modes: Option<libc::termios>,
    pgid: libc::pid_t,
    prompt_counter: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session reading from standard input, not yet attached to a terminal.
    pub fn new() -> Self {
        Self {
            interactive: false,
            terminal: libc::STDIN_FILENO,
            saved_modes: None,
            pgid: unsafe { libc::getpgrp() },
            prompt_counter: 0,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn terminal(&self) -> RawFd {
        self.terminal
    }

    pub fn pgid(&self) -> libc::pid_t {
        self.pgid
    }

    pub fn saved_modes(&self) -> Option<&libc::termios> {
        self.saved_modes.as_ref()
    }

    pub(crate) fn attach(&mut self, pgid: libc::pid_t, modes: libc::termios) {
        self.interactive = true;
        self.pgid = pgid;
        self.saved_modes = Some(modes);
    }

    pub(crate) fn detach(&mut self) {
        self.interactive = false;
        self.saved_modes = None;
    }

    /// Prompt for the next read; empty when not interactive.
    pub fn prompt(&self) -> String {
        if self.interactive {
            format!("{}: ", self.prompt_counter)
        } else {
            String::new()
        }
    }

    pub fn advance_prompt(&mut self) {
        self.prompt_counter += 1;
    }

    pub fn prompt_counter(&self) -> u64 {
        self.prompt_counter
    }
}
