use std::io::Write;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

use log::{debug, info, warn};

use super::flush_or_warn;
use crate::input::tokenize;
use crate::process::{signal, LaunchDescriptor};

pub(crate) trait CommandHandler {
    fn execute_line(&mut self, line: &str, out: &mut dyn Write);
}

impl CommandHandler for super::Shell {
    /// Run one input line. Every failure is reported and the session goes on.
    fn execute_line(&mut self, line: &str, out: &mut dyn Write) {
        let tokens = tokenize(line.trim_end_matches(['\n', '\r']));
        let Some(name) = tokens.first() else {
            return;
        };

        if let Some(index) = self.registry.lookup(name) {
            debug!("builtin {}", name);
            if let Err(e) = self.registry.dispatch(index, tokens.as_slice(), out) {
                self.report(out, &e);
            }
            return;
        }

        let path = match self.resolver.resolve(name) {
            Ok(path) => path,
            Err(e) => {
                self.report(out, &e);
                return;
            }
        };

        let descriptor = LaunchDescriptor::new(path, tokens.as_slice());
        // The child writes straight to fd 1; anything buffered goes first.
        flush_or_warn(out);

        match self.launcher.launch(&self.session, &descriptor) {
            Ok(status) => self.report_status(out, name, status),
            Err(e) => {
                debug!("launch failed with status {:?}", e.exit_code());
                self.report(out, &e);
            }
        }
    }
}

impl super::Shell {
    fn report_status(&self, out: &mut dyn Write, name: &str, status: ExitStatus) {
        if let Some(code) = status.code() {
            if code != 0 {
                info!("{} exited with status {}", name, code);
            }
            return;
        }

        if let Some(sig) = status.signal() {
            info!("{} terminated by signal {}", name, sig);
            if !self.flags.is_set("quiet") {
                let notice = format!("husk: {}: terminated by {}", name, signal::describe(sig));
                if let Err(e) = writeln!(out, "{}", self.highlighter.highlight_notice(&notice)) {
                    warn!("could not write notice '{}': {}", notice, e);
                }
            }
        }
    }
}
