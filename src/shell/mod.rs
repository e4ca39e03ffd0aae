use std::io::{self, Write};

use log::{debug, warn};

mod executor;

use crate::{
    core::{commands::BuiltinRegistry, state::Session},
    error::ShellError,
    flags::Flags,
    highlight::Highlighter,
    input::{BoundedReader, EditorSource, LineSource},
    path::PathResolver,
    process::{ProcessLauncher, TerminalController},
};

use executor::CommandHandler;

pub struct Shell {
    pub(crate) session: Session,
    pub(crate) registry: BuiltinRegistry,
    pub(crate) resolver: PathResolver,
    pub(crate) launcher: ProcessLauncher,
    pub(crate) highlighter: Highlighter,
    pub(crate) flags: Flags,
}

impl Shell {
    /// Set up the session and, when attached to a terminal, take control of it.
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let mut session = Session::new();
        TerminalController::init(&mut session)?;
        Ok(Self::with_session(session, flags))
    }

    pub fn with_session(session: Session, flags: Flags) -> Self {
        let highlighter = Highlighter::new(session.is_interactive());
        Shell {
            session,
            registry: BuiltinRegistry::new(),
            resolver: PathResolver::new(),
            launcher: ProcessLauncher::new(),
            highlighter,
            flags,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read and run commands from standard input until it ends.
    pub fn run(&mut self) -> Result<(), ShellError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if self.session.is_interactive() {
            let mut source = EditorSource::new()?;
            self.run_with(&mut source, &mut out)
        } else {
            let mut source = BoundedReader::new(io::stdin().lock());
            self.run_with(&mut source, &mut out)
        }
    }

    pub fn run_with<S, W>(&mut self, source: &mut S, out: &mut W) -> Result<(), ShellError>
    where
        S: LineSource,
        W: Write,
    {
        loop {
            let prompt = self.session.prompt();
            flush_or_warn(out);

            match source.read_line(&prompt, out) {
                Ok(Some(line)) => self.execute_line(&line, out),
                Ok(None) => break,
                Err(e @ ShellError::LineTooLong { .. }) => self.report(out, &e),
                Err(e) => return Err(e),
            }

            self.session.advance_prompt();
        }

        debug!("end of input after {} lines", self.session.prompt_counter());
        if self.session.is_interactive() {
            if let Err(e) = writeln!(out) {
                warn!("could not finish the last line: {}", e);
            }
        }
        flush_or_warn(out);
        Ok(())
    }

    /// Print a diagnostic for an error the session survives.
    ///
    /// A diagnostic that cannot be written is logged and dropped.
    pub(crate) fn report(&self, out: &mut dyn Write, error: &dyn std::fmt::Display) {
        let message = format!("husk: {}", error);
        if let Err(e) = writeln!(out, "{}", self.highlighter.highlight_error(&message)) {
            warn!("could not write diagnostic '{}': {}", message, e);
        }
    }
}

pub(crate) fn flush_or_warn(out: &mut dyn Write) {
    if let Err(e) = out.flush() {
        warn!("could not flush output: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::LINE_MAX;
    use std::env;
    use std::io::Cursor;

    fn run(input: &[u8]) -> Result<String, ShellError> {
        let mut shell = Shell::with_session(Session::new(), Flags::new());
        let mut source = BoundedReader::new(Cursor::new(input.to_vec()));
        let mut out = Vec::new();
        shell.run_with(&mut source, &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn test_empty_input_prints_nothing() -> Result<(), ShellError> {
        assert_eq!(run(b"")?, "");
        assert_eq!(run(b"\n   \n\t\n")?, "");
        Ok(())
    }

    #[test]
    fn test_pwd_prints_working_directory() -> Result<(), ShellError> {
        let expected = format!("{}\n", env::current_dir()?.display());
        assert_eq!(run(b"pwd\n")?, expected);
        Ok(())
    }

    #[test]
    fn test_unknown_command_keeps_session_alive() -> Result<(), ShellError> {
        let output = run(b"husk_no_such_command_xyz --flag\nhelp\n")?;
        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some("husk: husk_no_such_command_xyz: command not found")
        );
        assert_eq!(lines.next(), Some("? - show this help menu"));
        Ok(())
    }

    #[test]
    fn test_failed_cd_is_reported() -> Result<(), ShellError> {
        let output = run(b"cd /nonexistent/husk/dir\n")?;
        assert_eq!(
            output,
            "husk: cd: /nonexistent/husk/dir: No such file or directory\n"
        );
        Ok(())
    }

    #[test]
    fn test_overlong_line_is_reported_and_skipped() -> Result<(), ShellError> {
        let mut input = vec![b'a'; LINE_MAX + 1];
        input.extend_from_slice(b"\n?\n");
        let output = run(&input)?;
        assert!(output.starts_with("husk: line too long"));
        assert!(output.contains("? - show this help menu"));
        Ok(())
    }

    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_unwritable_output_does_not_end_session() -> Result<(), ShellError> {
        let mut shell = Shell::with_session(Session::new(), Flags::new());
        let input = b"husk_no_such_command_xyz\npwd\ncd /nonexistent/husk/dir\n?\n";
        let mut source = BoundedReader::new(Cursor::new(input.to_vec()));
        shell.run_with(&mut source, &mut ClosedOutput)?;
        assert_eq!(shell.session().prompt_counter(), 4);
        Ok(())
    }

    #[test]
    fn test_prompt_counter_advances_per_line() -> Result<(), ShellError> {
        let mut shell = Shell::with_session(Session::new(), Flags::new());
        let mut source = BoundedReader::new(Cursor::new(b"\nhelp\n\n".to_vec()));
        shell.run_with(&mut source, &mut Vec::new())?;
        assert_eq!(shell.session().prompt_counter(), 3);
        Ok(())
    }
}
