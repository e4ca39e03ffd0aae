use std::io::{BufRead, Read, Write};

use log::warn;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::ShellError;

/// Longest accepted input line, newline included.
pub const LINE_MAX: usize = 4096;

/// Where the driver gets its next command line from.
pub trait LineSource {
    /// Show `prompt` and read one line; `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Option<String>, ShellError>;
}

/// Plain line reader with a hard per-line limit.
pub struct BoundedReader<R> {
    reader: R,
}

impl<R: BufRead> BoundedReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn discard_rest_of_line(&mut self) -> std::io::Result<()> {
        let mut scratch = Vec::with_capacity(LINE_MAX);
        loop {
            scratch.clear();
            let read = self
                .reader
                .by_ref()
                .take(LINE_MAX as u64)
                .read_until(b'\n', &mut scratch)?;
            if read == 0 || scratch.last() == Some(&b'\n') {
                return Ok(());
            }
        }
    }
}

impl<R: BufRead> LineSource for BoundedReader<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Option<String>, ShellError> {
        if !prompt.is_empty() {
            out.write_all(prompt.as_bytes())?;
            out.flush()?;
        }

        let mut buf = Vec::new();
        let read = self
            .reader
            .by_ref()
            .take(LINE_MAX as u64)
            .read_until(b'\n', &mut buf)?;
        if read == 0 {
            return Ok(None);
        }
        if buf.len() == LINE_MAX && buf.last() != Some(&b'\n') {
            self.discard_rest_of_line()?;
            return Err(ShellError::LineTooLong { limit: LINE_MAX });
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Interactive input through `rustyline`.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self, ShellError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str, _out: &mut dyn Write) -> Result<Option<String>, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) if line.len() >= LINE_MAX => Err(ShellError::LineTooLong { limit: LINE_MAX }),
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        warn!("Couldn't add to history: {}", e);
                    }
                }
                Ok(Some(line))
            }
            // Ctrl-C abandons the line being edited
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_all(input: &[u8]) -> Vec<Result<String, String>> {
        let mut source = BoundedReader::new(Cursor::new(input.to_vec()));
        let mut out = Vec::new();
        let mut lines = Vec::new();
        loop {
            match source.read_line("", &mut out) {
                Ok(Some(line)) => lines.push(Ok(line)),
                Ok(None) => break,
                Err(e) => lines.push(Err(e.to_string())),
            }
        }
        assert!(out.is_empty());
        lines
    }

    #[test]
    fn test_reads_lines_until_eof() {
        assert_eq!(
            read_all(b"pwd\ncd ..\nlast"),
            vec![
                Ok("pwd\n".to_string()),
                Ok("cd ..\n".to_string()),
                Ok("last".to_string())
            ]
        );
    }

    #[test]
    fn test_overlong_line_is_rejected_and_skipped() {
        let mut input = vec![b'x'; LINE_MAX * 2 + 10];
        input.extend_from_slice(b"\npwd\n");
        let lines = read_all(&input);
        assert_eq!(lines.len(), 2);
        assert!(matches!(&lines[0], Err(msg) if msg.contains("line too long")));
        assert_eq!(lines[1], Ok("pwd\n".to_string()));
    }

    #[test]
    fn test_line_at_limit_is_accepted() {
        let mut input = vec![b'y'; LINE_MAX - 1];
        input.push(b'\n');
        let lines = read_all(&input);
        assert_eq!(lines.len(), 1);
        assert!(matches!(&lines[0], Ok(line) if line.len() == LINE_MAX));
    }

    #[test]
    fn test_prompt_is_written_before_reading() -> Result<(), ShellError> {
        let mut source = BoundedReader::new(Cursor::new(b"help\n".to_vec()));
        let mut out = Vec::new();
        let line = source.read_line("0: ", &mut out)?;
        assert_eq!(line.as_deref(), Some("help\n"));
        assert_eq!(out, b"0: ");
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let lines = read_all(b"echo \xff\n");
        assert_eq!(lines, vec![Ok("echo \u{fffd}\n".to_string())]);
    }
}
