//! Output trait for rendering reports to different formats.

use std::io::{self, Stdout, Write};

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render (terminal, buffers in tests).
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render an error message.
    fn error(&mut self, msg: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a line of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render text exactly as given, without a trailing newline.
    ///
    /// This is the converted file itself, so write failures are returned.
    fn raw(&mut self, text: &str) -> io::Result<()>;

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output) -> io::Result<()>;
}

/// Terminal output implementation.
///
/// Raw content goes to `W` (stdout by default); everything else is printed.
pub struct TerminalOutput<W: Write = Stdout> {
    raw: W,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalOutput<W> {
    pub fn with_writer(raw: W) -> Self {
        Self { raw }
    }
}

impl<W: Write> Output for TerminalOutput<W> {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn raw(&mut self, text: &str) -> io::Result<()> {
        self.raw.write_all(text.as_bytes())?;
        self.raw.flush()
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Records rendered lines, for report tests.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn section(&mut self, name: &str) {
        self.stdout.push(format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.stdout.push(format!("{}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.stdout.push(format!("  - {}", text));
    }

    fn warning(&mut self, msg: &str) {
        self.stderr.push(format!("warning: {}", msg));
    }

    fn error(&mut self, msg: &str) {
        self.stderr.push(format!("error: {}", msg));
    }

    fn divider(&mut self, label: &str) {
        self.stdout.push(format!("── {} ──", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.stdout.push(text.to_string());
    }

    fn raw(&mut self, text: &str) -> io::Result<()> {
        self.stdout.push(text.to_string());
        Ok(())
    }

    fn newline(&mut self) {
        self.stdout.push(String::new());
    }
}

/// A writer whose every write fails, like stdout redirected to a full disk.
#[cfg(test)]
pub struct FullWriter;

#[cfg(test)]
impl Write for FullWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("no space left on device"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_writes_content_unchanged() {
        let mut out = TerminalOutput::with_writer(Vec::new());
        out.raw("a\r\nb").unwrap();
        out.raw("\n").unwrap();

        assert_eq!(out.raw, b"a\r\nb\n");
    }

    #[test]
    fn test_raw_returns_write_errors() {
        let mut out = TerminalOutput::with_writer(FullWriter);
        let err = out.raw("export interface UserData {}").unwrap_err();

        assert_eq!(err.to_string(), "no space left on device");
    }
}
