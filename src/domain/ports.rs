use crate::utils::error::Result;
use std::io::Write;

/// Destination for the human-readable lines written by `greet` and `Person::say_hello`.
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// Writes each line to the process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", line)?;
        Ok(())
    }
}

/// In-memory capture, one entry per line.
impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}
